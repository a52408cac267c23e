use std::str::FromStr;

use once_cell::sync::Lazy;
use regex_lite::Regex;

use crate::error::{Error, Result};
use crate::graph::{Graph, NodeRecord};

// eg: Valve AA has flow rate=0; tunnels lead to valves DD, II, BB
static LINE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^Valve (\w+) has flow rate=(\d+); tunnels? leads? to valves? (\w+(?:, \w+)*)$"#).unwrap()
});

pub fn parse_record(line: &str) -> Result<NodeRecord> {
    let Some(caps) = LINE_RE.captures(line.trim()) else {
        return Err(Error::LineFormat(line.to_string()));
    };
    Ok(NodeRecord {
        name: caps[1].to_string(),
        reward: caps[2].parse()?,
        neighbours: caps[3].split(", ").map(str::to_string).collect(),
    })
}

pub fn parse_records(s: &str) -> Result<Vec<NodeRecord>> {
    s.lines()
        .filter(|line| !line.trim().is_empty())
        .map(parse_record)
        .collect()
}

impl FromStr for Graph {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Graph::from_records(parse_records(s)?)
    }
}

#[cfg(test)]
pub(crate) const EXAMPLE: &str = "\
Valve AA has flow rate=0; tunnels lead to valves DD, II, BB
Valve BB has flow rate=13; tunnels lead to valves CC, AA
Valve CC has flow rate=2; tunnels lead to valves DD, BB
Valve DD has flow rate=20; tunnels lead to valves CC, AA, EE
Valve EE has flow rate=3; tunnels lead to valves FF, DD
Valve FF has flow rate=0; tunnels lead to valves EE, GG
Valve GG has flow rate=0; tunnels lead to valves FF, HH
Valve HH has flow rate=22; tunnel leads to valve GG
Valve II has flow rate=0; tunnels lead to valves AA, JJ
Valve JJ has flow rate=21; tunnel leads to valve II";
