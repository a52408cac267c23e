//! Plans how to spend a fixed number of minutes walking a graph and activating nodes so that the
//! total reward is as large as possible, either alone or with a partner.

use std::io::Read;
use std::str::FromStr;

pub mod dual;
pub mod error;
pub mod graph;
pub mod parse;
pub mod partition;
pub mod reduce;
pub mod score;
pub mod state;

pub use error::{Error, Result};
pub use graph::Graph;
pub use reduce::ReducedGraph;
pub use score::Scorer;

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub start: String,
    pub solo_minutes: u32,
    pub duo_minutes: u32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            start: "AA".to_string(),
            solo_minutes: 30,
            duo_minutes: 26,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Answer {
    pub solo: u64,
    pub duo: u64,
}

fn read_reduced(r: impl Read, config: &Config) -> Result<ReducedGraph> {
    let input = std::io::read_to_string(r)?;
    let graph = Graph::from_str(&input)?;
    ReducedGraph::new(&graph, &config.start)
}

pub fn part1(r: impl Read, config: &Config) -> Result<u64> {
    let graph = read_reduced(r, config)?;
    Ok(Scorer::new(&graph).best_single_score(config.solo_minutes))
}

pub fn part2(r: impl Read, config: &Config) -> Result<u64> {
    let graph = read_reduced(r, config)?;
    Ok(dual::best_dual_score(&mut Scorer::new(&graph), config.duo_minutes))
}

// Both answers, sharing one memo.
pub fn solve(r: impl Read, config: &Config) -> Result<Answer> {
    let graph = read_reduced(r, config)?;
    let mut scorer = Scorer::new(&graph);
    let solo = scorer.best_single_score(config.solo_minutes);
    let duo = dual::best_dual_score(&mut scorer, config.duo_minutes);
    Ok(Answer { solo, duo })
}
