use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt;

use log::{debug, trace};

use crate::error::{Error, Result};
use crate::graph::{Graph, NodeId};
use crate::state::{NodeSet, Site};

pub fn distances_from(graph: &Graph, source: NodeId) -> Vec<Option<u32>> {
    let mut dist: Vec<Option<u32>> = vec![None; graph.len()];
    let mut done: Vec<bool> = vec![false; graph.len()];
    let mut queue: BinaryHeap<Reverse<(u32, NodeId)>> = BinaryHeap::new();

    dist[source.as_usize()] = Some(0);
    queue.push(Reverse((0, source)));
    while let Some(Reverse((d, id))) = queue.pop() {
        if done[id.as_usize()] {
            continue;
        }
        done[id.as_usize()] = true;

        for &next in graph.neighbours(id) {
            let relaxed = d + 1;
            if dist[next.as_usize()].map_or(true, |old| relaxed < old) {
                dist[next.as_usize()] = Some(relaxed);
                queue.push(Reverse((relaxed, next)));
            }
        }
    }
    dist
}

#[derive(Clone)]
struct SquareArray {
    cols: usize,
    data: Vec<Option<u32>>,
}

impl SquareArray {
    fn new(cols: usize) -> Self {
        Self { cols, data: vec![None; cols * cols] }
    }

    fn get(&self, src: Site, dst: Site) -> Option<u32> {
        self.data[src.as_usize() * self.cols + dst.as_usize()]
    }

    fn set(&mut self, src: Site, dst: Site, v: Option<u32>) {
        self.data[src.as_usize() * self.cols + dst.as_usize()] = v;
    }
}

impl fmt::Display for SquareArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.data.chunks(self.cols) {
            for w in row {
                match w {
                    Some(w) => write!(f, "{:>3}", w)?,
                    None => write!(f, "{:>3}", "-")?,
                }
            }
            writeln!(f)?
        }
        Ok(())
    }
}

// Sites 0..useful are the nodes with a positive reward, in graph order. A zero-reward start gets
// the extra site `useful`; a rewarding start is one of the useful sites and begins unactivated.
pub struct ReducedGraph {
    names: Vec<String>,
    rewards: Vec<u64>,
    useful: usize,
    start: Site,
    dist: SquareArray,
}

impl ReducedGraph {
    pub fn new(graph: &Graph, start: &str) -> Result<Self> {
        let Some(start_id) = graph.node_id(start) else {
            return Err(Error::UnknownStart(start.to_string()));
        };

        let mut ids: Vec<NodeId> = graph.ids()
            .filter(|&id| graph.node(id).reward > 0)
            .collect();
        let useful = ids.len();
        if useful > NodeSet::CAPACITY {
            return Err(Error::TooManyUsefulNodes(useful));
        }
        let start_site = match ids.iter().position(|&id| id == start_id) {
            Some(i) => Site(i as u8),
            None => {
                ids.push(start_id);
                Site(useful as u8)
            },
        };

        let mut dist = SquareArray::new(ids.len());
        for (i, &src) in ids.iter().enumerate() {
            let from_src = distances_from(graph, src);
            for (j, &dst) in ids.iter().enumerate() {
                dist.set(Site(i as u8), Site(j as u8), from_src[dst.as_usize()]);
            }
        }

        debug!("reduced {} nodes to {} sites ({useful} useful)", graph.len(), ids.len());
        trace!("site distances:\n{dist}");

        Ok(ReducedGraph {
            names: ids.iter().map(|&id| graph.node(id).name.clone()).collect(),
            rewards: ids.iter().map(|&id| graph.node(id).reward).collect(),
            useful,
            start: start_site,
            dist,
        })
    }

    pub fn start(&self) -> Site {
        self.start
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn contains(&self, site: Site) -> bool {
        site.as_usize() < self.len()
    }

    pub fn useful_sites(&self) -> impl Iterator<Item = Site> {
        (0..self.useful).map(|i| Site(i as u8))
    }

    pub fn all_useful(&self) -> NodeSet {
        NodeSet::first(self.useful)
    }

    pub fn site(&self, name: &str) -> Option<Site> {
        self.names.iter().position(|n| n == name).map(|i| Site(i as u8))
    }

    pub fn reward(&self, site: Site) -> u64 {
        self.rewards[site.as_usize()]
    }

    pub fn distance(&self, src: Site, dst: Site) -> Option<u32> {
        self.dist.get(src, dst)
    }
}
