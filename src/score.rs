use log::debug;

use crate::reduce::ReducedGraph;
use crate::state::{Memo, NodeSet, SearchState};

pub struct Scorer<'g> {
    graph: &'g ReducedGraph,
    memo: Memo,
}

impl<'g> Scorer<'g> {
    pub fn new(graph: &'g ReducedGraph) -> Self {
        Scorer { graph, memo: Memo::new() }
    }

    pub fn graph(&self) -> &'g ReducedGraph {
        self.graph
    }

    pub fn memo(&self) -> &Memo {
        &self.memo
    }

    pub fn start_state(&self, minutes: u32) -> SearchState {
        self.restricted_start_state(NodeSet::EMPTY, minutes)
    }

    pub fn restricted_start_state(&self, blocked: NodeSet, minutes: u32) -> SearchState {
        SearchState::new(self.graph.start(), blocked, minutes)
    }

    pub fn best_single_score(&mut self, minutes: u32) -> u64 {
        let best = self.score(self.start_state(minutes));
        debug!("single agent, {minutes} minutes: {best} (memo: {} entries, {} hits, {} misses)",
            self.memo.len(), self.memo.hits(), self.memo.misses());
        best
    }

    /// Moving to a site and activating it costs the walking time plus one minute, after which the
    /// site pays its reward for every minute left.
    pub fn score(&mut self, state: SearchState) -> u64 {
        assert!(self.graph.contains(state.at), "state at unknown site {:?}", state.at);
        self.search(state)
    }

    fn search(&mut self, state: SearchState) -> u64 {
        if let Some(value) = self.memo.get(&state) {
            return value;
        }
        if state.minutes_left == 0 {
            return 0;
        }

        let graph = self.graph;
        let mut best = 0;
        for next in graph.useful_sites() {
            if state.activated.contains(next) {
                continue;
            }
            let Some(dist) = graph.distance(state.at, next) else {
                continue;
            };
            // Need at least one minute left over after activating for it to pay anything.
            if dist + 1 >= state.minutes_left {
                continue;
            }
            let minutes_left = state.minutes_left - dist - 1;
            let gained = graph.reward(next) * u64::from(minutes_left);
            let rest = self.search(SearchState {
                at: next,
                activated: state.activated.with(next),
                minutes_left,
            });
            best = best.max(gained + rest);
        }

        self.memo.insert(state, best);
        best
    }
}

#[cfg(test)]
pub(crate) mod test {
    use super::*;
    use crate::graph::{Graph, NodeRecord};
    use crate::parse::EXAMPLE;
    use crate::state::Site;
    use std::str::FromStr;

    pub(crate) fn example() -> ReducedGraph {
        let graph = Graph::from_str(EXAMPLE).unwrap();
        ReducedGraph::new(&graph, "AA").unwrap()
    }

    // S -- A -- B, with A worth 10 and B worth 20.
    pub(crate) fn three_nodes() -> ReducedGraph {
        let graph = Graph::from_records([
            NodeRecord::new("S", 0, &["A"]),
            NodeRecord::new("A", 10, &["S", "B"]),
            NodeRecord::new("B", 20, &["A"]),
        ]).unwrap();
        ReducedGraph::new(&graph, "S").unwrap()
    }

    fn one_node(reward: u64, hops: usize) -> ReducedGraph {
        let mut records = Vec::new();
        let path: Vec<String> = (0..hops).map(|i| format!("P{i}")).collect();
        let last = "R".to_string();
        let mut prev = "S".to_string();
        for name in path.iter().chain(std::iter::once(&last)) {
            records.push(NodeRecord::new(&prev, 0, &[name.as_str()]));
            prev = name.clone();
        }
        records.push(NodeRecord::new("R", reward, &[]));
        let graph = Graph::from_records(records).unwrap();
        ReducedGraph::new(&graph, "S").unwrap()
    }

    #[test]
    fn test_example() {
        let graph = example();
        let mut scorer = Scorer::new(&graph);
        assert_eq!(scorer.best_single_score(30), 1651);
    }

    #[test]
    fn test_three_nodes_by_hand() {
        let graph = three_nodes();
        let mut scorer = Scorer::new(&graph);
        // S->A takes 1 minute plus 1 to activate, leaving 3: 10*3. A->B leaves 1: 20*1.
        let via_a = 10 * (5 - 1 - 1) + 20 * (5 - 2 - 1 - 1);
        // S->B takes 2 minutes plus 1, leaving 2: 20*2. Going back to A would leave 0.
        let b_only = 20 * (5 - 2 - 1);
        assert_eq!(scorer.best_single_score(5), u64::max(via_a, b_only));
        assert_eq!(scorer.best_single_score(5), 50);
    }

    #[test]
    fn test_single_node() {
        for (reward, hops, minutes) in [(7, 0, 2), (7, 0, 10), (13, 3, 10), (2, 5, 30)] {
            let graph = one_node(reward, hops);
            let dist = graph.distance(graph.start(), graph.site("R").unwrap()).unwrap();
            assert_eq!(dist, hops as u32 + 1);
            let mut scorer = Scorer::new(&graph);
            let want = reward * u64::from(minutes - dist - 1);
            assert_eq!(scorer.best_single_score(minutes), want, "reward={reward} hops={hops}");
        }
    }

    #[test]
    fn test_out_of_reach_node_adds_nothing() {
        // R is 4 minutes away, so activating it needs more than 5 minutes.
        let with_far = Graph::from_records([
            NodeRecord::new("S", 0, &["A", "P0"]),
            NodeRecord::new("A", 3, &["S"]),
            NodeRecord::new("P0", 0, &["P1"]),
            NodeRecord::new("P1", 0, &["P2"]),
            NodeRecord::new("P2", 0, &["R"]),
            NodeRecord::new("R", 100, &[]),
        ]).unwrap();
        let without_far = Graph::from_records([
            NodeRecord::new("S", 0, &["A"]),
            NodeRecord::new("A", 3, &["S"]),
        ]).unwrap();
        let with_far = ReducedGraph::new(&with_far, "S").unwrap();
        let without_far = ReducedGraph::new(&without_far, "S").unwrap();
        assert_eq!(with_far.distance(with_far.start(), with_far.site("R").unwrap()), Some(4));
        for minutes in 0..=5 {
            assert_eq!(
                Scorer::new(&with_far).best_single_score(minutes),
                Scorer::new(&without_far).best_single_score(minutes),
                "minutes={minutes}");
        }
        assert_eq!(Scorer::new(&with_far).best_single_score(6), 100);
    }

    #[test]
    fn test_unreachable_node_adds_nothing() {
        let graph = Graph::from_records([
            NodeRecord::new("S", 0, &["A"]),
            NodeRecord::new("A", 3, &["S"]),
            NodeRecord::new("Z", 100, &["A"]),
        ]).unwrap();
        let graph = ReducedGraph::new(&graph, "S").unwrap();
        assert_eq!(Scorer::new(&graph).best_single_score(10), 3 * 8);
    }

    #[test]
    fn test_useful_start_costs_a_minute() {
        let graph = Graph::from_records([
            NodeRecord::new("S", 5, &[]),
        ]).unwrap();
        let graph = ReducedGraph::new(&graph, "S").unwrap();
        let mut scorer = Scorer::new(&graph);
        assert_eq!(scorer.best_single_score(1), 0);
        assert_eq!(scorer.best_single_score(3), 10);
    }

    #[test]
    fn test_non_negative_and_monotonic() {
        let graph = example();
        let mut scorer = Scorer::new(&graph);
        let sites: Vec<Site> = (0..graph.len()).map(|i| Site(i as u8)).collect();
        let activated_sets = [
            NodeSet::EMPTY,
            NodeSet::EMPTY.with(Site(0)).with(Site(3)),
            graph.all_useful(),
        ];
        for &at in &sites {
            for &activated in &activated_sets {
                let mut prev = 0;
                for minutes in 0..=20 {
                    let score = scorer.score(SearchState::new(at, activated, minutes));
                    assert!(score >= prev, "score dropped at {at:?} {activated:?} {minutes}");
                    prev = score;
                }
            }
        }
        assert_eq!(scorer.score(SearchState::new(Site(0), graph.all_useful(), 30)), 0);
    }

    #[test]
    fn test_memo_idempotent() {
        let graph = example();
        let mut scorer = Scorer::new(&graph);
        let state = scorer.start_state(20);
        let first = scorer.score(state);
        let entries = scorer.memo().len();
        let hits = scorer.memo().hits();
        assert_eq!(scorer.score(state), first);
        assert_eq!(scorer.memo().len(), entries);
        assert_eq!(scorer.memo().hits(), hits + 1);
    }

    #[test]
    #[should_panic(expected = "unknown site")]
    fn test_unknown_site() {
        let graph = three_nodes();
        let mut scorer = Scorer::new(&graph);
        scorer.score(SearchState::new(Site(9), NodeSet::EMPTY, 3));
    }
}
