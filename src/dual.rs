use log::debug;

use crate::partition::{partitions, Partition};
use crate::score::Scorer;
use crate::state::Site;

// Each agent only gets the sites on its own side of the partition. Everything else is treated as
// already activated.
pub fn partition_score(scorer: &mut Scorer, partition: &Partition, minutes: u32) -> u64 {
    let all = scorer.graph().all_useful();
    let mine = scorer.restricted_start_state(partition.mine.complement_in(all), minutes);
    let theirs = scorer.restricted_start_state(partition.theirs.complement_in(all), minutes);
    scorer.score(mine) + scorer.score(theirs)
}

pub fn best_dual_score(scorer: &mut Scorer, minutes: u32) -> u64 {
    let sites: Vec<Site> = scorer.graph().useful_sites().collect();
    let parts = partitions(&sites);

    let mut best = 0;
    for partition in &parts {
        best = best.max(partition_score(scorer, partition, minutes));
    }

    let memo = scorer.memo();
    debug!("two agents, {minutes} minutes, {} partitions: {best} (memo: {} entries, {} hits, {} misses)",
        parts.len(), memo.len(), memo.hits(), memo.misses());
    best
}
