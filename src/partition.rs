use crate::state::{NodeSet, Site};

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Partition {
    pub mine: NodeSet,
    pub theirs: NodeSet,
}

// Mirrored pairs are counted separately, so there are 2^sites.len() partitions.
// eg: [A, B] -> ({}, {A,B}), ({A}, {B}), ({B}, {A}), ({A,B}, {})
pub fn partitions(sites: &[Site]) -> Vec<Partition> {
    let Some((&head, tail)) = sites.split_first() else {
        return vec![Partition { mine: NodeSet::EMPTY, theirs: NodeSet::EMPTY }];
    };
    let rest = partitions(tail);
    let mut out = Vec::with_capacity(rest.len() * 2);
    for p in rest {
        out.push(Partition { mine: p.mine, theirs: p.theirs.with(head) });
        out.push(Partition { mine: p.mine.with(head), theirs: p.theirs });
    }
    out
}
