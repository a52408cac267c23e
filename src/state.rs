use std::fmt;

use rustc_hash::FxHashMap;

// Sites below the useful-node count double as bit positions in a NodeSet.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Site(pub(crate) u8);

impl Site {
    pub fn as_usize(&self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NodeSet(u64);

impl NodeSet {
    pub const CAPACITY: usize = u64::BITS as usize;
    pub const EMPTY: NodeSet = NodeSet(0);

    pub fn first(n: usize) -> Self {
        debug_assert!(n <= Self::CAPACITY);
        match n {
            Self::CAPACITY => NodeSet(u64::MAX),
            n => NodeSet((1 << n) - 1),
        }
    }

    fn bit(site: Site) -> u64 {
        debug_assert!(site.as_usize() < Self::CAPACITY, "site {site:?} has no bit");
        1 << site.0
    }

    pub fn contains(self, site: Site) -> bool {
        self.0 & Self::bit(site) != 0
    }

    pub fn with(self, site: Site) -> Self {
        NodeSet(self.0 | Self::bit(site))
    }

    pub fn union(self, other: NodeSet) -> Self {
        NodeSet(self.0 | other.0)
    }

    pub fn intersection(self, other: NodeSet) -> Self {
        NodeSet(self.0 & other.0)
    }

    pub fn complement_in(self, universe: NodeSet) -> Self {
        NodeSet(universe.0 & !self.0)
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = Site> {
        (0..Self::CAPACITY as u8)
            .map(Site)
            .filter(move |&site| self.contains(site))
    }
}

impl FromIterator<Site> for NodeSet {
    fn from_iter<I: IntoIterator<Item = Site>>(iter: I) -> Self {
        iter.into_iter().fold(NodeSet::EMPTY, NodeSet::with)
    }
}

impl fmt::Debug for NodeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct SearchState {
    pub at: Site,
    pub activated: NodeSet,
    pub minutes_left: u32,
}

impl SearchState {
    pub fn new(at: Site, activated: NodeSet, minutes_left: u32) -> Self {
        SearchState { at, activated, minutes_left }
    }
}

#[derive(Default)]
pub struct Memo {
    cache: FxHashMap<SearchState, u64>,
    hits: usize,
    misses: usize,
}

impl Memo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&mut self, state: &SearchState) -> Option<u64> {
        let value = self.cache.get(state).copied();
        match value {
            Some(_) => self.hits += 1,
            None => self.misses += 1,
        }
        value
    }

    pub fn insert(&mut self, state: SearchState, value: u64) {
        self.cache.insert(state, value);
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    pub fn misses(&self) -> usize {
        self.misses
    }
}
