use std::io;
use std::num::ParseIntError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),

    #[error("unexpected line format: {0}")]
    LineFormat(String),

    #[error("invalid reward: {0}")]
    Reward(#[from] ParseIntError),

    #[error("node {0} is defined more than once")]
    DuplicateNode(String),

    #[error("node {node} leads to unknown node {neighbour}")]
    UnknownNeighbour { node: String, neighbour: String },

    #[error("too many nodes: ran out of ids at {0}")]
    TooManyNodes(String),

    #[error("unknown start node: {0}")]
    UnknownStart(String),

    #[error("too many nodes with a reward: {0} (at most {})", crate::state::NodeSet::CAPACITY)]
    TooManyUsefulNodes(usize),
}

pub type Result<T> = std::result::Result<T, Error>;
