use std::collections::HashMap;
use std::fmt;

use crate::error::{Error, Result};

#[derive(Clone, PartialEq, Debug)]
pub struct NodeRecord {
    pub name: String,
    pub reward: u64,
    pub neighbours: Vec<String>,
}

impl NodeRecord {
    pub fn new(name: &str, reward: u64, neighbours: &[&str]) -> Self {
        NodeRecord {
            name: name.to_string(),
            reward,
            neighbours: neighbours.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(u32);

impl NodeId {
    pub fn as_usize(&self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Debug)]
pub struct Node {
    pub name: String,
    pub reward: u64,
    pub neighbours: Vec<NodeId>,
}

// Every edge costs one minute to walk.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    nodes: Vec<Node>,
    handle_for: HashMap<String, NodeId>,
}

impl Graph {
    // Handles are handed out in first-seen order, counting a name as seen the first time it shows
    // up either as a record or as someone's neighbour.
    pub fn from_records(records: impl IntoIterator<Item = NodeRecord>) -> Result<Self> {
        let mut handle_for: HashMap<String, NodeId> = HashMap::new();
        let mut names: Vec<String> = Vec::new();
        let mut defined: Vec<Option<(u64, Vec<NodeId>)>> = Vec::new();
        let mut referenced_by: Vec<Option<String>> = Vec::new();

        let mut get_handle = |name: &str, names: &mut Vec<String>| -> Result<NodeId> {
            match handle_for.get(name) {
                Some(&id) => Ok(id),
                None => {
                    let id = u32::try_from(names.len())
                        .map(NodeId)
                        .map_err(|_| Error::TooManyNodes(name.to_string()))?;
                    handle_for.insert(name.to_string(), id);
                    names.push(name.to_string());
                    Ok(id)
                }
            }
        };

        for record in records {
            let src = get_handle(record.name.as_str(), &mut names)?;
            let neighbours: Vec<NodeId> = record.neighbours.iter()
                .map(|n| get_handle(n.as_str(), &mut names))
                .collect::<Result<_>>()?;

            defined.resize(names.len(), None);
            referenced_by.resize(names.len(), None);
            if defined[src.as_usize()].is_some() {
                return Err(Error::DuplicateNode(record.name));
            }
            for &dst in &neighbours {
                referenced_by[dst.as_usize()].get_or_insert_with(|| record.name.clone());
            }
            defined[src.as_usize()] = Some((record.reward, neighbours));
        }

        let mut nodes = Vec::with_capacity(names.len());
        for (i, name) in names.into_iter().enumerate() {
            let Some((reward, neighbours)) = defined.get_mut(i).and_then(Option::take) else {
                let node = referenced_by.get_mut(i).and_then(Option::take).unwrap_or_default();
                return Err(Error::UnknownNeighbour { node, neighbour: name });
            };
            nodes.push(Node { name, reward, neighbours });
        }
        Ok(Graph { nodes, handle_for })
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node_id(&self, name: &str) -> Option<NodeId> {
        self.handle_for.get(name).copied()
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.as_usize()]
    }

    pub fn neighbours(&self, id: NodeId) -> &[NodeId] {
        &self.node(id).neighbours
    }

    pub fn ids(&self) -> impl Iterator<Item = NodeId> {
        // from_records never hands out more ids than fit in a u32
        (0..self.nodes.len() as u32).map(NodeId)
    }

    #[cfg(test)]
    pub(crate) fn neighbour_names(&self, name: &str) -> Vec<&str> {
        let id = self.handle_for[name];
        self.neighbours(id).iter()
            .map(|&n| self.node(n).name.as_str())
            .collect()
    }
}
