//! Node array plus undirected edge list.
//!
//! # Representation
//!
//! Adjacency is stored twice, once per kind of consumer:
//!
//! - each `Node::connections` holds its neighbour ids (the epidemic and the
//!   interventions walk these);
//! - `Network::edges` lists every undirected edge exactly once (the layout
//!   springs and exporters walk this).
//!
//! Both are fixed after generation.  Only node state and position change
//! during a run.

use ct_core::{Node, NodeId};

/// An undirected connection.  `source` is the node whose generation pass
/// created the edge; the pair is otherwise unordered.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    pub source: NodeId,
    pub target: NodeId,
}

impl Edge {
    #[inline]
    pub fn new(source: NodeId, target: NodeId) -> Self {
        Self { source, target }
    }

    /// Endpoints in ascending id order, for comparing edges regardless of
    /// direction.
    #[inline]
    pub fn key(&self) -> (NodeId, NodeId) {
        if self.source <= self.target {
            (self.source, self.target)
        } else {
            (self.target, self.source)
        }
    }
}

/// Output of [`generate_network`][crate::generate_network].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Network {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl Network {
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn degree(&self, node: NodeId) -> usize {
        self.nodes.get(node.index()).map_or(0, Node::degree)
    }

    /// Mean degree over all nodes (zero for an empty network).
    pub fn mean_degree(&self) -> f64 {
        if self.nodes.is_empty() {
            return 0.0;
        }
        2.0 * self.edges.len() as f64 / self.nodes.len() as f64
    }

    /// `true` if every connection is mirrored on the other endpoint.
    pub fn is_symmetric(&self) -> bool {
        self.nodes.iter().all(|node| {
            node.connections.iter().all(|&other| {
                self.nodes
                    .get(other.index())
                    .is_some_and(|n| n.is_connected_to(node.id))
            })
        })
    }

    /// Split into the node array and the edge list.
    pub fn into_parts(self) -> (Vec<Node>, Vec<Edge>) {
        (self.nodes, self.edges)
    }
}
