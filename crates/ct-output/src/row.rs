//! Plain data row types written by output backends.

use ct_core::{HealthState, Node, Tick};
use ct_epidemic::StatsSnapshot;
use ct_network::Edge;

/// One stats sample.  `event` says what produced it: `"initial"`, `"tick"`,
/// or the intervention's display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsRow {
    pub tick:      u64,
    pub event:     String,
    pub healthy:   u64,
    pub infected:  u64,
    pub recovered: u64,
    pub aware:     u64,
}

impl StatsRow {
    pub fn new(stats: &StatsSnapshot, event: impl Into<String>) -> Self {
        Self {
            tick:      stats.tick.0,
            event:     event.into(),
            healthy:   stats.healthy as u64,
            infected:  stats.infected as u64,
            recovered: stats.recovered as u64,
            aware:     stats.aware as u64,
        }
    }
}

/// One node's display and health state at a given tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeSnapshotRow {
    pub node_id:     u32,
    pub tick:        u64,
    pub x:           f64,
    pub y:           f64,
    pub state:       HealthState,
    /// `None` if the node has never been infected.
    pub infected_at: Option<u64>,
}

impl NodeSnapshotRow {
    pub fn new(node: &Node, tick: Tick) -> Self {
        Self {
            node_id:     node.id.0,
            tick:        tick.0,
            x:           node.pos.x,
            y:           node.pos.y,
            state:       node.state,
            infected_at: node.infected_at.map(|t| t.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeRow {
    pub source: u32,
    pub target: u32,
}

impl From<&Edge> for EdgeRow {
    fn from(edge: &Edge) -> Self {
        Self { source: edge.source.0, target: edge.target.0 }
    }
}
