//! Per-state counts.

use ct_core::{HealthState, Node, Tick};

/// How many nodes are in each state at one tick.
///
/// The four counts always sum to the length of the node slice they were
/// computed from.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatsSnapshot {
    pub tick:      Tick,
    pub healthy:   usize,
    pub infected:  usize,
    pub recovered: usize,
    pub aware:     usize,
}

impl StatsSnapshot {
    #[inline]
    pub fn total(&self) -> usize {
        self.healthy + self.infected + self.recovered + self.aware
    }

    pub fn count(&self, state: HealthState) -> usize {
        match state {
            HealthState::Healthy   => self.healthy,
            HealthState::Infected  => self.infected,
            HealthState::Recovered => self.recovered,
            HealthState::Aware     => self.aware,
        }
    }

    /// No node is infectious any more; the outbreak cannot grow.
    #[inline]
    pub fn is_extinct(&self) -> bool {
        self.infected == 0
    }
}

/// Count the nodes in each state.  O(n).
pub fn get_stats(nodes: &[Node], tick: Tick) -> StatsSnapshot {
    let mut stats = StatsSnapshot { tick, ..StatsSnapshot::default() };
    for node in nodes {
        match node.state {
            HealthState::Healthy   => stats.healthy += 1,
            HealthState::Infected  => stats.infected += 1,
            HealthState::Recovered => stats.recovered += 1,
            HealthState::Aware     => stats.aware += 1,
        }
    }
    stats
}
