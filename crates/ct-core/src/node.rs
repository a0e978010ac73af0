//! The `Node` record.

use crate::{HealthState, NodeId, Tick, Vec2};

/// One individual in the simulated population.
///
/// Engine functions never mutate a caller's nodes in place; they clone the
/// slice they are given and return the new generation.  State changes go
/// through [`infect`](Self::infect), [`recover`](Self::recover) and
/// [`make_aware`](Self::make_aware), which refuse transitions that are not in
/// the state graph.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    pub id: NodeId,

    /// Display position.  Written only by the layout engine.
    pub pos: Vec2,

    /// Layout velocity.  Reset at the start of every layout pass, so it
    /// carries no meaning between passes.
    pub vel: Vec2,

    pub state: HealthState,

    /// Tick at which the node became infected; `None` if it never was.
    pub infected_at: Option<Tick>,

    /// Neighbour ids.  Symmetric across the network: `j` is listed here iff
    /// this node is listed in `j`'s connections.
    pub connections: Vec<NodeId>,
}

impl Node {
    /// A healthy, unconnected node at `pos`.
    pub fn new(id: NodeId, pos: Vec2) -> Self {
        Self {
            id,
            pos,
            vel: Vec2::ZERO,
            state: HealthState::Healthy,
            infected_at: None,
            connections: Vec::new(),
        }
    }

    #[inline]
    pub fn degree(&self) -> usize {
        self.connections.len()
    }

    #[inline]
    pub fn is_connected_to(&self, other: NodeId) -> bool {
        self.connections.contains(&other)
    }

    #[inline]
    pub fn is(&self, state: HealthState) -> bool {
        self.state == state
    }

    /// `Healthy → Infected`, stamping `infected_at`.  Returns `false` (and
    /// leaves the node untouched) from any other state.
    pub fn infect(&mut self, tick: Tick) -> bool {
        if !self.state.can_become(HealthState::Infected) {
            return false;
        }
        self.state = HealthState::Infected;
        self.infected_at = Some(tick);
        true
    }

    /// `Infected → Recovered`.
    pub fn recover(&mut self) -> bool {
        self.transition(HealthState::Recovered)
    }

    /// `Healthy → Aware`.
    pub fn make_aware(&mut self) -> bool {
        self.transition(HealthState::Aware)
    }

    /// Whether an infected node has been infectious for at least
    /// `recovery_time` ticks as of `now`.
    #[inline]
    pub fn recovery_due(&self, now: Tick, recovery_time: u64) -> bool {
        self.state == HealthState::Infected
            && self.infected_at.is_some_and(|at| now.since(at) >= recovery_time)
    }

    fn transition(&mut self, next: HealthState) -> bool {
        if !self.state.can_become(next) {
            return false;
        }
        self.state = next;
        true
    }
}
