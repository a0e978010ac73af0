//! Per-node health state.

use std::fmt;

/// The four states a node can be in.
///
/// The legal transitions form a small one-way graph:
///
/// ```text
/// Healthy ──► Infected ──► Recovered
///    │
///    └──────► Aware
/// ```
///
/// `Recovered` and `Aware` are absorbing.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum HealthState {
    #[default]
    Healthy,
    Infected,
    Recovered,
    Aware,
}

impl HealthState {
    pub const ALL: [HealthState; 4] = [
        HealthState::Healthy,
        HealthState::Infected,
        HealthState::Recovered,
        HealthState::Aware,
    ];

    /// `true` if `self → next` is an edge of the state graph.
    #[inline]
    pub fn can_become(self, next: HealthState) -> bool {
        matches!(
            (self, next),
            (HealthState::Healthy, HealthState::Infected)
                | (HealthState::Healthy, HealthState::Aware)
                | (HealthState::Infected, HealthState::Recovered)
        )
    }

    /// No transition leaves this state.
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, HealthState::Recovered | HealthState::Aware)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            HealthState::Healthy   => "healthy",
            HealthState::Infected  => "infected",
            HealthState::Recovered => "recovered",
            HealthState::Aware     => "aware",
        }
    }
}

impl fmt::Display for HealthState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
