//! Run configuration.
//!
//! A `ContagionConfig` is supplied once per run and never changes.  The
//! demo binary loads it from JSON (with the `serde` feature) and layers CLI
//! overrides on top; library callers usually start from `Default` and set
//! the fields they care about.

use tracing::warn;

use crate::{CtError, CtResult};

/// How infectiousness is read within a single tick.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SpreadMode {
    /// Sources are read from the working copy in ascending id order, so a
    /// node infected earlier in the same tick can pass the contagion on
    /// before the tick ends.
    #[default]
    Cascade,
    /// Only nodes that were infected at the start of the tick transmit.
    Synchronous,
}

/// Parameters of one simulation run.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ContagionConfig {
    /// Number of nodes in the population.
    pub node_count: usize,

    /// Target mean degree.  Each node draws its own target from
    /// `round(connection_density ± 1)`, never below 1.
    pub connection_density: f64,

    /// Per-tick chance that an infected node infects one healthy neighbour.
    pub spread_probability: f64,

    /// Ticks a node stays infectious before it recovers.
    pub recovery_time: u64,

    /// Number of nodes infected at tick 0.
    pub initial_infected: usize,

    pub spread_mode: SpreadMode,
}

impl Default for ContagionConfig {
    fn default() -> Self {
        Self {
            node_count:         60,
            connection_density: 3.0,
            spread_probability: 0.3,
            recovery_time:      8,
            initial_infected:   2,
            spread_mode:        SpreadMode::Cascade,
        }
    }
}

impl ContagionConfig {
    /// Check the config and return a copy with soft problems clamped.
    ///
    /// Hard errors: zero nodes, a spread probability outside `[0, 1]`, a
    /// negative or non-finite density.  Clamped with a warning:
    /// `recovery_time == 0` becomes 1 and `initial_infected` is capped at
    /// `node_count`.
    pub fn validated(&self) -> CtResult<ContagionConfig> {
        if self.node_count == 0 {
            return Err(CtError::Config("node_count must be at least 1".into()));
        }
        if u32::try_from(self.node_count).is_err() {
            return Err(CtError::Config(format!(
                "node_count {} exceeds the id space",
                self.node_count
            )));
        }
        if !(0.0..=1.0).contains(&self.spread_probability) {
            return Err(CtError::Config(format!(
                "spread_probability {} is outside [0, 1]",
                self.spread_probability
            )));
        }
        if !self.connection_density.is_finite() || self.connection_density < 0.0 {
            return Err(CtError::Config(format!(
                "connection_density {} must be finite and non-negative",
                self.connection_density
            )));
        }

        let mut cfg = self.clone();
        if cfg.recovery_time == 0 {
            warn!("recovery_time 0 would let nodes recover on the tick they were infected; using 1");
            cfg.recovery_time = 1;
        }
        if cfg.initial_infected > cfg.node_count {
            warn!(
                initial_infected = cfg.initial_infected,
                node_count = cfg.node_count,
                "more seed infections than nodes; clamping"
            );
            cfg.initial_infected = cfg.node_count;
        }
        Ok(cfg)
    }
}
