//! Fluent builder for constructing a [`Sim`].

use std::sync::Arc;

use tracing::info;

use ct_core::{Bounds, ContagionConfig, SimRng, Tick};
use ct_epidemic::get_stats;
use ct_network::{LayoutParams, apply_forces_with, generate_network};

use crate::{Sim, SimError, SimResult, StatsHistory};

/// Fluent builder for [`Sim`].
///
/// # Optional inputs (have defaults)
///
/// | Method                   | Default                         |
/// |--------------------------|---------------------------------|
/// | `.bounds(b)`             | `Bounds::default()` (800 × 600) |
/// | `.seed(s)`               | OS entropy (not reproducible)   |
/// | `.layout_passes(k)`      | 50                              |
/// | `.layout_params(p)`      | `LayoutParams::default()`       |
/// | `.history_capacity(c)`   | 200                             |
/// | `.snapshot_interval(n)`  | 0 (no node snapshots)           |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config)
///     .bounds(Bounds::new(1024.0, 768.0))
///     .seed(7)
///     .build()?;
/// sim.run_ticks(100, &mut NoopObserver);
/// ```
pub struct SimBuilder {
    config:            ContagionConfig,
    bounds:            Bounds,
    seed:              Option<u64>,
    layout_passes:     usize,
    layout_params:     LayoutParams,
    history_capacity:  usize,
    snapshot_interval: u64,
}

impl SimBuilder {
    pub const DEFAULT_LAYOUT_PASSES: usize = 50;
    pub const DEFAULT_HISTORY_CAPACITY: usize = 200;

    pub fn new(config: ContagionConfig) -> Self {
        Self {
            config,
            bounds:            Bounds::default(),
            seed:              None,
            layout_passes:     Self::DEFAULT_LAYOUT_PASSES,
            layout_params:     LayoutParams::default(),
            history_capacity:  Self::DEFAULT_HISTORY_CAPACITY,
            snapshot_interval: 0,
        }
    }

    pub fn bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = bounds;
        self
    }

    /// Fix the RNG seed.  The same seed and config reproduce the run.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Layout relaxation steps run before tick 0.  Purely cosmetic.
    pub fn layout_passes(mut self, passes: usize) -> Self {
        self.layout_passes = passes;
        self
    }

    pub fn layout_params(mut self, params: LayoutParams) -> Self {
        self.layout_params = params;
        self
    }

    /// Maximum number of stats samples retained.  Must be non-zero.
    pub fn history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = capacity;
        self
    }

    /// Pass the full node generation to `SimObserver::on_snapshot` every `n`
    /// ticks.  0 disables snapshots.
    pub fn snapshot_interval(mut self, n: u64) -> Self {
        self.snapshot_interval = n;
        self
    }

    /// Validate inputs, generate and lay out the network, and return a
    /// [`Sim`] positioned at tick 0.
    pub fn build(self) -> SimResult<Sim> {
        if self.history_capacity == 0 {
            return Err(SimError::Config("history capacity must be at least 1".into()));
        }
        if !(0.0..1.0).contains(&self.layout_params.damping) {
            return Err(SimError::Config(format!(
                "layout damping {} must be in [0, 1)",
                self.layout_params.damping
            )));
        }

        let config = self.config.validated()?;
        let mut rng = match self.seed {
            Some(seed) => SimRng::new(seed),
            None       => SimRng::from_entropy(),
        };

        // ── Generate and lay out ──────────────────────────────────────────
        let network = generate_network(&config, &self.bounds, &mut rng)?;
        let (mut nodes, edges) = network.into_parts();
        for _ in 0..self.layout_passes {
            nodes = apply_forces_with(&nodes, &edges, &self.bounds, &self.layout_params);
        }

        // ── Tick-0 sample ─────────────────────────────────────────────────
        let mut history = StatsHistory::new(self.history_capacity);
        history.push(get_stats(&nodes, Tick::ZERO));

        info!(
            nodes = nodes.len(),
            edges = edges.len(),
            seeds = config.initial_infected,
            layout_passes = self.layout_passes,
            "simulation ready"
        );

        Ok(Sim {
            config,
            bounds: self.bounds,
            rng,
            nodes: Arc::from(nodes),
            edges: Arc::from(edges),
            tick: Tick::ZERO,
            history,
            snapshot_interval: self.snapshot_interval,
        })
    }
}
