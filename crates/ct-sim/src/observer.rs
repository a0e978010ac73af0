//! Observer hooks for progress reporting and data export.

use ct_core::{Node, Tick};
use ct_epidemic::{Intervention, StatsSnapshot};
use ct_network::Edge;

/// Callbacks invoked by [`Sim`][crate::Sim] as a run progresses.
///
/// Every method has a default no-op implementation, so implementors only
/// override what they need.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct Progress;
///
/// impl SimObserver for Progress {
///     fn on_tick_end(&mut self, stats: &StatsSnapshot) {
///         println!("{}: {} infected", stats.tick, stats.infected);
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called once by [`Sim::emit_initial`][crate::Sim::emit_initial] with
    /// the fixed edge list and the tick-0 generation.
    fn on_start(&mut self, _edges: &[Edge], _nodes: &[Node], _stats: &StatsSnapshot) {}

    /// Called before the tick function runs.  `tick` is the tick about to be
    /// computed.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after each tick with that tick's counts.
    fn on_tick_end(&mut self, _stats: &StatsSnapshot) {}

    /// Called after an intervention is applied.
    fn on_intervention(&mut self, _intervention: Intervention, _stats: &StatsSnapshot) {}

    /// Called every `snapshot_interval` ticks with the full generation.
    fn on_snapshot(&mut self, _tick: Tick, _nodes: &[Node]) {}

    /// Called once when a `run_*` method finishes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
