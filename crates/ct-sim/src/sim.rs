//! The `Sim` struct and its tick loop.

use std::sync::Arc;

use tracing::{debug, info};

use ct_core::{Bounds, ContagionConfig, Node, NodeId, SimRng, Tick};
use ct_epidemic::{
    Intervention, StatsSnapshot, apply_awareness_campaign, apply_fact_check, get_stats,
    simulation_tick,
};
use ct_network::Edge;

use crate::{SimObserver, StatsHistory};

/// Owns one run: the current node generation, the fixed edge list, the tick
/// counter, the random source, and the stats history.
///
/// Each tick or intervention replaces `nodes` with a fresh `Arc<[Node]>`.
/// Generations handed out by [`snapshot`](Self::snapshot) are never modified,
/// so a renderer may keep drawing an older one while the run moves on.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    pub(crate) config:            ContagionConfig,
    pub(crate) bounds:            Bounds,
    pub(crate) rng:               SimRng,
    pub(crate) nodes:             Arc<[Node]>,
    pub(crate) edges:             Arc<[Edge]>,
    pub(crate) tick:              Tick,
    pub(crate) history:           StatsHistory,
    pub(crate) snapshot_interval: u64,
}

impl Sim {
    // ── Accessors ─────────────────────────────────────────────────────────

    /// The validated config this run uses.
    pub fn config(&self) -> &ContagionConfig {
        &self.config
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    /// The last tick computed (`Tick(0)` before the first step).
    pub fn tick(&self) -> Tick {
        self.tick
    }

    /// A shared handle to the current generation.
    pub fn snapshot(&self) -> Arc<[Node]> {
        Arc::clone(&self.nodes)
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn history(&self) -> &StatsHistory {
        &self.history
    }

    /// Counts for the current generation.
    pub fn stats(&self) -> StatsSnapshot {
        get_stats(&self.nodes, self.tick)
    }

    // ── Driving ───────────────────────────────────────────────────────────

    /// Report the starting state (edges, tick-0 counts, and a tick-0 node
    /// snapshot when snapshots are enabled).  Call once before stepping if
    /// the observer exports data.
    pub fn emit_initial<O: SimObserver>(&self, observer: &mut O) {
        let stats = self.stats();
        observer.on_start(&self.edges, &self.nodes, &stats);
        if self.snapshot_interval > 0 {
            observer.on_snapshot(self.tick, &self.nodes);
        }
    }

    /// Advance one tick and return its counts.
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) -> StatsSnapshot {
        let tick = self.tick.next();
        observer.on_tick_start(tick);

        let next = simulation_tick(&self.nodes, &self.config, tick, &mut self.rng);
        self.nodes = Arc::from(next);
        self.tick = tick;

        let stats = get_stats(&self.nodes, tick);
        self.history.push(stats);
        observer.on_tick_end(&stats);

        if self.snapshot_interval > 0 && tick.0.is_multiple_of(self.snapshot_interval) {
            observer.on_snapshot(tick, &self.nodes);
        }
        stats
    }

    /// Run exactly `n` ticks from the current position.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> StatsSnapshot {
        let mut stats = self.stats();
        for _ in 0..n {
            stats = self.step(observer);
        }
        observer.on_sim_end(self.tick);
        stats
    }

    /// Step until no node is infected or `max_ticks` ticks have run.
    ///
    /// Returns the final counts.  A network that starts with no infection
    /// runs zero ticks.
    pub fn run_until_contained<O: SimObserver>(
        &mut self,
        max_ticks: u64,
        observer:  &mut O,
    ) -> StatsSnapshot {
        let mut stats = self.stats();
        let mut ran = 0;
        while !stats.is_extinct() && ran < max_ticks {
            stats = self.step(observer);
            ran += 1;
        }
        info!(
            tick = %self.tick,
            contained = stats.is_extinct(),
            recovered = stats.recovered,
            aware = stats.aware,
            "run finished"
        );
        observer.on_sim_end(self.tick);
        stats
    }

    // ── Interventions ─────────────────────────────────────────────────────

    /// Fact-check `target` in the current generation.
    pub fn fact_check<O: SimObserver>(&mut self, target: NodeId, observer: &mut O) -> StatsSnapshot {
        let next = apply_fact_check(&self.nodes, target, &mut self.rng);
        self.commit_intervention(next, Intervention::FactCheck(target), observer)
    }

    /// Run an awareness campaign on the current generation.
    pub fn awareness_campaign<O: SimObserver>(&mut self, observer: &mut O) -> StatsSnapshot {
        let next = apply_awareness_campaign(&self.nodes, &mut self.rng);
        self.commit_intervention(next, Intervention::AwarenessCampaign, observer)
    }

    /// Apply `intervention` by kind.
    pub fn intervene<O: SimObserver>(
        &mut self,
        intervention: Intervention,
        observer:     &mut O,
    ) -> StatsSnapshot {
        match intervention {
            Intervention::FactCheck(target)  => self.fact_check(target, observer),
            Intervention::AwarenessCampaign  => self.awareness_campaign(observer),
        }
    }

    fn commit_intervention<O: SimObserver>(
        &mut self,
        next:         Vec<Node>,
        intervention: Intervention,
        observer:     &mut O,
    ) -> StatsSnapshot {
        self.nodes = Arc::from(next);
        let stats = get_stats(&self.nodes, self.tick);
        self.history.push(stats);
        debug!(%intervention, tick = %self.tick, infected = stats.infected, "intervention committed");
        observer.on_intervention(intervention, &stats);
        stats
    }
}
