//! The per-tick contagion step.

use tracing::debug;

use ct_core::{ContagionConfig, HealthState, Node, SimRng, SpreadMode, Tick};

/// Advance `nodes` by one tick and return the new generation.
///
/// `tick` is the number of the tick being computed (the driver increments
/// before calling, so the first step is `Tick(1)`).
///
/// Nodes are visited in ascending id order.  Each infectious node gives each
/// `Healthy` neighbour an independent `spread_probability` chance of
/// infection, stamped with `tick`, then recovers itself if it has been
/// infected for at least `recovery_time` ticks.  Neighbour state is always
/// read from the working copy, so a neighbour already infected this tick is
/// not infected twice.  Whether a node infected earlier in this same pass
/// counts as infectious depends on [`SpreadMode`].
///
/// A node infected at `tick` cannot recover at `tick`: a `recovery_time` of
/// 0 is treated as 1.
pub fn simulation_tick(
    nodes:  &[Node],
    config: &ContagionConfig,
    tick:   Tick,
    rng:    &mut SimRng,
) -> Vec<Node> {
    let recovery_time = config.recovery_time.max(1);
    let mut next = nodes.to_vec();
    let mut newly_infected = 0usize;
    let mut newly_recovered = 0usize;

    for (i, original) in nodes.iter().enumerate() {
        let infectious = match config.spread_mode {
            SpreadMode::Cascade     => next[i].is(HealthState::Infected),
            SpreadMode::Synchronous => original.is(HealthState::Infected),
        };
        if !infectious {
            continue;
        }

        for &neighbour in &original.connections {
            let Some(target) = next.get_mut(neighbour.index()) else {
                continue;
            };
            if target.is(HealthState::Healthy)
                && rng.gen_bool(config.spread_probability)
                && target.infect(tick)
            {
                newly_infected += 1;
            }
        }

        if next[i].recovery_due(tick, recovery_time) && next[i].recover() {
            newly_recovered += 1;
        }
    }

    debug!(%tick, newly_infected, newly_recovered, "tick applied");
    next
}
