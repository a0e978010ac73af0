//! Caller-triggered interventions.
//!
//! Neither operator runs on a schedule.  Both are no-ops when nothing is
//! eligible and never fail: an unknown fact-check target is logged and
//! ignored.

use std::fmt;

use tracing::debug;

use ct_core::{HealthState, Node, NodeId, SimRng};

/// Chance that a fact-check makes each healthy neighbour of the target aware.
pub const FACT_CHECK_AWARENESS_PROBABILITY: f64 = 0.5;

/// Share of currently healthy nodes reached by an awareness campaign.
pub const CAMPAIGN_FRACTION: f64 = 0.2;

/// Which intervention was applied.  Reported to observers and exporters.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Intervention {
    FactCheck(NodeId),
    AwarenessCampaign,
}

impl fmt::Display for Intervention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Intervention::FactCheck(id)       => write!(f, "fact-check {id}"),
            Intervention::AwarenessCampaign   => f.write_str("awareness campaign"),
        }
    }
}

/// Fact-check one node.
///
/// If `target` is infected it recovers.  Whatever the target's state, each
/// of its `Healthy` neighbours independently becomes `Aware` with
/// probability [`FACT_CHECK_AWARENESS_PROBABILITY`].
pub fn apply_fact_check(nodes: &[Node], target: NodeId, rng: &mut SimRng) -> Vec<Node> {
    let mut next = nodes.to_vec();
    let Some(original) = nodes.get(target.index()) else {
        debug!(%target, node_count = nodes.len(), "fact-check target out of range; ignored");
        return next;
    };

    let debunked = next[target.index()].recover();

    let mut made_aware = 0usize;
    for &neighbour in &original.connections {
        let Some(n) = next.get_mut(neighbour.index()) else {
            continue;
        };
        if n.is(HealthState::Healthy)
            && rng.gen_bool(FACT_CHECK_AWARENESS_PROBABILITY)
            && n.make_aware()
        {
            made_aware += 1;
        }
    }

    debug!(%target, debunked, made_aware, "fact-check applied");
    next
}

/// Make a random `ceil(20 %)` of the currently healthy nodes aware.
///
/// Targets are a prefix of a uniform shuffle of the healthy ids.  With no
/// healthy nodes this returns an unchanged copy without drawing from `rng`.
pub fn apply_awareness_campaign(nodes: &[Node], rng: &mut SimRng) -> Vec<Node> {
    let mut next = nodes.to_vec();
    let mut healthy: Vec<usize> = nodes
        .iter()
        .enumerate()
        .filter(|(_, n)| n.is(HealthState::Healthy))
        .map(|(i, _)| i)
        .collect();
    if healthy.is_empty() {
        return next;
    }

    let reach = campaign_reach(healthy.len());
    rng.shuffle(&mut healthy);
    for &i in &healthy[..reach] {
        next[i].make_aware();
    }

    debug!(healthy = healthy.len(), reached = reach, "awareness campaign applied");
    next
}

/// `ceil(CAMPAIGN_FRACTION * healthy)`, never more than `healthy`.
pub(crate) fn campaign_reach(healthy: usize) -> usize {
    ((healthy as f64 * CAMPAIGN_FRACTION).ceil() as usize).min(healthy)
}
