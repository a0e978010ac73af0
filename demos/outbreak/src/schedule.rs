//! Intervention schedule parsed from the command line.

use std::collections::BTreeMap;
use std::str::FromStr;

use ct_core::{NodeId, Tick};
use ct_epidemic::Intervention;

/// `--fact-check-at <tick>:<node>`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FactCheckAt {
    pub tick: u64,
    pub node: NodeId,
}

impl FromStr for FactCheckAt {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (tick, node) = s
            .split_once(':')
            .ok_or_else(|| format!("expected <tick>:<node>, got {s:?}"))?;
        let tick = tick.trim().parse::<u64>().map_err(|e| format!("bad tick {tick:?}: {e}"))?;
        let node = node.trim().parse::<u32>().map_err(|e| format!("bad node id {node:?}: {e}"))?;
        Ok(Self { tick, node: NodeId(node) })
    }
}

/// Interventions keyed by the tick after which they fire.  Tick 0 fires
/// before the first step.
#[derive(Debug, Default)]
pub struct Schedule {
    by_tick: BTreeMap<Tick, Vec<Intervention>>,
}

impl Schedule {
    pub fn new(fact_checks: &[FactCheckAt], campaigns: &[u64]) -> Self {
        let mut by_tick: BTreeMap<Tick, Vec<Intervention>> = BTreeMap::new();
        for fc in fact_checks {
            by_tick.entry(Tick(fc.tick)).or_default().push(Intervention::FactCheck(fc.node));
        }
        for &t in campaigns {
            by_tick.entry(Tick(t)).or_default().push(Intervention::AwarenessCampaign);
        }
        Self { by_tick }
    }

    /// Interventions due at `tick`, in the order given on the command line
    /// (fact-checks before campaigns).
    pub fn due(&self, tick: Tick) -> &[Intervention] {
        self.by_tick.get(&tick).map_or(&[], Vec::as_slice)
    }

    /// `true` if anything is scheduled after `tick`.
    pub fn pending_after(&self, tick: Tick) -> bool {
        self.by_tick.range(tick.next()..).next().is_some()
    }

    pub fn len(&self) -> usize {
        self.by_tick.values().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_fact_check() {
        let fc: FactCheckAt = "12:7".parse().unwrap();
        assert_eq!(fc, FactCheckAt { tick: 12, node: NodeId(7) });
        assert!("12".parse::<FactCheckAt>().is_err());
        assert!("x:7".parse::<FactCheckAt>().is_err());
    }

    #[test]
    fn groups_by_tick() {
        let fcs = [FactCheckAt { tick: 5, node: NodeId(1) }];
        let s = Schedule::new(&fcs, &[5, 9]);
        assert_eq!(s.len(), 3);
        assert_eq!(
            s.due(Tick(5)),
            [Intervention::FactCheck(NodeId(1)), Intervention::AwarenessCampaign]
        );
        assert!(s.due(Tick(6)).is_empty());
        assert!(s.pending_after(Tick(5)));
        assert!(!s.pending_after(Tick(9)));
    }
}
