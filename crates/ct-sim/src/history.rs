//! Bounded stats time series.

use std::collections::VecDeque;

use ct_epidemic::StatsSnapshot;

/// Most recent `capacity` stats samples, oldest first.
///
/// Interventions record a sample too, so a tick may appear more than once.
#[derive(Clone, Debug)]
pub struct StatsHistory {
    samples:  VecDeque<StatsSnapshot>,
    capacity: usize,
}

impl StatsHistory {
    /// A history holding at most `capacity` samples (at least one).
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self { samples: VecDeque::with_capacity(capacity), capacity }
    }

    /// Append a sample, evicting the oldest one when full.
    pub fn push(&mut self, stats: StatsSnapshot) {
        if self.samples.len() == self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(stats);
    }

    pub fn latest(&self) -> Option<&StatsSnapshot> {
        self.samples.back()
    }

    /// Retained sample with the most infected nodes (earliest on ties).
    pub fn peak_infected(&self) -> Option<&StatsSnapshot> {
        self.samples
            .iter()
            .reduce(|best, s| if s.infected > best.infected { s } else { best })
    }

    pub fn iter(&self) -> impl Iterator<Item = &StatsSnapshot> + '_ {
        self.samples.iter()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
