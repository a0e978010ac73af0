//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use ct_core::{Node, Tick};
use ct_epidemic::{Intervention, StatsSnapshot};
use ct_network::Edge;
use ct_sim::SimObserver;

use crate::row::{EdgeRow, NodeSnapshotRow, StatsRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes stats samples, node snapshots, and the edge
/// list to any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver`
/// methods have no return value.  After the run, check with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any).
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_start(&mut self, edges: &[Edge], _nodes: &[Node], stats: &StatsSnapshot) {
        let rows: Vec<EdgeRow> = edges.iter().map(EdgeRow::from).collect();
        let result = self.writer.write_edges(&rows);
        self.store_err(result);
        let result = self.writer.write_stats(&StatsRow::new(stats, "initial"));
        self.store_err(result);
    }

    fn on_tick_end(&mut self, stats: &StatsSnapshot) {
        let result = self.writer.write_stats(&StatsRow::new(stats, "tick"));
        self.store_err(result);
    }

    fn on_intervention(&mut self, intervention: Intervention, stats: &StatsSnapshot) {
        let result = self.writer.write_stats(&StatsRow::new(stats, intervention.to_string()));
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, nodes: &[Node]) {
        if nodes.is_empty() {
            return;
        }
        let rows: Vec<NodeSnapshotRow> = nodes.iter().map(|n| NodeSnapshotRow::new(n, tick)).collect();
        let result = self.writer.write_nodes(&rows);
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
