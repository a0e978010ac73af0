//! The `OutputWriter` trait implemented by all backend writers.

use crate::{EdgeRow, NodeSnapshotRow, OutputResult, StatsRow};

/// Trait implemented by the CSV and SQLite writers.
///
/// Errors are returned to the caller; [`SimOutputObserver`][crate::SimOutputObserver]
/// stores the first one for [`take_error`][crate::SimOutputObserver::take_error].
pub trait OutputWriter {
    /// Write the fixed edge list.  Called once per run.
    fn write_edges(&mut self, rows: &[EdgeRow]) -> OutputResult<()>;

    /// Write one stats sample.
    fn write_stats(&mut self, row: &StatsRow) -> OutputResult<()>;

    /// Write a batch of node snapshots.
    fn write_nodes(&mut self, rows: &[NodeSnapshotRow]) -> OutputResult<()>;

    /// Flush all underlying handles.  Called at the end of every `run_*`
    /// call, so it may run more than once per writer.
    fn finish(&mut self) -> OutputResult<()>;
}
