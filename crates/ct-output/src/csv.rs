//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `stats.csv`
//! - `node_snapshots.csv`
//! - `edges.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{EdgeRow, NodeSnapshotRow, OutputResult, StatsRow};

pub const STATS_HEADER: [&str; 6] = ["tick", "event", "healthy", "infected", "recovered", "aware"];
pub const NODES_HEADER: [&str; 6] = ["node_id", "tick", "x", "y", "state", "infected_at"];
pub const EDGES_HEADER: [&str; 2] = ["source", "target"];

/// Writes run output to three CSV files.
pub struct CsvWriter {
    stats: Writer<File>,
    nodes: Writer<File>,
    edges: Writer<File>,
}

impl CsvWriter {
    /// Create the three CSV files in `dir` and write their header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut stats = Writer::from_path(dir.join("stats.csv"))?;
        stats.write_record(STATS_HEADER)?;

        let mut nodes = Writer::from_path(dir.join("node_snapshots.csv"))?;
        nodes.write_record(NODES_HEADER)?;

        let mut edges = Writer::from_path(dir.join("edges.csv"))?;
        edges.write_record(EDGES_HEADER)?;

        Ok(Self { stats, nodes, edges })
    }
}

impl OutputWriter for CsvWriter {
    fn write_edges(&mut self, rows: &[EdgeRow]) -> OutputResult<()> {
        for row in rows {
            self.edges.write_record(&[row.source.to_string(), row.target.to_string()])?;
        }
        Ok(())
    }

    fn write_stats(&mut self, row: &StatsRow) -> OutputResult<()> {
        self.stats.write_record(&[
            row.tick.to_string(),
            row.event.clone(),
            row.healthy.to_string(),
            row.infected.to_string(),
            row.recovered.to_string(),
            row.aware.to_string(),
        ])?;
        Ok(())
    }

    fn write_nodes(&mut self, rows: &[NodeSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.nodes.write_record(&[
                row.node_id.to_string(),
                row.tick.to_string(),
                format!("{:.3}", row.x),
                format!("{:.3}", row.y),
                row.state.to_string(),
                // Empty field for never-infected nodes.
                row.infected_at.map(|t| t.to_string()).unwrap_or_default(),
            ])?;
        }
        Ok(())
    }

    /// Flushes all three files.  The writers stay open, so a driver that
    /// finishes one `run_*` call and starts another keeps appending.
    fn finish(&mut self) -> OutputResult<()> {
        self.stats.flush()?;
        self.nodes.flush()?;
        self.edges.flush()?;
        Ok(())
    }
}
