//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `output.db` file in the configured output directory with
//! three tables: `stats`, `node_snapshots`, and `edges`.

use std::path::Path;

use rusqlite::Connection;

use crate::writer::OutputWriter;
use crate::{EdgeRow, NodeSnapshotRow, OutputResult, StatsRow};

/// Writes run output to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `output.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join("output.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS stats (
                 tick      INTEGER NOT NULL,
                 event     TEXT    NOT NULL,
                 healthy   INTEGER NOT NULL,
                 infected  INTEGER NOT NULL,
                 recovered INTEGER NOT NULL,
                 aware     INTEGER NOT NULL
             );
             CREATE TABLE IF NOT EXISTS node_snapshots (
                 node_id     INTEGER NOT NULL,
                 tick        INTEGER NOT NULL,
                 x           REAL    NOT NULL,
                 y           REAL    NOT NULL,
                 state       TEXT    NOT NULL,
                 infected_at INTEGER
             );
             CREATE TABLE IF NOT EXISTS edges (
                 source INTEGER NOT NULL,
                 target INTEGER NOT NULL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_edges(&mut self, rows: &[EdgeRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached("INSERT INTO edges (source, target) VALUES (?1, ?2)")?;
            for row in rows {
                stmt.execute(rusqlite::params![row.source, row.target])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_stats(&mut self, row: &StatsRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT INTO stats (tick, event, healthy, infected, recovered, aware) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            rusqlite::params![
                row.tick as i64,
                row.event,
                row.healthy as i64,
                row.infected as i64,
                row.recovered as i64,
                row.aware as i64,
            ],
        )?;
        Ok(())
    }

    fn write_nodes(&mut self, rows: &[NodeSnapshotRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO node_snapshots \
                 (node_id, tick, x, y, state, infected_at) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.node_id,
                    row.tick as i64,
                    row.x,
                    row.y,
                    row.state.as_str(),
                    row.infected_at.map(|t| t as i64),
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
