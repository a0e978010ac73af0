//! Integration tests for ct-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use ct_core::HealthState;

    use crate::csv::CsvWriter;
    use crate::row::{EdgeRow, NodeSnapshotRow, StatsRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn node_row(node_id: u32, tick: u64, infected_at: Option<u64>) -> NodeSnapshotRow {
        NodeSnapshotRow {
            node_id,
            tick,
            x: 10.0 * node_id as f64,
            y: 5.25,
            state: if infected_at.is_some() { HealthState::Infected } else { HealthState::Healthy },
            infected_at,
        }
    }

    fn stats_row(tick: u64, event: &str) -> StatsRow {
        StatsRow { tick, event: event.into(), healthy: 7, infected: 2, recovered: 1, aware: 0 }
    }

    fn headers(path: std::path::PathBuf) -> Vec<String> {
        let mut rdr = csv::Reader::from_path(path).unwrap();
        rdr.headers().unwrap().iter().map(str::to_owned).collect()
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("stats.csv").exists());
        assert!(dir.path().join("node_snapshots.csv").exists());
        assert!(dir.path().join("edges.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        assert_eq!(
            headers(dir.path().join("stats.csv")),
            ["tick", "event", "healthy", "infected", "recovered", "aware"]
        );
        assert_eq!(
            headers(dir.path().join("node_snapshots.csv")),
            ["node_id", "tick", "x", "y", "state", "infected_at"]
        );
        assert_eq!(headers(dir.path().join("edges.csv")), ["source", "target"]);
    }

    #[test]
    fn csv_node_rows() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_nodes(&[node_row(0, 4, None), node_row(1, 4, Some(2))]).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("node_snapshots.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][4], "healthy");
        assert_eq!(&rows[0][5], "");   // never infected
        assert_eq!(&rows[1][2], "10.000");
        assert_eq!(&rows[1][3], "5.250");
        assert_eq!(&rows[1][4], "infected");
        assert_eq!(&rows[1][5], "2");
    }

    #[test]
    fn csv_stats_rows() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_stats(&stats_row(3, "tick")).unwrap();
        w.write_stats(&stats_row(3, "awareness campaign")).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("stats.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "3");
        assert_eq!(&rows[0][1], "tick");
        assert_eq!(&rows[1][1], "awareness campaign");
        assert_eq!(&rows[1][3], "2"); // infected
    }

    #[test]
    fn csv_edge_rows() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_edges(&[EdgeRow { source: 0, target: 3 }, EdgeRow { source: 2, target: 1 }]).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("edges.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!((&rows[1][0], &rows[1][1]), ("2", "1"));
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn csv_missing_directory_errors() {
        let dir = tmp();
        assert!(CsvWriter::new(&dir.path().join("does/not/exist")).is_err());
    }
}

#[cfg(test)]
mod observer_tests {
    use tempfile::TempDir;

    use ct_core::{ContagionConfig, NodeId};
    use ct_sim::SimBuilder;

    use crate::csv::CsvWriter;
    use crate::observer::SimOutputObserver;

    fn count_rows(dir: &TempDir, file: &str) -> usize {
        let mut rdr = csv::Reader::from_path(dir.path().join(file)).unwrap();
        rdr.records().map(|r| r.unwrap()).count()
    }

    #[test]
    fn integration_csv() {
        let config = ContagionConfig { node_count: 12, initial_infected: 1, ..Default::default() };
        let mut sim = SimBuilder::new(config)
            .seed(1)
            .snapshot_interval(2)
            .build()
            .unwrap();

        let dir = tempfile::tempdir().unwrap();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = SimOutputObserver::new(writer);

        sim.emit_initial(&mut obs);
        sim.run_ticks(3, &mut obs);
        sim.fact_check(NodeId(0), &mut obs);
        sim.run_ticks(3, &mut obs);
        assert!(obs.take_error().is_none(), "no write errors expected");

        // initial + 6 ticks + 1 intervention
        assert_eq!(count_rows(&dir, "stats.csv"), 8);
        // snapshots at T0, T2, T4, T6 × 12 nodes
        assert_eq!(count_rows(&dir, "node_snapshots.csv"), 4 * 12);
        assert_eq!(count_rows(&dir, "edges.csv"), sim.edges().len());
    }
}

// ── SQLite tests ──────────────────────────────────────────────────────────────

#[cfg(all(test, feature = "sqlite"))]
mod sqlite_tests {
    use tempfile::TempDir;

    use ct_core::HealthState;

    use crate::row::{EdgeRow, NodeSnapshotRow, StatsRow};
    use crate::sqlite::SqliteWriter;
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn sqlite_db_created() {
        let dir = tmp();
        let _w = SqliteWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("output.db").exists());
    }

    #[test]
    fn sqlite_node_rows() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.write_nodes(&[
            NodeSnapshotRow { node_id: 0, tick: 1, x: 1.0, y: 2.0, state: HealthState::Aware, infected_at: None },
            NodeSnapshotRow { node_id: 1, tick: 1, x: 3.0, y: 4.0, state: HealthState::Infected, infected_at: Some(1) },
        ])
        .unwrap();
        w.finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM node_snapshots", [], |r| r.get(0))
            .unwrap();
        assert_eq!(count, 2);

        let (state, infected_at): (String, Option<i64>) = conn
            .query_row(
                "SELECT state, infected_at FROM node_snapshots WHERE node_id = 0",
                [],
                |r| Ok((r.get(0)?, r.get(1)?)),
            )
            .unwrap();
        assert_eq!(state, "aware");
        assert_eq!(infected_at, None);
    }

    #[test]
    fn sqlite_stats_and_edges() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.write_stats(&StatsRow {
            tick: 7, event: "tick".into(), healthy: 5, infected: 3, recovered: 1, aware: 1,
        })
        .unwrap();
        w.write_edges(&[EdgeRow { source: 0, target: 1 }]).unwrap();
        w.finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let (tick, infected): (i64, i64) = conn
            .query_row("SELECT tick, infected FROM stats WHERE tick = 7", [], |r| {
                Ok((r.get(0)?, r.get(1)?))
            })
            .unwrap();
        assert_eq!((tick, infected), (7, 3));

        let edges: i64 = conn.query_row("SELECT COUNT(*) FROM edges", [], |r| r.get(0)).unwrap();
        assert_eq!(edges, 1);
    }
}
