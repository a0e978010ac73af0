//! outbreak — command-line driver for the contagion engine.
//!
//! Generates a synthetic social network, seeds a piece of misinformation,
//! and lets it spread tick by tick.  Fact-checks and awareness campaigns
//! can be scheduled from the command line.  With `--output`, the stats time
//! series, periodic node snapshots, and the edge list are written to CSV
//! (or SQLite with the `sqlite` feature and `--sqlite`).
//!
//! ```text
//! outbreak --nodes 120 --spread 0.35 --campaign-at 10 --fact-check-at 4:17 --output out/
//! RUST_LOG=debug outbreak --config run.json
//! ```

mod schedule;

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use ct_core::{Bounds, ContagionConfig, HealthState, Node, SpreadMode, Tick};
use ct_epidemic::{Intervention, StatsSnapshot};
use ct_network::Edge;
use ct_output::{CsvWriter, OutputWriter, SimOutputObserver};
use ct_sim::{NoopObserver, Sim, SimBuilder, SimObserver};

use schedule::{FactCheckAt, Schedule};

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Mode {
    Cascade,
    Synchronous,
}

impl From<Mode> for SpreadMode {
    fn from(m: Mode) -> Self {
        match m {
            Mode::Cascade     => SpreadMode::Cascade,
            Mode::Synchronous => SpreadMode::Synchronous,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "outbreak", about = "Simulate misinformation spread over a synthetic social network")]
struct Cli {
    /// JSON file with a ContagionConfig; flags below override its fields.
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    nodes: Option<usize>,

    /// Target mean degree.
    #[arg(long)]
    density: Option<f64>,

    /// Per-tick transmission probability along one edge.
    #[arg(long)]
    spread: Option<f64>,

    /// Ticks a node stays infectious.
    #[arg(long)]
    recovery: Option<u64>,

    /// Number of initially infected nodes.
    #[arg(long)]
    seeds: Option<usize>,

    #[arg(long, value_enum)]
    mode: Option<Mode>,

    /// RNG seed.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Maximum ticks to run.
    #[arg(long, default_value_t = 200)]
    ticks: u64,

    /// Fact-check a node after a tick, as <tick>:<node>.  Repeatable.
    #[arg(long = "fact-check-at")]
    fact_checks: Vec<FactCheckAt>,

    /// Run an awareness campaign after a tick.  Repeatable.
    #[arg(long = "campaign-at")]
    campaigns: Vec<u64>,

    #[arg(long, default_value_t = 800.0)]
    width: f64,

    #[arg(long, default_value_t = 600.0)]
    height: f64,

    /// Directory for exported output.  Created if missing.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Write a node snapshot every N ticks (0 = only the initial one).
    #[arg(long, default_value_t = 5)]
    snapshot_every: u64,

    /// Export to SQLite instead of CSV.
    #[cfg(feature = "sqlite")]
    #[arg(long)]
    sqlite: bool,
}

// ── Config ────────────────────────────────────────────────────────────────────

fn load_config(cli: &Cli) -> Result<ContagionConfig> {
    let mut cfg = match &cli.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => ContagionConfig::default(),
    };

    if let Some(v) = cli.nodes    { cfg.node_count = v; }
    if let Some(v) = cli.density  { cfg.connection_density = v; }
    if let Some(v) = cli.spread   { cfg.spread_probability = v; }
    if let Some(v) = cli.recovery { cfg.recovery_time = v; }
    if let Some(v) = cli.seeds    { cfg.initial_infected = v; }
    if let Some(m) = cli.mode     { cfg.spread_mode = m.into(); }
    Ok(cfg)
}

// ── Progress observer ─────────────────────────────────────────────────────────

/// Logs progress and forwards every hook to `inner`.
struct Progress<O: SimObserver> {
    inner:     O,
    log_every: u64,
}

impl<O: SimObserver> SimObserver for Progress<O> {
    fn on_start(&mut self, edges: &[Edge], nodes: &[Node], stats: &StatsSnapshot) {
        info!(nodes = nodes.len(), edges = edges.len(), infected = stats.infected, "network ready");
        self.inner.on_start(edges, nodes, stats);
    }

    fn on_tick_start(&mut self, tick: Tick) {
        self.inner.on_tick_start(tick);
    }

    fn on_tick_end(&mut self, stats: &StatsSnapshot) {
        if self.log_every > 0 && stats.tick.0.is_multiple_of(self.log_every) {
            debug!(
                tick = %stats.tick,
                healthy = stats.healthy,
                infected = stats.infected,
                recovered = stats.recovered,
                aware = stats.aware,
            );
        }
        self.inner.on_tick_end(stats);
    }

    fn on_intervention(&mut self, intervention: Intervention, stats: &StatsSnapshot) {
        info!(tick = %stats.tick, infected = stats.infected, aware = stats.aware, "{intervention}");
        self.inner.on_intervention(intervention, stats);
    }

    fn on_snapshot(&mut self, tick: Tick, nodes: &[Node]) {
        self.inner.on_snapshot(tick, nodes);
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        self.inner.on_sim_end(final_tick);
    }
}

// ── Run loop ──────────────────────────────────────────────────────────────────

/// Step until `max_ticks`, or until the outbreak is over and nothing else
/// is scheduled.
fn drive<O: SimObserver>(sim: &mut Sim, schedule: &Schedule, max_ticks: u64, obs: &mut O) {
    sim.emit_initial(obs);
    for &i in schedule.due(Tick::ZERO) {
        sim.intervene(i, obs);
    }

    while sim.tick().0 < max_ticks {
        let stats = sim.step(obs);
        for &i in schedule.due(stats.tick) {
            sim.intervene(i, obs);
        }
        if sim.stats().is_extinct() && !schedule.pending_after(stats.tick) {
            info!(tick = %stats.tick, "outbreak contained");
            break;
        }
    }
    obs.on_sim_end(sim.tick());
}

fn export<W: OutputWriter>(
    sim:      &mut Sim,
    schedule: &Schedule,
    cli:      &Cli,
    writer:   W,
) -> Result<()> {
    let mut obs = Progress { inner: SimOutputObserver::new(writer), log_every: 10 };
    drive(sim, schedule, cli.ticks, &mut obs);
    if let Some(e) = obs.inner.take_error() {
        return Err(e).context("writing output");
    }
    Ok(())
}

fn run_with_output(sim: &mut Sim, schedule: &Schedule, cli: &Cli, dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;

    #[cfg(feature = "sqlite")]
    if cli.sqlite {
        let writer = ct_output::SqliteWriter::new(dir)?;
        export(sim, schedule, cli, writer)?;
        info!(dir = %dir.display(), "wrote output.db");
        return Ok(());
    }

    let writer = CsvWriter::new(dir)?;
    export(sim, schedule, cli, writer)?;
    info!(dir = %dir.display(), "wrote stats.csv, node_snapshots.csv, edges.csv");
    Ok(())
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    let schedule = Schedule::new(&cli.fact_checks, &cli.campaigns);

    info!(
        nodes = config.node_count,
        density = config.connection_density,
        spread = config.spread_probability,
        recovery = config.recovery_time,
        seeds = config.initial_infected,
        mode = ?config.spread_mode,
        seed = cli.seed,
        interventions = schedule.len(),
        "starting outbreak"
    );

    let snapshot_every = match (&cli.output, cli.snapshot_every) {
        (None, _)    => 0,
        (Some(_), 0) => u64::MAX,
        (Some(_), n) => n,
    };

    let mut sim = SimBuilder::new(config)
        .bounds(Bounds::new(cli.width, cli.height))
        .seed(cli.seed)
        .snapshot_interval(snapshot_every)
        .build()?;

    for fc in &cli.fact_checks {
        if fc.node.index() >= sim.nodes().len() {
            warn!(node = %fc.node, "fact-check target outside the network; it will have no effect");
        }
    }

    let t0 = Instant::now();
    match &cli.output {
        Some(dir) => run_with_output(&mut sim, &schedule, &cli, dir)?,
        None => drive(&mut sim, &schedule, cli.ticks, &mut Progress { inner: NoopObserver, log_every: 10 }),
    }
    let elapsed = t0.elapsed();

    // ── Summary ───────────────────────────────────────────────────────────
    let last = sim.stats();
    println!();
    println!("Finished at {} in {:.3} s", last.tick, elapsed.as_secs_f64());
    if let Some(peak) = sim.history().peak_infected() {
        println!("Peak infected: {} at {}", peak.infected, peak.tick);
    }
    println!();
    println!("{:<10} {:>6} {:>7}", "State", "Count", "Share");
    println!("{}", "-".repeat(25));
    let n = sim.nodes().len().max(1) as f64;
    for state in HealthState::ALL {
        let count = last.count(state);
        println!("{:<10} {:>6} {:>6.1}%", state.as_str(), count, 100.0 * count as f64 / n);
    }

    Ok(())
}
