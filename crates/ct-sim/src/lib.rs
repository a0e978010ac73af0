//! `ct-sim` — a ready-made driver for the contagion engine.
//!
//! The engine crates are pure functions; something still has to own the
//! current generation, the tick counter, the random source, and the stats
//! history.  `Sim` is that something.  Renderers and timers stay outside:
//! they call [`Sim::step`] whenever they like and read
//! [`Sim::snapshot`] / [`Sim::history`].
//!
//! # Run sequence
//!
//! ```text
//! build:  generate network → layout × K → stats(T0)
//! step:   tick += 1 → simulation_tick → stats → history
//! on demand (between steps):
//!         fact_check(id) | awareness_campaign() → stats → history
//! ```
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use ct_core::ContagionConfig;
//! use ct_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(ContagionConfig::default()).seed(42).build()?;
//! sim.run_until_contained(500, &mut NoopObserver);
//! println!("peak infected: {:?}", sim.history().peak_infected());
//! ```

pub mod builder;
pub mod error;
pub mod history;
pub mod observer;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use history::StatsHistory;
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
