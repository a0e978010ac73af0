//! `ct-core` — foundational types for the contagion engine.
//!
//! Every other `ct-*` crate depends on this one.  It has no `ct-*`
//! dependencies and only a handful of external ones (`rand`, `thiserror`,
//! `tracing`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                                   |
//! |-------------|------------------------------------------------------------|
//! | [`ids`]     | `NodeId`                                                   |
//! | [`geom`]    | `Vec2`, `Bounds` (padded drawing rectangle)                |
//! | [`time`]    | `Tick`                                                     |
//! | [`state`]   | `HealthState` and its one-way transition graph             |
//! | [`node`]    | `Node` — one individual in the simulated population        |
//! | [`config`]  | `ContagionConfig`, `SpreadMode`                            |
//! | [`rng`]     | `SimRng` — the injectable, seedable random source          |
//! | [`error`]   | `CtError`, `CtResult`                                      |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public data types.   |

pub mod config;
pub mod error;
pub mod geom;
pub mod ids;
pub mod node;
pub mod rng;
pub mod state;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{ContagionConfig, SpreadMode};
pub use error::{CtError, CtResult};
pub use geom::{Bounds, Vec2};
pub use ids::NodeId;
pub use node::Node;
pub use rng::SimRng;
pub use state::HealthState;
pub use time::Tick;
