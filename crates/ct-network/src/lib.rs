//! `ct-network` — social network generation and layout.
//!
//! # Modules
//!
//! | Module          | Contents                                                 |
//! |-----------------|----------------------------------------------------------|
//! | [`network`]     | `Edge`, `Network` (node array + immutable edge list)     |
//! | [`generator`]   | `generate_network` — Waxman-style distance-biased graph   |
//! | [`layout`]      | `apply_forces`, `relax`, `LayoutParams`                  |
//!
//! # Typical use
//!
//! ```rust,ignore
//! use ct_core::{Bounds, ContagionConfig, SimRng};
//! use ct_network::{generate_network, relax};
//!
//! let bounds = Bounds::new(800.0, 600.0);
//! let mut rng = SimRng::new(42);
//! let network = generate_network(&ContagionConfig::default(), &bounds, &mut rng)?;
//! let nodes = relax(&network.nodes, &network.edges, &bounds, 50);
//! ```

pub mod generator;
pub mod layout;
pub mod network;


pub use generator::generate_network;
pub use layout::{LayoutParams, apply_forces, apply_forces_with, relax};
pub use network::{Edge, Network};
