//! Engine error type.
//!
//! The engine only fails on malformed input at generation time.  Normal
//! epidemic dynamics and interventions never return an error; an event that
//! cannot apply (infecting a recovered node, fact-checking an unknown id) is
//! simply a no-op.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CtError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("invalid bounds: {0}")]
    Bounds(String),
}

/// Shorthand result type for all `ct-*` crates.
pub type CtResult<T> = Result<T, CtError>;
