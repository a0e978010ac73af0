use ct_core::CtError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Engine(#[from] CtError),
}

pub type SimResult<T> = Result<T, SimError>;
