//! Error types for RakshakNav

use thiserror::Error;

/// RakshakNav error type
#[derive(Error, Debug)]
pub enum RakshakError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Simulation error: {0}")]
    Sim(#[from] bhumi_sim::BhumiError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<toml::de::Error> for RakshakError {
    fn from(e: toml::de::Error) -> Self {
        RakshakError::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, RakshakError>;
