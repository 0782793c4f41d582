//! Error types for BhumiSim

use thiserror::Error;

/// BhumiSim error type
#[derive(Error, Debug)]
pub enum BhumiError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Scenario error: {0}")]
    Scenario(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_yaml::Error> for BhumiError {
    fn from(e: serde_yaml::Error) -> Self {
        BhumiError::Scenario(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, BhumiError>;
