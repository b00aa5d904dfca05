use ffkit::core::forcefield::params::ParamLoadError;
use ffkit::engine::config::ConfigError;
use ffkit::engine::error::{RegistryError, SetupError};
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Parameters(#[from] ParamLoadError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Force field setup failed: {0}")]
    Setup(#[from] SetupError),

    #[error("Failed to parse file '{path}': {source}", path = path.display())]
    FileParsing {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("Invalid system description: {0}")]
    Input(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
