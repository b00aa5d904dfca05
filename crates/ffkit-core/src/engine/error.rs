use crate::core::forcefield::params::ParamLoadError;
use thiserror::Error;

/// Why [`ForceField::setup`](super::forcefield::ForceField::setup) did not fully succeed.
///
/// Calculations that were parameterized stay in the force field either way.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SetupError {
    #[error("Cannot set up a force field for an empty molecule")]
    EmptyTopology,

    #[error("{failed} of {total} calculations could not be parameterized")]
    Incomplete { failed: usize, total: usize },
}

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Unknown force field '{0}'")]
    UnknownForceField(String),

    #[error("Failed to load force-field parameters: {0}")]
    Parameters(#[from] ParamLoadError),
}
