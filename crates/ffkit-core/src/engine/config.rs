use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_DIELECTRIC: f64 = 1.0;
pub const DEFAULT_CONVERGENCE: f64 = 0.1;
pub const DEFAULT_MAX_STEPS: usize = 250;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Invalid value for '{field}': {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("Failed to read configuration file '{path}': {source}", path = path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse configuration file '{path}': {source}", path = path.display())]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Settings shared by every force field a registry creates.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields, default)]
pub struct ForceFieldConfig {
    pub dielectric: f64,
    /// Overrides the family's own 1-4 nonbonded scale factor.
    pub one_four_scale: Option<f64>,
    pub electrostatics: bool,
    pub amber_parameters: Option<PathBuf>,
    pub opls_parameters: Option<PathBuf>,
}

impl Default for ForceFieldConfig {
    fn default() -> Self {
        Self {
            dielectric: DEFAULT_DIELECTRIC,
            one_four_scale: None,
            electrostatics: true,
            amber_parameters: None,
            opls_parameters: None,
        }
    }
}

impl ForceFieldConfig {
    pub fn builder() -> ForceFieldConfigBuilder {
        ForceFieldConfigBuilder::new()
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Self::parse_toml(text, Path::new("<inline>"))
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = read(path)?;
        Self::parse_toml(&text, path)
    }

    fn parse_toml(text: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()
    }

    pub fn validate(self) -> Result<Self, ConfigError> {
        if !(self.dielectric.is_finite() && self.dielectric > 0.0) {
            return Err(ConfigError::InvalidValue {
                field: "dielectric",
                reason: format!("must be a positive number, got {}", self.dielectric),
            });
        }
        if let Some(scale) = self.one_four_scale {
            if !(scale.is_finite() && (0.0..=1.0).contains(&scale)) {
                return Err(ConfigError::InvalidValue {
                    field: "one-four-scale",
                    reason: format!("must lie in [0, 1], got {}", scale),
                });
            }
        }
        Ok(self)
    }
}

#[derive(Default)]
pub struct ForceFieldConfigBuilder {
    dielectric: Option<f64>,
    one_four_scale: Option<f64>,
    electrostatics: Option<bool>,
    amber_parameters: Option<PathBuf>,
    opls_parameters: Option<PathBuf>,
}

impl ForceFieldConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dielectric(mut self, dielectric: f64) -> Self {
        self.dielectric = Some(dielectric);
        self
    }
    pub fn one_four_scale(mut self, scale: f64) -> Self {
        self.one_four_scale = Some(scale);
        self
    }
    pub fn electrostatics(mut self, enabled: bool) -> Self {
        self.electrostatics = Some(enabled);
        self
    }
    pub fn amber_parameters(mut self, path: PathBuf) -> Self {
        self.amber_parameters = Some(path);
        self
    }
    pub fn opls_parameters(mut self, path: PathBuf) -> Self {
        self.opls_parameters = Some(path);
        self
    }

    pub fn build(self) -> Result<ForceFieldConfig, ConfigError> {
        ForceFieldConfig {
            dielectric: self.dielectric.unwrap_or(DEFAULT_DIELECTRIC),
            one_four_scale: self.one_four_scale,
            electrostatics: self.electrostatics.unwrap_or(true),
            amber_parameters: self.amber_parameters,
            opls_parameters: self.opls_parameters,
        }
        .validate()
    }
}

/// Stopping criteria of an [`EnergyMinimizer`](super::minimizer::EnergyMinimizer).
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields, default)]
pub struct MinimizerConfig {
    /// RMS gradient threshold in kcal/(mol·Å).
    pub convergence: f64,
    pub max_steps: usize,
}

impl Default for MinimizerConfig {
    fn default() -> Self {
        Self {
            convergence: DEFAULT_CONVERGENCE,
            max_steps: DEFAULT_MAX_STEPS,
        }
    }
}

impl MinimizerConfig {
    pub fn builder() -> MinimizerConfigBuilder {
        MinimizerConfigBuilder::default()
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text).map_err(|source| ConfigError::Toml {
            path: PathBuf::from("<inline>"),
            source,
        })?;
        config.validate()
    }

    pub fn validate(self) -> Result<Self, ConfigError> {
        if !(self.convergence.is_finite() && self.convergence > 0.0) {
            return Err(ConfigError::InvalidValue {
                field: "convergence",
                reason: format!("must be a positive number, got {}", self.convergence),
            });
        }
        if self.max_steps == 0 {
            return Err(ConfigError::InvalidValue {
                field: "max-steps",
                reason: "must allow at least one step".to_string(),
            });
        }
        Ok(self)
    }
}

#[derive(Default)]
pub struct MinimizerConfigBuilder {
    convergence: Option<f64>,
    max_steps: Option<usize>,
}

impl MinimizerConfigBuilder {
    pub fn convergence(mut self, threshold: f64) -> Self {
        self.convergence = Some(threshold);
        self
    }
    pub fn max_steps(mut self, steps: usize) -> Self {
        self.max_steps = Some(steps);
        self
    }

    pub fn build(self) -> Result<MinimizerConfig, ConfigError> {
        MinimizerConfig {
            convergence: self.convergence.unwrap_or(DEFAULT_CONVERGENCE),
            max_steps: self.max_steps.unwrap_or(DEFAULT_MAX_STEPS),
        }
        .validate()
    }
}

fn read(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}
