use super::config::ForceFieldConfig;
use super::error::RegistryError;
use super::forcefield::ForceField;
use crate::core::forcefield::params::{ParamLoadError, ParameterTable};
use crate::core::typing::AtomTyper;
use crate::core::typing::amber::AmberTyper;
use crate::core::typing::opls::OplsTyper;
use crate::core::typing::uff::UffTyper;
use phf::phf_map;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ForceFieldKind {
    Amber,
    Opls,
    Uff,
}

static FORCE_FIELD_NAMES: phf::Map<&'static str, ForceFieldKind> = phf_map! {
    "amber" => ForceFieldKind::Amber,
    "opls" => ForceFieldKind::Opls,
    "opls-aa" => ForceFieldKind::Opls,
    "oplsaa" => ForceFieldKind::Opls,
    "uff" => ForceFieldKind::Uff,
};

impl ForceFieldKind {
    pub const ALL: [ForceFieldKind; 3] = [ForceFieldKind::Amber, ForceFieldKind::Opls, ForceFieldKind::Uff];

    pub fn name(self) -> &'static str {
        match self {
            ForceFieldKind::Amber => "amber",
            ForceFieldKind::Opls => "opls",
            ForceFieldKind::Uff => "uff",
        }
    }

    pub fn typer(self) -> &'static dyn AtomTyper {
        match self {
            ForceFieldKind::Amber => &AmberTyper,
            ForceFieldKind::Opls => &OplsTyper,
            ForceFieldKind::Uff => &UffTyper,
        }
    }

    /// The factor applied to nonbonded terms of 1-4 pairs unless configured otherwise.
    pub fn default_one_four_scale(self) -> f64 {
        match self {
            ForceFieldKind::Amber | ForceFieldKind::Opls => 0.5,
            ForceFieldKind::Uff => 1.0,
        }
    }

    /// Whether the family provides charges for electrostatic calculations.
    pub fn assigns_charges(self) -> bool {
        !matches!(self, ForceFieldKind::Uff)
    }

    pub fn has_inversions(self) -> bool {
        matches!(self, ForceFieldKind::Uff)
    }
}

impl FromStr for ForceFieldKind {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FORCE_FIELD_NAMES
            .get(s.trim().to_ascii_lowercase().as_str())
            .copied()
            .ok_or_else(|| RegistryError::UnknownForceField(s.to_string()))
    }
}

impl fmt::Display for ForceFieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Hands out force fields by name.
///
/// Parameter tables are loaded once, when the registry is built, and shared read-only
/// by every force field it creates.
#[derive(Debug, Clone)]
pub struct ForceFieldRegistry {
    config: ForceFieldConfig,
    amber: Arc<ParameterTable>,
    opls: Arc<ParameterTable>,
    uff: Arc<ParameterTable>,
}

impl ForceFieldRegistry {
    /// Loads the AMBER and OPLS tables, from the configured files when given and the
    /// embedded ones otherwise.
    pub fn new(config: ForceFieldConfig) -> Result<Self, ParamLoadError> {
        let amber = match &config.amber_parameters {
            Some(path) => ParameterTable::from_path(path)?,
            None => ParameterTable::amber(),
        };
        let opls = match &config.opls_parameters {
            Some(path) => ParameterTable::from_path(path)?,
            None => ParameterTable::opls(),
        };
        info!(
            amber_records = amber.record_count(),
            opls_records = opls.record_count(),
            "Force-field parameter tables loaded."
        );

        Ok(Self {
            config,
            amber: Arc::new(amber),
            opls: Arc::new(opls),
            uff: Arc::new(ParameterTable::default()),
        })
    }

    pub fn config(&self) -> &ForceFieldConfig {
        &self.config
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        ForceFieldKind::ALL.into_iter().map(ForceFieldKind::name)
    }

    pub fn create(&self, name: &str) -> Result<ForceField, RegistryError> {
        Ok(self.create_kind(name.parse()?))
    }

    pub fn create_kind(&self, kind: ForceFieldKind) -> ForceField {
        let parameters = match kind {
            ForceFieldKind::Amber => &self.amber,
            ForceFieldKind::Opls => &self.opls,
            ForceFieldKind::Uff => &self.uff,
        };
        ForceField::new(kind, Arc::clone(parameters), &self.config)
    }

    /// The parameter table of a table-driven family; UFF derives its parameters from
    /// compiled per-element constants and has none.
    pub fn parameters(&self, kind: ForceFieldKind) -> Option<&Arc<ParameterTable>> {
        match kind {
            ForceFieldKind::Amber => Some(&self.amber),
            ForceFieldKind::Opls => Some(&self.opls),
            ForceFieldKind::Uff => None,
        }
    }
}
