use super::config::MinimizerConfig;
use super::forcefield::ForceField;
use super::progress::{StateCallback, StateReporter};
use super::registry::{ForceFieldKind, ForceFieldRegistry};
use crate::core::models::molecule::Molecule;
use crate::core::utils::geometry::Coordinates;
use std::fmt;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MinimizerState {
    Stopped,
    SettingUp,
    SetupFailed,
    Running,
    UpdateReady,
    Converged,
}

impl MinimizerState {
    pub fn as_str(self) -> &'static str {
        match self {
            MinimizerState::Stopped => "Stopped",
            MinimizerState::SettingUp => "Setting Up",
            MinimizerState::SetupFailed => "Setup Failed",
            MinimizerState::Running => "Running",
            MinimizerState::UpdateReady => "Update Ready",
            MinimizerState::Converged => "Converged",
        }
    }
}

impl fmt::Display for MinimizerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One iteration of an optimization algorithm such as steepest descent or conjugate
/// gradients.
pub trait MinimizationStep {
    /// Moves `coordinates` downhill on the force field's energy surface and returns
    /// whether the algorithm considers itself converged.
    fn step(&mut self, force_field: &ForceField, coordinates: &mut Coordinates) -> bool;
}

/// Drives one force field through setup and a sequence of minimization steps.
///
/// At most one step is in flight at a time. [`start`](Self::start) (re)builds the force
/// field only when the molecule or the force-field family changed since the last setup;
/// a failed setup is final until one of them changes again.
pub struct EnergyMinimizer<'r> {
    registry: &'r ForceFieldRegistry,
    kind: ForceFieldKind,
    config: MinimizerConfig,
    reporter: StateReporter<'r>,
    force_field: Option<ForceField>,
    state: MinimizerState,
    topology_dirty: bool,
    step_in_flight: bool,
    steps_taken: usize,
}

impl<'r> EnergyMinimizer<'r> {
    pub fn new(registry: &'r ForceFieldRegistry, kind: ForceFieldKind, config: MinimizerConfig) -> Self {
        Self {
            registry,
            kind,
            config,
            reporter: StateReporter::new(),
            force_field: None,
            state: MinimizerState::Stopped,
            topology_dirty: true,
            step_in_flight: false,
            steps_taken: 0,
        }
    }

    pub fn with_callback(mut self, callback: StateCallback<'r>) -> Self {
        self.reporter = StateReporter::with_callback(callback);
        self
    }

    #[inline]
    pub fn state(&self) -> MinimizerState {
        self.state
    }

    pub fn kind(&self) -> ForceFieldKind {
        self.kind
    }

    /// The force field of the last setup, including a partially parameterized one.
    pub fn force_field(&self) -> Option<&ForceField> {
        self.force_field.as_ref()
    }

    pub fn steps_taken(&self) -> usize {
        self.steps_taken
    }

    pub fn is_step_in_flight(&self) -> bool {
        self.step_in_flight
    }

    pub fn set_force_field(&mut self, kind: ForceFieldKind) {
        if kind != self.kind {
            self.kind = kind;
            self.topology_dirty = true;
        }
    }

    pub fn set_molecule_changed(&mut self) {
        self.topology_dirty = true;
    }

    /// Begins the next step, setting the force field up first when needed.
    pub fn start(&mut self, molecule: &Molecule) -> MinimizerState {
        if self.step_in_flight {
            debug!("A minimization step is already in flight; ignoring start.");
            return self.state;
        }
        if molecule.is_empty() {
            self.force_field = None;
            self.topology_dirty = true;
            self.set_state(MinimizerState::SetupFailed);
            return self.state;
        }

        if self.topology_dirty || self.force_field.is_none() {
            self.set_state(MinimizerState::SettingUp);
            let mut force_field = self.registry.create_kind(self.kind);
            let result = force_field.setup(molecule);
            self.force_field = Some(force_field);
            self.topology_dirty = false;
            self.steps_taken = 0;

            if let Err(error) = result {
                warn!(force_field = %self.kind, "Minimizer setup failed: {}", error);
                self.set_state(MinimizerState::SetupFailed);
                return self.state;
            }
        } else if self.state == MinimizerState::SetupFailed {
            return self.state;
        } else if self.state != MinimizerState::UpdateReady {
            self.steps_taken = 0;
        }

        self.step_in_flight = true;
        self.set_state(MinimizerState::Running);
        self.state
    }

    /// Records the outcome of the step in flight.
    pub fn step_finished(&mut self, converged: bool) -> MinimizerState {
        self.step_in_flight = false;
        if self.state == MinimizerState::Stopped {
            info!("Minimizer was stopped; discarding the finished step.");
            return self.state;
        }
        if self.state != MinimizerState::Running {
            return self.state;
        }
        self.set_state(if converged {
            MinimizerState::Converged
        } else {
            MinimizerState::UpdateReady
        });
        self.state
    }

    pub fn stop(&mut self) -> MinimizerState {
        self.set_state(MinimizerState::Stopped);
        self.state
    }

    /// Runs one step with `driver`, starting it first if the previous one left an update
    /// ready, and stops once the step budget is spent without convergence.
    pub fn run_step<D>(&mut self, driver: &mut D, coordinates: &mut Coordinates) -> MinimizerState
    where
        D: MinimizationStep + ?Sized,
    {
        if self.state == MinimizerState::UpdateReady && !self.topology_dirty && !self.step_in_flight {
            self.step_in_flight = true;
            self.set_state(MinimizerState::Running);
        }
        if self.state != MinimizerState::Running || !self.step_in_flight {
            return self.state;
        }
        let Some(force_field) = self.force_field.as_ref() else {
            return self.state;
        };

        let converged =
            driver.step(force_field, coordinates) || force_field.is_converged(coordinates, self.config.convergence);
        self.steps_taken += 1;
        self.step_finished(converged);

        if self.state == MinimizerState::UpdateReady && self.steps_taken >= self.config.max_steps {
            info!(steps = self.steps_taken, "Step budget exhausted before convergence.");
            self.stop();
        }
        self.state
    }

    fn set_state(&mut self, state: MinimizerState) {
        if state == self.state {
            return;
        }
        debug!(from = %self.state, to = %state, "Minimizer state change.");
        self.state = state;
        self.reporter.report(state);
    }
}
