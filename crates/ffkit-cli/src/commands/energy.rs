use crate::cli::EnergyArgs;
use crate::error::{CliError, Result};
use crate::input;
use ffkit::core::forcefield::calculation::CalculationKind;
use ffkit::core::models::molecule::Molecule;
use ffkit::engine::config::ForceFieldConfig;
use ffkit::engine::registry::{ForceFieldKind, ForceFieldRegistry};
use std::fmt::Write;
use tracing::{info, warn};

/// What the `energy` command prints besides the total.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportOptions {
    pub terms: bool,
    pub gradient: bool,
    pub allow_partial: bool,
}

pub fn run(args: EnergyArgs) -> Result<()> {
    let kind: ForceFieldKind = args.forcefield.parse()?;

    let config = match &args.config {
        Some(path) => {
            info!("Loading force-field configuration from {:?}", path);
            ForceFieldConfig::load(path)?
        }
        None => ForceFieldConfig::default(),
    };

    info!("Loading system from {:?}", &args.input);
    let molecule = input::read_system(&args.input)?;

    let options = ReportOptions {
        terms: args.terms,
        gradient: args.gradient,
        allow_partial: args.allow_partial,
    };
    print!("{}", report(kind, config, &molecule, options)?);
    Ok(())
}

pub fn report(
    kind: ForceFieldKind,
    config: ForceFieldConfig,
    molecule: &Molecule,
    options: ReportOptions,
) -> Result<String> {
    let registry = ForceFieldRegistry::new(config)?;
    let mut force_field = registry.create_kind(kind);

    let mut out = String::new();
    if let Err(e) = force_field.setup(molecule) {
        let failures: Vec<String> = force_field
            .failed_calculations()
            .filter_map(|(_, calculation)| {
                calculation
                    .error()
                    .map(|error| format!("  {} {:?}: {}", calculation.kind(), calculation.atoms(), error))
            })
            .collect();

        if !options.allow_partial || force_field.calculation_count() == 0 {
            for line in &failures {
                eprintln!("{}", line);
            }
            return Err(CliError::Setup(e));
        }

        warn!("Reporting a partial energy: {}", e);
        let _ = writeln!(out, "warning: {}", e);
        for line in failures {
            let _ = writeln!(out, "{}", line);
        }
    }

    let coordinates = molecule.coordinates();
    let energy = force_field.energy(&coordinates);
    let _ = writeln!(out, "force field: {}", kind);
    let _ = writeln!(out, "calculations: {}", force_field.calculation_count());
    let _ = writeln!(out, "energy: {:.6} kcal/mol", energy);

    if options.terms {
        let terms = force_field.energy_terms(&coordinates);
        for calculation_kind in CalculationKind::ALL {
            let _ = writeln!(
                out,
                "  {:<14} {:>14.6}",
                calculation_kind.name(),
                terms.component(calculation_kind)
            );
        }
    }

    if options.gradient {
        let gradient = force_field.gradient(&coordinates);
        let _ = writeln!(out, "gradient (kcal/mol/A):");
        for (index, (atom, g)) in molecule.atoms().iter().zip(&gradient).enumerate() {
            let _ = writeln!(
                out,
                "{:>5}  {:<2} {:>12.6} {:>12.6} {:>12.6}",
                index,
                atom.element.symbol(),
                g.x,
                g.y,
                g.z
            );
        }
        let _ = writeln!(out, "rms gradient: {:.6}", force_field.rms_gradient(&coordinates));
    }

    Ok(out)
}
