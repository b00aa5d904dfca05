use crate::cli::TypesArgs;
use crate::error::Result;
use crate::input;
use ffkit::core::models::molecule::Molecule;
use ffkit::core::topology::Topology;
use ffkit::engine::registry::ForceFieldKind;
use std::fmt::Write;
use tracing::{info, warn};

pub fn run(args: TypesArgs) -> Result<()> {
    let kind: ForceFieldKind = args.forcefield.parse()?;
    info!("Loading system from {:?}", &args.input);
    let molecule = input::read_system(&args.input)?;
    print!("{}", report(kind, &molecule));
    Ok(())
}

/// One line per atom: index, element and assigned type, `?` for untyped atoms.
pub fn report(kind: ForceFieldKind, molecule: &Molecule) -> String {
    let topology = Topology::new(molecule);
    let types = kind.typer().assign_types(&topology);

    let mut out = String::new();
    let _ = writeln!(out, "{:>5}  {:<2}  {}", "atom", "el", kind);
    for (index, (atom, atom_type)) in molecule.atoms().iter().zip(&types).enumerate() {
        let label = match atom_type {
            Some(t) => t.as_str(),
            None => {
                warn!(atom = index, element = %atom.element, "No {} type matches this atom.", kind);
                "?"
            }
        };
        let _ = writeln!(out, "{:>5}  {:<2}  {}", index, atom.element.symbol(), label);
    }
    out
}
