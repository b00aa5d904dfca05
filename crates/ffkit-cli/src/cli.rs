use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "Tony Kan, Ted Yu, William A. Goddard III, Victor Wai Tak Kam",
    version,
    about = "ffkit - Evaluate AMBER, OPLS-AA and UFF force-field energies and gradients of small molecules.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads used to parameterize calculations.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the registered force fields.
    List,
    /// Print the atom type assigned to every atom of a system.
    Types(TypesArgs),
    /// Set up a force field for a system and print its energy.
    Energy(EnergyArgs),
}

/// Arguments for the `types` subcommand.
#[derive(Args, Debug)]
pub struct TypesArgs {
    /// Force field to type the system with (amber, opls, uff).
    #[arg(short, long, required = true, value_name = "NAME")]
    pub forcefield: String,

    /// Path to the system description in TOML format.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,
}

/// Arguments for the `energy` subcommand.
#[derive(Args, Debug)]
pub struct EnergyArgs {
    /// Force field to evaluate (amber, opls, uff).
    #[arg(short, long, required = true, value_name = "NAME")]
    pub forcefield: String,

    /// Path to the system description in TOML format.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Path to a force-field configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the per-atom analytic gradient and the RMS gradient.
    #[arg(long)]
    pub gradient: bool,

    /// Print the energy broken down by interaction kind.
    #[arg(long)]
    pub terms: bool,

    /// Report energies even if some calculations could not be parameterized.
    #[arg(long)]
    pub allow_partial: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn energy_arguments_parse() {
        let cli = Cli::parse_from([
            "ffkit", "-vv", "energy", "-f", "uff", "-i", "water.toml", "--terms", "--gradient",
        ]);
        assert_eq!(cli.verbose, 2);
        let Commands::Energy(args) = cli.command else {
            panic!("expected the energy command");
        };
        assert_eq!(args.forcefield, "uff");
        assert_eq!(args.input, PathBuf::from("water.toml"));
        assert!(args.terms && args.gradient);
        assert!(!args.allow_partial);
        assert!(args.config.is_none());
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        let result = Cli::try_parse_from(["ffkit", "-q", "-v", "list"]);
        assert!(result.is_err());
    }
}
