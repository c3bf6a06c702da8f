use clap::Parser;
use leafsort::core::utils::geometry::Axis;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    name = "leafsort",
    author,
    version,
    about = "leafsort - Assigns membrane lipids to the upper and lower leaflet and writes one index group per lipid type and leaflet.",
    help_template = HELP_TEMPLATE,
)]
pub struct Cli {
    // --- Input ---
    /// Path to the input structure file (gro, pdb, tpr or any other format groan_rs reads).
    #[arg(short = 'c', long, required = true, value_name = "PATH")]
    pub structure: PathBuf,

    /// Index file with named groups usable in selection queries [default: index.ndx].
    /// The run continues without named groups if the file cannot be read.
    #[arg(short = 'n', long, value_name = "PATH")]
    pub index: Option<PathBuf>,

    // --- Selections ---
    /// Selection of all membrane lipids [default: Membrane].
    #[arg(short = 's', long, value_name = "QUERY")]
    pub membrane: Option<String>,

    /// Selection of the head atoms, exactly one per lipid [default: "name PO4"].
    #[arg(short = 'p', long, value_name = "QUERY")]
    pub heads: Option<String>,

    /// Axis along which the membrane normal is oriented [default: z].
    #[arg(long, value_name = "AXIS")]
    pub normal: Option<Axis>,

    // --- Output ---
    /// Output index file. Groups are appended if the file exists.
    /// Groups are written to standard output if not given.
    #[arg(short = 'o', long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Also write groups that contain no atoms.
    #[arg(short = 'e', long)]
    pub empty: bool,

    // --- Configuration ---
    /// Path to a configuration file in TOML format.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S selection.heads="name P"
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE")]
    pub set_values: Vec<String>,

    // --- Logging ---
    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output and the progress display
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn only_structure_is_required() {
        let cli = Cli::try_parse_from(["leafsort", "-c", "system.gro"]).unwrap();
        assert_eq!(cli.structure, PathBuf::from("system.gro"));
        assert!(cli.index.is_none());
        assert!(cli.membrane.is_none());
        assert!(cli.heads.is_none());
        assert!(cli.normal.is_none());
        assert!(cli.output.is_none());
        assert!(!cli.empty);
        assert_eq!(cli.verbose, 0);

        assert!(Cli::try_parse_from(["leafsort"]).is_err());
    }

    #[test]
    fn all_options_are_parsed() {
        let cli = Cli::try_parse_from([
            "leafsort", "-c", "in.gro", "-n", "groups.ndx", "-s", "resname POPC", "-p",
            "name P", "-o", "out.ndx", "-e", "--normal", "X", "-S", "index=a.ndx", "-S",
            "output.emit-empty=true", "-vv",
        ])
        .unwrap();

        assert_eq!(cli.index, Some(PathBuf::from("groups.ndx")));
        assert_eq!(cli.membrane.as_deref(), Some("resname POPC"));
        assert_eq!(cli.heads.as_deref(), Some("name P"));
        assert_eq!(cli.output, Some(PathBuf::from("out.ndx")));
        assert!(cli.empty);
        assert_eq!(cli.normal, Some(Axis::X));
        assert_eq!(cli.set_values.len(), 2);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn invalid_axis_is_rejected() {
        assert!(Cli::try_parse_from(["leafsort", "-c", "in.gro", "--normal", "w"]).is_err());
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["leafsort", "-c", "in.gro", "-q", "-v"]).is_err());
    }
}
