mod cmd;
mod logging;

use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "pyreport",
    version,
    about = "Render calculation notebooks as Markdown reports"
)]
struct Cli {
    /// Path to the config file (default: $XDG_CONFIG_HOME/pyreport/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// More log output on stderr (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Less log output on stderr (-q warnings, -qq errors only)
    #[arg(short, long, global = true, action = ArgAction::Count, conflicts_with = "verbose")]
    quiet: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Build the Markdown report and variables document for a notebook
    Generate(GenerateArgs),

    /// Show the enriched variables of a notebook
    Inspect(InspectArgs),

    /// Print the LaTeX form of a piece of text
    Format(FormatArgs),

    /// Validate configuration and print resolved settings
    Doctor,
}

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Notebook file (.ipynb)
    #[arg(long)]
    pub notebook: PathBuf,

    /// Variable snapshot (JSON object, or capture output with markers)
    #[arg(long)]
    pub snapshot: PathBuf,

    /// Report path (default: <notebook stem><report_suffix> next to the notebook)
    #[arg(long, conflicts_with = "stdout")]
    pub output: Option<PathBuf>,

    /// Variables document path (default: <notebook stem><vars_suffix>)
    #[arg(long, conflicts_with = "no_vars_json")]
    pub vars_json: Option<PathBuf>,

    /// Do not write the variables document
    #[arg(long)]
    pub no_vars_json: bool,

    /// Print the report to stdout instead of writing files
    #[arg(long)]
    pub stdout: bool,
}

#[derive(Debug, Args)]
pub struct InspectArgs {
    /// Notebook file (.ipynb)
    #[arg(long)]
    pub notebook: PathBuf,

    /// Variable snapshot (JSON object, or capture output with markers)
    #[arg(long)]
    pub snapshot: PathBuf,

    /// Print the variables document instead of a table
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct FormatArgs {
    /// Expression or value text, e.g. "sigma_max = 12.0 [N/mm*mm]"
    pub text: String,
}

fn main() {
    let cli = Cli::parse();
    let config = cli.config.as_deref();
    let verbosity = i16::from(cli.verbose) - i16::from(cli.quiet);

    match cli.command {
        Commands::Generate(args) => cmd::generate::run(config, verbosity, &args),
        Commands::Inspect(args) => cmd::inspect::run(config, verbosity, &args),
        Commands::Format(args) => cmd::format::run(config, verbosity, &args.text),
        Commands::Doctor => cmd::doctor::run(config, verbosity),
    }
}
