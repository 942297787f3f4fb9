//! mathcheck - verify the numeric answers of model-written math solutions
//!
//! Subcommands:
//! - verify: check an answer against its `Normalized Equation:` line
//! - normalize: clean Unicode and LaTeX math notation
//! - format: render a number the calculator way
//! - classify: show the prompt a selection would get
//! - config: show or initialize mathcheck.toml

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod json_types;

use commands::{classify, config as config_cmd, format, normalize, verify};

#[derive(Parser)]
#[command(name = "mathcheck")]
#[command(about = "Verify and correct the final answers of model-written math solutions", long_about = None)]
#[command(version)]
struct Cli {
    /// Log pipeline stages to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Verify a model answer and rebuild its Final Answer line
    Verify(verify::VerifyArgs),

    /// Normalize math notation in text
    Normalize(normalize::NormalizeArgs),

    /// Format a number
    Format(format::FormatArgs),

    /// Classify selected text and show the prompt plan
    Classify(classify::ClassifyArgs),

    /// Show or initialize the config file
    Config(config_cmd::ConfigArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    match cli.command {
        Commands::Verify(args) => verify::run(args),
        Commands::Normalize(args) => normalize::run(args),
        Commands::Format(args) => format::run(args),
        Commands::Classify(args) => classify::run(args),
        Commands::Config(args) => config_cmd::run(args),
    }
}
