//! verify subcommand handler.
//!
//! Checks a model answer against its own `Normalized Equation:` line and
//! prints the answer with a corrected `Final Answer:` line.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use mathcheck_solver::verify_math_answer;

use super::{read_stdin, OutputFormat};
use crate::config::MathcheckConfig;
use crate::json_types::{ErrorJsonOutput, VerifyJsonOutput};

/// Arguments for the verify subcommand
#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Original question, consulted for rounding instructions
    #[arg(long)]
    pub question: Option<String>,

    /// File holding the model answer ("-" or absent reads stdin)
    #[arg(long, value_name = "PATH")]
    pub answer_file: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Config file (default: ./mathcheck.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

pub fn run(args: VerifyArgs) -> Result<()> {
    let answer = read_answer(args.answer_file.as_deref())?;
    let config = MathcheckConfig::load(args.config.as_deref());

    let outcome = verify_math_answer(args.question.as_deref(), &answer, &config.verify);
    match args.format {
        OutputFormat::Text => match outcome {
            Ok(verification) => println!("{}", verification.augmented),
            Err(e) => {
                tracing::info!(error = %e, "answer left unchanged");
                print!("{}", answer);
            }
        },
        OutputFormat::Json => {
            let json = match outcome {
                Ok(verification) => {
                    serde_json::to_string_pretty(&VerifyJsonOutput::from(verification))?
                }
                Err(e) => serde_json::to_string_pretty(&ErrorJsonOutput::from(&e))?,
            };
            println!("{}", json);
        }
    }
    Ok(())
}

fn read_answer(path: Option<&std::path::Path>) -> Result<String> {
    match path {
        Some(path) if path.as_os_str() != "-" => fs::read_to_string(path)
            .with_context(|| format!("reading answer file {}", path.display())),
        _ => read_stdin().context("reading answer from stdin"),
    }
}
