use anyhow::{Context, Result};
use clap::Args;

use super::read_stdin;

/// Arguments for the normalize subcommand
#[derive(Args, Debug)]
pub struct NormalizeArgs {
    /// Text to normalize (stdin when absent)
    pub text: Option<String>,
}

pub fn run(args: NormalizeArgs) -> Result<()> {
    let text = match args.text {
        Some(text) => text,
        None => read_stdin().context("reading text from stdin")?,
    };
    println!("{}", mathcheck_normalize::normalize(&text));
    Ok(())
}
