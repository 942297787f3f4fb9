use anyhow::{Context, Result};
use clap::Args;
use mathcheck_formatter::format_number;

/// Arguments for the format subcommand
#[derive(Args, Debug)]
pub struct FormatArgs {
    /// Number to render
    #[arg(allow_negative_numbers = true)]
    pub value: String,

    /// Fixed number of decimal places
    #[arg(long)]
    pub decimals: Option<usize>,
}

pub fn run(args: FormatArgs) -> Result<()> {
    let value: f64 = args
        .value
        .trim()
        .parse()
        .with_context(|| format!("not a number: {}", args.value))?;
    println!("{}", format_number(value, args.decimals));
    Ok(())
}
