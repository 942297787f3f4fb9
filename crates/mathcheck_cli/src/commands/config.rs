use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use crate::config::{MathcheckConfig, DEFAULT_CONFIG_PATH};

/// Arguments for the config subcommand
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Config file (default: ./mathcheck.toml)
    #[arg(long, value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Write the default settings to the config file
    #[arg(long)]
    pub init: bool,
}

/// Print the effective settings, or write the defaults with `--init`.
pub fn run(args: ConfigArgs) -> Result<()> {
    let path = args
        .path
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
    if args.init {
        MathcheckConfig::default()
            .save(&path)
            .with_context(|| format!("writing {}", path.display()))?;
        println!("Wrote {}", path.display());
        return Ok(());
    }
    let config = MathcheckConfig::load(Some(&path));
    print!("{}", toml::to_string_pretty(&config)?);
    Ok(())
}
