pub mod classify;
pub mod config;
pub mod format;
pub mod normalize;
pub mod verify;

use clap::ValueEnum;
use std::io::Read;

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub(crate) fn read_stdin() -> anyhow::Result<String> {
    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;
    Ok(input)
}
