//! JSON output types for `--format json`.

use mathcheck_solver::{Root, Verification, VerifyError};
use serde::Serialize;

/// A verified answer
#[derive(Serialize, Debug)]
pub struct VerifyJsonOutput {
    pub ok: bool,
    pub augmented: String,
    pub equation: String,
    /// Ascending, one entry per distinct rendering
    pub roots: Vec<Root>,
    /// True when the roots came from the recovery scan
    pub recovered: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decimals: Option<usize>,
}

impl From<Verification> for VerifyJsonOutput {
    fn from(verification: Verification) -> Self {
        Self {
            ok: true,
            augmented: verification.augmented,
            equation: verification.equation,
            roots: verification.roots,
            recovered: verification.recovered,
            decimals: verification.decimals,
        }
    }
}

/// An error result
#[derive(Serialize, Debug)]
pub struct ErrorJsonOutput {
    pub ok: bool,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stage: Option<&'static str>,
}

impl From<&VerifyError> for ErrorJsonOutput {
    fn from(error: &VerifyError) -> Self {
        let stage = match error {
            VerifyError::NoEquation => "no-equation",
            VerifyError::Compile(_) => "compile",
            VerifyError::NoRoots => "no-roots",
        };
        Self {
            ok: false,
            error: error.to_string(),
            stage: Some(stage),
        }
    }
}
