use mathcheck_parser::CompileError;
use thiserror::Error;

/// Stage at which verification gave up.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum VerifyError {
    #[error("no equation found in the answer")]
    NoEquation,
    #[error("equation could not be compiled: {0}")]
    Compile(#[from] CompileError),
    #[error("no candidate verified and the scan found no root")]
    NoRoots,
}
