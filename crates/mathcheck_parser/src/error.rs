use thiserror::Error;

/// Why an equation side could not be compiled.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    #[error("empty expression")]
    EmptySide,
    #[error("expected exactly one '=', found {parts} parts")]
    NotAnEquation { parts: usize },
    #[error("parse error: {0}")]
    Syntax(String),
    #[error("unconsumed input: {0}")]
    UnconsumedInput(String),
    #[error("expression nested too deeply ({depth})")]
    TooDeep { depth: usize },
    #[error("expression too long ({len} bytes)")]
    TooLong { len: usize },
}
