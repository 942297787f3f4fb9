//! Equation extraction and the safe expression compiler.

pub mod compiler;
pub mod error;
pub mod extract;

pub use compiler::{build_equation_evaluator, compile_side, CompiledSide, EquationEvaluator};
pub use error::CompileError;
pub use extract::extract_equation;
