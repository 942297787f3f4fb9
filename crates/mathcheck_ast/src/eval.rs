//! Numeric evaluation of expressions using f64 values.
//!
//! The checked evaluator reports why a sample failed; [`eval_f64`] collapses
//! every failure to `NaN` so callers can treat evaluation as a total function.

use crate::expression::{Expr, Function};
use thiserror::Error;

/// Recursion limit for evaluation. Parsed trees are rejected well below this.
pub const MAX_EVAL_DEPTH: usize = 512;

/// Why a checked evaluation failed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    /// Division by exactly zero
    #[error("division by zero")]
    DivisionByZero,
    /// Real-domain violation (sqrt of a negative, fractional power of a negative)
    #[error("{function} undefined at {arg}")]
    Domain { function: &'static str, arg: f64 },
    /// Result is not finite (NaN or Inf)
    #[error("non-finite result")]
    NonFinite,
    /// Depth limit exceeded
    #[error("expression nested deeper than {MAX_EVAL_DEPTH}")]
    DepthExceeded,
}

/// Evaluate `expr` at `x`, reporting the first failure encountered.
pub fn eval_checked(expr: &Expr, x: f64) -> Result<f64, EvalError> {
    eval_checked_depth(expr, x, MAX_EVAL_DEPTH)
}

/// Evaluate `expr` at `x`; any failure yields `NaN`.
pub fn eval_f64(expr: &Expr, x: f64) -> f64 {
    eval_checked(expr, x).unwrap_or(f64::NAN)
}

fn eval_checked_depth(expr: &Expr, x: f64, depth: usize) -> Result<f64, EvalError> {
    if depth == 0 {
        return Err(EvalError::DepthExceeded);
    }
    let next = depth - 1;

    let result = match expr {
        Expr::Number(n) => *n,
        Expr::Var => x,
        Expr::Constant(c) => c.value(),
        Expr::Add(..) | Expr::Sub(..) | Expr::Mul(..) | Expr::Div(..) => eval_chain(expr, x, next)?,
        Expr::Pow(b, e) => {
            let base = eval_checked_depth(b, x, next)?;
            let exp = eval_checked_depth(e, x, next)?;
            // base < 0 with a non-integer exponent has no real value
            if base < 0.0 && exp.fract() != 0.0 {
                return Err(EvalError::Domain {
                    function: "pow",
                    arg: base,
                });
            }
            base.powf(exp)
        }
        Expr::Neg(e) => -eval_checked_depth(e, x, next)?,
        Expr::Function(func, arg) => {
            let v = eval_checked_depth(arg, x, next)?;
            match func {
                Function::Sqrt => {
                    if v < 0.0 {
                        return Err(EvalError::Domain {
                            function: "sqrt",
                            arg: v,
                        });
                    }
                    v.sqrt()
                }
                Function::Abs => v.abs(),
            }
        }
    };

    if !result.is_finite() {
        return Err(EvalError::NonFinite);
    }
    Ok(result)
}

/// Evaluate a `+ - * /` chain along its left spine iteratively, so long flat
/// sums and products do not consume recursion depth.
fn eval_chain(expr: &Expr, x: f64, depth: usize) -> Result<f64, EvalError> {
    let mut spine: Vec<(&Expr, &Expr)> = Vec::new();
    let mut node = expr;
    while let Some((l, r)) = node.arithmetic_operands() {
        spine.push((node, r));
        node = l;
    }

    let mut acc = eval_checked_depth(node, x, depth)?;
    for (op, rhs) in spine.into_iter().rev() {
        let b = eval_checked_depth(rhs, x, depth)?;
        acc = match op {
            Expr::Add(..) => acc + b,
            Expr::Sub(..) => acc - b,
            Expr::Mul(..) => acc * b,
            _ => {
                if b == 0.0 {
                    return Err(EvalError::DivisionByZero);
                }
                acc / b
            }
        };
    }
    Ok(acc)
}
