pub mod eval;
pub mod expression;

pub use eval::{eval_checked, eval_f64, EvalError, MAX_EVAL_DEPTH};
pub use expression::{Constant, Expr, Function};
