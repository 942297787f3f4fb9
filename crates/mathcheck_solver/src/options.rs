//! Tunable constants of the verification pipeline.

use serde::{Deserialize, Serialize};

/// Bracketed bisection limits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BisectionOptions {
    /// Stop once `|f(mid)|` drops below this
    pub tolerance: f64,
    pub max_iterations: usize,
}

impl Default for BisectionOptions {
    fn default() -> Self {
        Self {
            tolerance: 1e-7,
            max_iterations: 30,
        }
    }
}

/// Sampling grid for the recovery scan.
///
/// Without candidates the whole `[min, max]` interval is walked in `steps`
/// steps. With candidates the interval shrinks to `margin` around them and
/// `narrow_steps` are used.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanOptions {
    pub min: f64,
    pub max: f64,
    pub steps: usize,
    pub narrow_steps: usize,
    pub margin: f64,
    pub bisection: BisectionOptions,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            min: -200.0,
            max: 200.0,
            steps: 400,
            narrow_steps: 200,
            margin: 50.0,
            bisection: BisectionOptions::default(),
        }
    }
}

/// Options for [`verify_math_answer`](crate::verify_math_answer).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VerifyOptions {
    /// A candidate is a root when `|f(x)|` is below this
    pub tolerance: f64,
    pub scan: ScanOptions,
}

impl Default for VerifyOptions {
    fn default() -> Self {
        Self {
            tolerance: 1e-4,
            scan: ScanOptions::default(),
        }
    }
}
