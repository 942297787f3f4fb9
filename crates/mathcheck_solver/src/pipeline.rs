//! End-to-end verification of a model answer.

use crate::candidates::extract_candidates;
use crate::error::VerifyError;
use crate::options::VerifyOptions;
use crate::reassemble::{reassemble, Root};
use crate::scan::scan_for_roots;
use crate::verify::verify_candidates;
use mathcheck_formatter::format_number;
use mathcheck_normalize::{detect_decimal_preference, normalize};
use mathcheck_parser::{build_equation_evaluator, extract_equation};
use serde::Serialize;
use tracing::debug;

/// Everything learned while verifying one answer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Verification {
    /// Model text after normalization
    pub normalized: String,
    pub equation: String,
    pub candidates: Vec<f64>,
    /// Ascending, one entry per distinct rendering
    pub roots: Vec<Root>,
    /// True when no candidate verified and the roots come from the scan
    pub recovered: bool,
    pub decimals: Option<usize>,
    /// Normalized text with the rebuilt `Final Answer:` line on top
    pub augmented: String,
}

/// Verify `model_text` against its own equation.
///
/// `user_text` is the original question; it is only consulted for rounding
/// instructions.
pub fn verify_math_answer(
    user_text: Option<&str>,
    model_text: &str,
    options: &VerifyOptions,
) -> Result<Verification, VerifyError> {
    let normalized = normalize(model_text);
    let decimals =
        detect_decimal_preference(&format!("{}\n{}", user_text.unwrap_or(""), normalized));

    let equation = extract_equation(&normalized).ok_or(VerifyError::NoEquation)?;
    debug!(%equation, ?decimals, "extracted equation");
    let evaluator = build_equation_evaluator(&equation)?;
    let f = |x: f64| evaluator.eval(x);

    let candidates = extract_candidates(&normalized);
    let mut values = verify_candidates(f, &candidates, options.tolerance);
    debug!(
        candidates = candidates.len(),
        verified = values.len(),
        "checked candidates"
    );

    let recovered = values.is_empty();
    if recovered {
        values = scan_for_roots(f, &candidates, &options.scan);
        debug!(found = values.len(), "recovery scan finished");
    }
    if values.is_empty() {
        return Err(VerifyError::NoRoots);
    }

    let roots = format_roots(values, decimals);
    let augmented = reassemble(&normalized, &roots);

    Ok(Verification {
        normalized,
        equation,
        candidates,
        roots,
        recovered,
        decimals,
        augmented,
    })
}

/// Sort, drop equal values, render, and drop repeated renderings.
fn format_roots(mut values: Vec<f64>, decimals: Option<usize>) -> Vec<Root> {
    values.sort_by(f64::total_cmp);
    values.dedup_by(|a, b| a == b);

    let mut roots: Vec<Root> = Vec::with_capacity(values.len());
    for value in values {
        let formatted = format_number(value, decimals);
        if roots.iter().any(|r| r.formatted == formatted) {
            continue;
        }
        roots.push(Root { value, formatted });
    }
    roots
}

/// The answer with a verified `Final Answer:` line, or `None` when it cannot
/// be verified. Never panics; every failure is `None`.
pub fn verify_and_augment_math_answer(user_text: Option<&str>, model_text: &str) -> Option<String> {
    match verify_math_answer(user_text, model_text, &VerifyOptions::default()) {
        Ok(verification) => Some(verification.augmented),
        Err(err) => {
            debug!(%err, "answer left unverified");
            None
        }
    }
}
