//! Numbers the model itself proposed as answers.

use regex::Regex;
use std::sync::LazyLock;

const NUMBER: &str = r"-?[0-9]+(?:\.[0-9]+)?(?:[eE][+\-]?[0-9]+)?";

static RE_ASSIGNMENTS: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    let assignment =
        |name: &str| Regex::new(&format!(r"(?i){}\s*=\s*({})", name, NUMBER)).expect("valid regex literal");
    [assignment("x"), assignment("x1"), assignment("x2")]
});
static RE_FINAL_ANSWER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Final Answer[^\n]*:([^\n]+)").expect("valid regex literal"));
static RE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(NUMBER).expect("valid regex literal"));

/// Candidate roots found in `text`, distinct and in first-seen order.
///
/// Assignments `x = N`, `x1 = N` and `x2 = N` are collected first, then every
/// number on the first `Final Answer ...:` line.
pub fn extract_candidates(text: &str) -> Vec<f64> {
    let mut out: Vec<f64> = Vec::new();
    let mut add = |literal: &str| {
        if let Ok(value) = literal.parse::<f64>() {
            if !out.contains(&value) {
                out.push(value);
            }
        }
    };

    for re in RE_ASSIGNMENTS.iter() {
        for caps in re.captures_iter(text) {
            add(&caps[1]);
        }
    }

    if let Some(caps) = RE_FINAL_ANSWER.captures(text) {
        for m in RE_NUMBER.find_iter(&caps[1]) {
            add(m.as_str());
        }
    }

    out
}
