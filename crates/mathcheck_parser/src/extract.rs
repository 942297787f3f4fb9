//! Locating the equation inside a model answer.

use regex::Regex;
use std::sync::LazyLock;

// Markdown emphasis around the label is tolerated: **Normalized Equation:**
static RE_LABELLED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)Normalized Equation[*_]*:[*_]*\s*([^\n]+)").expect("valid regex literal")
});
static RE_SQRT_CALL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)sqrt\s*\(").expect("valid regex literal"));
static RE_QUOTES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[`'\"\u{201C}\u{201D}]").expect("valid regex literal"));
static RE_TRAILING_PUNCT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.;:,]+$").expect("valid regex literal"));
static RE_PLAIN_MATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9xX+\-*/^().\s=]*$").expect("valid regex literal"));

/// Find the single-line equation to verify.
///
/// A `Normalized Equation:` line wins. Otherwise the first line with an `=`
/// that opens with plain ASCII math up to a `sqrt(` call is used. `None` means the answer cannot
/// be verified.
pub fn extract_equation(text: &str) -> Option<String> {
    if text.is_empty() {
        return None;
    }

    if let Some(caps) = RE_LABELLED.captures(text) {
        let equation = caps[1].trim_matches(|c: char| c.is_whitespace() || c == '*' || c == '`');
        if !equation.is_empty() {
            return Some(equation.to_string());
        }
    }

    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .find_map(equation_from_line)
}

fn equation_from_line(line: &str) -> Option<String> {
    if !line.contains('=') {
        return None;
    }
    if !RE_SQRT_CALL.is_match(line) && !line.contains('x') {
        return None;
    }

    let candidate = RE_QUOTES.replace_all(line, "");
    let candidate = RE_TRAILING_PUNCT.replace(&candidate, "");

    // A radical is required, preceded only by plain math
    let sqrt_call = RE_SQRT_CALL.find(&candidate)?;
    if !RE_PLAIN_MATH.is_match(&candidate[..sqrt_call.start()]) {
        return None;
    }

    Some(candidate.replace('X', "x"))
}
