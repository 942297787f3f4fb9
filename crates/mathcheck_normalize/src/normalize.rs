//! The normalization pipeline.
//!
//! One pass runs every rewrite stage in order. Stages that handle nesting
//! (math delimiters, `\frac`/`\sqrt`, abs bars, bare radicals) settle it
//! themselves. A later stage can still expose a little work for an earlier one
//! (wrapping a bare radicand creates a `sqrt(` with loose spacing), so
//! [`normalize`] repeats the pass until the text stops changing.

use crate::latex::{rewrite_commands, strip_math_delimiters};
use crate::unicode::{replace_superscripts, replace_symbols};
use regex::{Captures, Regex};
use std::sync::LazyLock;

static RE_ABS_BARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\|([^|\n]+)\|").expect("valid regex literal"));
static RE_SQRT_PARENS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"sqrt\s*\(([^)]+)\)").expect("valid regex literal"));

// `**` between operands; the spaced form only between plain numeric operands so
// markdown bold (`**Problem**`) survives
static RE_POWER_TIGHT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9A-Za-z)\]])\*\*(-?[0-9A-Za-z(])").expect("valid regex literal")
});
static RE_POWER_SPACED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9x)\]])[^\S\r\n]*\*\*[^\S\r\n]*(-?[0-9x(])").expect("valid regex literal")
});

static RE_SCIENTIFIC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(-?[0-9]+(?:\.[0-9]+)?)e([+-]?[0-9]+)").expect("valid regex literal")
});

static RE_HORIZONTAL_SPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\S\r\n]+").expect("valid regex literal"));

/// Nesting is resolved inside the stages, so the pass loop only sees a bounded
/// amount of cross-stage work.
const MAX_PASSES: usize = 16;

/// Rewrite LaTeX, Unicode math and loose notation into the ASCII dialect
/// understood by the equation compiler. Prose is preserved.
///
/// `normalize(&normalize(t)) == normalize(t)` for every input.
pub fn normalize(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let mut current = normalize_pass(text);
    for _ in 1..MAX_PASSES {
        let next = normalize_pass(&current);
        if next == current {
            break;
        }
        current = next;
    }
    current
}

fn normalize_pass(text: &str) -> String {
    let s = strip_math_delimiters(text);
    let s = rewrite_commands(&s);
    let s = replace_symbols(&s);
    let s = rewrite_abs_bars(&s);
    let s = tidy_sqrt_parens(&s);
    let s = wrap_bare_radicands(&s);
    let s = replace_superscripts(&s);
    let s = replace_double_star_powers(&s);
    let s = normalize_scientific(&s);
    collapse_whitespace(&s)
}

/// `|x - 3|` → `abs(x - 3)`, innermost bars first until none pair up.
fn rewrite_abs_bars(text: &str) -> String {
    let mut result = text.to_string();
    loop {
        let next = RE_ABS_BARS.replace_all(&result, "abs(${1})").into_owned();
        if next == result {
            return result;
        }
        result = next;
    }
}

/// `sqrt ( x + 1 )` → `sqrt(x + 1)`
fn tidy_sqrt_parens(text: &str) -> String {
    RE_SQRT_PARENS
        .replace_all(text, |caps: &Captures| format!("sqrt({})", caps[1].trim()))
        .into_owned()
}

/// Parenthesize radicands written without parentheses: `sqrt 2` → `sqrt(2)`,
/// `sqrtx` → `sqrt(x)`, `sqrtabs(x)` → `sqrt(abs(x))`.
///
/// Occurrences are processed right to left so nested bare radicals
/// (`sqrtsqrtx`) wrap from the inside out.
fn wrap_bare_radicands(text: &str) -> String {
    let mut s = text.to_string();
    let mut search_end = s.len();

    while let Some(pos) = s[..search_end].rfind("sqrt") {
        let arg_start = pos + "sqrt".len();
        if let Some((len, wrapped)) = bare_radicand(&s[arg_start..]) {
            s.replace_range(arg_start..arg_start + len, &wrapped);
        }
        search_end = pos;
    }
    s
}

/// Returns the byte length consumed after `sqrt` and its parenthesized form.
fn bare_radicand(after: &str) -> Option<(usize, String)> {
    let arg = after.trim_start_matches(|c: char| c.is_whitespace() && c != '\n' && c != '\r');
    let skipped = after.len() - arg.len();

    let run_len = arg
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '.'))
        .unwrap_or(arg.len());
    if run_len == 0 {
        return None;
    }

    let (run, tail) = arg.split_at(run_len);
    // A function call such as `abs(x)` becomes the whole radicand
    if tail.starts_with('(') {
        if let Some(close) = matching_paren(tail) {
            let call = &tail[..=close];
            return Some((skipped + run_len + call.len(), format!("({}{})", run, call)));
        }
    }
    Some((skipped + run_len, format!("({})", run)))
}

/// Index of the `)` closing the `(` at the start of `s`.
fn matching_paren(s: &str) -> Option<usize> {
    let mut depth = 0usize;
    for (i, c) in s.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

fn replace_double_star_powers(text: &str) -> String {
    let s = RE_POWER_TIGHT.replace_all(text, "${1}^${2}");
    RE_POWER_SPACED.replace_all(&s, "${1}^${2}").into_owned()
}

/// `1.50e+3` → `1.5E3`
fn normalize_scientific(text: &str) -> String {
    RE_SCIENTIFIC
        .replace_all(text, |caps: &Captures| {
            let mantissa = trim_mantissa(&caps[1]);
            let exponent = caps[2].strip_prefix('+').unwrap_or(&caps[2]);
            format!("{}E{}", mantissa, exponent)
        })
        .into_owned()
}

fn trim_mantissa(mantissa: &str) -> &str {
    if !mantissa.contains('.') {
        return mantissa;
    }
    let stripped = mantissa.trim_end_matches('0').trim_end_matches('.');
    if stripped.is_empty() {
        "0"
    } else {
        stripped
    }
}

/// Collapse horizontal whitespace, drop spaces before line breaks, trim.
fn collapse_whitespace(text: &str) -> String {
    let s = RE_HORIZONTAL_SPACE.replace_all(text, " ");
    s.replace(" \n", "\n").trim().to_string()
}
