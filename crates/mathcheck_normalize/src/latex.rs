//! LaTeX fragments commonly emitted by chat models, rewritten to ASCII.

use regex::Regex;
use std::sync::LazyLock;

// Compiled once, reused across all calls
static RE_DISPLAY_MATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\$\$(.*?)\$\$").expect("valid regex literal"));
static RE_INLINE_MATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$([^$]+)\$").expect("valid regex literal"));
static RE_BRACKET_DELIMITERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\\[|\\\]|\\\(|\\\)").expect("valid regex literal"));

static RE_FRAC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\\frac\s*\{([^{}]+)\}\s*\{([^{}]+)\}").expect("valid regex literal")
});
static RE_SQRT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\sqrt\s*\{([^{}]+)\}").expect("valid regex literal"));

static RE_SIZED_DELIMITER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\\(?:left|right)\s*([()\[\]|])").expect("valid regex literal")
});
static RE_EMPTY_DELIMITER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\(?:left|right)\.").expect("valid regex literal"));

static RE_OPERATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\(cdot|times|div)").expect("valid regex literal"));
static RE_COMMANDS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\\(pi|pm|mp|leq?|geq?|neq?|infty)\b").expect("valid regex literal")
});

/// Remove `$$…$$`, `$…$`, `\[ \]` and `\( \)` wrappers, keeping their content.
///
/// Repeats until no wrapper is left; every round removes delimiter characters,
/// so it terminates.
pub fn strip_math_delimiters(text: &str) -> String {
    let mut result = text.to_string();
    loop {
        let s = RE_DISPLAY_MATH.replace_all(&result, "${1}");
        let s = RE_INLINE_MATH.replace_all(&s, "${1}");
        let s = RE_BRACKET_DELIMITERS.replace_all(&s, "").into_owned();
        if s == result {
            return result;
        }
        result = s;
    }
}

/// Rewrite `\frac`, `\sqrt`, sized delimiters and operator commands.
///
/// Fractions and radicals are rewritten innermost-first until nothing changes,
/// so `\frac{\sqrt{2}}{2}` becomes `(sqrt(2))/(2)`.
pub fn rewrite_commands(text: &str) -> String {
    let mut result = text.to_string();
    let mut changed = true;

    // Iterate until no more changes (handles nested patterns)
    while changed {
        let before = result.clone();
        result = RE_FRAC.replace_all(&result, "(${1})/(${2})").into_owned();
        result = RE_SQRT.replace_all(&result, "sqrt(${1})").into_owned();
        changed = before != result;
    }

    let result = RE_SIZED_DELIMITER.replace_all(&result, "${1}");
    let result = RE_EMPTY_DELIMITER.replace_all(&result, "");
    let result = RE_OPERATORS.replace_all(&result, |caps: &regex::Captures| {
        let op = if &caps[1] == "div" { "/" } else { "*" };
        op.to_string()
    });
    RE_COMMANDS
        .replace_all(&result, |caps: &regex::Captures| {
            match &caps[1] {
                "pi" => "pi",
                "pm" => "+/-",
                "mp" => "-/+",
                "le" | "leq" => "<=",
                "ge" | "geq" => ">=",
                "ne" | "neq" => "!=",
                _ => "infinity",
            }
            .to_string()
        })
        .into_owned()
}
