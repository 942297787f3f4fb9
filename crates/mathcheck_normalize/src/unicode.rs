// =============================================================================
// Unicode Math Helpers
// =============================================================================

use regex::{Captures, Regex};
use std::sync::LazyLock;

/// ASCII spelling of a Unicode math symbol, if it has one.
pub fn ascii_for_symbol(c: char) -> Option<&'static str> {
    let ascii = match c {
        '×' | '∙' | '•' => "*",
        '÷' => "/",
        '√' => "sqrt",
        'π' => "pi",
        '−' | '–' | '—' | '‒' => "-",
        '“' | '”' | '″' => "\"",
        '‘' | '’' | '′' => "'",
        '≤' => "<=",
        '≥' => ">=",
        '≠' => "!=",
        '±' => "+/-",
        '∓' => "-/+",
        '∪' => "U",
        '∩' => "n",
        '∞' => "infinity",
        _ => return None,
    };
    Some(ascii)
}

/// Replace every symbol known to [`ascii_for_symbol`]; other characters are kept.
pub fn replace_symbols(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match ascii_for_symbol(c) {
            Some(ascii) => out.push_str(ascii),
            None => out.push(c),
        }
    }
    out
}

/// Convert a superscript character to its ASCII counterpart.
/// Returns None if the character is not a superscript digit or sign.
pub fn superscript_to_ascii(c: char) -> Option<char> {
    match c {
        '⁰' => Some('0'),
        '¹' => Some('1'),
        '²' => Some('2'),
        '³' => Some('3'),
        '⁴' => Some('4'),
        '⁵' => Some('5'),
        '⁶' => Some('6'),
        '⁷' => Some('7'),
        '⁸' => Some('8'),
        '⁹' => Some('9'),
        '⁺' => Some('+'),
        '⁻' => Some('-'),
        _ => None,
    }
}

static RE_SUPERSCRIPT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([A-Za-z0-9)\]])([⁰¹²³⁴⁵⁶⁷⁸⁹⁺⁻]+)").expect("valid regex literal")
});

/// Rewrite superscripts attached to a base: `x²` → `x^2`, `x¹⁰` → `x^(10)`.
pub fn replace_superscripts(text: &str) -> String {
    RE_SUPERSCRIPT
        .replace_all(text, |caps: &Captures| {
            let exponent: String = caps[2].chars().filter_map(superscript_to_ascii).collect();
            if exponent.chars().count() == 1 {
                format!("{}^{}", &caps[1], exponent)
            } else {
                format!("{}^({})", &caps[1], exponent)
            }
        })
        .into_owned()
}
