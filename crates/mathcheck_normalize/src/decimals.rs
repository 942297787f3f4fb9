//! Rounding instructions ("round to 2 decimal places", "nearest tenth").

use regex::Regex;
use std::sync::LazyLock;

/// Largest number of places a fixed-point rendering accepts.
pub const MAX_DECIMALS: usize = 100;

static RE_ROUND_TO: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"round(?:ed)?\s+to\s+(\d+)\s+decimal").expect("valid regex literal")
});

static RE_PHRASES: LazyLock<[(Regex, usize); 5]> = LazyLock::new(|| {
    let phrase = |p: &str| Regex::new(p).expect("valid regex literal");
    [
        (phrase(r"nearest\s+tenth|one\s+decimal|1\s+decimal"), 1),
        (phrase(r"nearest\s+hundredth|two\s+decimal|2\s+decimal"), 2),
        (phrase(r"nearest\s+thousandth|three\s+decimal|3\s+decimal"), 3),
        (phrase(r"four\s+decimal|4\s+decimal"), 4),
        (phrase(r"five\s+decimal|5\s+decimal"), 5),
    ]
});

/// Number of decimal places requested in `text`, if any.
///
/// An explicit "round(ed) to N decimal" wins over the named phrasings, which
/// are checked from one place up to five. Counts above [`MAX_DECIMALS`] are
/// ignored.
pub fn detect_decimal_preference(text: &str) -> Option<usize> {
    if text.is_empty() {
        return None;
    }
    let lower = text.to_lowercase();

    if let Some(caps) = RE_ROUND_TO.captures(&lower) {
        if let Ok(n) = caps[1].parse::<usize>() {
            if n <= MAX_DECIMALS {
                return Some(n);
            }
        }
    }

    RE_PHRASES
        .iter()
        .find(|(re, _)| re.is_match(&lower))
        .map(|(_, places)| *places)
}
