//! Text heuristics used to pick a prompt for a selection.
//!
//! They are deliberately shallow pattern checks; false positives are expected
//! (any `-` or `=` counts as math).

use regex::Regex;
use std::sync::LazyLock;

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|p| Regex::new(p).expect("valid regex literal"))
        .collect()
}

static MATH_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"[=+\-*/^]",
        r"\d+\s*[+\-*/^]\s*\d+",
        r"\b(solve|calculate|find|compute|evaluate|simplify|factor|expand|derivative|integral|limit|equation|formula|theorem|proof)\b",
        r"[√π∑∏∫∂∇∞±≤≥≠≈]",
        r"\b\d+\b.*\b(plus|minus|times|divided|square|cube|root|percent|fraction|ratio)\b",
        r"\b[a-zA-Z]\s*[+\-*/=]\s*\d+|\d+\s*[+\-*/=]\s*[a-zA-Z]",
        r"\b(area|perimeter|volume|circumference|radius|diameter|triangle|circle|square|rectangle|angle|degrees)\b",
        r"\b(derivative|integral|limit|function|graph|slope|tangent|critical point)\b",
        r"\b(mean|median|mode|standard deviation|variance|probability|distribution)\b",
    ])
});

static CODE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"(?s)```.*```",
        r"#include\s+<[^>]+>",
        r"\b(function|const|let|var|console\.log|=>|class|import|export|async|await)\b",
        r"\b(def|lambda|print\(|self|None)\b",
        r"\bpublic\s+class\b",
        r"\bSystem\.out\.println\b",
        r"(?is)\bBEGIN\b.*\bEND\b",
        r"</?[a-z][^>]*>",
    ])
});

static FILL_IN_BLANK_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"\{?_{2,}\}?",
        r"\b_{2,}\b",
        r":\s*\?$",
        r"(?i)\bfill\s*in\s*the\s*blank\b",
        r"[_–—-]{3,}\s*\?$",
    ])
});

static RE_TRAILING_QUESTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\?\s*$").expect("valid regex literal"));
static RE_FENCE_LANGUAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"```(\w+)").expect("valid regex literal"));

// Checked in order after a fenced-block language tag
static LANGUAGE_PATTERNS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        (r"\bconsole\.log\b|\bexport\b", "JavaScript"),
        (r"\bdef\b|\blambda\b", "Python"),
        (r"#include\s+<[^>]+>", "C/C++"),
        (r"\bpublic\s+class\b|\bSystem\.out\.println\b", "Java"),
        (r"</?[a-z][^>]*>", "HTML"),
        (r"(?is)\bSELECT\b.+\bFROM\b", "SQL"),
        (r"\bfunction\s+\w+\s*\(", "JavaScript"),
        (r"\bpackage\b.+;", "Java"),
        (r"\busing\s+System\b", "C#"),
        (r"\bfunc\b.+\{", "Go"),
        (r"\b<?php\b", "PHP"),
    ]
    .into_iter()
    .map(|(p, language)| (Regex::new(p).expect("valid regex literal"), language))
    .collect()
});

const IMPERATIVE_VERBS: &[&str] = &[
    "answer", "calculate", "compute", "summarize", "solve", "find", "list", "graph", "plot",
    "chart", "translate", "explain", "draft", "write", "build", "create", "plan", "outline",
    "analyze", "estimate", "evaluate", "select", "choose", "determine",
];

const INTERROGATIVES: &[&str] = &[
    "how", "what", "why", "when", "where", "which", "who", "whom", "whose", "can", "could",
    "would", "should", "is", "are", "am", "will", "may", "might", "do", "does", "did",
];

/// Questions starting with an interrogative must be at most this long.
const MAX_QUESTION_CHARS: usize = 200;

/// Fallback label from [`guess_code_language`].
pub const UNKNOWN_LANGUAGE: &str = "Unknown Language";

/// Equations, math keywords, math symbols, or word problems.
pub fn is_math_problem(text: &str) -> bool {
    let normalized = text.trim().to_lowercase();
    MATH_PATTERNS.iter().any(|re| re.is_match(&normalized))
}

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

pub fn ends_with_question_mark(text: &str) -> bool {
    RE_TRAILING_QUESTION.is_match(text.trim())
}

/// Starts with an imperative verb, optionally after "please".
pub fn is_likely_command(text: &str) -> bool {
    let lower = text.trim().to_lowercase();
    IMPERATIVE_VERBS.iter().any(|verb| {
        lower.starts_with(verb)
            || lower
                .strip_prefix("please ")
                .is_some_and(|rest| rest.starts_with(verb))
    })
}

/// Ends with `?`, or is short and opens with an interrogative word.
pub fn is_likely_question(text: &str) -> bool {
    let trimmed = text.trim();
    if ends_with_question_mark(trimmed) {
        return true;
    }
    let lower = trimmed.to_lowercase();
    trimmed.chars().count() <= MAX_QUESTION_CHARS
        && INTERROGATIVES.iter().any(|word| {
            lower
                .strip_prefix(word)
                .is_some_and(|rest| rest.starts_with(' '))
        })
}

pub fn is_likely_code(text: &str) -> bool {
    CODE_PATTERNS.iter().any(|re| re.is_match(text))
}

/// Best guess at the language of a code selection.
pub fn guess_code_language(text: &str) -> String {
    if let Some(caps) = RE_FENCE_LANGUAGE.captures(text) {
        return caps[1].to_uppercase();
    }
    LANGUAGE_PATTERNS
        .iter()
        .find(|(re, _)| re.is_match(text))
        .map(|(_, language)| (*language).to_string())
        .unwrap_or_else(|| UNKNOWN_LANGUAGE.to_string())
}

/// Underscore blanks, a trailing `: ?`, or an explicit "fill in the blank".
pub fn is_fill_in_blank(text: &str) -> bool {
    let trimmed = text.trim();
    FILL_IN_BLANK_PATTERNS.iter().any(|re| re.is_match(trimmed))
}
