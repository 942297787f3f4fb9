//! Writing the verified roots back into the answer.

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

// Whole `Final Answer:` lines, including markdown such as `**Final Answer:**` or `- Final Answer:`
static RE_FINAL_ANSWER_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?im)^[ \t>*_#•-]*final answer[*_]*[ \t]*:[^\n]*(?:\n|$)")
        .expect("valid regex literal")
});

/// A verified root and its rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Root {
    pub value: f64,
    pub formatted: String,
}

/// `Final Answer: x=r` for one root, `Final Answer: x1=r1, x2=r2, ...` for
/// several. Roots are listed by ascending value and repeated renderings are
/// listed once.
pub fn final_answer_line(roots: &[Root]) -> String {
    let mut ordered: Vec<&Root> = roots.iter().collect();
    ordered.sort_by(|a, b| a.value.total_cmp(&b.value));

    let mut shown: Vec<&str> = Vec::with_capacity(ordered.len());
    for root in ordered {
        if !shown.contains(&root.formatted.as_str()) {
            shown.push(&root.formatted);
        }
    }

    match shown.as_slice() {
        [only] => format!("Final Answer: x={}", only),
        _ => {
            let assignments: Vec<String> = shown
                .iter()
                .enumerate()
                .map(|(i, formatted)| format!("x{}={}", i + 1, formatted))
                .collect();
            format!("Final Answer: {}", assignments.join(", "))
        }
    }
}

/// Replace any `Final Answer:` lines in `model_text` with one built from
/// `roots`, placed first and followed by a blank line. With no roots the
/// text is returned unchanged.
pub fn reassemble(model_text: &str, roots: &[Root]) -> String {
    if roots.is_empty() {
        return model_text.to_string();
    }

    let line = final_answer_line(roots);
    let cleaned = RE_FINAL_ANSWER_LINE.replace_all(model_text, "");
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        line
    } else {
        format!("{}\n\n{}", line, cleaned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn root(value: f64, formatted: &str) -> Root {
        Root {
            value,
            formatted: formatted.to_string(),
        }
    }

    #[test]
    fn single_root_line() {
        assert_eq!(final_answer_line(&[root(3.0, "3")]), "Final Answer: x=3");
    }

    #[test]
    fn several_roots_are_numbered_in_ascending_order() {
        let roots = [root(3.0, "3"), root(-1.0, "-1")];
        assert_eq!(final_answer_line(&roots), "Final Answer: x1=-1, x2=3");
    }

    #[test]
    fn repeated_renderings_collapse() {
        let roots = [root(2.0, "2"), root(2.0000000001, "2")];
        assert_eq!(final_answer_line(&roots), "Final Answer: x=2");
    }

    #[test]
    fn existing_final_answer_lines_are_replaced() {
        let text = "Normalized Equation: x + 2 = 5\nSubtract 2.\nFinal Answer: x = 4";
        assert_eq!(
            reassemble(text, &[root(3.0, "3")]),
            "Final Answer: x=3\n\nNormalized Equation: x + 2 = 5\nSubtract 2."
        );
    }

    #[test]
    fn markdown_decorated_lines_are_replaced() {
        let text = "**Final Answer:** x = 4\nWork\n- final answer: 4\n## Final Answer: 4";
        assert_eq!(reassemble(text, &[root(3.0, "3")]), "Final Answer: x=3\n\nWork");
    }

    #[test]
    fn prose_mentioning_final_answer_is_kept() {
        let text = "The final answer follows.\nFinal Answer: 1";
        assert_eq!(
            reassemble(text, &[root(3.0, "3")]),
            "Final Answer: x=3\n\nThe final answer follows."
        );
    }

    #[test]
    fn only_the_final_line_remains_when_text_is_consumed() {
        assert_eq!(reassemble("Final Answer: 9", &[root(3.0, "3")]), "Final Answer: x=3");
        assert_eq!(reassemble("", &[root(3.0, "3")]), "Final Answer: x=3");
    }

    #[test]
    fn no_roots_leaves_text_alone() {
        assert_eq!(reassemble("Final Answer: 9", &[]), "Final Answer: 9");
    }
}
