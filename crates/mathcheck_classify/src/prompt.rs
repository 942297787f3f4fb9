//! Prompt selection for a page selection.

use crate::heuristics::{
    guess_code_language, is_fill_in_blank, is_likely_code, is_likely_command,
    is_likely_question, is_math_problem, word_count,
};
use serde::{Deserialize, Serialize};

/// Selections longer than this are summarized instead of answered.
pub const SUMMARY_WORD_THRESHOLD: usize = 75;

pub const MATH_TEMPERATURE: f64 = 0.0;
pub const DEFAULT_TEMPERATURE: f64 = 0.2;

const MATH_SYSTEM_PROMPT: &str = "Expert math tutor. Provide step-by-step solutions with accuracy.

TOP LINE FORMAT (required):
Normalized Equation: <equation using only numbers, x, +, -, *, /, ^, (), sqrt()>
Example: sqrt(4 - x) = -2 + sqrt(5 - 2x)

STRUCTURE:
\u{2022} Problem: Restate clearly
\u{2022} Solution Steps: Show work with explanations
\u{2022} Final Answer: Result only (no instructions)
\u{2022} Verification: Check answer if applicable

CRITICAL RULES:
- Strict ASCII math only: use +, -, *, /, ^, (, ), sqrt(), pi, abs(). NEVER use \u{00D7}, \u{00F7}, \u{221A}, superscripts, Unicode symbols, or LaTeX.
- Every radicand and denominator must be fully parenthesized. Write sqrt((x^2)+9) NOT sqrt(x^2)+9.
- Restate the original equation unambiguously before solving.
- When radicals appear in equations, isolate: sqrt(A) - sqrt(B) = k, then square. Check each candidate in the ORIGINAL equation and discard extraneous roots.
- Honor domain constraints (even roots \u{2265} 0, denominators \u{2260} 0, logs > 0). Express intervals with parentheses/brackets and unions with U.
- Final Answer: Match TI-84 output. Provide numeric results (or requested rounding) in the form x=..., x1=..., x2=..., etc.";

const SUMMARY_SYSTEM_PROMPT: &str = "Expert writing analyst. Summarize key points, then ask how the user would like to proceed with helpful suggestions. No Final Answer section.";
const FILL_IN_BLANK_SYSTEM_PROMPT: &str = "Fill-in-blank expert. Determine most likely answer. Include \"Final Answer\" section with filled text only.";
const QUESTION_SYSTEM_PROMPT: &str = "Expert assistant. Answer directly with brief reasoning. Include \"Final Answer\" section. Stay focused.";
const STATEMENT_SYSTEM_PROMPT: &str = "Concise expert. Summarize in \u{2264}15 words, then ask how the user would like to proceed with a helpful suggestion. No Final Answer section.";
const COMMAND_SYSTEM_PROMPT: &str = "Task assistant. Execute command, include \"Final Answer\". For graphs: ASCII/table format with labeled axes. Brief reasoning.";

/// What kind of request a selection is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PromptKind {
    Math,
    Summary,
    FillInBlank,
    Question,
    Statement,
    Command,
    Code,
}

/// System and user prompts chosen for a selection, with sampling settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptPlan {
    pub kind: PromptKind,
    pub system_prompt: String,
    pub user_prompt: String,
    pub temperature: f64,
    /// Whether the reply is asked to end with a "Final Answer" section.
    pub expects_final_answer: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_language: Option<String>,
}

impl PromptPlan {
    fn new(kind: PromptKind, system_prompt: String, user_prompt: String) -> Self {
        let expects_final_answer = matches!(
            kind,
            PromptKind::Math | PromptKind::FillInBlank | PromptKind::Question | PromptKind::Command
        );
        let temperature = match kind {
            PromptKind::Math => MATH_TEMPERATURE,
            _ => DEFAULT_TEMPERATURE,
        };
        PromptPlan {
            kind,
            system_prompt,
            user_prompt,
            temperature,
            expects_final_answer,
            code_language: None,
        }
    }
}

/// Pick the prompt for `text`. Math detection runs first; everything else
/// goes through [`build_non_math_plan`].
pub fn build_prompt_plan(text: &str) -> PromptPlan {
    if is_math_problem(text) {
        return PromptPlan::new(
            PromptKind::Math,
            MATH_SYSTEM_PROMPT.to_string(),
            format!(
                "Solve this math problem step by step. Start with the required Normalized Equation line.\n\n{}",
                text
            ),
        );
    }
    build_non_math_plan(text)
}

/// First matching rule wins: long text, fill-in-blank, question, plain
/// statement, command, code.
pub fn build_non_math_plan(text: &str) -> PromptPlan {
    let words = word_count(text);
    if words > SUMMARY_WORD_THRESHOLD {
        return PromptPlan::new(
            PromptKind::Summary,
            SUMMARY_SYSTEM_PROMPT.to_string(),
            format!("Summarize and advise ({} words):\n\n{}", words, text),
        );
    }

    if is_fill_in_blank(text) {
        return PromptPlan::new(
            PromptKind::FillInBlank,
            FILL_IN_BLANK_SYSTEM_PROMPT.to_string(),
            format!("Fill the blank:\n\n{}", text),
        );
    }

    if is_likely_question(text) {
        return PromptPlan::new(
            PromptKind::Question,
            QUESTION_SYSTEM_PROMPT.to_string(),
            format!("Answer:\n\n{}", text),
        );
    }

    let command = is_likely_command(text);
    if !command && !is_likely_code(text) {
        return statement_plan(text);
    }

    if command {
        return PromptPlan::new(
            PromptKind::Command,
            COMMAND_SYSTEM_PROMPT.to_string(),
            format!("Execute:\n\n{}", text),
        );
    }

    let language = guess_code_language(text);
    let mut plan = PromptPlan::new(
        PromptKind::Code,
        format!(
            "Code analyst. No Final Answer. State \"Language: {}\". Summarize code purpose concisely. Offer clarification.",
            language
        ),
        format!("Analyze code:\n\n{}", text),
    );
    plan.code_language = Some(language);
    plan
}

fn statement_plan(text: &str) -> PromptPlan {
    PromptPlan::new(
        PromptKind::Statement,
        STATEMENT_SYSTEM_PROMPT.to_string(),
        format!("Consider:\n\n{}", text),
    )
}
