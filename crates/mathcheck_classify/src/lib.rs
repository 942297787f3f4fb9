//! Classification of selected text into prompt kinds.
//!
//! [`build_prompt_plan`] decides whether a selection is a math problem (and so
//! gets the equation-line prompt that verification depends on) or one of the
//! general request kinds.

pub mod heuristics;
pub mod prompt;

pub use heuristics::{
    ends_with_question_mark, guess_code_language, is_fill_in_blank, is_likely_code,
    is_likely_command, is_likely_question, is_math_problem, word_count, UNKNOWN_LANGUAGE,
};
pub use prompt::{build_non_math_plan, build_prompt_plan, PromptKind, PromptPlan};
