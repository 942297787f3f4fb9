use mathcheck_classify::{build_non_math_plan, build_prompt_plan, PromptKind};

const LONG_TEXT: &str = "Artificial intelligence has revolutionized many industries and continues to transform the way we work, live, and interact with technology. From machine learning algorithms that power recommendation systems to natural language processing models that enable chatbots and virtual assistants, AI is becoming increasingly sophisticated and capable. The development of large language models has opened up new possibilities for human-computer interaction, allowing for more natural and intuitive communication. As AI technology continues to advance, we can expect to see even more innovative applications and use cases emerge across various sectors including healthcare, finance, education, and entertainment. The future of AI holds great promise for solving complex problems and improving efficiency in ways we are only beginning to understand.";

const FIBONACCI: &str =
    "function fibonacci(n) {\n    if (n <= 1) return n;\n    return fibonacci(n - 1) + fibonacci(n - 2);\n}";

#[test]
fn non_math_rules_in_order() {
    let cases: [(&str, PromptKind, bool); 6] = [
        (LONG_TEXT, PromptKind::Summary, false),
        ("Cats belong to the species _____", PromptKind::FillInBlank, true),
        ("What is the capital of France?", PromptKind::Question, true),
        ("The sky is blue and water is wet.", PromptKind::Statement, false),
        ("Calculate the area of a circle with radius 5", PromptKind::Command, true),
        (FIBONACCI, PromptKind::Code, false),
    ];

    for (text, kind, final_answer) in cases {
        let plan = build_non_math_plan(text);
        assert_eq!(plan.kind, kind, "{:?}", text);
        assert_eq!(plan.expects_final_answer, final_answer, "{:?}", text);
        assert_eq!(plan.temperature, 0.2);
        assert!(plan.user_prompt.ends_with(text));
    }
}

#[test]
fn code_case_is_javascript() {
    let plan = build_non_math_plan(FIBONACCI);
    assert_eq!(plan.code_language.as_deref(), Some("JavaScript"));
}

#[test]
fn math_detection_takes_priority() {
    // "calculate" and "area" are math keywords, so the command never gets a look
    let plan = build_prompt_plan("Calculate the area of a circle with radius 5");
    assert_eq!(plan.kind, PromptKind::Math);
    assert_eq!(plan.temperature, 0.0);

    let plan = build_prompt_plan("Cats belong to the species _____");
    assert_eq!(plan.kind, PromptKind::FillInBlank);
}
