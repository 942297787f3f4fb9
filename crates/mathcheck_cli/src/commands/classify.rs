//! classify subcommand handler.
//!
//! Shows which prompt a selection would be sent with.

use anyhow::Result;
use clap::Args;
use mathcheck_classify::build_prompt_plan;

use super::OutputFormat;

/// Arguments for the classify subcommand
#[derive(Args, Debug)]
pub struct ClassifyArgs {
    /// Selected text
    pub text: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

pub fn run(args: ClassifyArgs) -> Result<()> {
    let plan = build_prompt_plan(&args.text);
    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&plan)?),
        OutputFormat::Text => {
            let kind = serde_json::to_value(plan.kind)?;
            println!("Kind: {}", kind.as_str().unwrap_or_default());
            println!("Temperature: {}", plan.temperature);
            println!(
                "Final Answer expected: {}",
                if plan.expects_final_answer { "yes" } else { "no" }
            );
            if let Some(language) = &plan.code_language {
                println!("Language: {}", language);
            }
            println!();
            println!("System prompt:\n{}", plan.system_prompt);
            println!();
            println!("User prompt:\n{}", plan.user_prompt);
        }
    }
    Ok(())
}
