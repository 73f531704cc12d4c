//! One-shot code generation: send a single requirement, print the generated
//! code and the model's review of it, and exit.
//!
//! ```bash
//! geminius-prompt "write a function that reverses a string"
//! geminius-prompt write a fizzbuzz function
//! geminius-prompt requirement.txt
//! geminius-prompt --model gemini-1.5-pro --no-insights "sort a list of dates"
//! ```
//!
//! A single argument naming a readable file is read as the requirement;
//! anything else is taken verbatim.

use std::path::Path;

use arrrg::CommandLine;
use arrrg_derive::CommandLine;

use geminius::CodeAssistant;
use geminius::chat::{PlainTextRenderer, Renderer};
use geminius::types::ModelChoice;

#[derive(CommandLine, Debug, Default, PartialEq, Eq)]
struct Args {
    /// Model to use.
    #[arrrg(optional, "Model to use (default: gemini-1.5-flash)", "MODEL")]
    model: Option<String>,

    /// Skip the follow-up review of the generated code.
    #[arrrg(flag, "Skip the follow-up review of the generated code")]
    no_insights: bool,

    /// Turn off ANSI styling.
    #[arrrg(flag, "Disable ANSI styling")]
    no_color: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (args, free) = Args::from_command_line_relaxed("geminius-prompt [OPTIONS] <PROMPT|FILE>");

    if free.is_empty() {
        eprintln!("Error: no prompt given");
        std::process::exit(1);
    }

    let choice = match args.model {
        Some(label) => label.parse::<ModelChoice>()?,
        None => ModelChoice::default(),
    };

    let prompt = if free.len() == 1 && Path::new(&free[0]).is_file() {
        std::fs::read_to_string(&free[0])?.trim().to_string()
    } else {
        free.join(" ")
    };
    if prompt.is_empty() {
        eprintln!("Error: the prompt is empty");
        std::process::exit(1);
    }

    let assistant = CodeAssistant::new(choice, None)?;
    let mut renderer = PlainTextRenderer::with_color(!args.no_color);

    let code = assistant.generate_code(&prompt).await;
    renderer.print_code(&code);

    if !args.no_insights {
        let insights = assistant.generate_assistant_response(&code, &prompt).await;
        renderer.print_insights(&insights);
    }

    Ok(())
}
