//! The geminius chat REPL.
//!
//! Every prompt is answered twice: once with generated Python code and once
//! with the same model's five-point review of that code.  Lines starting
//! with `/` are session commands; `/help` lists them.
//!
//! ```bash
//! geminius-chat
//! geminius-chat --model gemini-1.5-pro
//! geminius-chat --no-color    # plain output for piping
//! ```

use arrrg::CommandLine;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use geminius::CodeAssistant;
use geminius::chat::{
    ChatArgs, ChatCommand, ChatConfig, ChatSession, PlainTextRenderer, Renderer, help_text,
    parse_command, take_turn,
};
use geminius::types::{ModelChoice, Role};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (args, _) = ChatArgs::from_command_line_relaxed("geminius-chat [OPTIONS]");
    let config = ChatConfig::try_from(args)?;
    let use_color = config.use_color;

    let mut session = ChatSession::new();
    session.set_model(config.model);
    // Built on the first prompt and reused until the model changes or a
    // construction attempt fails.
    let mut assistant: Option<CodeAssistant> = None;
    let mut renderer = PlainTextRenderer::with_color(use_color);
    let mut rl = DefaultEditor::new()?;

    println!("Gemini Code Chat (model: {})", config.model);
    println!("Type /help to list commands.\n");

    loop {
        let readline = rl.readline("You: ");

        match readline {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(line);

                // Slash commands never touch the transcript themselves.
                if let Some(cmd) = parse_command(line) {
                    match cmd {
                        ChatCommand::Quit => {
                            println!("Goodbye.");
                            break;
                        }
                        ChatCommand::Clear => {
                            session.clear();
                            renderer.print_info("History cleared.");
                        }
                        ChatCommand::Help => {
                            for line in help_text().lines() {
                                println!("    {}", line);
                            }
                        }
                        ChatCommand::Model(label) => match label.parse::<ModelChoice>() {
                            Ok(choice) => {
                                if session.set_model(choice) {
                                    assistant = None;
                                    renderer.print_info(&format!(
                                        "Model changed to: {choice} (history cleared)"
                                    ));
                                } else {
                                    renderer
                                        .print_info(&format!("Model already set to: {choice}"));
                                }
                            }
                            Err(_) => {
                                renderer.print_error(&format!(
                                    "Unknown model: {label} (valid: {})",
                                    valid_labels()
                                ));
                            }
                        },
                        ChatCommand::Models => {
                            print_models(session.model());
                        }
                        ChatCommand::History => {
                            print_history(&session);
                        }
                        ChatCommand::Stats => {
                            print_stats(&session);
                        }
                        ChatCommand::Invalid(message) => {
                            renderer.print_error(&message);
                        }
                    }
                    continue;
                }

                // Anything else is a prompt; spend a turn on it.
                let current = session.model().unwrap_or_default();
                if assistant.as_ref().map(|a| a.model()) != Some(current) {
                    match CodeAssistant::new(current, None) {
                        Ok(built) => assistant = Some(built),
                        Err(err) => {
                            // A configuration error is shown inline; the
                            // transcript stays as it was.
                            renderer.print_error(&err.to_string());
                            continue;
                        }
                    }
                }
                let Some(assistant) = assistant.as_ref() else {
                    continue;
                };
                take_turn(assistant, &mut session, line, &mut renderer).await;
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl-C drops the current line.
                println!();
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("\nGoodbye.");
                break;
            }
            Err(err) => {
                renderer.print_error(&format!("read error: {err}"));
                break;
            }
        }
    }

    Ok(())
}

fn print_models(current: Option<ModelChoice>) {
    println!("    Available models:");
    for choice in ModelChoice::ALL {
        let marker = if Some(choice) == current { "*" } else { " " };
        if choice.label() == choice.backend_id() {
            println!("      {marker} {}", choice.label());
        } else {
            println!(
                "      {marker} {} (served by {})",
                choice.label(),
                choice.backend_id()
            );
        }
    }
}

fn print_history(session: &ChatSession) {
    if session.message_count() == 0 {
        println!("    (no messages)");
        return;
    }
    for message in session.transcript() {
        match message.role {
            Role::User => println!("You: {}", message.content),
            Role::Assistant => println!("Assistant:\n{}", message.content),
        }
    }
}

fn print_stats(session: &ChatSession) {
    let stats = session.stats();
    println!("    Session stats:");
    match stats.model {
        Some(model) => println!("      model:    {model}"),
        None => println!("      model:    (not selected)"),
    }
    println!("      messages: {}", stats.message_count);
    println!("      turns:    {}", stats.turn_count);
}

fn valid_labels() -> String {
    ModelChoice::ALL
        .iter()
        .map(|choice| choice.label())
        .collect::<Vec<_>>()
        .join(", ")
}
