//! Slash commands.
//!
//! Input lines beginning with `/` steer the session locally.  Anything else
//! is a prompt bound for the model.

/// Session-control input, recognized before any prompt is sent.
#[derive(Debug, Clone, PartialEq)]
pub enum ChatCommand {
    /// Forget the transcript and start over.
    Clear,

    /// Switch models.  Carries the raw label; the caller parses it against
    /// the known models and reports failures.
    Model(String),

    /// List the selectable models.
    Models,

    /// Print the transcript so far.
    History,

    /// Print the command summary.
    Help,

    /// Leave the program.
    Quit,

    /// Print message and turn counts for the session.
    Stats,

    /// A line that started with `/` but matched nothing.  Carries the
    /// complaint to show the user.
    Invalid(String),
}

/// Recognize a slash command in one input line.
///
/// `None` means the line is an ordinary prompt and should go to the model.
///
/// # Examples
///
/// ```
/// # use geminius::chat::parse_command;
/// assert!(parse_command("/quit").is_some());
/// assert!(parse_command("/model gemini-1.5-pro").is_some());
/// assert!(parse_command("write a function that reverses a string").is_none());
/// ```
pub fn parse_command(input: &str) -> Option<ChatCommand> {
    let rest = input.trim().strip_prefix('/')?;

    let (verb, argument) = match rest.split_once(' ') {
        Some((verb, tail)) => (verb, Some(tail.trim()).filter(|a| !a.is_empty())),
        None => (rest, None),
    };

    let parsed = match verb.to_lowercase().as_str() {
        "clear" => ChatCommand::Clear,
        "model" => match argument {
            Some(label) => ChatCommand::Model(label.to_string()),
            None => ChatCommand::Invalid("usage: /model <name>".to_string()),
        },
        "models" => ChatCommand::Models,
        "history" => ChatCommand::History,
        "help" | "?" => ChatCommand::Help,
        "quit" | "exit" | "q" => ChatCommand::Quit,
        "stats" | "status" => ChatCommand::Stats,
        _ => ChatCommand::Invalid(format!("Unknown command: /{verb}")),
    };

    Some(parsed)
}

/// The summary printed by `/help`.
pub fn help_text() -> &'static str {
    r#"Commands:
  /model <name>          Switch models (e.g., /model gemini-1.5-pro)
  /models                List selectable models
  /history               Show the transcript so far
  /clear                 Forget the transcript
  /stats                 Show session counts
  /help                  Show this message
  /quit                  Leave the program"#
}
