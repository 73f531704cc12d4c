//! Startup configuration.
//!
//! `arrrg` parses the command line into [`ChatArgs`]; [`ChatConfig`] is the
//! validated form the binaries actually run with.

use arrrg_derive::CommandLine;

use crate::error::Error;
use crate::types::ModelChoice;

/// Raw command-line options for the geminius-chat tool.
#[derive(CommandLine, Debug, Default, PartialEq, Eq)]
pub struct ChatArgs {
    /// Which model to talk to.
    #[arrrg(optional, "Model to use (default: gemini-1.5-flash)", "MODEL")]
    pub model: Option<String>,

    /// Turn off ANSI styling.
    #[arrrg(flag, "Disable ANSI styling")]
    pub no_color: bool,
}

/// Validated settings for a chat session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatConfig {
    /// The model selected at startup.
    pub model: ModelChoice,

    /// Whether output gets ANSI styling.
    pub use_color: bool,
}

impl ChatConfig {
    /// The defaults: gemini-1.5-flash, color on.
    pub fn new() -> Self {
        Self {
            model: ModelChoice::default(),
            use_color: true,
        }
    }

    pub fn with_model(mut self, model: ModelChoice) -> Self {
        self.model = model;
        self
    }

    pub fn without_color(mut self) -> Self {
        self.use_color = false;
        self
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<ChatArgs> for ChatConfig {
    type Error = Error;

    /// An unrecognized `--model` is a configuration error at startup, not a
    /// fallback to some other model.
    fn try_from(args: ChatArgs) -> Result<Self, Error> {
        let model = match args.model {
            Some(label) => label.parse::<ModelChoice>()?,
            None => ModelChoice::default(),
        };

        Ok(ChatConfig {
            model,
            use_color: !args.no_color,
        })
    }
}
