//! Everything behind the `geminius-chat` REPL.
//!
//! A prompt costs one code-generation call plus one follow-up review call,
//! and both replies land in the transcript.  Slash commands steer the
//! session locally; switching models resets the transcript.
//!
//! The pieces: [`config`] turns the command line into settings, [`session`]
//! holds the transcript and the selected model, [`commands`] recognizes
//! slash commands, [`render`] labels output behind the [`Renderer`] trait,
//! and [`turn`] runs the two calls for one prompt.

mod commands;
mod config;
mod render;
mod session;
mod turn;

pub use commands::{ChatCommand, help_text, parse_command};
pub use config::{ChatArgs, ChatConfig};
pub use render::{PlainTextRenderer, Renderer};
pub use session::{ChatSession, SessionStats};
pub use turn::take_turn;
