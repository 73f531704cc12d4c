//! Terminal output.
//!
//! A completed turn produces two labeled blocks, code and insights.
//! Rendering sits behind a small trait so the binaries can write to a
//! styled terminal while tests capture output in memory.

use std::io::{self, Stdout, Write};

const ANSI_RESET: &str = "\x1b[0m";
const ANSI_GREEN: &str = "\x1b[32m";
const ANSI_MAGENTA: &str = "\x1b[35m";

/// Where chat output goes.
pub trait Renderer: Send {
    /// Show the code half of a turn.
    fn print_code(&mut self, code: &str);

    /// Show the insights half of a turn.
    fn print_insights(&mut self, text: &str);

    /// Show an error.
    fn print_error(&mut self, error: &str);

    /// Show a status line.
    fn print_info(&mut self, info: &str);
}

/// Writes to stdout, labeling the code block green and the insights block
/// magenta unless color is disabled.
pub struct PlainTextRenderer {
    stdout: Stdout,
    use_color: bool,
}

impl PlainTextRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            use_color: true,
        }
    }

    /// Choose styling explicitly, for `--no-color` or piped output.
    pub fn with_color(use_color: bool) -> Self {
        Self {
            stdout: io::stdout(),
            use_color,
        }
    }

    /// Keep output ahead of the next readline prompt.
    fn flush(&mut self) {
        let _ = self.stdout.flush();
    }

    fn print_labeled(&mut self, label: &str, color: &str, body: &str) {
        if self.use_color {
            println!("\n{color}[{label}]{ANSI_RESET}\n{body}");
        } else {
            println!("\n[{label}]\n{body}");
        }
        self.flush();
    }
}

impl Default for PlainTextRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for PlainTextRenderer {
    fn print_code(&mut self, code: &str) {
        self.print_labeled("code", ANSI_GREEN, code);
    }

    fn print_insights(&mut self, text: &str) {
        self.print_labeled("insights", ANSI_MAGENTA, text);
    }

    fn print_error(&mut self, error: &str) {
        eprintln!("\nError: {error}");
    }

    fn print_info(&mut self, info: &str) {
        println!("{info}");
        self.flush();
    }
}
