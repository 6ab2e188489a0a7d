//! Output formatting for CLI commands

use std::fmt::Display;
use std::io::IsTerminal;

use crossterm::style::{Color, Stylize};
use serde::Serialize;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Output helper for consistent formatting
pub struct Output {
    format: OutputFormat,
    verbose: bool,
    color: bool,
}

impl Output {
    pub fn new(format: OutputFormat, verbose: bool, color: bool) -> Self {
        Self {
            format,
            verbose,
            color,
        }
    }

    /// Creates an output helper that colors text only when stdout is a terminal
    ///
    /// `NO_COLOR` disables color regardless.
    pub fn detect(format: OutputFormat, verbose: bool) -> Self {
        let color = format == OutputFormat::Text
            && std::io::stdout().is_terminal()
            && std::env::var_os("NO_COLOR").is_none();
        Self::new(format, verbose, color)
    }

    /// Prints a line of text (text format only)
    pub fn line(&self, message: &str) {
        if self.format == OutputFormat::Text {
            println!("{}", message);
        }
    }

    /// Prints structured data as a single JSON line
    pub fn data<T: Serialize>(&self, data: &T) {
        if let Ok(json) = serde_json::to_string(data) {
            println!("{}", json);
        }
    }

    /// Prints a blank line (text only)
    pub fn blank(&self) {
        if self.format == OutputFormat::Text {
            println!();
        }
    }

    /// Returns true if using JSON format
    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }

    /// Wraps `text` in the given foreground color when color is enabled
    pub fn paint(&self, text: impl Display, color: Color) -> String {
        if self.color {
            text.to_string().with(color).to_string()
        } else {
            text.to_string()
        }
    }

    /// Prints a verbose debug message (only when --verbose is set)
    pub fn verbose(&self, message: &str) {
        if self.verbose {
            eprintln!("[verbose] {}", message);
        }
    }

    /// Prints a verbose debug message with context (only when --verbose is set)
    pub fn verbose_ctx(&self, context: &str, message: &str) {
        if self.verbose {
            eprintln!("[verbose:{}] {}", context, message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paint_without_color_is_plain() {
        let output = Output::new(OutputFormat::Text, false, false);
        assert_eq!(output.paint("CREATED", Color::Green), "CREATED");
    }

    #[test]
    fn paint_with_color_wraps_text() {
        let output = Output::new(OutputFormat::Text, false, true);
        let painted = output.paint("CREATED", Color::Green);
        assert!(painted.contains("CREATED"));
        assert!(painted.starts_with('\u{1b}'));
    }
}
