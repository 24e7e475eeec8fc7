//! Styling for status lines on stderr.
//!
//! Stdout carries only the extracted sections and is never styled.

use console::Style;
use owo_colors::{AnsiColors, OwoColorize};
use std::fmt::Display;
use std::path::Path;
use std::sync::LazyLock;

/// Shared theme for every status line the CLI prints.
pub static THEME: LazyLock<Theme> = LazyLock::new(Theme::default);

#[derive(Debug, Clone)]
pub struct Theme {
    pub success: Style,
    pub error: Style,
    pub warning: Style,
    /// Heading above recovery suggestions
    pub header: Style,
    pub dim: Style,
    /// Source and settings file paths
    pub path: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            success: Style::new().green().bright(),
            error: Style::new().red().bright(),
            warning: Style::new().yellow().bright(),
            header: Style::new().cyan().bold(),
            dim: Style::new().dim(),
            path: Style::new().magenta(),
        }
    }
}

impl Theme {
    fn with_icon(&self, icon: &str, color: AnsiColors, style: &Style, text: &str) -> String {
        if Self::should_disable_colors() {
            format!("{icon} {text}")
        } else {
            format!("{} {}", icon.color(color), style.apply_to(text))
        }
    }

    pub fn success_with_icon(&self, text: &str) -> String {
        self.with_icon("✓", AnsiColors::Green, &self.success, text)
    }

    pub fn error_with_icon(&self, text: &str) -> String {
        self.with_icon("✗", AnsiColors::Red, &self.error, text)
    }

    pub fn warning_with_icon(&self, text: &str) -> String {
        self.with_icon("⚠", AnsiColors::Yellow, &self.warning, text)
    }

    /// A file path in the path style
    pub fn path(&self, path: &Path) -> String {
        self.apply(&self.path, path.display())
    }

    /// Colors are off under `NO_COLOR` or when stderr is not a terminal.
    pub fn should_disable_colors() -> bool {
        use is_terminal::IsTerminal;
        std::env::var_os("NO_COLOR").is_some() || !std::io::stderr().is_terminal()
    }

    /// Style `text` unless colors are disabled.
    pub fn apply<T: Display>(&self, style: &Style, text: T) -> String {
        if Self::should_disable_colors() {
            text.to_string()
        } else {
            style.apply_to(text).to_string()
        }
    }
}
