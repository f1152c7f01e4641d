//! Terminal utilities for colors, title setting and output management

use std::io::{IsTerminal, Write};

const COLOR_RESET: &str = "\x1b[0m";
const COLOR_RED: &str = "\x1b[31m";
const COLOR_GREEN: &str = "\x1b[32m";
const COLOR_YELLOW: &str = "\x1b[33m";
const COLOR_BLUE: &str = "\x1b[34m";
const COLOR_GRAY: &str = "\x1b[90m";

/// Returns true when stdout is a terminal and `NO_COLOR` is not set
pub fn colors_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
}

/// Wraps text in ANSI color codes, or leaves it alone when colors are off
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn ansi() -> Self {
        Self::new(true)
    }

    pub fn plain() -> Self {
        Self::new(false)
    }

    fn paint(&self, color: &str, text: &str) -> String {
        if self.enabled {
            format!("{color}{text}{COLOR_RESET}")
        } else {
            text.to_string()
        }
    }

    pub fn red(&self, text: &str) -> String {
        self.paint(COLOR_RED, text)
    }

    pub fn green(&self, text: &str) -> String {
        self.paint(COLOR_GREEN, text)
    }

    pub fn yellow(&self, text: &str) -> String {
        self.paint(COLOR_YELLOW, text)
    }

    pub fn blue(&self, text: &str) -> String {
        self.paint(COLOR_BLUE, text)
    }

    pub fn gray(&self, text: &str) -> String {
        self.paint(COLOR_GRAY, text)
    }
}

/// Sets the terminal title to the specified text
pub fn set_terminal_title(title: &str) {
    if !std::io::stdout().is_terminal() {
        return;
    }
    // ANSI escape sequence to set terminal title
    print!("\x1b]0;{title}\x07");
}

/// Sets the terminal title and ensures it's flushed to the terminal
pub fn set_terminal_title_and_flush(title: &str) {
    set_terminal_title(title);
    // Flush stdout - ignore errors as this is non-critical
    let _ = std::io::stdout().flush();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_palette_leaves_text() {
        let palette = Palette::plain();
        assert_eq!(palette.red("x"), "x");
        assert_eq!(palette.gray("   line"), "   line");
    }

    #[test]
    fn test_ansi_palette_wraps_text() {
        let palette = Palette::ansi();
        assert_eq!(palette.red("x"), "\x1b[31mx\x1b[0m");
        assert_eq!(palette.blue("y"), "\x1b[34my\x1b[0m");
    }
}
