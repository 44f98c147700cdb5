pub mod repl;
pub mod run;
pub mod serve;

use std::io::IsTerminal;
use crate::config::NlshConfig;
use crate::engine::output::DisplayMode;

/// Color only for a real terminal, unless switched off by flag or config.
pub fn display_mode(no_color: bool, config: &NlshConfig) -> DisplayMode {
    if no_color || config.terminal.color == Some(false) {
        return DisplayMode::Plain;
    }
    if config.terminal.color == Some(true) || std::io::stdout().is_terminal() {
        DisplayMode::Color
    } else {
        DisplayMode::Plain
    }
}
