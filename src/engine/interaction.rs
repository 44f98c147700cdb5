// Interaction port: the only way a command can ask the user something

use std::io::{self, BufRead, Write};

pub trait InteractionPort: Send {
    fn is_interactive(&self) -> bool;
    /// Yes/no question. Non-interactive ports answer without asking.
    fn confirm(&mut self, prompt: &str) -> bool;
    /// Free-text question. `None` when nobody can answer.
    fn prompt_line(&mut self, prompt: &str) -> Option<String>;
    /// Returns false when the front end has no screen to clear.
    fn clear_screen(&mut self) -> bool;
}

/// Reads answers from stdin of a terminal session.
pub struct ConsolePort;

impl ConsolePort {
    fn read_answer(prompt: &str) -> Option<String> {
        print!("{}", prompt);
        io::stdout().flush().ok()?;
        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim().to_string()),
        }
    }
}

impl InteractionPort for ConsolePort {
    fn is_interactive(&self) -> bool {
        true
    }

    fn confirm(&mut self, prompt: &str) -> bool {
        Self::read_answer(prompt).is_some_and(|a| is_yes(&a))
    }

    fn prompt_line(&mut self, prompt: &str) -> Option<String> {
        Self::read_answer(prompt)
    }

    fn clear_screen(&mut self) -> bool {
        print!("\x1b[2J\x1b[H");
        io::stdout().flush().is_ok()
    }
}

/// Web requests and one-shot runs: never blocks, never asks.
pub struct NonInteractivePort;

impl InteractionPort for NonInteractivePort {
    fn is_interactive(&self) -> bool {
        false
    }

    fn confirm(&mut self, _prompt: &str) -> bool {
        true
    }

    fn prompt_line(&mut self, _prompt: &str) -> Option<String> {
        None
    }

    fn clear_screen(&mut self) -> bool {
        false
    }
}

pub fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_yes() {
        assert!(is_yes("y"));
        assert!(is_yes("YES"));
        assert!(is_yes(" Yes "));
        assert!(!is_yes(""));
        assert!(!is_yes("n"));
        assert!(!is_yes("yeah"));
    }

    #[test]
    fn test_non_interactive_answers() {
        let mut port = NonInteractivePort;
        assert!(!port.is_interactive());
        assert!(port.confirm("remove?"));
        assert_eq!(port.prompt_line("name: "), None);
        assert!(!port.clear_screen());
    }
}
