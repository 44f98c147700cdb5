// Natural-language normalizer: maps loose phrases onto command names

/// Phrase table. Phrases are lowercase and unique.
const PHRASES: &[(&str, &str)] = &[
    // Listing
    ("list files", "ls"),
    ("show files", "ls"),
    ("what's in this folder", "ls"),
    ("what's in folder", "ls"),
    ("show me files", "ls"),
    ("display files", "ls"),
    // Navigation
    ("change directory", "cd"),
    ("go to folder", "cd"),
    ("navigate to", "cd"),
    ("move to", "cd"),
    ("go to", "cd"),
    // Create
    ("make directory", "mkdir"),
    ("create folder", "mkdir"),
    ("make folder", "mkdir"),
    // Remove
    ("delete", "rm"),
    ("remove", "rm"),
    ("erase", "rm"),
    ("delete this", "rm"),
    ("remove this", "rm"),
    // System info
    ("show cpu usage", "cpu"),
    ("cpu usage", "cpu"),
    ("show memory", "mem"),
    ("memory usage", "mem"),
    ("show disk space", "df"),
    ("disk space", "df"),
    ("show processes", "ps"),
    ("running processes", "ps"),
    // Utility
    ("show help", "help"),
    ("help me", "help"),
    ("clear screen", "clear"),
    ("clear terminal", "clear"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub command: String,
    pub args: Vec<String>,
}

impl Invocation {
    pub fn new(command: impl Into<String>, args: Vec<String>) -> Self {
        Self { command: command.into(), args }
    }

    /// With no arguments yet, split the command text on whitespace so that
    /// literal input like "cd /tmp" still yields a command plus arguments.
    pub fn tokenize(self) -> Self {
        if !self.args.is_empty() {
            return self;
        }
        let mut parts = self.command.split_whitespace().map(str::to_string);
        match parts.next() {
            Some(command) => Self { command, args: parts.collect() },
            None => Self { command: String::new(), args: Vec::new() },
        }
    }
}

pub struct Normalizer {
    // Longest phrase first, then alphabetical, so overlapping phrases
    // ("go to" / "go to folder") resolve the same way every time.
    phrases: Vec<(&'static str, &'static str)>,
}

impl Normalizer {
    pub fn new() -> Self {
        let mut phrases = PHRASES.to_vec();
        phrases.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then_with(|| a.0.cmp(b.0)));
        debug_assert!(
            phrases.windows(2).all(|w| w[0].0 != w[1].0),
            "phrase table contains a duplicate"
        );
        Self { phrases }
    }

    pub fn normalize(&self, input: &str) -> Invocation {
        let trimmed = input.trim();

        if let Some(&(_, command)) = self.phrases.iter().find(|(p, _)| trimmed.eq_ignore_ascii_case(p)) {
            return Invocation::new(command, Vec::new());
        }

        for &(phrase, command) in &self.phrases {
            if let Some(rest) = strip_phrase(trimmed, phrase) {
                // The remainder keeps its casing and stays one argument.
                let rest = rest.trim();
                let args = if rest.is_empty() { Vec::new() } else { vec![rest.to_string()] };
                return Invocation::new(command, args);
            }
        }

        Invocation::new(trimmed, Vec::new())
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

fn strip_phrase<'a>(input: &'a str, phrase: &str) -> Option<&'a str> {
    let head = input.get(..phrase.len())?;
    if !head.eq_ignore_ascii_case(phrase) {
        return None;
    }
    input[phrase.len()..].strip_prefix(' ')
}
