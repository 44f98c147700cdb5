use anyhow::{Context, Result};
use colored::*;
use log::{debug, warn};
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::{Config, Editor, Helper, Highlighter, Hinter, Validator};
use std::env;
use std::path::PathBuf;
use crate::config::{NlshConfig, history_path};
use crate::engine::Shell;
use crate::engine::output::DisplayMode;
use crate::engine::registry::Registry;

/// Tab completion of command names for the word under the cursor.
#[derive(Helper, Hinter, Highlighter, Validator)]
struct CommandCompleter {
    registry: Registry,
}

impl Completer for CommandCompleter {
    type Candidate = Pair;

    fn complete(&self, line: &str, pos: usize, _ctx: &rustyline::Context<'_>) -> rustyline::Result<(usize, Vec<Pair>)> {
        let (start, word) = word_before(line, pos);
        let candidates = self
            .registry
            .complete(word)
            .into_iter()
            .map(|name| Pair { display: name.to_string(), replacement: name.to_string() })
            .collect();
        Ok((start, candidates))
    }
}

fn word_before(line: &str, pos: usize) -> (usize, &str) {
    let head = &line[..pos];
    let start = head
        .char_indices()
        .rev()
        .find(|(_, c)| c.is_whitespace())
        .map(|(i, c)| i + c.len_utf8())
        .unwrap_or(0);
    (start, &head[start..])
}

pub fn handle_repl(cwd: PathBuf, config: &NlshConfig, mode: DisplayMode) -> Result<()> {
    let mut shell = Shell::interactive(cwd);

    let editor_config = Config::builder().auto_add_history(false).build();
    let mut rl: Editor<CommandCompleter, DefaultHistory> =
        Editor::with_config(editor_config).context("Failed to initialise line editor")?;
    rl.set_helper(Some(CommandCompleter { registry: Registry::new() }));

    let history = history_path(config);
    if let Some(path) = &history {
        if let Err(e) = rl.load_history(path) {
            debug!("No history loaded from {}: {}", path.display(), e);
        }
    }

    let welcome = "Welcome to nlsh! Type 'help' to see available commands.";
    println!("{}", paint(welcome, mode, |s| s.green()));

    let user = env::var("USER")
        .or_else(|_| env::var("USERNAME"))
        .unwrap_or_else(|_| "user".to_string());

    loop {
        let prompt = format!("{}@nlsh:{}$ ", user, shell.cwd().display());
        match rl.readline(&paint(&prompt, mode, |s| s.cyan())) {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                rl.add_history_entry(line).context("Failed to record history")?;

                let output = shell.execute(line);
                if !output.is_empty() {
                    println!("{}", output.render(mode));
                }
                if output.should_exit() {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                println!("\n{}", paint("Exiting...", mode, |s| s.green()));
                break;
            }
            Err(err) => {
                save_history(&mut rl, history.as_ref());
                return Err(err).context("Line editor failed");
            }
        }
    }

    save_history(&mut rl, history.as_ref());
    Ok(())
}

fn save_history(rl: &mut Editor<CommandCompleter, DefaultHistory>, path: Option<&PathBuf>) {
    if let Some(path) = path {
        if let Err(e) = rl.save_history(path) {
            warn!("Failed to save history to {}: {}", path.display(), e);
        }
    }
}

fn paint(text: &str, mode: DisplayMode, style: impl Fn(&str) -> ColoredString) -> String {
    match mode {
        DisplayMode::Color => style(text).to_string(),
        DisplayMode::Plain => text.to_string(),
    }
}
