pub mod context;
pub mod commands;
pub mod error;
pub mod interaction;
pub mod normalizer;
pub mod output;
pub mod provider;
pub mod registry;
pub mod suggest;

use std::path::{Path, PathBuf};
use log::{debug, warn};
use context::ShellContext;
use error::ShellError;
use interaction::{ConsolePort, InteractionPort, NonInteractivePort};
use normalizer::Normalizer;
use output::Output;
use provider::{OsFilesystem, SysinfoStats};
use registry::Registry;

#[cfg(test)]
mod tests;

/// The command engine shared by every front end.
pub struct Shell {
    registry: Registry,
    normalizer: Normalizer,
    ctx: ShellContext,
}

impl Shell {
    pub fn new(ctx: ShellContext) -> Self {
        Self {
            registry: Registry::new(),
            normalizer: Normalizer::new(),
            ctx,
        }
    }

    /// Terminal session: asks before deleting, prompts for missing names.
    pub fn interactive(cwd: PathBuf) -> Self {
        Self::with_port(cwd, Box::new(ConsolePort))
    }

    /// Web and one-shot use: never blocks on a question.
    pub fn non_interactive(cwd: PathBuf) -> Self {
        Self::with_port(cwd, Box::new(NonInteractivePort))
    }

    fn with_port(cwd: PathBuf, port: Box<dyn InteractionPort>) -> Self {
        Self::new(ShellContext::new(
            cwd,
            Box::new(OsFilesystem),
            Box::new(SysinfoStats::new()),
            port,
        ))
    }

    pub fn cwd(&self) -> &Path {
        &self.ctx.cwd
    }

    /// Runs one line of input. Never fails: problems come back as output lines.
    pub fn execute(&mut self, input: &str) -> Output {
        let invocation = self.normalizer.normalize(input).tokenize();
        if invocation.command.is_empty() {
            return Output::new();
        }
        debug!("invocation: {} {:?}", invocation.command, invocation.args);

        let Some(op) = self.registry.resolve(&invocation.command).copied() else {
            return self.unknown_command(&invocation.command);
        };

        let arity = op.kind.arity();
        if !arity.accepts(invocation.args.len()) {
            let err = ShellError::InvalidArguments(format!(
                "Invalid arguments for command '{}': expected {}",
                op.name, arity
            ));
            return Output::error(err.render());
        }

        debug!("dispatch: {} -> {:?}", op.name, op.kind);
        let handler = commands::builtins::handler_for(op.kind);
        match handler.execute(&invocation.args, &mut self.ctx) {
            Ok(output) => output,
            Err(e) => {
                warn!("{} failed: {}", op.name, e);
                Output::error(e.render())
            }
        }
    }

    fn unknown_command(&self, command: &str) -> Output {
        let suggestions = suggest::close_matches(command, self.registry.names());
        if suggestions.is_empty() {
            Output::error(format!("Unknown command '{}'. Type 'help' for available commands.", command))
        } else {
            Output::error(format!(
                "Unknown command '{}'. Did you mean: {}?",
                command,
                suggestions.join(", ")
            ))
        }
    }
}
