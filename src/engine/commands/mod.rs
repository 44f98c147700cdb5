pub mod builtins;

use crate::engine::context::ShellContext;
use crate::engine::error::ShellError;
use crate::engine::output::Output;

pub trait Executable: Send + Sync {
    /// `args` excludes the command name. Arity is already checked by the caller.
    fn execute(&self, args: &[String], ctx: &mut ShellContext) -> Result<Output, ShellError>;
}
