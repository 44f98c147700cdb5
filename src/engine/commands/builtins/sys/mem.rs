// Mem command

use crate::engine::commands::Executable;
use crate::engine::context::ShellContext;
use crate::engine::error::ShellError;
use crate::engine::output::Output;

pub struct MemCommand;
impl Executable for MemCommand {
    fn execute(&self, _args: &[String], ctx: &mut ShellContext) -> Result<Output, ShellError> {
        Ok(Output::normal(format!("Memory Usage: {:.1}%", ctx.stats.memory().percent)))
    }
}
