// Pwd command

use crate::engine::commands::Executable;
use crate::engine::context::ShellContext;
use crate::engine::error::ShellError;
use crate::engine::output::Output;

pub struct PwdCommand;
impl Executable for PwdCommand {
    fn execute(&self, _args: &[String], ctx: &mut ShellContext) -> Result<Output, ShellError> {
        Ok(Output::success(ctx.cwd.display().to_string()))
    }
}
