// Clear command

use crate::engine::commands::Executable;
use crate::engine::context::ShellContext;
use crate::engine::error::ShellError;
use crate::engine::output::Output;

pub const CLEARED_PLACEHOLDER: &str = "[screen cleared]";

pub struct ClearCommand;
impl Executable for ClearCommand {
    fn execute(&self, _args: &[String], ctx: &mut ShellContext) -> Result<Output, ShellError> {
        if ctx.port.clear_screen() {
            Ok(Output::new())
        } else {
            Ok(Output::normal(CLEARED_PLACEHOLDER))
        }
    }
}
