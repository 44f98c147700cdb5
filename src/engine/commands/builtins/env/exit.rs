// Exit command

use crate::engine::commands::Executable;
use crate::engine::context::ShellContext;
use crate::engine::error::ShellError;
use crate::engine::output::{Control, Output};

pub struct ExitCommand;
impl Executable for ExitCommand {
    fn execute(&self, _args: &[String], ctx: &mut ShellContext) -> Result<Output, ShellError> {
        if !ctx.port.is_interactive() {
            return Err(ShellError::InvalidArguments(
                "'exit' is only available in the interactive terminal".to_string(),
            ));
        }
        let mut output = Output::success("Goodbye!");
        output.control = Control::Exit;
        Ok(output)
    }
}
