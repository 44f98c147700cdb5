// Ps command

use crate::engine::commands::Executable;
use crate::engine::context::ShellContext;
use crate::engine::error::ShellError;
use crate::engine::output::{Output, Tone};

pub struct PsCommand;
impl Executable for PsCommand {
    fn execute(&self, _args: &[String], ctx: &mut ShellContext) -> Result<Output, ShellError> {
        let mut output = Output::new();
        for proc in ctx.stats.processes() {
            output.push(Tone::Normal, format!("PID: {}, Name: {}", proc.pid, proc.name));
        }
        Ok(output)
    }
}
