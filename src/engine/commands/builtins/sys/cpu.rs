// Cpu command

use crate::engine::commands::Executable;
use crate::engine::context::ShellContext;
use crate::engine::error::ShellError;
use crate::engine::output::Output;

pub struct CpuCommand;
impl Executable for CpuCommand {
    fn execute(&self, _args: &[String], ctx: &mut ShellContext) -> Result<Output, ShellError> {
        Ok(Output::normal(format!("CPU Usage: {:.1}%", ctx.stats.cpu_percent())))
    }
}
