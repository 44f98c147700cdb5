// Df command

use std::path::Path;
use crate::engine::commands::Executable;
use crate::engine::context::ShellContext;
use crate::engine::error::ShellError;
use crate::engine::output::{Output, Tone};
use super::GIB;

pub struct DfCommand;
impl Executable for DfCommand {
    fn execute(&self, _args: &[String], ctx: &mut ShellContext) -> Result<Output, ShellError> {
        // Root of the filesystem the shell is in: "/" on unix, the drive on windows.
        let root = ctx.cwd.ancestors().last().unwrap_or(Path::new("/")).to_path_buf();
        let usage = ctx.stats.disk(&root).ok_or_else(|| {
            ShellError::NotFound(format!("Unable to determine disk usage for '{}'", root.display()))
        })?;

        Ok(Output::new()
            .line(Tone::Normal, format!("Disk Total: {:.2} GB", usage.total as f64 / GIB))
            .line(Tone::Normal, format!("Disk Used: {:.2} GB", usage.used as f64 / GIB))
            .line(Tone::Normal, format!("Disk Free: {:.2} GB", usage.free as f64 / GIB)))
    }
}
