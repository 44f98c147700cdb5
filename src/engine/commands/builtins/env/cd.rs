// Cd command

use log::info;
use crate::engine::commands::Executable;
use crate::engine::context::ShellContext;
use crate::engine::error::{FsErrorKind, ShellError};
use crate::engine::output::Output;

pub struct CdCommand;
impl Executable for CdCommand {
    fn execute(&self, args: &[String], ctx: &mut ShellContext) -> Result<Output, ShellError> {
        let Some(path) = args.first() else {
            return Err(ShellError::InvalidArguments("cd requires a directory".to_string()));
        };
        let path_str = ctx.expand_home(path);
        let target = ctx.resolve_path(&path_str);

        let canon = ctx.fs.change_dir(&target).map_err(|e| match e.kind {
            FsErrorKind::NotFound => ShellError::NotFound("Directory not found".to_string()),
            FsErrorKind::PermissionDenied => ShellError::PermissionDenied("Permission denied".to_string()),
            _ => ShellError::Unclassified(e.to_string()),
        })?;

        info!("cd {} -> {}", ctx.cwd.display(), canon.display());
        ctx.cwd = canon;
        Ok(Output::new())
    }
}
