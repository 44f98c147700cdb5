// Mkdir command

use log::warn;
use crate::engine::commands::Executable;
use crate::engine::context::ShellContext;
use crate::engine::error::{FsErrorKind, ShellError};
use crate::engine::output::{Output, Tone};

pub struct MkdirCommand;
impl Executable for MkdirCommand {
    fn execute(&self, args: &[String], ctx: &mut ShellContext) -> Result<Output, ShellError> {
        let names = if args.is_empty() {
            if !ctx.port.is_interactive() {
                return Err(ShellError::InvalidArguments("mkdir requires at least one directory name".to_string()));
            }
            match ctx.port.prompt_line("Enter new directory name: ") {
                Some(name) if !name.trim().is_empty() => vec![name.trim().to_string()],
                _ => return Err(ShellError::InvalidArguments("Directory name cannot be empty".to_string())),
            }
        } else {
            args.to_vec()
        };

        let mut output = Output::new();
        for name in &names {
            match create_one(name, ctx) {
                Ok(()) => output.push(Tone::Success, format!("Directory '{}' created successfully.", name)),
                Err(e) => {
                    warn!("mkdir '{}': {}", name, e);
                    output.push(Tone::Error, e.render());
                }
            }
        }
        Ok(output)
    }
}

fn create_one(name: &str, ctx: &ShellContext) -> Result<(), ShellError> {
    if name.trim().is_empty() {
        return Err(ShellError::InvalidArguments("Directory name cannot be empty".to_string()));
    }
    let path = ctx.resolve_path(&ctx.expand_home(name));
    ctx.fs.make_dirs(&path).map_err(|e| match e.kind {
        FsErrorKind::PermissionDenied => {
            ShellError::PermissionDenied(format!("Permission denied to create directory '{}'", name))
        }
        FsErrorKind::AlreadyExists => {
            ShellError::AlreadyExists(format!("'{}' already exists and is not a directory", name))
        }
        FsErrorKind::NotFound => ShellError::NotFound(format!("Parent of '{}' not found", name)),
        FsErrorKind::Other => ShellError::Unclassified(format!("Unable to create directory '{}' - {}", name, e)),
    })
}
