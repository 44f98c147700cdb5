// Rm command

use log::{info, warn};
use crate::engine::commands::Executable;
use crate::engine::context::ShellContext;
use crate::engine::error::{FsErrorKind, ShellError};
use crate::engine::output::{Output, Tone};

pub struct RmCommand;
impl Executable for RmCommand {
    fn execute(&self, args: &[String], ctx: &mut ShellContext) -> Result<Output, ShellError> {
        if args.is_empty() {
            return Err(ShellError::InvalidArguments("No files or directories specified".to_string()));
        }

        let mut output = Output::new();
        for name in args {
            let path = ctx.resolve_path(&ctx.expand_home(name));
            if !ctx.fs.exists(&path) {
                let err = ShellError::NotFound(format!("File/Directory '{}' not found", name));
                output.push(Tone::Error, err.render());
                continue;
            }

            // Non-interactive ports say yes without asking.
            let prompt = format!("Are you sure you want to remove '{}'? (y/N): ", name);
            if !ctx.port.confirm(&prompt) {
                output.push(Tone::Normal, format!("Operation cancelled for '{}'.", name));
                continue;
            }
            if !ctx.port.is_interactive() {
                output.push(Tone::Normal, format!("Removing '{}' (no confirmation)", name));
            }

            match ctx.fs.remove(&path) {
                Ok(()) => {
                    info!("removed {}", path.display());
                    output.push(Tone::Success, format!("Removed '{}' successfully.", name));
                }
                Err(e) => {
                    let err = match e.kind {
                        FsErrorKind::PermissionDenied => {
                            ShellError::PermissionDenied(format!("Permission denied to remove '{}'", name))
                        }
                        FsErrorKind::NotFound => ShellError::NotFound(format!("File/Directory '{}' not found", name)),
                        _ => ShellError::Unclassified(format!("Unable to remove '{}' - {}", name, e)),
                    };
                    warn!("rm '{}': {}", name, e);
                    output.push(Tone::Error, err.render());
                }
            }
        }
        Ok(output)
    }
}
