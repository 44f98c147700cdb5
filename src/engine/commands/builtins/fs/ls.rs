// Ls command

use chrono::{DateTime, Local};
use log::warn;
use crate::engine::commands::Executable;
use crate::engine::context::ShellContext;
use crate::engine::error::{FsErrorKind, ShellError};
use crate::engine::output::{Output, Tone};
use crate::engine::provider::EntryStat;

pub struct LsCommand;
impl Executable for LsCommand {
    fn execute(&self, args: &[String], ctx: &mut ShellContext) -> Result<Output, ShellError> {
        let mut show_hidden = false;
        let mut detailed = false;

        // Words that are not flags ("show files in docs") are ignored.
        for arg in args.iter().filter(|a| a.starts_with('-')) {
            // Combined flags ("-al") and a phrase remainder ("-a -l") both work.
            for flag in arg.chars().filter(|c| *c != '-' && !c.is_whitespace()) {
                match flag {
                    'a' => show_hidden = true,
                    'l' => detailed = true,
                    other => {
                        return Err(ShellError::InvalidArguments(format!("ls: unknown option '-{}'", other)));
                    }
                }
            }
        }

        let dir = ctx.cwd.clone();
        let names = ctx.fs.list(&dir).map_err(|e| match e.kind {
            FsErrorKind::PermissionDenied => {
                ShellError::PermissionDenied("Permission denied to list directory contents".to_string())
            }
            FsErrorKind::NotFound => ShellError::NotFound("Directory not found".to_string()),
            _ => ShellError::Unclassified(format!("Unable to list directory - {}", e)),
        })?;

        let mut dirs = Vec::new();
        let mut files = Vec::new();
        for name in names {
            if !show_hidden && name.starts_with('.') {
                continue;
            }
            let stat = match ctx.fs.stat(&dir.join(&name)) {
                Ok(stat) => Some(stat),
                Err(e) => {
                    // Dangling links and entries that vanished mid-listing.
                    warn!("ls: cannot stat '{}': {}", name, e);
                    None
                }
            };
            if stat.as_ref().is_some_and(|s| s.is_dir) {
                dirs.push((name, stat));
            } else {
                files.push((name, stat));
            }
        }
        dirs.sort_by(|a, b| a.0.cmp(&b.0));
        files.sort_by(|a, b| a.0.cmp(&b.0));

        let mut output = Output::new();
        for (name, stat) in dirs.into_iter().chain(files) {
            let is_dir = stat.as_ref().is_some_and(|s| s.is_dir);
            let tone = if is_dir { Tone::Directory } else { Tone::Normal };
            if detailed {
                if let Some(stat) = stat {
                    output.push(tone, detailed_line(&name, &stat));
                }
            } else if is_dir {
                output.push(tone, format!("{}/", name));
            } else {
                output.push(tone, name);
            }
        }
        Ok(output)
    }
}

fn detailed_line(name: &str, stat: &EntryStat) -> String {
    let kind = if stat.is_dir { 'd' } else { '-' };
    let modified: DateTime<Local> = stat.modified.into();
    format!(
        "{}{:03o} {:>8} {} {}",
        kind,
        stat.permissions,
        stat.size,
        modified.format("%Y-%m-%d %H:%M"),
        name
    )
}
