use anyhow::Result;
use std::path::PathBuf;
use crate::engine::Shell;
use crate::engine::output::DisplayMode;

pub fn handle_run(cwd: PathBuf, line: &str, mode: DisplayMode) -> Result<()> {
    let mut shell = Shell::non_interactive(cwd);
    let output = shell.execute(line);
    if !output.is_empty() {
        println!("{}", output.render(mode));
    }
    Ok(())
}
