// Help command

use crate::engine::commands::Executable;
use crate::engine::context::ShellContext;
use crate::engine::error::ShellError;
use crate::engine::output::{Output, Tone};

const HELP_TEXT: &[(&str, &str)] = &[
    ("ls", "List files and folders in current directory"),
    ("pwd", "Print current working directory"),
    ("cd <path>", "Change directory"),
    ("mkdir <name>", "Make new directory (supports multiple dirs)"),
    ("rm <name>", "Remove file or directory (supports multiple items)"),
    ("cpu", "Show CPU usage"),
    ("mem", "Show memory usage"),
    ("df", "Show disk space"),
    ("ps", "Show running processes"),
    ("dir", "Alias for ls - list files"),
    ("del", "Alias for rm - delete files"),
    ("help", "Display this help message"),
    ("clear", "Clear the terminal screen"),
    ("exit", "Exit the terminal"),
];

pub struct HelpCommand;
impl Executable for HelpCommand {
    fn execute(&self, _args: &[String], _ctx: &mut ShellContext) -> Result<Output, ShellError> {
        let mut output = Output::new()
            .line(Tone::Normal, "")
            .line(Tone::Normal, "Available Commands:");
        for (cmd, desc) in HELP_TEXT {
            output.push(Tone::Normal, format!("{:15} - {}", cmd, desc));
        }
        Ok(output)
    }
}
