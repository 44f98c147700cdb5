use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};
use crate::engine::Shell;
use crate::engine::context::ShellContext;
use crate::engine::interaction::{InteractionPort, NonInteractivePort, is_yes};
use crate::engine::output::DisplayMode;
use crate::engine::provider::{DiskUsage, MemoryStats, OsFilesystem, ProcessEntry, SystemStats};

struct FakeStats;

impl SystemStats for FakeStats {
    fn cpu_percent(&mut self) -> f32 {
        12.5
    }

    fn memory(&mut self) -> MemoryStats {
        MemoryStats { percent: 42.0 }
    }

    fn disk(&mut self, _path: &Path) -> Option<DiskUsage> {
        let gib = 1u64 << 30;
        Some(DiskUsage { total: 100 * gib, used: 60 * gib, free: 40 * gib })
    }

    fn processes(&mut self) -> Vec<ProcessEntry> {
        vec![
            ProcessEntry { pid: 1, name: "init".to_string() },
            ProcessEntry { pid: 42, name: "nlsh".to_string() },
        ]
    }
}

/// Interactive port that answers from a script instead of stdin.
struct ScriptedPort {
    answers: VecDeque<String>,
}

impl ScriptedPort {
    fn new(answers: &[&str]) -> Self {
        Self { answers: answers.iter().map(|s| s.to_string()).collect() }
    }
}

impl InteractionPort for ScriptedPort {
    fn is_interactive(&self) -> bool {
        true
    }

    fn confirm(&mut self, _prompt: &str) -> bool {
        self.answers.pop_front().is_some_and(|a| is_yes(&a))
    }

    fn prompt_line(&mut self, _prompt: &str) -> Option<String> {
        self.answers.pop_front()
    }

    fn clear_screen(&mut self) -> bool {
        true
    }
}

fn shell_with(cwd: &Path, port: Box<dyn InteractionPort>) -> Shell {
    let mut ctx = ShellContext::new(cwd.to_path_buf(), Box::new(OsFilesystem), Box::new(FakeStats), port);
    ctx.home = Some(cwd.to_path_buf());
    Shell::new(ctx)
}

fn web_shell(cwd: &Path) -> Shell {
    shell_with(cwd, Box::new(NonInteractivePort))
}

fn run(shell: &mut Shell, input: &str) -> String {
    shell.execute(input).render(DisplayMode::Plain)
}

fn canonical(p: &Path) -> PathBuf {
    p.canonicalize().unwrap()
}

#[test]
fn test_mkdir_multiple_names() {
    let dir = tempfile::tempdir().unwrap();
    let mut shell = web_shell(dir.path());

    let out = run(&mut shell, "mkdir a b");
    assert_eq!(
        out,
        "Directory 'a' created successfully.\nDirectory 'b' created successfully."
    );
    assert!(dir.path().join("a").is_dir());
    assert!(dir.path().join("b").is_dir());
}

#[test]
fn test_mkdir_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let mut shell = web_shell(dir.path());

    let first = run(&mut shell, "mkdir x");
    let second = run(&mut shell, "mkdir x");
    assert_eq!(first, "Directory 'x' created successfully.");
    assert_eq!(second, first);
}

#[test]
fn test_mkdir_nested() {
    let dir = tempfile::tempdir().unwrap();
    let mut shell = web_shell(dir.path());
    run(&mut shell, "mkdir deep/er/still");
    assert!(dir.path().join("deep/er/still").is_dir());
}

#[test]
fn test_mkdir_without_names_non_interactive() {
    let dir = tempfile::tempdir().unwrap();
    let mut shell = web_shell(dir.path());
    assert_eq!(run(&mut shell, "mkdir"), "Error: mkdir requires at least one directory name");
}

#[test]
fn test_mkdir_without_names_prompts_when_interactive() {
    let dir = tempfile::tempdir().unwrap();
    let mut shell = shell_with(dir.path(), Box::new(ScriptedPort::new(&["reports"])));
    assert_eq!(run(&mut shell, "mkdir"), "Directory 'reports' created successfully.");
    assert!(dir.path().join("reports").is_dir());

    let mut shell = shell_with(dir.path(), Box::new(ScriptedPort::new(&["  "])));
    assert_eq!(run(&mut shell, "mkdir"), "Error: Directory name cannot be empty");
}

#[test]
fn test_mkdir_over_existing_file_reports_per_name() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("taken"), "x").unwrap();
    let mut shell = web_shell(dir.path());

    let out = run(&mut shell, "mkdir taken fresh");
    let lines: Vec<_> = out.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "Error: 'taken' already exists and is not a directory");
    assert_eq!(lines[1], "Directory 'fresh' created successfully.");
}

#[test]
fn test_rm_missing_does_not_abort() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "x").unwrap();
    let mut shell = web_shell(dir.path());

    let out = run(&mut shell, "rm zzz a.txt");
    let lines: Vec<_> = out.lines().collect();
    assert!(lines[0].contains("zzz"));
    assert!(lines[0].contains("not found"));
    assert_eq!(lines[1], "Removing 'a.txt' (no confirmation)");
    assert_eq!(lines[2], "Removed 'a.txt' successfully.");
    assert!(!dir.path().join("a.txt").exists());
}

#[test]
fn test_rm_directory_recursively() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("tree/inner")).unwrap();
    fs::write(dir.path().join("tree/inner/f.txt"), "x").unwrap();
    let mut shell = web_shell(dir.path());

    run(&mut shell, "del tree");
    assert!(!dir.path().join("tree").exists());
}

#[test]
fn test_rm_interactive_confirmation() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("keep.txt"), "x").unwrap();
    fs::write(dir.path().join("drop.txt"), "x").unwrap();
    let mut shell = shell_with(dir.path(), Box::new(ScriptedPort::new(&["n", "yes"])));

    let out = run(&mut shell, "rm keep.txt drop.txt");
    assert_eq!(
        out,
        "Operation cancelled for 'keep.txt'.\nRemoved 'drop.txt' successfully."
    );
    assert!(dir.path().join("keep.txt").exists());
    assert!(!dir.path().join("drop.txt").exists());
}

#[test]
fn test_rm_without_names() {
    let dir = tempfile::tempdir().unwrap();
    let mut shell = web_shell(dir.path());
    assert_eq!(run(&mut shell, "rm"), "Error: No files or directories specified");
}

#[test]
fn test_unknown_command_suggestions() {
    let dir = tempfile::tempdir().unwrap();
    let mut shell = web_shell(dir.path());

    let out = run(&mut shell, "lst");
    assert!(out.starts_with("Unknown command 'lst'. Did you mean: "));
    assert!(out.contains("ls"));

    assert_eq!(run(&mut shell, "hlep"), "Unknown command 'hlep'. Did you mean: help?");
    assert_eq!(run(&mut shell, "pdw"), "Unknown command 'pdw'. Did you mean: pwd?");
    assert_eq!(
        run(&mut shell, "zzzzz"),
        "Unknown command 'zzzzz'. Type 'help' for available commands."
    );
}

#[test]
fn test_ls_detailed() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("file.txt"), "hello").unwrap();
    fs::create_dir(dir.path().join("sub")).unwrap();
    let mut shell = web_shell(dir.path());

    let out = run(&mut shell, "ls -l");
    let lines: Vec<_> = out.lines().collect();
    assert_eq!(lines.len(), 2);

    let dir_fields: Vec<_> = lines[0].split_whitespace().collect();
    assert!(dir_fields[0].starts_with('d'));
    assert!(dir_fields[0][1..].chars().all(|c| c.is_ascii_digit()));
    assert_eq!(dir_fields.last(), Some(&"sub"));

    let file_fields: Vec<_> = lines[1].split_whitespace().collect();
    assert!(file_fields[0].starts_with('-'));
    assert_eq!(file_fields[1], "5");
    assert_eq!(file_fields[2].len(), "2024-01-01".len());
    assert_eq!(file_fields[3].len(), "12:00".len());
    assert_eq!(file_fields[4], "file.txt");
    // Size is right-aligned in an 8-wide column.
    assert_eq!(&lines[1][4..14], "        5 ");
}

#[test]
fn test_ls_simple_order_and_hidden() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("b.txt"), "").unwrap();
    fs::write(dir.path().join("a.txt"), "").unwrap();
    fs::write(dir.path().join(".secret"), "").unwrap();
    fs::create_dir(dir.path().join("zdir")).unwrap();
    fs::create_dir(dir.path().join("adir")).unwrap();
    let mut shell = web_shell(dir.path());

    assert_eq!(run(&mut shell, "ls"), "adir/\nzdir/\na.txt\nb.txt");
    assert_eq!(run(&mut shell, "ls -a"), "adir/\nzdir/\n.secret\na.txt\nb.txt");
    assert_eq!(run(&mut shell, "dir"), run(&mut shell, "ls"));
    assert_eq!(run(&mut shell, "list files"), run(&mut shell, "ls"));
    assert_eq!(run(&mut shell, "show files in adir"), run(&mut shell, "ls"));
}

#[test]
fn test_ls_phrase_with_flags_and_bad_flag() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(".hidden"), "").unwrap();
    let mut shell = web_shell(dir.path());

    let out = run(&mut shell, "show files -a -l");
    assert!(out.ends_with(" .hidden"));
    assert_eq!(run(&mut shell, "ls -z"), "Error: ls: unknown option '-z'");
}

#[test]
fn test_cd_and_pwd() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("sub")).unwrap();
    let mut shell = web_shell(dir.path());

    assert_eq!(run(&mut shell, "cd sub"), "");
    assert_eq!(shell.cwd(), canonical(&dir.path().join("sub")));
    assert_eq!(run(&mut shell, "pwd"), canonical(&dir.path().join("sub")).display().to_string());

    run(&mut shell, "cd ..");
    assert_eq!(shell.cwd(), canonical(dir.path()));
}

#[test]
fn test_cd_natural_language_and_home() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("my docs")).unwrap();
    let mut shell = web_shell(dir.path());

    run(&mut shell, "go to folder my docs");
    assert_eq!(shell.cwd(), canonical(&dir.path().join("my docs")));

    run(&mut shell, "cd ~");
    assert_eq!(shell.cwd(), canonical(dir.path()));
}

#[test]
fn test_cd_errors() {
    let dir = tempfile::tempdir().unwrap();
    let mut shell = web_shell(dir.path());

    assert_eq!(run(&mut shell, "cd nowhere"), "Error: Directory not found");
    assert_eq!(
        run(&mut shell, "cd"),
        "Error: Invalid arguments for command 'cd': expected exactly 1 argument"
    );
    assert_eq!(
        run(&mut shell, "pwd extra"),
        "Error: Invalid arguments for command 'pwd': expected no arguments"
    );
    assert_eq!(shell.cwd(), dir.path());
}

#[test]
fn test_cd_into_file_is_unexpected_error() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("file.txt"), "").unwrap();
    let mut shell = web_shell(dir.path());

    let out = run(&mut shell, "cd file.txt");
    assert!(out.starts_with("Unexpected error: "), "{}", out);
    assert!(out.contains("file.txt"));
    assert_eq!(shell.cwd(), dir.path());
}

#[test]
fn test_system_snapshots() {
    let dir = tempfile::tempdir().unwrap();
    let mut shell = web_shell(dir.path());

    assert_eq!(run(&mut shell, "cpu"), "CPU Usage: 12.5%");
    assert_eq!(run(&mut shell, "show memory"), "Memory Usage: 42.0%");
    assert_eq!(
        run(&mut shell, "df"),
        "Disk Total: 100.00 GB\nDisk Used: 60.00 GB\nDisk Free: 40.00 GB"
    );
    assert_eq!(run(&mut shell, "running processes"), "PID: 1, Name: init\nPID: 42, Name: nlsh");
}

#[test]
fn test_help_table() {
    let dir = tempfile::tempdir().unwrap();
    let mut shell = web_shell(dir.path());

    let out = run(&mut shell, "help me");
    let lines: Vec<_> = out.lines().collect();
    assert_eq!(lines[0], "");
    assert_eq!(lines[1], "Available Commands:");
    assert_eq!(lines[2], "ls              - List files and folders in current directory");
    assert_eq!(lines.last(), Some(&"exit            - Exit the terminal"));
}

#[test]
fn test_clear_and_exit_depend_on_context() {
    let dir = tempfile::tempdir().unwrap();

    let mut web = web_shell(dir.path());
    assert_eq!(run(&mut web, "clear screen"), "[screen cleared]");
    let out = web.execute("exit");
    assert!(!out.should_exit());
    assert_eq!(
        out.render(DisplayMode::Plain),
        "Error: 'exit' is only available in the interactive terminal"
    );

    let mut term = shell_with(dir.path(), Box::new(ScriptedPort::new(&[])));
    assert!(term.execute("clear").is_empty());
    let out = term.execute("exit");
    assert!(out.should_exit());
    assert_eq!(out.render(DisplayMode::Plain), "Goodbye!");
    assert!(term.execute("exit now").should_exit());
}

#[test]
fn test_blank_input() {
    let dir = tempfile::tempdir().unwrap();
    let mut shell = web_shell(dir.path());
    assert!(shell.execute("   ").is_empty());
}
