// Command output, rendered by the front end

use colored::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    #[default]
    Plain,
    Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Normal,
    Success,
    Error,
    Directory,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub tone: Tone,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Control {
    #[default]
    Continue,
    Exit,
}

/// Result of one `execute` call. Errors are already folded into lines.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Output {
    pub lines: Vec<Line>,
    pub control: Control,
}

impl Output {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, tone: Tone, text: impl Into<String>) {
        self.lines.push(Line { tone, text: text.into() });
    }

    pub fn line(mut self, tone: Tone, text: impl Into<String>) -> Self {
        self.push(tone, text);
        self
    }

    pub fn normal(text: impl Into<String>) -> Self {
        Self::new().line(Tone::Normal, text)
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new().line(Tone::Success, text)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new().line(Tone::Error, text)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn should_exit(&self) -> bool {
        self.control == Control::Exit
    }

    pub fn render(&self, mode: DisplayMode) -> String {
        self.lines
            .iter()
            .map(|l| render_line(l, mode))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn render_line(line: &Line, mode: DisplayMode) -> String {
    if mode == DisplayMode::Plain {
        return line.text.clone();
    }
    match line.tone {
        Tone::Normal => line.text.clone(),
        Tone::Success => line.text.green().to_string(),
        Tone::Error => line.text.red().to_string(),
        Tone::Directory => line.text.blue().to_string(),
    }
}
