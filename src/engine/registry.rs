// Operation registry: command names and aliases mapped to a closed set of operations

use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Ls,
    Pwd,
    Cd,
    Mkdir,
    Rm,
    Cpu,
    Mem,
    Df,
    Ps,
    Help,
    Clear,
    Exit,
}

/// How many arguments an operation takes. Checked before the handler runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    None,
    Exactly(usize),
    Any,
}

impl Arity {
    pub fn accepts(self, count: usize) -> bool {
        match self {
            Arity::None => count == 0,
            Arity::Exactly(n) => count == n,
            Arity::Any => true,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arity::None => write!(f, "no arguments"),
            Arity::Exactly(1) => write!(f, "exactly 1 argument"),
            Arity::Exactly(n) => write!(f, "exactly {} arguments", n),
            Arity::Any => write!(f, "any number of arguments"),
        }
    }
}

impl OperationKind {
    pub const ALL: [OperationKind; 12] = [
        OperationKind::Ls,
        OperationKind::Pwd,
        OperationKind::Cd,
        OperationKind::Mkdir,
        OperationKind::Rm,
        OperationKind::Cpu,
        OperationKind::Mem,
        OperationKind::Df,
        OperationKind::Ps,
        OperationKind::Help,
        OperationKind::Clear,
        OperationKind::Exit,
    ];

    pub fn name(self) -> &'static str {
        match self {
            OperationKind::Ls => "ls",
            OperationKind::Pwd => "pwd",
            OperationKind::Cd => "cd",
            OperationKind::Mkdir => "mkdir",
            OperationKind::Rm => "rm",
            OperationKind::Cpu => "cpu",
            OperationKind::Mem => "mem",
            OperationKind::Df => "df",
            OperationKind::Ps => "ps",
            OperationKind::Help => "help",
            OperationKind::Clear => "clear",
            OperationKind::Exit => "exit",
        }
    }

    pub fn arity(self) -> Arity {
        match self {
            OperationKind::Ls
            | OperationKind::Mkdir
            | OperationKind::Rm
            | OperationKind::Help
            | OperationKind::Exit => Arity::Any,
            OperationKind::Cd => Arity::Exactly(1),
            OperationKind::Pwd
            | OperationKind::Cpu
            | OperationKind::Mem
            | OperationKind::Df
            | OperationKind::Ps
            | OperationKind::Clear => Arity::None,
        }
    }
}

const ALIASES: &[(&str, OperationKind)] = &[("dir", OperationKind::Ls), ("del", OperationKind::Rm)];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operation {
    pub name: &'static str,
    pub alias_of: Option<&'static str>,
    pub kind: OperationKind,
}

/// Immutable after construction. Canonical names come first, aliases after.
pub struct Registry {
    entries: Vec<Operation>,
    index: HashMap<&'static str, usize>,
}

impl Registry {
    pub fn new() -> Self {
        let mut entries: Vec<Operation> = OperationKind::ALL
            .iter()
            .map(|&kind| Operation { name: kind.name(), alias_of: None, kind })
            .collect();
        for &(alias, kind) in ALIASES {
            entries.push(Operation { name: alias, alias_of: Some(kind.name()), kind });
        }

        let mut index = HashMap::new();
        for (i, op) in entries.iter().enumerate() {
            let previous = index.insert(op.name, i);
            debug_assert!(previous.is_none(), "duplicate command name: {}", op.name);
        }

        Self { entries, index }
    }

    pub fn resolve(&self, name: &str) -> Option<&Operation> {
        self.index.get(name).map(|&i| &self.entries[i])
    }

    /// Every registered name, canonical and alias, in registry order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|op| op.name)
    }

    pub fn complete(&self, prefix: &str) -> Vec<&'static str> {
        self.names().filter(|n| n.starts_with(prefix)).collect()
    }

    /// Completes the last whitespace-separated word of `line`.
    pub fn complete_line(&self, line: &str) -> Vec<&'static str> {
        match line.split_whitespace().last() {
            Some(word) => self.complete(word),
            None => Vec::new(),
        }
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
