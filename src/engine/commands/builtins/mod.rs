pub mod fs;
pub mod env;
pub mod sys;
pub mod util;

use crate::engine::commands::Executable;
use crate::engine::registry::OperationKind;

/// The handler behind each operation. Aliases resolve to the same kind and so
/// to the same handler.
pub fn handler_for(kind: OperationKind) -> &'static dyn Executable {
    match kind {
        // FS commands
        OperationKind::Ls => &fs::ls::LsCommand,
        OperationKind::Mkdir => &fs::mkdir::MkdirCommand,
        OperationKind::Rm => &fs::rm::RmCommand,

        // Env/Navigation
        OperationKind::Cd => &env::cd::CdCommand,
        OperationKind::Pwd => &env::pwd::PwdCommand,
        OperationKind::Exit => &env::exit::ExitCommand,

        // System monitoring
        OperationKind::Cpu => &sys::cpu::CpuCommand,
        OperationKind::Mem => &sys::mem::MemCommand,
        OperationKind::Df => &sys::df::DfCommand,
        OperationKind::Ps => &sys::ps::PsCommand,

        // Utility
        OperationKind::Help => &util::help::HelpCommand,
        OperationKind::Clear => &util::clear::ClearCommand,
    }
}
