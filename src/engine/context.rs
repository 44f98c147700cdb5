use std::env;
use std::path::{Path, PathBuf};
use crate::engine::interaction::InteractionPort;
use crate::engine::provider::{Filesystem, SystemStats};

/// Everything a command may touch. `cwd` is the only state that outlives a call.
pub struct ShellContext {
    pub cwd: PathBuf,
    pub home: Option<PathBuf>,
    pub fs: Box<dyn Filesystem>,
    pub stats: Box<dyn SystemStats>,
    pub port: Box<dyn InteractionPort>,
}

impl ShellContext {
    pub fn new(
        cwd: PathBuf,
        fs: Box<dyn Filesystem>,
        stats: Box<dyn SystemStats>,
        port: Box<dyn InteractionPort>,
    ) -> Self {
        let home = env::var_os("HOME")
            .or_else(|| env::var_os("USERPROFILE"))
            .map(PathBuf::from);
        Self { cwd, home, fs, stats, port }
    }

    pub fn resolve_path(&self, path: &str) -> PathBuf {
        let p = Path::new(path);
        if p.is_absolute() {
            p.to_path_buf()
        } else {
            self.cwd.join(p)
        }
    }

    /// `~` and `~/...` expand to the home directory when one is known.
    pub fn expand_home(&self, path: &str) -> String {
        let Some(home) = &self.home else {
            return path.to_string();
        };
        if path == "~" {
            home.to_string_lossy().into_owned()
        } else if let Some(rest) = path.strip_prefix("~/") {
            home.join(rest).to_string_lossy().into_owned()
        } else {
            path.to_string()
        }
    }
}
