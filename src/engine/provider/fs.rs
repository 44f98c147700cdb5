// Filesystem provider

use crate::engine::error::FsError;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryStat {
    pub is_dir: bool,
    pub size: u64,
    pub modified: SystemTime,
    /// Permission bits, e.g. 0o755.
    pub permissions: u32,
}

pub trait Filesystem: Send {
    fn list(&self, dir: &Path) -> Result<Vec<String>, FsError>;
    fn stat(&self, path: &Path) -> Result<EntryStat, FsError>;
    /// Validates `path` as a directory and returns its canonical form.
    fn change_dir(&self, path: &Path) -> Result<PathBuf, FsError>;
    /// Creates `path` and any missing parents. Existing directories are fine.
    fn make_dirs(&self, path: &Path) -> Result<(), FsError>;
    /// Removes a file, or a directory with everything below it.
    fn remove(&self, path: &Path) -> Result<(), FsError>;
    fn exists(&self, path: &Path) -> bool;
}

pub struct OsFilesystem;

impl Filesystem for OsFilesystem {
    fn list(&self, dir: &Path) -> Result<Vec<String>, FsError> {
        let mut names = Vec::new();
        for entry in fs::read_dir(dir)? {
            names.push(entry?.file_name().to_string_lossy().into_owned());
        }
        Ok(names)
    }

    fn stat(&self, path: &Path) -> Result<EntryStat, FsError> {
        let meta = fs::metadata(path)?;
        Ok(EntryStat {
            is_dir: meta.is_dir(),
            size: meta.len(),
            modified: meta.modified()?,
            permissions: permission_bits(&meta),
        })
    }

    fn change_dir(&self, path: &Path) -> Result<PathBuf, FsError> {
        let meta = fs::metadata(path)?;
        if !meta.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::NotADirectory,
                format!("Not a directory: '{}'", path.display()),
            )
            .into());
        }
        Ok(path.canonicalize()?)
    }

    fn make_dirs(&self, path: &Path) -> Result<(), FsError> {
        fs::create_dir_all(path)?;
        Ok(())
    }

    fn remove(&self, path: &Path) -> Result<(), FsError> {
        // symlink_metadata so a link to a directory removes the link only
        let meta = fs::symlink_metadata(path)?;
        if meta.is_dir() {
            fs::remove_dir_all(path)?;
        } else {
            fs::remove_file(path)?;
        }
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        fs::symlink_metadata(path).is_ok()
    }
}

#[cfg(unix)]
fn permission_bits(meta: &fs::Metadata) -> u32 {
    use std::os::unix::fs::PermissionsExt;
    meta.permissions().mode() & 0o777
}

#[cfg(not(unix))]
fn permission_bits(meta: &fs::Metadata) -> u32 {
    match (meta.is_dir(), meta.permissions().readonly()) {
        (true, true) => 0o555,
        (true, false) => 0o777,
        (false, true) => 0o444,
        (false, false) => 0o666,
    }
}
