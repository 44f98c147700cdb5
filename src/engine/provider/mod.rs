pub mod fs;
pub mod stats;

pub use fs::{EntryStat, Filesystem, OsFilesystem};
pub use stats::{DiskUsage, MemoryStats, ProcessEntry, SysinfoStats, SystemStats};
