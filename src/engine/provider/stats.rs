// System statistics provider, backed by sysinfo

use std::path::Path;
use sysinfo::{Disks, ProcessesToUpdate, System};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MemoryStats {
    pub percent: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiskUsage {
    pub total: u64,
    pub used: u64,
    pub free: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessEntry {
    pub pid: u32,
    pub name: String,
}

pub trait SystemStats: Send {
    /// Usage since the previous call, like a sampling `top`.
    fn cpu_percent(&mut self) -> f32;
    fn memory(&mut self) -> MemoryStats;
    /// Usage of the filesystem that holds `path`, if one can be found.
    fn disk(&mut self, path: &Path) -> Option<DiskUsage>;
    fn processes(&mut self) -> Vec<ProcessEntry>;
}

pub struct SysinfoStats {
    sys: System,
}

impl SysinfoStats {
    pub fn new() -> Self {
        let mut sys = System::new();
        // Baseline sample so the first `cpu` call has something to compare to.
        sys.refresh_cpu_usage();
        Self { sys }
    }
}

impl Default for SysinfoStats {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemStats for SysinfoStats {
    fn cpu_percent(&mut self) -> f32 {
        self.sys.refresh_cpu_usage();
        self.sys.global_cpu_usage()
    }

    fn memory(&mut self) -> MemoryStats {
        self.sys.refresh_memory();
        let total = self.sys.total_memory();
        if total == 0 {
            return MemoryStats { percent: 0.0 };
        }
        let used = total.saturating_sub(self.sys.available_memory());
        MemoryStats { percent: used as f64 * 100.0 / total as f64 }
    }

    fn disk(&mut self, path: &Path) -> Option<DiskUsage> {
        let disks = Disks::new_with_refreshed_list();
        disks
            .list()
            .iter()
            .filter(|d| path.starts_with(d.mount_point()))
            .max_by_key(|d| d.mount_point().components().count())
            .map(|d| {
                let total = d.total_space();
                let free = d.available_space();
                DiskUsage { total, used: total.saturating_sub(free), free }
            })
    }

    fn processes(&mut self) -> Vec<ProcessEntry> {
        self.sys.refresh_processes(ProcessesToUpdate::All, true);
        let mut entries: Vec<ProcessEntry> = self
            .sys
            .processes()
            .iter()
            .filter_map(|(pid, process)| {
                let name = process.name().to_string_lossy().into_owned();
                // Unreadable entries come back nameless; skip them.
                if name.is_empty() {
                    None
                } else {
                    Some(ProcessEntry { pid: pid.as_u32(), name })
                }
            })
            .collect();
        entries.sort_by_key(|p| p.pid);
        entries
    }
}
