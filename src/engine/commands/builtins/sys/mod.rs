pub mod cpu;
pub mod mem;
pub mod df;
pub mod ps;

/// Bytes per GiB.
pub const GIB: f64 = (1u64 << 30) as f64;
