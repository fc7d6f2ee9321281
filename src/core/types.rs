/*!
 * Core Types
 * Common types used across the crate
 */

/// Process ID type
pub type Pid = u32;

/// File descriptor type
pub type Fd = u32;

/// Accumulated CPU usage, in scheduler ticks
pub type CpuTime = u64;

/// Priority level (signed, higher is more important)
pub type Priority = i32;
