/*!
 * Process Queue Library
 * Process records and a priority-ordered scheduling queue
 */

pub mod core;
pub mod monitoring;
pub mod process;

// Re-exports
pub use crate::core::data_structures::{BinaryMaxHeap, Compare};
pub use crate::core::errors::{Error, ProcessError, ProcessResult, QueueError, QueueResult};
pub use crate::core::types::{CpuTime, Fd, Pid, Priority};
pub use crate::core::{OutputFormat, QueueConfig};
pub use monitoring::{init_tracing, span_operation};
pub use process::{
    ByLeastUsage, ByPriority, PriorityProcessQueue, ProcessHandle, ProcessRecord,
    ProcessSnapshot, ProcessState, ProcessTable,
};
