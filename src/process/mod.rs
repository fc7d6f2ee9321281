/*!
 * Process Module
 * Process records, shared handles, the process table, and the priority queue
 */

pub mod core;
pub mod handle;
pub mod scheduler;
pub mod table;

// Re-export for convenience
pub use self::core::{ProcessRecord, ProcessSnapshot, ProcessState};
pub use handle::ProcessHandle;
pub use scheduler::{ByLeastUsage, ByPriority, Drain, PriorityProcessQueue};
pub use table::ProcessTable;
