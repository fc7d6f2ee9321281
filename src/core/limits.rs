/*!
 * Limits and Constants
 *
 * Centralized location for default values and magic numbers.
 */

use super::types::{Fd, Pid, Priority};

// =============================================================================
// PROCESS DEFAULTS
// =============================================================================

/// Baseline priority assigned to new records
pub const DEFAULT_PRIORITY: Priority = 0;

/// First pid handed out by a process table
/// Pid 0 is left unused so it can never be mistaken for a real process
pub const FIRST_PID: Pid = 1;

/// Descriptors every record starts with: stdin, stdout, stderr
pub const STANDARD_FDS: [Fd; 3] = [0, 1, 2];

/// Upper bound on descriptors tracked per record
pub const MAX_OPEN_FILES: usize = 10;

// =============================================================================
// QUEUE DEFAULTS
// =============================================================================

/// Initial backing capacity for a priority queue
/// [PERF] Avoids the first few reallocations for typical demo workloads
pub const DEFAULT_QUEUE_CAPACITY: usize = 16;

// =============================================================================
// ENVIRONMENT
// =============================================================================

pub const ENV_QUEUE_CAPACITY: &str = "PROCESS_QUEUE_CAPACITY";
pub const ENV_DEFAULT_PRIORITY: &str = "PROCESS_QUEUE_DEFAULT_PRIORITY";
pub const ENV_OUTPUT: &str = "PROCESS_QUEUE_OUTPUT";
pub const ENV_TRACE_JSON: &str = "PROCESS_QUEUE_TRACE_JSON";
