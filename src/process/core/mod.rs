/*!
 * Process Core
 * Record and state types
 */

pub mod types;

pub use types::{ProcessRecord, ProcessSnapshot, ProcessState};
