/*!
 * Core Module
 * Fundamental types, limits, configuration, and error handling
 */

pub mod config;
pub mod data_structures;
pub mod errors;
pub mod limits;
pub mod serde;
pub mod types;

// Re-export for convenience
pub use config::{OutputFormat, QueueConfig};
pub use errors::*;
pub use types::*;
