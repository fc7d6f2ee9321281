/*!
 * Data Structures
 *
 * Generic containers used by the process subsystem:
 * - Binary max-heap with an injected comparator
 */

pub mod heap;

pub use heap::{BinaryMaxHeap, Compare};
