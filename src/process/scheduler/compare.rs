/*!
 * Queue Ordering
 * Comparators for process handles
 */

use crate::core::data_structures::Compare;
use crate::process::ProcessHandle;

/// Orders handles by priority, highest first
///
/// Reads each record's priority at the moment of comparison. Ties are left
/// to the heap, so equal priorities come out in no particular order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ByPriority;

impl Compare<ProcessHandle> for ByPriority {
    #[inline]
    fn less(&self, a: &ProcessHandle, b: &ProcessHandle) -> bool {
        a.priority() < b.priority()
    }
}

/// Orders handles by accumulated CPU usage, least-used first
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ByLeastUsage;

impl Compare<ProcessHandle> for ByLeastUsage {
    #[inline]
    fn less(&self, a: &ProcessHandle, b: &ProcessHandle) -> bool {
        a.read().cpu_usage() > b.read().cpu_usage()
    }
}
