/*!
 * Priority Process Queue
 * Max-heap of process handles ordered by a pluggable comparator
 */

use crate::core::config::QueueConfig;
use crate::core::data_structures::{BinaryMaxHeap, Compare};
use crate::core::errors::{QueueError, QueueResult};
use crate::core::limits::DEFAULT_QUEUE_CAPACITY;
use crate::process::{ProcessHandle, ProcessSnapshot};
use tracing::{debug, trace};

mod compare;
mod drain;

pub use compare::{ByLeastUsage, ByPriority};
pub use drain::Drain;

/// Priority-ordered queue of process handles
///
/// The queue never owns records: it holds [`ProcessHandle`]s, and dropping
/// the queue only releases those handles. There is no internal locking, so
/// callers sharing a queue across threads wrap it in their own mutex.
///
/// Changing a record's priority while it is queued does not reorder the
/// queue. There is no decrease/increase-key; pop and re-push the handle to
/// reposition it.
#[derive(Debug, Clone)]
pub struct PriorityProcessQueue<C = ByPriority> {
    heap: BinaryMaxHeap<ProcessHandle, C>,
}

impl PriorityProcessQueue<ByPriority> {
    /// Empty queue ordered by priority, highest first
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_QUEUE_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_comparator_and_capacity(ByPriority, capacity)
    }

    pub fn from_config(config: &QueueConfig) -> Self {
        Self::with_capacity(config.initial_capacity)
    }
}

impl Default for PriorityProcessQueue<ByPriority> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Compare<ProcessHandle>> PriorityProcessQueue<C> {
    /// Empty queue ordered by a caller-supplied comparator
    pub fn with_comparator(compare: C) -> Self {
        Self::with_comparator_and_capacity(compare, DEFAULT_QUEUE_CAPACITY)
    }

    pub fn with_comparator_and_capacity(compare: C, capacity: usize) -> Self {
        Self {
            heap: BinaryMaxHeap::with_capacity(compare, capacity),
        }
    }

    /// Insert a handle. O(log n)
    pub fn push(&mut self, handle: ProcessHandle) {
        trace!(
            pid = handle.pid(),
            priority = handle.priority(),
            queued = self.heap.len(),
            "push"
        );
        self.heap.push(handle);
    }

    /// Highest-ordered handle without removing it. O(1)
    pub fn peek(&self) -> QueueResult<&ProcessHandle> {
        self.heap.peek().ok_or(QueueError::EmptyQueue)
    }

    /// Remove and return the highest-ordered handle. O(log n)
    pub fn pop(&mut self) -> QueueResult<ProcessHandle> {
        let handle = self.heap.pop().ok_or(QueueError::EmptyQueue)?;
        trace!(
            pid = handle.pid(),
            priority = handle.priority(),
            remaining = self.heap.len(),
            "pop"
        );
        Ok(handle)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Drop every handle. Records stay alive for their other holders.
    pub fn clear(&mut self) {
        debug!(dropped = self.heap.len(), "clearing priority queue");
        self.heap.clear();
    }

    /// Pop handles in priority order
    ///
    /// Handles not consumed by the time the iterator is dropped are removed too.
    pub fn drain(&mut self) -> Drain<'_, C> {
        Drain::new(self)
    }

    /// Record views in backing-array order (root first, otherwise unsorted)
    pub fn snapshot(&self) -> Vec<ProcessSnapshot> {
        self.heap.as_slice().iter().map(ProcessHandle::snapshot).collect()
    }

    /// Consume the queue, returning handles highest-ordered first
    pub fn into_vec_by_priority(mut self) -> Vec<ProcessHandle> {
        let mut handles = Vec::with_capacity(self.len());
        handles.extend(self.drain());
        handles
    }

    pub fn comparator(&self) -> &C {
        self.heap.comparator()
    }
}

impl<C: Compare<ProcessHandle>> Extend<ProcessHandle> for PriorityProcessQueue<C> {
    fn extend<I: IntoIterator<Item = ProcessHandle>>(&mut self, iter: I) {
        for handle in iter {
            self.push(handle);
        }
    }
}

impl FromIterator<ProcessHandle> for PriorityProcessQueue<ByPriority> {
    fn from_iter<I: IntoIterator<Item = ProcessHandle>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::ProcessRecord;

    fn handle(pid: u32, priority: i32) -> ProcessHandle {
        ProcessRecord::with_priority(pid, format!("proc-{}", pid), priority)
            .unwrap()
            .into()
    }

    fn priorities(handles: &[ProcessHandle]) -> Vec<i32> {
        handles.iter().map(ProcessHandle::priority).collect()
    }

    #[test]
    fn test_priority_order() {
        let mut queue = PriorityProcessQueue::new();
        queue.push(handle(1, 5));
        queue.push(handle(2, 1));
        queue.push(handle(3, 3));

        assert_eq!(queue.peek().unwrap().pid(), 1);
        assert_eq!(priorities(&queue.into_vec_by_priority()), vec![5, 3, 1]);
    }

    #[test]
    fn test_empty_queue_errors() {
        let mut queue = PriorityProcessQueue::new();
        assert!(queue.is_empty());
        assert_eq!(queue.len(), 0);
        assert_eq!(queue.peek().unwrap_err(), QueueError::EmptyQueue);
        assert_eq!(queue.pop().unwrap_err(), QueueError::EmptyQueue);
    }

    #[test]
    fn test_len_tracks_pushes_and_pops() {
        let mut queue = PriorityProcessQueue::new();
        for pid in 0..6 {
            queue.push(handle(pid, (pid as i32 * 7) % 4));
        }
        queue.pop().unwrap();
        queue.pop().unwrap();
        assert_eq!(queue.len(), 4);
    }

    #[test]
    fn test_duplicate_priorities() {
        let mut queue = PriorityProcessQueue::new();
        queue.push(handle(1, 10));
        queue.push(handle(2, 10));
        queue.push(handle(3, 5));

        let first = queue.pop().unwrap();
        let second = queue.pop().unwrap();
        assert_eq!(first.priority(), 10);
        assert_eq!(second.priority(), 10);
        assert_ne!(first.pid(), second.pid());
        assert_eq!(queue.pop().unwrap().priority(), 5);
    }

    #[test]
    fn test_pop_then_repush() {
        let mut queue = PriorityProcessQueue::new();
        queue.push(handle(1, 2));
        queue.push(handle(2, 4));

        let top = queue.pop().unwrap();
        top.set_priority(0);
        queue.push(top);

        assert_eq!(queue.pop().unwrap().pid(), 1);
        assert_eq!(queue.pop().unwrap().pid(), 2);
    }

    #[test]
    fn test_queue_does_not_own_records() {
        let record = handle(1, 3);
        {
            let mut queue = PriorityProcessQueue::new();
            queue.push(record.clone());
            assert_eq!(record.holders(), 2);
        }
        assert_eq!(record.holders(), 1);
        assert_eq!(record.priority(), 3);
    }

    #[test]
    fn test_custom_comparator() {
        let mut queue = PriorityProcessQueue::with_comparator(ByLeastUsage);
        let busy = handle(1, 9);
        busy.write().add_usage(100).unwrap();
        let idle = handle(2, 0);

        queue.push(busy);
        queue.push(idle);
        assert_eq!(queue.pop().unwrap().pid(), 2);
    }

    #[test]
    fn test_closure_comparator_by_pid() {
        let mut queue =
            PriorityProcessQueue::with_comparator(|a: &ProcessHandle, b: &ProcessHandle| {
                a.pid() > b.pid()
            });
        queue.extend([handle(3, 0), handle(1, 0), handle(2, 0)]);
        let pids: Vec<u32> = queue.drain().map(|h| h.pid()).collect();
        assert_eq!(pids, vec![1, 2, 3]);
    }

    #[test]
    fn test_snapshot_root_first() {
        let queue: PriorityProcessQueue = [handle(1, 1), handle(2, 8), handle(3, 4)]
            .into_iter()
            .collect();
        let snapshot = queue.snapshot();
        assert_eq!(snapshot.len(), 3);
        assert_eq!(snapshot[0].pid, 2);
    }

    #[test]
    fn test_clear_keeps_records_alive() {
        let record = handle(1, 1);
        let mut queue = PriorityProcessQueue::from_config(&QueueConfig::default());
        queue.push(record.clone());
        queue.clear();
        assert!(queue.is_empty());
        assert_eq!(record.holders(), 1);
    }
}
