/*!
 * Queue Draining
 * Iterator that empties a queue in priority order
 */

use super::PriorityProcessQueue;
use crate::core::data_structures::Compare;
use crate::process::ProcessHandle;
use std::iter::FusedIterator;

/// Draining iterator returned by [`PriorityProcessQueue::drain`]
///
/// Each `next` is a `pop`, so items come out highest-ordered first. Whatever
/// is left when the iterator is dropped is cleared from the queue.
pub struct Drain<'a, C: Compare<ProcessHandle>> {
    queue: &'a mut PriorityProcessQueue<C>,
}

impl<'a, C: Compare<ProcessHandle>> Drain<'a, C> {
    pub(super) fn new(queue: &'a mut PriorityProcessQueue<C>) -> Self {
        Self { queue }
    }
}

impl<C: Compare<ProcessHandle>> Iterator for Drain<'_, C> {
    type Item = ProcessHandle;

    fn next(&mut self) -> Option<ProcessHandle> {
        self.queue.pop().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.queue.len();
        (len, Some(len))
    }
}

impl<C: Compare<ProcessHandle>> ExactSizeIterator for Drain<'_, C> {}

impl<C: Compare<ProcessHandle>> FusedIterator for Drain<'_, C> {}

impl<C: Compare<ProcessHandle>> Drop for Drain<'_, C> {
    fn drop(&mut self) {
        self.queue.clear();
    }
}
