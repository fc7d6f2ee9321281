/*!
 * Process Handles
 * Shared references to records owned by some other collaborator
 */

use super::core::{ProcessRecord, ProcessSnapshot};
use crate::core::types::{Pid, Priority};
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::fmt;
use std::sync::Arc;

/// Reference-counted handle to a [`ProcessRecord`]
///
/// Cloning a handle never copies the record. A queue stores handles, so
/// dropping the queue leaves the records alive for their other holders.
#[derive(Clone)]
pub struct ProcessHandle {
    inner: Arc<RwLock<ProcessRecord>>,
}

impl ProcessHandle {
    pub fn new(record: ProcessRecord) -> Self {
        Self {
            inner: Arc::new(RwLock::new(record)),
        }
    }

    #[inline]
    pub fn pid(&self) -> Pid {
        self.inner.read().pid()
    }

    /// Current priority, read at call time
    #[inline]
    pub fn priority(&self) -> Priority {
        self.inner.read().priority()
    }

    pub fn set_priority(&self, priority: Priority) {
        self.inner.write().set_priority(priority);
    }

    pub fn snapshot(&self) -> ProcessSnapshot {
        self.inner.read().snapshot()
    }

    /// Shared access to the record
    pub fn read(&self) -> RwLockReadGuard<'_, ProcessRecord> {
        self.inner.read()
    }

    /// Exclusive access to the record
    pub fn write(&self) -> RwLockWriteGuard<'_, ProcessRecord> {
        self.inner.write()
    }

    /// Whether both handles point at the same record
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Number of live handles to this record
    pub fn holders(&self) -> usize {
        Arc::strong_count(&self.inner)
    }
}

impl From<ProcessRecord> for ProcessHandle {
    fn from(record: ProcessRecord) -> Self {
        Self::new(record)
    }
}

impl fmt::Debug for ProcessHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let record = self.inner.read();
        f.debug_struct("ProcessHandle")
            .field("pid", &record.pid())
            .field("priority", &record.priority())
            .finish()
    }
}
