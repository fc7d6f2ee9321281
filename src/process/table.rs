/*!
 * Process Table
 * Owns process records and hands out pids and handles
 */

use super::core::ProcessRecord;
use super::handle::ProcessHandle;
use crate::core::config::QueueConfig;
use crate::core::errors::{ProcessError, ProcessResult};
use crate::core::limits::{DEFAULT_PRIORITY, FIRST_PID};
use crate::core::types::{Pid, Priority};
use ahash::RandomState;
use std::collections::HashMap;
use tracing::{debug, info};

/// Registry of live records keyed by pid
///
/// Pids are allocated sequentially from [`FIRST_PID`] and never reused by
/// this table, so every record it creates has a unique id.
#[derive(Debug)]
pub struct ProcessTable {
    processes: HashMap<Pid, ProcessHandle, RandomState>,
    next_pid: Pid,
    default_priority: Priority,
}

impl ProcessTable {
    pub fn new() -> Self {
        Self {
            processes: HashMap::with_hasher(RandomState::new()),
            next_pid: FIRST_PID,
            default_priority: DEFAULT_PRIORITY,
        }
    }

    pub fn with_config(config: &QueueConfig) -> Self {
        Self {
            default_priority: config.default_priority,
            ..Self::new()
        }
    }

    /// Allocate the next pid and create a record for `command`
    pub fn spawn(&mut self, command: impl Into<String>) -> ProcessResult<ProcessHandle> {
        let pid = self.next_pid;
        let record = ProcessRecord::with_priority(pid, command, self.default_priority)?;
        self.insert(record)
    }

    /// Take ownership of an externally built record
    ///
    /// Fails if a live record already uses the same pid.
    pub fn insert(&mut self, record: ProcessRecord) -> ProcessResult<ProcessHandle> {
        let pid = record.pid();
        if self.processes.contains_key(&pid) {
            return Err(ProcessError::InvalidArgument(format!(
                "pid {} is already in use",
                pid
            )));
        }

        if pid >= self.next_pid {
            self.next_pid = pid.checked_add(1).ok_or_else(|| {
                ProcessError::InvalidArgument("pid space exhausted".to_string())
            })?;
        }

        info!(
            pid,
            command = record.command(),
            priority = record.priority(),
            "process created"
        );

        let handle = ProcessHandle::new(record);
        self.processes.insert(pid, handle.clone());
        Ok(handle)
    }

    pub fn get(&self, pid: Pid) -> ProcessResult<ProcessHandle> {
        self.processes
            .get(&pid)
            .cloned()
            .ok_or(ProcessError::NotFound(pid))
    }

    /// Drop the table's handle. Queues still holding the record keep it alive.
    pub fn remove(&mut self, pid: Pid) -> ProcessResult<ProcessHandle> {
        let handle = self
            .processes
            .remove(&pid)
            .ok_or(ProcessError::NotFound(pid))?;
        debug!(pid, holders = handle.holders(), "process removed from table");
        Ok(handle)
    }

    pub fn contains(&self, pid: Pid) -> bool {
        self.processes.contains_key(&pid)
    }

    pub fn len(&self) -> usize {
        self.processes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    /// Pid the next `spawn` will use
    pub fn next_pid(&self) -> Pid {
        self.next_pid
    }

    /// Handles ordered by pid
    pub fn handles(&self) -> Vec<ProcessHandle> {
        let mut pids: Vec<Pid> = self.processes.keys().copied().collect();
        pids.sort_unstable();
        pids.into_iter()
            .filter_map(|pid| self.processes.get(&pid).cloned())
            .collect()
    }
}

impl Default for ProcessTable {
    fn default() -> Self {
        Self::new()
    }
}
