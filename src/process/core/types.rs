/*!
 * Process Types
 * Process record, state model, and serializable snapshots
 */

use crate::core::errors::{ProcessError, ProcessResult};
use crate::core::limits::{DEFAULT_PRIORITY, MAX_OPEN_FILES, STANDARD_FDS};
use crate::core::serde::{is_empty_slice, is_zero_u64};
use crate::core::types::{CpuTime, Fd, Pid, Priority};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Process state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessState {
    /// Record created, not yet admitted
    New,
    /// Waiting for the CPU
    Ready,
    /// Currently running
    Running,
    /// Waiting for I/O or an event
    Blocked,
    /// Finished
    Terminated,
}

impl ProcessState {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Ready => "ready",
            Self::Running => "running",
            Self::Blocked => "blocked",
            Self::Terminated => "terminated",
        }
    }

    /// Whether the lifecycle table allows moving from `self` to `next`
    ///
    /// New -> Ready -> Running -> {Ready, Blocked}, Blocked -> Ready, and any
    /// live state may terminate. Terminated is final.
    pub const fn can_transition_to(&self, next: ProcessState) -> bool {
        use ProcessState::*;
        matches!(
            (*self, next),
            (New, Ready)
                | (Ready, Running)
                | (Running, Ready)
                | (Running, Blocked)
                | (Blocked, Ready)
                | (New | Ready | Running | Blocked, Terminated)
        )
    }

    #[inline(always)]
    pub const fn is_terminated(&self) -> bool {
        matches!(self, Self::Terminated)
    }
}

impl fmt::Display for ProcessState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A process tracked by the system
///
/// The pid and command are fixed at creation. Priority is freely mutable; a
/// queue holding this record reads it only when it compares entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessRecord {
    pid: Pid,
    state: ProcessState,
    cpu_usage: CpuTime,
    command: String,
    priority: Priority,
    open_files: Vec<Fd>,
}

impl ProcessRecord {
    /// Create a record in the New state with zero usage and the default priority
    pub fn new(pid: Pid, command: impl Into<String>) -> ProcessResult<Self> {
        Self::with_priority(pid, command, DEFAULT_PRIORITY)
    }

    /// Create a record with a caller-chosen starting priority
    pub fn with_priority(
        pid: Pid,
        command: impl Into<String>,
        priority: Priority,
    ) -> ProcessResult<Self> {
        let command = command.into();
        if command.trim().is_empty() {
            return Err(ProcessError::InvalidArgument(format!(
                "process {} needs a non-empty command",
                pid
            )));
        }

        Ok(Self {
            pid,
            state: ProcessState::New,
            cpu_usage: 0,
            command,
            priority,
            open_files: STANDARD_FDS.to_vec(),
        })
    }

    #[inline]
    pub fn pid(&self) -> Pid {
        self.pid
    }

    #[inline]
    pub fn state(&self) -> ProcessState {
        self.state
    }

    #[inline]
    pub fn cpu_usage(&self) -> CpuTime {
        self.cpu_usage
    }

    #[inline]
    pub fn command(&self) -> &str {
        &self.command
    }

    #[inline]
    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn open_files(&self) -> &[Fd] {
        &self.open_files
    }

    /// Overwrite the state without checking the lifecycle table
    pub fn set_state(&mut self, new_state: ProcessState) {
        self.state = new_state;
    }

    /// Move to `next` only if the lifecycle table allows it
    pub fn transition(&mut self, next: ProcessState) -> ProcessResult<()> {
        if !self.state.can_transition_to(next) {
            return Err(ProcessError::InvalidStateTransition {
                from: self.state,
                to: next,
            });
        }
        self.state = next;
        Ok(())
    }

    /// Add a burst of CPU usage, returning the new total
    ///
    /// Negative deltas and overflow are rejected and leave usage unchanged.
    pub fn add_usage(&mut self, delta: i64) -> ProcessResult<CpuTime> {
        let delta = CpuTime::try_from(delta).map_err(|_| {
            ProcessError::InvalidArgument(format!("negative usage delta {}", delta))
        })?;

        self.cpu_usage = self.cpu_usage.checked_add(delta).ok_or_else(|| {
            ProcessError::InvalidArgument(format!(
                "usage delta {} overflows total {}",
                delta, self.cpu_usage
            ))
        })?;
        Ok(self.cpu_usage)
    }

    /// Overwrite the priority. Queues already holding this record are not reordered.
    pub fn set_priority(&mut self, priority: Priority) {
        self.priority = priority;
    }

    /// Track a newly opened descriptor
    pub fn open_file(&mut self, fd: Fd) -> ProcessResult<()> {
        if self.open_files.contains(&fd) {
            return Err(ProcessError::InvalidArgument(format!(
                "descriptor {} already open in process {}",
                fd, self.pid
            )));
        }
        if self.open_files.len() >= MAX_OPEN_FILES {
            return Err(ProcessError::InvalidArgument(format!(
                "process {} already has {} open descriptors",
                self.pid, MAX_OPEN_FILES
            )));
        }
        self.open_files.push(fd);
        Ok(())
    }

    /// Point-in-time serializable view
    pub fn snapshot(&self) -> ProcessSnapshot {
        ProcessSnapshot {
            pid: self.pid,
            command: self.command.clone(),
            state: self.state,
            priority: self.priority,
            cpu_usage: self.cpu_usage,
            open_files: self.open_files.clone(),
        }
    }
}

/// Serializable copy of a record's fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ProcessSnapshot {
    pub pid: Pid,
    pub command: String,
    pub state: ProcessState,
    pub priority: Priority,
    #[serde(default, skip_serializing_if = "is_zero_u64")]
    pub cpu_usage: CpuTime,
    #[serde(default, skip_serializing_if = "is_empty_slice")]
    pub open_files: Vec<Fd>,
}

impl fmt::Display for ProcessSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Process id: {} priority: {} state: {} usage: {} command: {}",
            self.pid, self.priority, self.state, self.cpu_usage, self.command
        )
    }
}
