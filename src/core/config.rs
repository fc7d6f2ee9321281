/*!
 * Queue Configuration
 * Defaults, builder-style overrides, and environment loading
 */

use super::errors::{Error, Result};
use super::limits::{
    DEFAULT_PRIORITY, DEFAULT_QUEUE_CAPACITY, ENV_DEFAULT_PRIORITY, ENV_OUTPUT,
    ENV_QUEUE_CAPACITY,
};
use super::types::Priority;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// How the demo binary renders drained records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" | "plain" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(Error::Configuration(format!(
                "Invalid output format '{}'. Valid: text, json",
                s
            ))),
        }
    }
}

/// Settings for queues and the process table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct QueueConfig {
    /// Slots reserved in the heap's backing array up front
    pub initial_capacity: usize,
    /// Priority given to records spawned by a process table
    pub default_priority: Priority,
    pub output: OutputFormat,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_QUEUE_CAPACITY,
            default_priority: DEFAULT_PRIORITY,
            output: OutputFormat::Text,
        }
    }
}

impl QueueConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    #[must_use]
    pub fn with_default_priority(mut self, priority: Priority) -> Self {
        self.default_priority = priority;
        self
    }

    #[must_use]
    pub fn with_output(mut self, output: OutputFormat) -> Self {
        self.output = output;
        self
    }

    /// Load configuration from `PROCESS_QUEUE_*` environment variables
    ///
    /// Unset variables keep their defaults; malformed ones are rejected.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_QUEUE_CAPACITY) {
            config.initial_capacity = parse_var(ENV_QUEUE_CAPACITY, &raw)?;
        }
        if let Some(raw) = lookup(ENV_DEFAULT_PRIORITY) {
            config.default_priority = parse_var(ENV_DEFAULT_PRIORITY, &raw)?;
        }
        if let Some(raw) = lookup(ENV_OUTPUT) {
            config.output = raw.parse()?;
        }

        Ok(config)
    }
}

fn parse_var<T: FromStr>(key: &str, raw: &str) -> Result<T> {
    raw.trim()
        .parse()
        .map_err(|_| Error::Configuration(format!("{} has invalid value '{}'", key, raw)))
}
