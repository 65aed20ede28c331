/*!
 * Process Types
 * Common types for simulated processes
 */

use crate::core::types::{Address, Pid, Size};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A simulated process holding one partition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    pub id: Pid,
    pub required_size: Size,
    pub assigned_address: Address,
}

impl Process {
    pub fn new(id: Pid, required_size: Size, assigned_address: Address) -> Self {
        Self {
            id,
            required_size,
            assigned_address,
        }
    }
}

/// Process lifecycle state
///
/// Requests that fail placement never get an ID, so only placed and
/// closed processes are observable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessState {
    /// Process holds a partition
    Placed,
    /// Process released its partition and is in the terminated log
    Closed,
}

impl fmt::Display for ProcessState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ProcessState::Placed => write!(f, "PLACED"),
            ProcessState::Closed => write!(f, "CLOSED"),
        }
    }
}
