/*!
 * Core Types
 * Common types used across the simulator
 */

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Process ID type
pub type Pid = u32;

/// Partition index type (ordinal position in the partition table)
pub type PartitionId = usize;

/// Address type for memory map offsets (in KB cells)
pub type Address = usize;

/// Size type for memory quantities (in KB)
pub type Size = usize;

/// Identifies one simulation instance in logs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SimulationId(Uuid);

impl SimulationId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SimulationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SimulationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Short form keeps log lines readable
        let simple = self.0.simple().to_string();
        write!(f, "{}", &simple[..8])
    }
}
