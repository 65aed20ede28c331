/*!
 * Memory Types
 * Common types for the memory map and partition table
 */

use crate::core::serde::{is_none, optional_percent_2dp};
use crate::core::types::{Address, PartitionId, Pid, Size};
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Memory operation result
pub type MemoryResult<T> = Result<T, MemoryError>;

/// Memory map errors
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum MemoryError {
    #[error("Range 0x{address:x}+{length} exceeds memory map of {capacity} cells")]
    #[diagnostic(
        code(memory::range_out_of_bounds),
        help("Partition bounds and the memory map disagree. Please report this issue.")
    )]
    RangeOutOfBounds {
        address: Address,
        length: Size,
        capacity: Size,
    },

    #[error("Could not allocate a backing store of {cells} cells")]
    #[diagnostic(
        code(memory::allocation_failure),
        help("The host is out of memory. Try a smaller total memory size.")
    )]
    AllocationFailure { cells: Size },
}

/// One KB unit of the backing store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(tag = "state", content = "pid", rename_all = "snake_case")]
pub enum Cell {
    #[default]
    Free,
    Owned(Pid),
}

impl Cell {
    pub fn is_free(&self) -> bool {
        matches!(self, Cell::Free)
    }

    pub fn owner(&self) -> Option<Pid> {
        match self {
            Cell::Free => None,
            Cell::Owned(pid) => Some(*pid),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Cell::Free => write!(f, "free"),
            Cell::Owned(pid) => write!(f, "P{}", pid),
        }
    }
}

/// Snapshot of one partition with its derived fragmentation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartitionView {
    pub id: PartitionId,
    pub start_address: Address,
    pub size: Size,
    pub occupied: bool,
    #[serde(skip_serializing_if = "is_none", default)]
    pub occupant: Option<Pid>,
    #[serde(
        serialize_with = "optional_percent_2dp::serialize",
        skip_serializing_if = "is_none",
        default
    )]
    pub fragmentation_pct: Option<f64>,
}
