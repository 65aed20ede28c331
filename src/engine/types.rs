/*!
 * Engine Types
 * Reports and snapshots returned by the allocation engine
 */

use crate::core::errors::{AllocationError, CloseError};
use crate::core::serde::percent_2dp;
use crate::core::types::{Address, PartitionId, Pid, SimulationId, Size};
use crate::memory::{Cell, PartitionView};
use crate::process::Process;
use serde::{Deserialize, Serialize};

/// Process creation result
pub type AllocationResult<T> = Result<T, AllocationError>;

/// Process closure result
pub type CloseResult<T> = Result<T, CloseError>;

/// Outcome of a successful placement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacementReport {
    pub process_id: Pid,
    pub partition_id: PartitionId,
    pub start_address: Address,
    pub required_size: Size,
    #[serde(serialize_with = "percent_2dp::serialize")]
    pub fragmentation_pct: f64,
}

/// Outcome of a successful release
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseReport {
    pub partition_id: PartitionId,
    pub process: Process,
    pub freed_cells: Size,
}

/// Engine-wide statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineStats {
    pub total_memory_kb: Size,
    pub partition_kb: Size,
    pub partition_count: usize,
    pub occupied_partitions: usize,
    pub free_partitions: usize,
    pub unaddressable_kb: Size,
    pub used_kb: Size,
    /// Free KB locked inside occupied partitions
    pub wasted_kb: Size,
    #[serde(serialize_with = "percent_2dp::serialize")]
    pub usage_percentage: f64,
    #[serde(serialize_with = "percent_2dp::serialize")]
    pub average_fragmentation_pct: f64,
    pub active_processes: usize,
    pub terminated_processes: usize,
    pub next_pid: Pid,
}

/// Complete owned view of one simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub simulation: SimulationId,
    pub stats: EngineStats,
    pub partitions: Vec<PartitionView>,
    pub active: Vec<Process>,
    pub terminated: Vec<Process>,
    pub memory: Vec<Cell>,
}
