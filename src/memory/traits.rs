/*!
 * Memory Traits
 * Allocation engine abstractions
 */

use super::types::{Cell, PartitionView};
use crate::core::types::{PartitionId, Pid, Size};
use crate::engine::{AllocationResult, CloseResult, EngineStats, PlacementReport, ReleaseReport};
use crate::process::Process;

/// Process placement interface
pub trait ProcessAllocator {
    /// Place a new process of `requested` KB
    fn create_process(&mut self, requested: Size) -> AllocationResult<PlacementReport>;

    /// Close a process and reclaim its partition
    fn close_process(&mut self, pid: Pid) -> CloseResult<ReleaseReport>;
}

/// Read-only state provider
pub trait MemoryInfo {
    fn list_active_processes(&self) -> Vec<Process>;

    fn list_partitions(&self) -> Vec<PartitionView>;

    fn memory_snapshot(&self) -> Vec<Cell>;

    fn list_terminated_processes(&self) -> Vec<Process>;

    /// Fragmentation of an occupied partition; `None` when free or unknown
    fn fragmentation_of(&self, partition: PartitionId) -> Option<f64>;

    fn stats(&self) -> EngineStats;
}
