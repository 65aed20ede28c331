/*!
 * Allocation Engine
 *
 * Fixed-partition memory manager with first-fit placement.
 *
 * ## Layout
 *
 * - **Memory map**: one cell per KB, free or owned by a process
 * - **Partition table**: `total / partition` equal partitions; the remainder
 *   past the last whole partition is never used
 * - **Process registry**: active processes in creation order
 * - **Terminated log**: closed processes in closing order
 *
 * ## Invariants
 *
 * - Occupied partitions and active processes are in one-to-one correspondence
 * - An occupied partition holds exactly `required_size` owned cells, starting
 *   at its start address; every other cell of the partition is free
 * - Process IDs start at 1, strictly increase, and are never reused
 *
 * Every operation runs to completion on `&mut self`. Use [`SharedEngine`]
 * to share one simulation across threads.
 */

mod allocator;
mod release;
mod shared;
mod stats;
mod types;

pub use shared::SharedEngine;
pub use types::{
    AllocationResult, CloseResult, EngineSnapshot, EngineStats, PlacementReport, ReleaseReport,
};

use crate::core::errors::{ConfigResult, ConfigurationError};
use crate::core::limits::FIRST_PID;
use crate::core::types::{Pid, SimulationId, Size};
use crate::memory::{Cell, MemoryInfo, MemoryMap, PartitionTable, PartitionView, ProcessAllocator};
use crate::process::{Process, ProcessRegistry, TerminatedLog};
use tracing::{error, info};

/// Allocation engine owning all simulation state
#[derive(Debug, Clone)]
pub struct AllocationEngine {
    pub(super) id: SimulationId,
    pub(super) total_memory: Size,
    pub(super) map: MemoryMap,
    pub(super) table: PartitionTable,
    pub(super) registry: ProcessRegistry,
    pub(super) terminated: TerminatedLog,
    pub(super) next_pid: Pid,
}

impl AllocationEngine {
    /// Build an engine over `total_memory_kb` split into `partition_kb` partitions
    pub fn configure(total_memory_kb: Size, partition_kb: Size) -> ConfigResult<Self> {
        let table = PartitionTable::new(total_memory_kb, partition_kb)?;
        let map = MemoryMap::new(total_memory_kb).map_err(|err| {
            error!(total_kb = total_memory_kb, error = %err, "Backing store allocation failed");
            ConfigurationError::BackingStoreUnavailable {
                cells: total_memory_kb,
            }
        })?;

        let id = SimulationId::new();
        info!(
            simulation = %id,
            total_kb = total_memory_kb,
            partition_kb,
            partitions = table.len(),
            unaddressable_kb = table.unaddressable_kb(),
            "Memory initialized"
        );

        Ok(Self {
            id,
            total_memory: total_memory_kb,
            map,
            table,
            registry: ProcessRegistry::new(),
            terminated: TerminatedLog::new(),
            next_pid: FIRST_PID,
        })
    }

    pub fn id(&self) -> SimulationId {
        self.id
    }

    pub fn total_memory_kb(&self) -> Size {
        self.total_memory
    }

    pub fn partition_kb(&self) -> Size {
        self.table.partition_size()
    }

    pub fn partition_count(&self) -> usize {
        self.table.len()
    }

    /// ID the next successful placement will receive
    pub fn next_pid(&self) -> Pid {
        self.next_pid
    }

    pub fn partitions(&self) -> &PartitionTable {
        &self.table
    }

    pub fn memory(&self) -> &MemoryMap {
        &self.map
    }

    pub fn active(&self) -> &ProcessRegistry {
        &self.registry
    }

    pub fn terminated(&self) -> &TerminatedLog {
        &self.terminated
    }
}

// Implement trait interfaces
impl ProcessAllocator for AllocationEngine {
    fn create_process(&mut self, requested: Size) -> AllocationResult<PlacementReport> {
        AllocationEngine::create_process(self, requested)
    }

    fn close_process(&mut self, pid: Pid) -> CloseResult<ReleaseReport> {
        AllocationEngine::close_process(self, pid)
    }
}

impl MemoryInfo for AllocationEngine {
    fn list_active_processes(&self) -> Vec<Process> {
        AllocationEngine::list_active_processes(self)
    }

    fn list_partitions(&self) -> Vec<PartitionView> {
        AllocationEngine::list_partitions(self)
    }

    fn memory_snapshot(&self) -> Vec<Cell> {
        AllocationEngine::memory_snapshot(self)
    }

    fn list_terminated_processes(&self) -> Vec<Process> {
        AllocationEngine::list_terminated_processes(self)
    }

    fn fragmentation_of(&self, partition: usize) -> Option<f64> {
        AllocationEngine::fragmentation_of(self, partition)
    }

    fn stats(&self) -> EngineStats {
        AllocationEngine::stats(self)
    }
}
