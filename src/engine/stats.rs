/*!
 * Engine Snapshots
 * Read-only views, fragmentation, and statistics
 */

use super::types::{EngineSnapshot, EngineStats};
use super::AllocationEngine;
use crate::core::types::{PartitionId, Pid};
use crate::memory::{internal_fragmentation, Cell, Partition, PartitionView};
use crate::process::{Process, ProcessState};
use tracing::warn;

impl AllocationEngine {
    /// Active processes in creation order
    pub fn list_active_processes(&self) -> Vec<Process> {
        self.registry.iter().cloned().collect()
    }

    /// Closed processes in closing order
    pub fn list_terminated_processes(&self) -> Vec<Process> {
        self.terminated.iter().cloned().collect()
    }

    /// Every partition with fragmentation for occupied entries
    pub fn list_partitions(&self) -> Vec<PartitionView> {
        self.table
            .iter()
            .map(|p| PartitionView {
                id: p.id,
                start_address: p.start_address,
                size: p.size,
                occupied: p.is_occupied(),
                occupant: p.occupant,
                fragmentation_pct: self.partition_fragmentation(p),
            })
            .collect()
    }

    /// Ordered copy of every memory cell
    pub fn memory_snapshot(&self) -> Vec<Cell> {
        self.map.cells().to_vec()
    }

    /// Fragmentation of an occupied partition
    ///
    /// `None` for free or nonexistent partitions. An occupied partition whose
    /// resident is missing from the registry reports 0.
    pub fn fragmentation_of(&self, partition: PartitionId) -> Option<f64> {
        self.table
            .get(partition)
            .and_then(|p| self.partition_fragmentation(p))
    }

    fn partition_fragmentation(&self, partition: &Partition) -> Option<f64> {
        let pid = partition.occupant?;
        match self.registry.find(pid) {
            Some(process) => Some(internal_fragmentation(
                partition.size,
                process.required_size,
            )),
            None => {
                warn!(pid, partition = partition.id, "Occupant missing from registry");
                Some(0.0)
            }
        }
    }

    /// Where `pid` is in its lifecycle, if it was ever placed
    pub fn process_state(&self, pid: Pid) -> Option<ProcessState> {
        if self.registry.contains(pid) {
            Some(ProcessState::Placed)
        } else if self.terminated.contains(pid) {
            Some(ProcessState::Closed)
        } else {
            None
        }
    }

    pub fn stats(&self) -> EngineStats {
        let partition_kb = self.table.partition_size();
        let occupied_partitions = self.table.occupied_count();
        let used_kb = self.map.used_cells();
        let wasted_kb = (occupied_partitions * partition_kb).saturating_sub(used_kb);

        let fragmentation: Vec<f64> = self
            .table
            .iter()
            .filter_map(|p| self.partition_fragmentation(p))
            .collect();
        let average_fragmentation_pct = if fragmentation.is_empty() {
            0.0
        } else {
            fragmentation.iter().sum::<f64>() / fragmentation.len() as f64
        };

        EngineStats {
            total_memory_kb: self.total_memory,
            partition_kb,
            partition_count: self.table.len(),
            occupied_partitions,
            free_partitions: self.table.len() - occupied_partitions,
            unaddressable_kb: self.table.unaddressable_kb(),
            used_kb,
            wasted_kb,
            usage_percentage: (used_kb as f64 / self.total_memory as f64) * 100.0,
            average_fragmentation_pct,
            active_processes: self.registry.len(),
            terminated_processes: self.terminated.len(),
            next_pid: self.next_pid,
        }
    }

    /// Owned copy of the whole simulation state
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            simulation: self.id,
            stats: self.stats(),
            partitions: self.list_partitions(),
            active: self.list_active_processes(),
            terminated: self.list_terminated_processes(),
            memory: self.memory_snapshot(),
        }
    }
}
