/*!
 * Process Release
 * Partition reclamation for closed processes
 */

use super::types::{CloseResult, ReleaseReport};
use super::AllocationEngine;
use crate::core::errors::CloseError;
use crate::core::types::Pid;
use tracing::{error, info, warn};

impl AllocationEngine {
    /// Close `pid`, free its partition and cells, and move it to the terminated log
    ///
    /// Both lookups happen before any mutation, so a failed close leaves
    /// the engine unchanged.
    #[tracing::instrument(skip(self), fields(simulation = %self.id))]
    pub fn close_process(&mut self, pid: Pid) -> CloseResult<ReleaseReport> {
        let Some(process) = self.registry.find(pid).cloned() else {
            warn!(pid, "Close requested for unknown process");
            return Err(CloseError::ProcessNotFound(pid));
        };

        let Some((partition_id, start_address, window)) = self
            .table
            .find_by_occupant(pid)
            .and_then(|id| self.table.get(id))
            .map(|p| (p.id, p.start_address, p.size))
        else {
            error!(
                pid,
                address = process.assigned_address,
                "Active process has no partition - registry and table out of sync"
            );
            return Err(CloseError::PartitionNotFound(pid));
        };

        self.table.release(partition_id);
        let freed_cells = self.map.clear(start_address, window, pid);
        self.registry.remove(pid);
        self.terminated.append(process.clone());

        info!(
            pid,
            partition = partition_id,
            freed_cells,
            terminated = self.terminated.len(),
            "Process closed"
        );

        Ok(ReleaseReport {
            partition_id,
            process,
            freed_cells,
        })
    }
}
