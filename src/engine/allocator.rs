/*!
 * Process Placement
 * First-fit placement of new processes
 */

use super::types::{AllocationResult, PlacementReport};
use super::AllocationEngine;
use crate::core::errors::AllocationError;
use crate::core::types::Size;
use crate::memory::internal_fragmentation;
use crate::process::Process;
use tracing::{error, info, warn};

impl AllocationEngine {
    /// Place a process of `requested` KB in the first free partition
    ///
    /// On failure no state is touched and no process ID is consumed. The
    /// largest `Pid` is never handed out, so IDs cannot wrap.
    #[tracing::instrument(skip(self), fields(simulation = %self.id))]
    pub fn create_process(&mut self, requested: Size) -> AllocationResult<PlacementReport> {
        let max = self.table.partition_size();
        if requested == 0 || requested > max {
            warn!(requested, max, "Rejected process with invalid size");
            return Err(AllocationError::InvalidSize { requested, max });
        }

        let (partition_id, start_address, partition_size) =
            match self.table.first_fit(requested) {
                Some(p) => (p.id, p.start_address, p.size),
                None => {
                    warn!(
                        requested,
                        partitions = self.table.len(),
                        "No partition available"
                    );
                    return Err(AllocationError::NoPartitionAvailable {
                        requested,
                        partitions: self.table.len(),
                    });
                }
            };

        let pid = self.next_pid;
        let Some(next_pid) = pid.checked_add(1) else {
            error!(pid, "Process IDs exhausted");
            return Err(AllocationError::ProcessIdsExhausted { last: pid });
        };

        // Map first: it is the only step that can fail
        if let Err(err) = self.map.mark(start_address, requested, pid) {
            error!(pid, partition = partition_id, error = %err, "Memory map rejected placement");
            return Err(err.into());
        }
        self.table.occupy(partition_id, pid);
        self.registry
            .insert(Process::new(pid, requested, start_address));
        self.next_pid = next_pid;

        let fragmentation_pct = internal_fragmentation(partition_size, requested);
        info!(
            pid,
            partition = partition_id,
            address = start_address,
            size_kb = requested,
            fragmentation_pct,
            "Process created"
        );

        Ok(PlacementReport {
            process_id: pid,
            partition_id,
            start_address,
            required_size: requested,
            fragmentation_pct,
        })
    }
}
