/*!
 * Shared Engine
 * Lock-serialized handle for using one simulation from many threads
 */

use super::types::{
    AllocationResult, CloseResult, EngineSnapshot, EngineStats, PlacementReport, ReleaseReport,
};
use super::AllocationEngine;
use crate::core::errors::ConfigResult;
use crate::core::types::{PartitionId, Pid, SimulationId, Size};
use crate::memory::{Cell, MemoryInfo, PartitionView, ProcessAllocator};
use crate::process::Process;
use parking_lot::Mutex;
use std::sync::Arc;

/// Cloneable handle to one engine
///
/// Every call takes the lock once, so operations stay sequential.
#[derive(Debug, Clone)]
pub struct SharedEngine {
    inner: Arc<Mutex<AllocationEngine>>,
}

impl SharedEngine {
    pub fn new(engine: AllocationEngine) -> Self {
        Self {
            inner: Arc::new(Mutex::new(engine)),
        }
    }

    pub fn configure(total_memory_kb: Size, partition_kb: Size) -> ConfigResult<Self> {
        AllocationEngine::configure(total_memory_kb, partition_kb).map(Self::new)
    }

    pub fn id(&self) -> SimulationId {
        self.inner.lock().id()
    }

    pub fn create_process(&self, requested: Size) -> AllocationResult<PlacementReport> {
        self.inner.lock().create_process(requested)
    }

    pub fn close_process(&self, pid: Pid) -> CloseResult<ReleaseReport> {
        self.inner.lock().close_process(pid)
    }

    /// Run `f` against the engine while holding the lock
    pub fn with<R>(&self, f: impl FnOnce(&AllocationEngine) -> R) -> R {
        f(&self.inner.lock())
    }

    pub fn snapshot(&self) -> EngineSnapshot {
        self.inner.lock().snapshot()
    }
}

impl From<AllocationEngine> for SharedEngine {
    fn from(engine: AllocationEngine) -> Self {
        Self::new(engine)
    }
}

impl ProcessAllocator for SharedEngine {
    fn create_process(&mut self, requested: Size) -> AllocationResult<PlacementReport> {
        SharedEngine::create_process(self, requested)
    }

    fn close_process(&mut self, pid: Pid) -> CloseResult<ReleaseReport> {
        SharedEngine::close_process(self, pid)
    }
}

impl MemoryInfo for SharedEngine {
    fn list_active_processes(&self) -> Vec<Process> {
        self.inner.lock().list_active_processes()
    }

    fn list_partitions(&self) -> Vec<PartitionView> {
        self.inner.lock().list_partitions()
    }

    fn memory_snapshot(&self) -> Vec<Cell> {
        self.inner.lock().memory_snapshot()
    }

    fn list_terminated_processes(&self) -> Vec<Process> {
        self.inner.lock().list_terminated_processes()
    }

    fn fragmentation_of(&self, partition: PartitionId) -> Option<f64> {
        self.inner.lock().fragmentation_of(partition)
    }

    fn stats(&self) -> EngineStats {
        self.inner.lock().stats()
    }
}
