/*!
 * Partition Simulator Library
 * Fixed-partition memory management with first-fit placement
 */

pub mod cli;
pub mod core;
pub mod engine;
pub mod memory;
pub mod monitoring;
pub mod process;

// Re-exports
pub use crate::core::errors::*;
pub use crate::core::types::{Address, PartitionId, Pid, SimulationId, Size};
pub use crate::core::SimulatorConfig;
pub use engine::{
    AllocationEngine, EngineSnapshot, EngineStats, PlacementReport, ReleaseReport, SharedEngine,
};
pub use memory::{Cell, MemoryInfo, PartitionView, ProcessAllocator};
pub use monitoring::init_tracing;
pub use process::{Process, ProcessState};
