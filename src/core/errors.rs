/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use super::types::{Pid, Size};
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// Re-export MemoryError from memory module
pub use crate::memory::MemoryError;

/// Setup errors - the simulation cannot start
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum ConfigurationError {
    #[error("Total memory must be greater than 0 KB")]
    #[diagnostic(
        code(config::zero_total_memory),
        help("Provide a positive total memory size in KB.")
    )]
    ZeroTotalMemory,

    #[error("Partition size must be greater than 0 KB")]
    #[diagnostic(
        code(config::zero_partition_size),
        help("Provide a positive partition size in KB.")
    )]
    ZeroPartitionSize,

    #[error("Partition size {partition} KB exceeds total memory {total} KB")]
    #[diagnostic(
        code(config::partition_too_large),
        help("The partition size cannot be larger than the total memory.")
    )]
    PartitionLargerThanMemory { partition: Size, total: Size },

    #[error("No partitions can be created from {total} KB with {partition} KB partitions")]
    #[diagnostic(
        code(config::no_partitions),
        help("Choose values where total memory holds at least one whole partition.")
    )]
    NoPartitions { total: Size, partition: Size },

    #[error("Backing store of {cells} cells could not be allocated")]
    #[diagnostic(
        code(config::backing_store_unavailable),
        help("The host is out of memory. Try a smaller total memory size.")
    )]
    BackingStoreUnavailable { cells: Size },

    #[error("Invalid value {value:?} for {key}")]
    #[diagnostic(
        code(config::invalid_setting),
        help("Check the PARTSIM_* environment variables.")
    )]
    InvalidSetting { key: String, value: String },
}

/// Placement errors for process creation
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum AllocationError {
    #[error("Invalid process size {requested} KB: must be between 1 and {max} KB")]
    #[diagnostic(
        code(allocation::invalid_size),
        help("Process sizes are bounded by the partition size.")
    )]
    InvalidSize { requested: Size, max: Size },

    #[error("No partition available for a {requested} KB process ({partitions} partitions, all occupied)")]
    #[diagnostic(
        code(allocation::no_partition_available),
        help("Close a process to free a partition, then try again.")
    )]
    NoPartitionAvailable { requested: Size, partitions: usize },

    #[error("Process IDs exhausted: {last} was the last ID available")]
    #[diagnostic(
        code(allocation::pids_exhausted),
        help("IDs are never reused. Start a new simulation.")
    )]
    ProcessIdsExhausted { last: Pid },

    #[error("Memory map error: {0}")]
    #[diagnostic(transparent)]
    Memory(#[from] MemoryError),
}

/// Release errors for process closure
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum CloseError {
    #[error("Process {0} not found")]
    #[diagnostic(
        code(close::process_not_found),
        help("The process may have been closed already or never existed. Check the ID.")
    )]
    ProcessNotFound(Pid),

    #[error("No partition hosts process {0}")]
    #[diagnostic(
        code(close::partition_not_found),
        help("The partition table and process registry are out of sync. Please report this issue.")
    )]
    PartitionNotFound(Pid),
}

/// Unified simulator error type with miette diagnostics
#[derive(Error, Debug, Clone, PartialEq, Eq, Diagnostic)]
pub enum SimulatorError {
    #[error("Configuration error: {0}")]
    #[diagnostic(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error("Allocation error: {0}")]
    #[diagnostic(transparent)]
    Allocation(#[from] AllocationError),

    #[error("Close error: {0}")]
    #[diagnostic(transparent)]
    Close(#[from] CloseError),
}

/// Result alias for setup operations
pub type ConfigResult<T> = Result<T, ConfigurationError>;
