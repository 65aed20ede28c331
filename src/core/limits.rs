/*!
 * Simulator Limits and Constants
 *
 * Centralized location for defaults, thresholds, and display constants.
 */

// =============================================================================
// PROCESS IDS
// =============================================================================

/// First process ID handed out by a fresh engine
pub const FIRST_PID: u32 = 1;

// =============================================================================
// FRONT END
// =============================================================================

/// Cells printed per row of the memory map view
pub const DEFAULT_MEMORY_ROW_WIDTH: usize = 20;

/// Smallest accepted row width
pub const MIN_MEMORY_ROW_WIDTH: usize = 1;

/// Legend entry for a free memory cell
pub const FREE_CELL_LABEL: &str = "[--]";

/// Placeholder for empty table columns
pub const EMPTY_COLUMN: &str = "---";

// =============================================================================
// ENVIRONMENT
// =============================================================================

/// Total memory in KB
pub const ENV_TOTAL_KB: &str = "PARTSIM_TOTAL_KB";

/// Partition size in KB
pub const ENV_PARTITION_KB: &str = "PARTSIM_PARTITION_KB";

/// Enable JSON trace output ("1" or "true")
pub const ENV_TRACE_JSON: &str = "PARTSIM_TRACE_JSON";

/// Memory map row width
pub const ENV_ROW_WIDTH: &str = "PARTSIM_ROW_WIDTH";

/// Seed for the random size source
pub const ENV_SEED: &str = "PARTSIM_SEED";

/// Default tracing filter when RUST_LOG is unset
/// Kept at warn so log lines don't interleave with the menu
pub const DEFAULT_LOG_FILTER: &str = "warn";
