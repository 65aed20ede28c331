/*!
 * Memory Module
 * Backing memory map and fixed partition table
 */

pub mod map;
pub mod partition;
pub mod traits;
pub mod types;

// Re-export for convenience
pub use map::MemoryMap;
pub use partition::{internal_fragmentation, Partition, PartitionTable};
pub use traits::*;
pub use types::*;
