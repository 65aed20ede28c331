/*!
 * Partition Table
 * Fixed-size partitions carved from the memory map
 */

use crate::core::errors::{ConfigResult, ConfigurationError};
use crate::core::types::{Address, PartitionId, Pid, Size};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Internal fragmentation of a partition as a percentage of its size
///
/// Defined as 0 for a zero-sized process or partition.
pub fn internal_fragmentation(partition_size: Size, required: Size) -> f64 {
    if required == 0 || partition_size == 0 {
        return 0.0;
    }
    let wasted = partition_size.saturating_sub(required);
    (wasted as f64 * 100.0) / partition_size as f64
}

/// One fixed-size partition
///
/// Occupancy is derived from `occupant`, so the two can never disagree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partition {
    pub id: PartitionId,
    pub start_address: Address,
    pub size: Size,
    pub occupant: Option<Pid>,
}

impl Partition {
    pub fn is_occupied(&self) -> bool {
        self.occupant.is_some()
    }

    pub fn is_free(&self) -> bool {
        self.occupant.is_none()
    }

    /// One past the last address of the partition
    pub fn end_address(&self) -> Address {
        self.start_address + self.size
    }

    pub fn fits(&self, required: Size) -> bool {
        self.is_free() && self.size >= required
    }
}

/// Ordered, fixed set of equal-size partitions
#[derive(Debug, Clone)]
pub struct PartitionTable {
    partitions: Vec<Partition>,
    partition_size: Size,
    total_size: Size,
}

impl PartitionTable {
    /// Split `total_size` KB into `total_size / partition_size` partitions
    ///
    /// Any remainder past the last whole partition is unaddressable.
    pub fn new(total_size: Size, partition_size: Size) -> ConfigResult<Self> {
        if total_size == 0 {
            return Err(ConfigurationError::ZeroTotalMemory);
        }
        if partition_size == 0 {
            return Err(ConfigurationError::ZeroPartitionSize);
        }
        if partition_size > total_size {
            return Err(ConfigurationError::PartitionLargerThanMemory {
                partition: partition_size,
                total: total_size,
            });
        }

        let count = total_size / partition_size;
        if count == 0 {
            return Err(ConfigurationError::NoPartitions {
                total: total_size,
                partition: partition_size,
            });
        }

        let mut partitions = Vec::new();
        partitions
            .try_reserve_exact(count)
            .map_err(|_| ConfigurationError::BackingStoreUnavailable { cells: total_size })?;
        partitions.extend((0..count).map(|id| Partition {
            id,
            start_address: id * partition_size,
            size: partition_size,
            occupant: None,
        }));

        Ok(Self {
            partitions,
            partition_size,
            total_size,
        })
    }

    pub fn len(&self) -> usize {
        self.partitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.partitions.is_empty()
    }

    pub fn partition_size(&self) -> Size {
        self.partition_size
    }

    /// KB covered by whole partitions
    pub fn addressable_kb(&self) -> Size {
        self.partitions.len() * self.partition_size
    }

    /// KB past the last whole partition
    pub fn unaddressable_kb(&self) -> Size {
        self.total_size - self.addressable_kb()
    }

    pub fn get(&self, id: PartitionId) -> Option<&Partition> {
        self.partitions.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Partition> {
        self.partitions.iter()
    }

    pub fn occupied_count(&self) -> usize {
        self.partitions.iter().filter(|p| p.is_occupied()).count()
    }

    /// Lowest-id free partition large enough for `required` KB
    pub fn find_first_fit(&self, required: Size) -> Option<PartitionId> {
        self.first_fit(required).map(|p| p.id)
    }

    pub(crate) fn first_fit(&self, required: Size) -> Option<&Partition> {
        let found = self.partitions.iter().find(|p| p.fits(required));
        debug!(required, partition = ?found.map(|p| p.id), "First-fit scan");
        found
    }

    /// Lowest-id partition hosting `pid`
    pub fn find_by_occupant(&self, pid: Pid) -> Option<PartitionId> {
        self.partitions
            .iter()
            .find(|p| p.occupant == Some(pid))
            .map(|p| p.id)
    }

    /// Mark a partition as hosting `pid`
    ///
    /// Returns false if the partition does not exist. Not checked against
    /// the memory map.
    pub fn occupy(&mut self, id: PartitionId, pid: Pid) -> bool {
        match self.partitions.get_mut(id) {
            Some(partition) => {
                partition.occupant = Some(pid);
                true
            }
            None => false,
        }
    }

    /// Mark a partition as free, returning its previous occupant
    pub fn release(&mut self, id: PartitionId) -> Option<Pid> {
        self.partitions
            .get_mut(id)
            .and_then(|partition| partition.occupant.take())
    }
}
