/*!
 * Memory Map
 * Flat array of KB cells backing the partition table
 */

use super::types::{Cell, MemoryError, MemoryResult};
use crate::core::types::{Address, Pid, Size};
use tracing::debug;

/// Backing store: one cell per KB, either free or owned by a process
#[derive(Debug, Clone)]
pub struct MemoryMap {
    cells: Vec<Cell>,
}

impl MemoryMap {
    /// Allocate `total` cells, all free
    ///
    /// Reports `AllocationFailure` instead of aborting when the host
    /// cannot provide the backing store.
    pub fn new(total: Size) -> MemoryResult<Self> {
        let mut cells = Vec::new();
        cells
            .try_reserve_exact(total)
            .map_err(|_| MemoryError::AllocationFailure { cells: total })?;
        cells.resize(total, Cell::Free);
        Ok(Self { cells })
    }

    pub fn len(&self) -> Size {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of cells owned by any process
    pub fn used_cells(&self) -> Size {
        self.cells.iter().filter(|c| !c.is_free()).count()
    }

    /// Write `pid` into every cell of `[address, address + length)`
    ///
    /// The whole range is validated before any cell is written.
    pub fn mark(&mut self, address: Address, length: Size, pid: Pid) -> MemoryResult<()> {
        let capacity = self.cells.len();
        let window = address
            .checked_add(length)
            .and_then(|end| self.cells.get_mut(address..end))
            .ok_or(MemoryError::RangeOutOfBounds {
                address,
                length,
                capacity,
            })?;

        window.fill(Cell::Owned(pid));
        debug!(pid, address, length, "Marked memory cells");
        Ok(())
    }

    /// Free every cell owned by `pid` in the window `[address, address + window)`
    ///
    /// Cells owned by other processes are left untouched and the window is
    /// clamped to the end of the map. Returns the number of cells freed.
    pub fn clear(&mut self, address: Address, window: Size, pid: Pid) -> Size {
        let end = address.saturating_add(window).min(self.cells.len());
        let Some(cells) = self.cells.get_mut(address..end) else {
            return 0;
        };

        let mut freed = 0;
        for cell in cells.iter_mut().filter(|c| c.owner() == Some(pid)) {
            *cell = Cell::Free;
            freed += 1;
        }

        debug!(pid, address, window, freed, "Cleared memory cells");
        freed
    }
}
