/*!
 * Memory Manager
 * Allocation, free, and statistics operations over the block ledger
 */

use super::ledger::Ledger;
use super::types::{FitPolicy, MemoryError, MemoryResult, MemoryStats, Snapshot};
use crate::core::types::{Address, BlockId, Size};
use log::{info, warn};

/// Contiguous-allocation simulator.
///
/// Two states: uninitialized (no ledger) and ready. Every operation except
/// `init` fails with `NotInitialized` until `init` succeeds, and any failed
/// operation leaves the ledger untouched. Ids start at 1 on each `init` and
/// are never reused within that epoch.
#[derive(Debug, Clone)]
pub struct MemoryManager {
    ledger: Option<Ledger>,
    next_id: BlockId,
}

impl MemoryManager {
    pub fn new() -> Self {
        Self {
            ledger: None,
            next_id: 1,
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.ledger.is_some()
    }

    /// Initialize (or re-initialize) the region.
    ///
    /// Re-init is destructive: prior allocations and the id counter are
    /// discarded, matching the simulator's restart semantics.
    pub fn init(&mut self, capacity: Size) -> MemoryResult<()> {
        let ledger = Ledger::new(capacity)?;
        self.ledger = Some(ledger);
        self.next_id = 1;
        info!("memory initialized with {} bytes", capacity);
        Ok(())
    }

    /// Allocate `size` bytes, choosing the free block per `policy`
    pub fn allocate(&mut self, size: Size, policy: FitPolicy) -> MemoryResult<BlockId> {
        let ledger = self.ledger.as_mut().ok_or(MemoryError::NotInitialized)?;
        if size == 0 {
            return Err(MemoryError::InvalidSize(size));
        }

        let index = match ledger.find_candidate(size, policy) {
            Some(index) => index,
            None => {
                let available: Size = ledger
                    .blocks()
                    .iter()
                    .filter(|b| b.is_free())
                    .map(|b| b.size)
                    .sum();
                let largest: Size = ledger
                    .blocks()
                    .iter()
                    .filter(|b| b.is_free())
                    .map(|b| b.size)
                    .max()
                    .unwrap_or(0);
                warn!(
                    "OOM: requested {} bytes with {}, largest free block {} bytes ({} bytes free in total)",
                    size, policy, largest, available
                );
                return Err(MemoryError::OutOfMemory {
                    requested: size,
                    available,
                    largest,
                });
            }
        };

        let id = self.next_id;
        self.next_id += 1;
        ledger.split_and_assign(index, size, id);

        let start = ledger.blocks()[index].start;
        info!(
            "allocated block {}: {} bytes at @{} ({})",
            id, size, start, policy
        );
        Ok(id)
    }

    /// Free the allocated block carrying `id`, then coalesce with free
    /// neighbors
    pub fn free_by_id(&mut self, id: BlockId) -> MemoryResult<()> {
        let ledger = self.ledger.as_mut().ok_or(MemoryError::NotInitialized)?;
        let index = ledger
            .position_by_id(id)
            .ok_or(MemoryError::BlockNotFound(id))?;

        let (start, size) = {
            let block = &ledger.blocks()[index];
            (block.start, block.size)
        };
        ledger.mark_free(index);
        ledger.coalesce(index);

        info!("freed block {}: {} bytes at @{}", id, size, start);
        Ok(())
    }

    /// Free the allocated block whose start address is exactly `address`.
    /// Addresses inside a block are not-found; only whole blocks free.
    pub fn free_by_address(&mut self, address: Address) -> MemoryResult<()> {
        let ledger = self.ledger.as_ref().ok_or(MemoryError::NotInitialized)?;
        let index = ledger
            .position_by_start(address)
            .ok_or(MemoryError::AddressNotFound(address))?;
        let id = ledger.blocks()[index]
            .id
            .ok_or(MemoryError::AddressNotFound(address))?;
        self.free_by_id(id)
    }

    /// Owned, immutable copy of the ledger in address order
    pub fn snapshot(&self) -> MemoryResult<Snapshot> {
        let ledger = self.ledger.as_ref().ok_or(MemoryError::NotInitialized)?;
        Ok(Snapshot {
            capacity: ledger.capacity(),
            blocks: ledger.blocks().to_vec(),
        })
    }

    /// Usage and fragmentation accounting
    pub fn stats(&self) -> MemoryResult<MemoryStats> {
        let ledger = self.ledger.as_ref().ok_or(MemoryError::NotInitialized)?;

        let mut used_space = 0;
        let mut free_space = 0;
        let mut free_block_count = 0;
        let mut internal_fragmentation = 0;

        for block in ledger.blocks() {
            if block.is_free() {
                free_space += block.size;
                free_block_count += 1;
            } else {
                used_space += block.size;
                internal_fragmentation += block.internal_fragmentation();
            }
        }

        // capacity > 0 is guaranteed by init, so the division is safe
        let usage_percentage = (used_space as f64 * 100.0) / ledger.capacity() as f64;

        Ok(MemoryStats {
            total_size: ledger.capacity(),
            used_space,
            free_space,
            free_block_count,
            internal_fragmentation,
            usage_percentage,
        })
    }
}

impl Default for MemoryManager {
    fn default() -> Self {
        Self::new()
    }
}
