/*!
 * Memory Traits
 * Allocator and inspection seams the shell programs against
 */

use super::manager::MemoryManager;
use super::types::{FitPolicy, MemoryResult, MemoryStats, Snapshot};
use crate::core::types::{Address, BlockId, Size};

/// Mutating allocator operations
pub trait Allocator {
    /// Initialize or restart the region
    fn init(&mut self, capacity: Size) -> MemoryResult<()>;

    /// Allocate a block, returning its id
    fn allocate(&mut self, size: Size, policy: FitPolicy) -> MemoryResult<BlockId>;

    /// Free an allocated block by id
    fn free_by_id(&mut self, id: BlockId) -> MemoryResult<()>;

    /// Free an allocated block by its start address
    fn free_by_address(&mut self, address: Address) -> MemoryResult<()>;
}

/// Read-only inspection
pub trait MemoryInfo {
    /// Ordered, immutable view of the block list
    fn snapshot(&self) -> MemoryResult<Snapshot>;

    /// Usage and fragmentation statistics
    fn stats(&self) -> MemoryResult<MemoryStats>;
}

impl Allocator for MemoryManager {
    fn init(&mut self, capacity: Size) -> MemoryResult<()> {
        MemoryManager::init(self, capacity)
    }

    fn allocate(&mut self, size: Size, policy: FitPolicy) -> MemoryResult<BlockId> {
        MemoryManager::allocate(self, size, policy)
    }

    fn free_by_id(&mut self, id: BlockId) -> MemoryResult<()> {
        MemoryManager::free_by_id(self, id)
    }

    fn free_by_address(&mut self, address: Address) -> MemoryResult<()> {
        MemoryManager::free_by_address(self, address)
    }
}

impl MemoryInfo for MemoryManager {
    fn snapshot(&self) -> MemoryResult<Snapshot> {
        MemoryManager::snapshot(self)
    }

    fn stats(&self) -> MemoryResult<MemoryStats> {
        MemoryManager::stats(self)
    }
}
