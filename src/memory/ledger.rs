/*!
 * Block Ledger
 * Ordered, gap-free partition of the simulated address space
 */

use super::types::{Block, FitPolicy, MemoryError, MemoryResult};
use crate::core::types::{Address, BlockId, Size};

/// The ordered block list covering `[0, capacity)`.
///
/// Blocks are addressed by position index. After every mutation the list
/// stays sorted by start address with no gaps, no overlaps, and no two
/// adjacent free blocks. Only the manager mutates it; everyone else sees
/// owned snapshots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ledger {
    capacity: Size,
    blocks: Vec<Block>,
}

impl Ledger {
    /// A ledger holding a single free block spanning the whole region
    pub fn new(capacity: Size) -> MemoryResult<Self> {
        if capacity == 0 {
            return Err(MemoryError::InvalidCapacity(capacity));
        }
        Ok(Self {
            capacity,
            blocks: vec![Block::free(0, capacity)],
        })
    }

    /// Replace the contents with a single free block of `capacity` bytes
    pub fn reset(&mut self, capacity: Size) -> MemoryResult<()> {
        if capacity == 0 {
            return Err(MemoryError::InvalidCapacity(capacity));
        }
        self.capacity = capacity;
        self.blocks.clear();
        self.blocks.push(Block::free(0, capacity));
        Ok(())
    }

    pub fn capacity(&self) -> Size {
        self.capacity
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Index of the free block chosen by `policy` among those with
    /// `size >= needed`, or `None` when no free block qualifies.
    ///
    /// Best and worst fit replace the running candidate only on strict
    /// inequality, so equal-size ties keep the lowest address.
    pub fn find_candidate(&self, needed: Size, policy: FitPolicy) -> Option<usize> {
        let mut chosen: Option<usize> = None;

        for (index, block) in self.blocks.iter().enumerate() {
            if !block.is_free() || block.size < needed {
                continue;
            }

            match policy {
                FitPolicy::FirstFit => return Some(index),
                FitPolicy::BestFit => {
                    if chosen.map_or(true, |c| block.size < self.blocks[c].size) {
                        chosen = Some(index);
                    }
                }
                FitPolicy::WorstFit => {
                    if chosen.map_or(true, |c| block.size > self.blocks[c].size) {
                        chosen = Some(index);
                    }
                }
            }
        }

        chosen
    }

    /// Turn the free block at `index` into an allocated block of exactly
    /// `requested` bytes. A larger block is shrunk and the remainder inserted
    /// right after it as a new free block; an exact fit is taken whole, so no
    /// zero-size block ever appears.
    pub fn split_and_assign(&mut self, index: usize, requested: Size, id: BlockId) {
        let block = &mut self.blocks[index];
        debug_assert!(block.is_free(), "split target must be free");
        debug_assert!(requested > 0 && requested <= block.size);

        if block.size > requested {
            let remainder = Block::free(block.start + requested, block.size - requested);
            block.size = requested;
            block.id = Some(id);
            block.used_size = requested;
            self.blocks.insert(index + 1, remainder);
        } else {
            block.id = Some(id);
            block.used_size = requested;
        }
    }

    /// Flip the block at `index` back to free
    pub fn mark_free(&mut self, index: usize) {
        let block = &mut self.blocks[index];
        block.id = None;
        block.used_size = block.size;
    }

    /// Merge a just-freed block with its free, address-contiguous neighbors.
    ///
    /// The predecessor and successor merges are independent checks; either,
    /// both, or neither may fire. Adjacency is end-exclusive:
    /// `prev.start + prev.size == next.start`. Returns the final position of
    /// the (possibly merged) block.
    pub fn coalesce(&mut self, mut index: usize) -> usize {
        if index > 0 {
            let prev = &self.blocks[index - 1];
            let current = &self.blocks[index];
            if prev.is_free() && current.is_free() && prev.end() == current.start {
                let merged = self.blocks.remove(index);
                index -= 1;
                let prev = &mut self.blocks[index];
                prev.size += merged.size;
                prev.used_size = prev.size;
            }
        }

        if index + 1 < self.blocks.len() {
            let current = &self.blocks[index];
            let next = &self.blocks[index + 1];
            if current.is_free() && next.is_free() && current.end() == next.start {
                let merged = self.blocks.remove(index + 1);
                let current = &mut self.blocks[index];
                current.size += merged.size;
                current.used_size = current.size;
            }
        }

        index
    }

    /// Position of the allocated block carrying `id`
    pub fn position_by_id(&self, id: BlockId) -> Option<usize> {
        self.blocks.iter().position(|b| b.id == Some(id))
    }

    /// Position of the allocated block starting exactly at `addr`.
    /// Interior addresses and free blocks never match.
    pub fn position_by_start(&self, addr: Address) -> Option<usize> {
        self.blocks
            .iter()
            .position(|b| !b.is_free() && b.start == addr)
    }
}
