/*!
 * Memory Types
 * Common types for the allocation simulator
 */

use crate::core::types::{Address, BlockId, Size};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Memory operation result
pub type MemoryResult<T> = Result<T, MemoryError>;

/// Memory errors
///
/// All of these are recoverable: a failed operation reports its error and
/// leaves the allocator exactly as it was.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MemoryError {
    #[error("memory not initialized, run init first")]
    NotInitialized,

    #[error("invalid capacity: {0} bytes")]
    InvalidCapacity(Size),

    #[error("invalid allocation size: {0} bytes")]
    InvalidSize(Size),

    #[error("out of memory: requested {requested} bytes, largest free block {largest} bytes ({available} bytes free in total)")]
    OutOfMemory {
        requested: Size,
        available: Size,
        largest: Size,
    },

    #[error("no allocated block with id {0}")]
    BlockNotFound(BlockId),

    #[error("no allocated block starts at address {0}")]
    AddressNotFound(Address),
}

/// Placement policy for choosing among qualifying free blocks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FitPolicy {
    /// First qualifying block in address order
    FirstFit,
    /// Smallest qualifying block; ties keep the lowest address
    BestFit,
    /// Largest qualifying block; ties keep the lowest address
    WorstFit,
}

impl fmt::Display for FitPolicy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FitPolicy::FirstFit => write!(f, "first-fit"),
            FitPolicy::BestFit => write!(f, "best-fit"),
            FitPolicy::WorstFit => write!(f, "worst-fit"),
        }
    }
}

/// Error for unrecognized policy names
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown fit policy: {0}")]
pub struct ParsePolicyError(pub String);

impl FromStr for FitPolicy {
    type Err = ParsePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("first") {
            Ok(FitPolicy::FirstFit)
        } else if s.eq_ignore_ascii_case("best") {
            Ok(FitPolicy::BestFit)
        } else if s.eq_ignore_ascii_case("worst") {
            Ok(FitPolicy::WorstFit)
        } else {
            Err(ParsePolicyError(s.to_string()))
        }
    }
}

/// Block metadata
///
/// Free blocks carry no id; allocated blocks keep the caller-requested size
/// in `used_size` so internal fragmentation stays measurable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub id: Option<BlockId>,
    pub start: Address,
    pub size: Size,
    pub used_size: Size,
}

impl Block {
    /// A free block spanning `[start, start + size)`
    pub fn free(start: Address, size: Size) -> Self {
        Self {
            id: None,
            start,
            size,
            used_size: size,
        }
    }

    pub fn is_free(&self) -> bool {
        self.id.is_none()
    }

    /// End address, exclusive
    pub fn end(&self) -> Address {
        self.start + self.size
    }

    /// Allocated-but-unused bytes; zero for free blocks
    pub fn internal_fragmentation(&self) -> Size {
        if self.is_free() {
            0
        } else {
            self.size - self.used_size
        }
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.id {
            Some(id) => write!(
                f,
                "[id={}] @{} +{}B (used={}B)",
                id, self.start, self.size, self.used_size
            ),
            None => write!(f, "free @{} +{}B", self.start, self.size),
        }
    }
}

/// Read-only copy of the ledger in address order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub capacity: Size,
    pub blocks: Vec<Block>,
}

/// Memory usage and fragmentation statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryStats {
    pub total_size: Size,
    pub used_space: Size,
    pub free_space: Size,
    /// Number of free blocks; two or more means the free space is split
    pub free_block_count: usize,
    /// Sum of `size - used_size` over allocated blocks
    pub internal_fragmentation: Size,
    pub usage_percentage: f64,
}
