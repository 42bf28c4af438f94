/*!
 * Core Types
 * Common types used across the simulator
 */

/// Byte offset into the simulated region
pub type Address = usize;

/// Size in bytes
pub type Size = usize;

/// Identifier of an allocated block, assigned sequentially from 1 and never
/// reused within one init epoch
pub type BlockId = u32;
