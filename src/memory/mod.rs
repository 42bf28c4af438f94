/*!
 * Memory Module
 * Block ledger and allocator operations
 */

pub mod ledger;
pub mod manager;
pub mod traits;
pub mod types;

// Re-export for convenience
pub use ledger::Ledger;
pub use manager::MemoryManager;
pub use traits::*;
pub use types::*;
