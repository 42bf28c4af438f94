/*!
 * memsim Library
 * Contiguous-memory allocation simulator: block ledger, placement policies,
 * and the interactive shell around them
 */

pub mod core;
pub mod memory;
pub mod shell;
mod tracer;

// Re-exports
pub use memory::{
    Allocator, Block, FitPolicy, MemoryError, MemoryInfo, MemoryManager, MemoryResult,
    MemoryStats, Snapshot,
};
pub use shell::{Command, CommandError, Repl};
pub use tracer::init_tracing;
