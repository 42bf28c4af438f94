/*!
 * memsim - Main Entry Point
 *
 * Interactive simulator for contiguous-memory allocation strategies:
 * - Fixed-size byte-addressable region partitioned into a block ledger
 * - First-fit / best-fit / worst-fit placement
 * - Split on allocate, coalesce on free
 * - Fragmentation statistics
 */

use anyhow::Result;
use clap::Parser;
use memsim::{init_tracing, MemoryManager, Repl};
use std::io;
use tracing::info;

/// Interactive simulator for contiguous-memory allocation strategies
#[derive(Parser, Debug)]
#[command(name = "memsim", version, about)]
struct Args {
    /// Initialize the region with this capacity in bytes before the first
    /// prompt
    #[arg(long)]
    capacity: Option<usize>,
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let mut manager = MemoryManager::new();
    if let Some(capacity) = args.capacity {
        manager.init(capacity)?;
        info!(capacity, "region pre-initialized from command line");
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut repl = Repl::new(manager);
    repl.run(stdin.lock(), stdout.lock())?;

    Ok(())
}
