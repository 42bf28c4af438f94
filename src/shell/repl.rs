/*!
 * Interactive Shell
 * Read-eval-print loop over the allocator operations
 */

use super::command::Command;
use super::render;
use crate::memory::{Allocator, MemoryInfo};
use std::io::{self, BufRead, Write};

const BANNER: &str = "\
========================================
  Memory Allocation Simulator
========================================
Type 'help' for the command list.";

const HELP: &str = "\
Available commands:
  init <size>              - initialize memory with the given capacity
  alloc <size> <policy>    - allocate a block (policy: first, best, worst)
  freeid <id>              - free a block by id
  freeaddr <address>       - free a block by start address
  show                     - display the memory map
  stats                    - display usage statistics
  dump                     - print the snapshot as JSON
  help                     - show this help
  exit                     - leave the simulator

Example session:
  > init 64
  > alloc 10 first
  > alloc 8 first
  > freeid 2
  > alloc 6 best
  > show
  > stats";

/// The interactive loop, generic over the allocator seam and the I/O pair so
/// tests can drive it with in-memory buffers.
pub struct Repl<M> {
    manager: M,
}

impl<M: Allocator + MemoryInfo> Repl<M> {
    pub fn new(manager: M) -> Self {
        Self { manager }
    }

    pub fn into_inner(self) -> M {
        self.manager
    }

    /// Run until `exit` or end of input. Every failure is rendered as an
    /// `error:` line and the loop continues; nothing short of an I/O error
    /// stops the session.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut out: W) -> io::Result<()> {
        writeln!(out, "{}", BANNER)?;
        write!(out, "> ")?;
        out.flush()?;

        for line in input.lines() {
            let line = line?;
            match Command::parse(&line) {
                None => {}
                Some(Err(err)) => self.report(&mut out, &err)?,
                Some(Ok(Command::Exit)) => {
                    writeln!(out, "Leaving simulator.")?;
                    return Ok(());
                }
                Some(Ok(command)) => self.execute(command, &mut out)?,
            }
            write!(out, "> ")?;
            out.flush()?;
        }

        Ok(())
    }

    fn execute<W: Write>(&mut self, command: Command, out: &mut W) -> io::Result<()> {
        match command {
            Command::Init { capacity } => match self.manager.init(capacity) {
                Ok(()) => writeln!(out, "Memory initialized with {} bytes.", capacity),
                Err(err) => self.report(out, &err),
            },
            Command::Alloc { size, policy } => match self.manager.allocate(size, policy) {
                Ok(id) => {
                    let start = self.manager.snapshot().ok().and_then(|snapshot| {
                        snapshot
                            .blocks
                            .iter()
                            .find(|b| b.id == Some(id))
                            .map(|b| b.start)
                    });
                    match start {
                        Some(start) => writeln!(
                            out,
                            "Allocated block {}: {} bytes at @{} ({})",
                            id, size, start, policy
                        ),
                        None => writeln!(out, "Allocated block {}.", id),
                    }
                }
                Err(err) => self.report(out, &err),
            },
            Command::FreeId { id } => match self.manager.free_by_id(id) {
                Ok(()) => writeln!(out, "Block {} freed.", id),
                Err(err) => self.report(out, &err),
            },
            Command::FreeAddr { address } => match self.manager.free_by_address(address) {
                Ok(()) => writeln!(out, "Block at address {} freed.", address),
                Err(err) => self.report(out, &err),
            },
            Command::Show => match self.manager.snapshot() {
                Ok(snapshot) => writeln!(out, "{}", render::render_map(&snapshot)),
                Err(err) => self.report(out, &err),
            },
            Command::Stats => match self.manager.stats() {
                Ok(stats) => writeln!(out, "{}", render::render_stats(&stats)),
                Err(err) => self.report(out, &err),
            },
            Command::Dump => match self.manager.snapshot() {
                Ok(snapshot) => match serde_json::to_string_pretty(&snapshot) {
                    Ok(json) => writeln!(out, "{}", json),
                    Err(err) => writeln!(out, "error: {}", err),
                },
                Err(err) => self.report(out, &err),
            },
            Command::Help => writeln!(out, "{}", HELP),
            // Exit is intercepted in `run`
            Command::Exit => Ok(()),
        }
    }

    fn report<W: Write, E: std::fmt::Display>(&self, out: &mut W, err: &E) -> io::Result<()> {
        writeln!(out, "error: {}", err)
    }
}
