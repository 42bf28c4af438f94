/*!
 * Rendering
 * Text rendering of snapshots and statistics
 */

use crate::memory::{MemoryStats, Snapshot};

const RULE: &str = "------------------------------------------------------------";

/// Memory map: an occupancy line ('#' allocated, '.' free) over an id line
/// showing the last decimal digit of the owning block's id, plus the list of
/// active blocks.
///
/// The single-digit id line is display shorthand only; ids stay full
/// integers everywhere in the allocator contract.
pub fn render_map(snapshot: &Snapshot) -> String {
    let mut occupancy = String::with_capacity(snapshot.capacity + 2);
    let mut ids = String::with_capacity(snapshot.capacity + 2);
    occupancy.push('[');
    ids.push('[');

    for block in &snapshot.blocks {
        let (mark, digit) = match block.id {
            Some(id) => ('#', char::from_digit(id % 10, 10).unwrap_or('?')),
            None => ('.', '.'),
        };
        for _ in 0..block.size {
            occupancy.push(mark);
            ids.push(digit);
        }
    }

    occupancy.push(']');
    ids.push(']');

    let active: Vec<String> = snapshot
        .blocks
        .iter()
        .filter(|b| !b.is_free())
        .map(|b| b.to_string())
        .collect();
    let active_line = if active.is_empty() {
        "Active blocks: none".to_string()
    } else {
        format!("Active blocks: {}", active.join(" | "))
    };

    format!(
        "Memory map ({} bytes)\n{RULE}\n{occupancy}\n{ids}\n{RULE}\n{active_line}",
        snapshot.capacity
    )
}

/// Statistics block mirroring the map's vocabulary
pub fn render_stats(stats: &MemoryStats) -> String {
    format!(
        "== Statistics ==\n\
         Total size: {} bytes\n\
         Used: {} bytes | Free: {} bytes\n\
         Holes (external fragmentation): {}\n\
         Internal fragmentation: {} bytes\n\
         Usage: {:.2}%",
        stats.total_size,
        stats.used_space,
        stats.free_space,
        stats.free_block_count,
        stats.internal_fragmentation,
        stats.usage_percentage
    )
}
