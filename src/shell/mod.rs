/*!
 * Shell Module
 * Line-oriented front end over the allocator operations
 */

pub mod command;
pub mod render;
pub mod repl;

// Re-export for convenience
pub use command::{Command, CommandError};
pub use repl::Repl;
