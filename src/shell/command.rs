/*!
 * Shell Commands
 * Command grammar and parser for the interactive loop
 */

use crate::core::types::{Address, BlockId, Size};
use crate::memory::FitPolicy;
use std::str::FromStr;
use thiserror::Error;

const INIT_USAGE: &str = "init <size>";
const ALLOC_USAGE: &str = "alloc <size> <first|best|worst>";
const FREEID_USAGE: &str = "freeid <id>";
const FREEADDR_USAGE: &str = "freeaddr <address>";

/// One parsed shell command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Init { capacity: Size },
    Alloc { size: Size, policy: FitPolicy },
    FreeId { id: BlockId },
    FreeAddr { address: Address },
    Show,
    Stats,
    Dump,
    Help,
    Exit,
}

/// Parse failures; the loop reports these and keeps going
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command '{0}', type 'help' for the command list")]
    Unknown(String),

    #[error("usage: {0}")]
    Usage(&'static str),

    #[error("not a number: '{0}'")]
    InvalidNumber(String),

    #[error("unknown policy '{0}', expected first, best, or worst")]
    UnknownPolicy(String),
}

impl Command {
    /// Parse one input line. Blank lines yield `None`.
    pub fn parse(line: &str) -> Option<Result<Command, CommandError>> {
        let mut tokens = line.split_whitespace();
        let head = tokens.next()?;
        Some(Self::parse_tokens(&head.to_ascii_lowercase(), tokens))
    }

    fn parse_tokens<'a>(
        head: &str,
        mut args: impl Iterator<Item = &'a str>,
    ) -> Result<Command, CommandError> {
        match head {
            "init" => {
                let capacity = number(args.next().ok_or(CommandError::Usage(INIT_USAGE))?)?;
                Ok(Command::Init { capacity })
            }
            "alloc" => {
                let size = number(args.next().ok_or(CommandError::Usage(ALLOC_USAGE))?)?;
                let token = args.next().ok_or(CommandError::Usage(ALLOC_USAGE))?;
                let policy = token
                    .parse::<FitPolicy>()
                    .map_err(|_| CommandError::UnknownPolicy(token.to_string()))?;
                Ok(Command::Alloc { size, policy })
            }
            "freeid" => {
                let id = number(args.next().ok_or(CommandError::Usage(FREEID_USAGE))?)?;
                Ok(Command::FreeId { id })
            }
            "freeaddr" => {
                let address = number(args.next().ok_or(CommandError::Usage(FREEADDR_USAGE))?)?;
                Ok(Command::FreeAddr { address })
            }
            "show" => Ok(Command::Show),
            "stats" => Ok(Command::Stats),
            "dump" => Ok(Command::Dump),
            "help" => Ok(Command::Help),
            "exit" | "quit" => Ok(Command::Exit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

fn number<T: FromStr>(token: &str) -> Result<T, CommandError> {
    token
        .parse()
        .map_err(|_| CommandError::InvalidNumber(token.to_string()))
}
