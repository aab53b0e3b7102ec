//! Chat command interpretation and dispatch

pub mod parser;
pub mod router;

pub use parser::{parse_command, Command, CommandError};
pub use router::CommandRouter;
