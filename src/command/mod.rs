//! Commands: parsing a line of input into a unit of work and executing it
//! against the session context.

mod command;
mod processor;

pub use command::{Command, ExecResult, Execution, QueryOutcome};
pub use processor::{CommandProcessor, InvalidCommand};
