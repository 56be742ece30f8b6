//! The driver loop: read a line, parse it to a command, execute it against
//! the current context, print, repeat.

use std::io::{self, BufRead, Write};

use crate::command::{CommandProcessor, ExecResult, QueryOutcome};
use crate::model::Context;
use crate::parser::Notation;
use crate::proof::{pretty_print, ProofSolver};

/// Interactive session over a line-oriented input and output stream.
///
/// The context is an explicit value threaded through the loop; a failed
/// command leaves it exactly as it was. The loop ends when the processor
/// reports the termination signal (empty line or end of input).
pub struct Repl<R, W, S> {
    processor: CommandProcessor<R>,
    out: W,
    solver: S,
    context: Context,
}

impl<R: BufRead, W: Write, S: ProofSolver> Repl<R, W, S> {
    pub fn new(input: R, out: W, solver: S, notation: Notation) -> Self {
        Repl {
            processor: CommandProcessor::new(input, notation),
            out,
            solver,
            context: Context::default(),
        }
    }

    /// The current session context.
    pub fn context(&self) -> &Context {
        &self.context
    }

    /// Run until the termination signal.
    ///
    /// Only I/O failures on the output stream end the loop early; command
    /// errors are reported and the loop continues with the previous context.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            writeln!(self.out, "{}", self.context.status())?;
            write!(self.out, "> ")?;
            self.out.flush()?;

            let command = match self.processor.try_parse_next_command() {
                Ok(Some(command)) => command,
                Ok(None) => return Ok(()),
                Err(e) => {
                    writeln!(self.out, "error: {}", e)?;
                    writeln!(self.out)?;
                    continue;
                }
            };

            let execution = command.execute(&self.context, &self.solver);
            match execution.result {
                ExecResult::ModelReplaced => writeln!(self.out, "model set.")?,
                ExecResult::QueryResolved(QueryOutcome::Verified(proof)) => {
                    writeln!(self.out, "verified:")?;
                    writeln!(self.out, "{}", pretty_print(&proof))?;
                }
                ExecResult::QueryResolved(QueryOutcome::Falsified(proof)) => {
                    writeln!(self.out, "falsified:")?;
                    writeln!(self.out, "{}", pretty_print(&proof))?;
                }
                ExecResult::QueryResolved(QueryOutcome::Undetermined) => {
                    writeln!(self.out, "undetermined.")?;
                }
            }
            self.context = execution.context;
            writeln!(self.out)?;
        }
    }
}
