//! Interactive driver loop.

mod repl;

pub use repl::Repl;
