//! Syntax types for first-order sentences and the terms they mention.

mod sentence;
mod term;

pub use sentence::Sentence;
pub use term::Term;
