//! Proof search interface: contexts handed to a solver, results streamed
//! back, and rendering of found proofs.

mod print;
mod solver;
mod types;

pub use print::pretty_print;
pub use solver::{NaiveStrategy, ProofSolver};
pub use types::{Conclusion, Premise, Proof, ProofContext, ProofResult};
