//! modelvf: interactive verification of first-order models.
//!
//! A session holds one immutable model (inference rules plus a domain of
//! discourse). Line commands either replace the model (`$`) or pose a query
//! (`?`) that is verified or refuted by two-phase proof search: prove the
//! sentence, and only if that fails, assume it and look for a contradiction.

pub mod command;
pub mod model;
pub mod parser;
pub mod proof;
pub mod repl;
pub mod syntax;
