//! Model data structures: the domain of discourse, the first-order model,
//! and the session context that holds the current model.

mod context;
mod domain;
mod model;

pub use context::Context;
pub use domain::Domain;
pub use model::Model;
