//! Session context: the single current model.

use std::fmt;

use super::model::Model;

/// Holds exactly one current model.
///
/// A context is never updated in place: executing a set command builds a
/// whole new `Context` around a fully constructed model, so observers never
/// see a partially built state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Context {
    model: Model,
}

impl Context {
    pub fn new(model: Model) -> Self {
        Context { model }
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    /// Render the current rule set and domain for display before a prompt.
    pub fn status(&self) -> String {
        self.model.to_string()
    }
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.model)
    }
}
