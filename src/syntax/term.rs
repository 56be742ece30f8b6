//! Atomic terms: named elements of the domain of discourse.

use std::fmt;

/// An atomic term identified by name.
///
/// Terms appear both as arguments of predicate atoms (`P(x, y)`) and as
/// elements of a model's domain of discourse. Two terms are equal exactly
/// when their names are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Term {
    name: String,
}

impl Term {
    pub fn new(name: impl Into<String>) -> Self {
        Term { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
