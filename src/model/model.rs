//! First-order model: an ordered rule sequence plus a domain of discourse.

use std::fmt;

use super::domain::Domain;
use crate::syntax::Sentence;

/// The current logical state: inference rules in declaration order and one
/// domain of discourse.
///
/// Models are immutable; `with_domain` returns a new model and leaves the
/// receiver untouched. Rule order is the order the sentences were declared
/// in and is preserved through every rebuild.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Model {
    rules: Vec<Sentence>,
    domain: Domain,
}

impl Model {
    /// A model with no rules and an empty domain.
    pub fn empty() -> Self {
        Model {
            rules: Vec::new(),
            domain: Domain::empty(),
        }
    }

    /// A model with the given rules, in order, and an empty domain.
    pub fn from_sentences(rules: Vec<Sentence>) -> Self {
        Model {
            rules,
            domain: Domain::empty(),
        }
    }

    /// Rebuild with the same rules and the given domain.
    ///
    /// The given domain REPLACES any prior one; it is not merged. Passing
    /// `Domain::empty()` therefore discards whatever domain the model had.
    pub fn with_domain(&self, domain: Domain) -> Model {
        Model {
            rules: self.rules.clone(),
            domain,
        }
    }

    pub fn rules(&self) -> &[Sentence] {
        &self.rules
    }

    pub fn domain(&self) -> &Domain {
        &self.domain
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.rules.is_empty() {
            writeln!(f, "rules: (none)")?;
        } else {
            writeln!(f, "rules:")?;
            for (i, rule) in self.rules.iter().enumerate() {
                writeln!(f, "  {}. {}", i + 1, rule)?;
            }
        }
        write!(f, "domain: {}", self.domain)
    }
}
