//! Domain of discourse: a finite set of atomic terms.

use std::collections::HashSet;
use std::fmt;

use crate::syntax::Term;

/// An immutable set of atomic terms.
///
/// Duplicate names collapse on construction. `merge` is plain set union, so
/// it is commutative, associative, and idempotent, with `empty` as identity.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Domain {
    terms: HashSet<Term>,
}

impl Domain {
    /// The empty domain, identity element of `merge`.
    pub fn empty() -> Self {
        Domain {
            terms: HashSet::new(),
        }
    }

    /// Build a domain from terms, collapsing duplicates.
    pub fn new(terms: impl IntoIterator<Item = Term>) -> Self {
        Domain {
            terms: terms.into_iter().collect(),
        }
    }

    /// Set union of two domains.
    pub fn merge(&self, other: &Domain) -> Domain {
        Domain {
            terms: self.terms.union(&other.terms).cloned().collect(),
        }
    }

    pub fn contains(&self, term: &Term) -> bool {
        self.terms.contains(term)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn terms(&self) -> impl Iterator<Item = &Term> {
        self.terms.iter()
    }
}

impl fmt::Display for Domain {
    /// Renders `{a, b, c}` with terms in sorted order for stable output.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut sorted: Vec<&Term> = self.terms.iter().collect();
        sorted.sort();
        write!(f, "{{")?;
        for (i, term) in sorted.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", term)?;
        }
        write!(f, "}}")
    }
}
