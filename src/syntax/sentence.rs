//! Sentences: first-order formulas over predicate atoms.

use std::fmt;

use super::term::Term;

/// A parsed first-order sentence.
///
/// Atoms apply a predicate symbol to zero or more terms. Compound sentences
/// are built with negation, conjunction, disjunction, and implication.
/// Sentences are immutable once produced; every combinator takes ownership
/// and boxes its operands.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Sentence {
    /// Predicate application: `P(t1, ..., tn)`; 0-ary atoms are propositions.
    Atom { predicate: String, args: Vec<Term> },
    Not(Box<Sentence>),
    And(Box<Sentence>, Box<Sentence>),
    Or(Box<Sentence>, Box<Sentence>),
    Implies(Box<Sentence>, Box<Sentence>),
}

impl Sentence {
    /// Create a predicate atom.
    pub fn atom(predicate: impl Into<String>, args: Vec<Term>) -> Self {
        Sentence::Atom {
            predicate: predicate.into(),
            args,
        }
    }

    /// Create a 0-ary atom (proposition).
    pub fn prop(predicate: impl Into<String>) -> Self {
        Sentence::atom(predicate, vec![])
    }

    pub fn not(operand: Sentence) -> Self {
        Sentence::Not(Box::new(operand))
    }

    pub fn and(left: Sentence, right: Sentence) -> Self {
        Sentence::And(Box::new(left), Box::new(right))
    }

    pub fn or(left: Sentence, right: Sentence) -> Self {
        Sentence::Or(Box::new(left), Box::new(right))
    }

    pub fn implies(antecedent: Sentence, consequent: Sentence) -> Self {
        Sentence::Implies(Box::new(antecedent), Box::new(consequent))
    }

    /// The logical complement: strips one leading negation, otherwise wraps.
    ///
    /// `negated(¬S) = S` keeps refutation checks from piling up double
    /// negations that would never compare equal to anything.
    pub fn negated(&self) -> Sentence {
        match self {
            Sentence::Not(inner) => (**inner).clone(),
            other => Sentence::not(other.clone()),
        }
    }
}

impl fmt::Display for Sentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sentence::Atom { predicate, args } => {
                if args.is_empty() {
                    write!(f, "{}", predicate)
                } else {
                    write!(f, "{}(", predicate)?;
                    for (i, arg) in args.iter().enumerate() {
                        if i > 0 {
                            write!(f, ", ")?;
                        }
                        write!(f, "{}", arg)?;
                    }
                    write!(f, ")")
                }
            }
            Sentence::Not(s) => write!(f, "(not {})", s),
            Sentence::And(l, r) => write!(f, "(and {} {})", l, r),
            Sentence::Or(l, r) => write!(f, "(or {} {})", l, r),
            Sentence::Implies(l, r) => write!(f, "(implies {} {})", l, r),
        }
    }
}
