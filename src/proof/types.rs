//! Proof-search data types: premises, contexts, proofs, and results.

use std::fmt;

use crate::syntax::Sentence;

/// An assumption fed to proof search.
///
/// An assumed premise is taken as unconditionally true for the duration of
/// one search; refutation works by assuming the queried sentence and asking
/// the solver for a contradiction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Premise {
    sentence: Sentence,
    assumed: bool,
}

impl Premise {
    /// An ordinary premise.
    pub fn new(sentence: Sentence) -> Self {
        Premise {
            sentence,
            assumed: false,
        }
    }

    /// A premise assumed true for refutation.
    pub fn assumed(sentence: Sentence) -> Self {
        Premise {
            sentence,
            assumed: true,
        }
    }

    pub fn sentence(&self) -> &Sentence {
        &self.sentence
    }

    pub fn is_assumed(&self) -> bool {
        self.assumed
    }
}

/// The bundle given to the solver for one proof-search attempt.
///
/// A `None` goal asks the solver to derive any contradiction from the rules
/// and premises. Contexts are constructed fresh per phase and never reused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProofContext {
    goal: Option<Sentence>,
    rules: Vec<Sentence>,
    premises: Vec<Premise>,
}

impl ProofContext {
    pub fn new(goal: Option<Sentence>, rules: Vec<Sentence>, premises: Vec<Premise>) -> Self {
        ProofContext {
            goal,
            rules,
            premises,
        }
    }

    /// Verification context: prove the goal from the rules alone.
    pub fn verification(goal: Sentence, rules: Vec<Sentence>) -> Self {
        ProofContext::new(Some(goal), rules, Vec::new())
    }

    /// Refutation context: derive a contradiction from the rules plus one
    /// assumed premise.
    pub fn refutation(rules: Vec<Sentence>, assumption: Premise) -> Self {
        ProofContext::new(None, rules, vec![assumption])
    }

    pub fn goal(&self) -> Option<&Sentence> {
        self.goal.as_ref()
    }

    pub fn rules(&self) -> &[Sentence] {
        &self.rules
    }

    pub fn premises(&self) -> &[Premise] {
        &self.premises
    }
}

/// What a proof step concludes: a sentence, or absurdity for refutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Conclusion {
    Sentence(Sentence),
    Absurdity,
}

impl fmt::Display for Conclusion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Conclusion::Sentence(s) => write!(f, "{}", s),
            Conclusion::Absurdity => write!(f, "⊥"),
        }
    }
}

/// A proof tree: a conclusion, the justification that licensed it, and the
/// subproofs it rests on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Proof {
    conclusion: Conclusion,
    justification: String,
    subproofs: Vec<Proof>,
}

impl Proof {
    /// A leaf proof (no subproofs).
    pub fn leaf(conclusion: Conclusion, justification: impl Into<String>) -> Self {
        Proof::step(conclusion, justification, Vec::new())
    }

    /// An inference step resting on subproofs.
    pub fn step(
        conclusion: Conclusion,
        justification: impl Into<String>,
        subproofs: Vec<Proof>,
    ) -> Self {
        Proof {
            conclusion,
            justification: justification.into(),
            subproofs,
        }
    }

    pub fn conclusion(&self) -> &Conclusion {
        &self.conclusion
    }

    pub fn justification(&self) -> &str {
        &self.justification
    }

    pub fn subproofs(&self) -> &[Proof] {
        &self.subproofs
    }
}

/// Outcome of one proof-search attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProofResult {
    Success(Proof),
    Failure,
}
