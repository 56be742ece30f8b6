//! The solver interface and a naive bounded search strategy.

use super::types::{Conclusion, Premise, Proof, ProofContext, ProofResult};
use crate::syntax::Sentence;

/// A proof-search engine.
///
/// `prove` returns a pull-based sequence of results, produced one at a time;
/// the consumer may stop after the first `Success` without forcing the rest
/// of the sequence.
pub trait ProofSolver {
    fn prove<'a>(&'a self, context: &'a ProofContext) -> Box<dyn Iterator<Item = ProofResult> + 'a>;
}

/// A naive, depth-limited direct-derivation strategy.
///
/// This is deliberately not a complete theorem prover. It derives a goal by
/// reiterating rules and premises, introducing conjunctions and
/// disjunctions, and applying modus ponens, each step spending one unit of
/// depth. With a `None` goal it looks for any sentence in the context whose
/// complement is also derivable.
///
/// The result sequence is one attempt per depth bound from 0 up to
/// `max_depth` (iterative deepening), so the first success carries a
/// shortest-found proof and an underivable goal yields finitely many
/// failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NaiveStrategy {
    max_depth: usize,
}

impl NaiveStrategy {
    pub fn new(max_depth: usize) -> Self {
        NaiveStrategy { max_depth }
    }
}

impl Default for NaiveStrategy {
    fn default() -> Self {
        NaiveStrategy { max_depth: 4 }
    }
}

impl ProofSolver for NaiveStrategy {
    fn prove<'a>(
        &'a self,
        context: &'a ProofContext,
    ) -> Box<dyn Iterator<Item = ProofResult> + 'a> {
        Box::new((0..=self.max_depth).map(move |depth| {
            let found = match context.goal() {
                Some(goal) => derive(goal, context, depth),
                None => derive_contradiction(context, depth),
            };
            match found {
                Some(proof) => ProofResult::Success(proof),
                None => ProofResult::Failure,
            }
        }))
    }
}

/// Find the goal among the context's premises and rules.
fn lookup(goal: &Sentence, context: &ProofContext) -> Option<Proof> {
    for premise in context.premises() {
        if premise.sentence() == goal {
            let justification = if premise.is_assumed() {
                "assumption"
            } else {
                "premise"
            };
            return Some(Proof::leaf(
                Conclusion::Sentence(goal.clone()),
                justification,
            ));
        }
    }
    if context.rules().contains(goal) {
        return Some(Proof::leaf(Conclusion::Sentence(goal.clone()), "rule"));
    }
    None
}

/// Derive the goal with at most `depth` inference steps.
fn derive(goal: &Sentence, context: &ProofContext, depth: usize) -> Option<Proof> {
    if let Some(proof) = lookup(goal, context) {
        return Some(proof);
    }
    if depth == 0 {
        return None;
    }

    match goal {
        Sentence::And(left, right) => {
            let left_proof = derive(left, context, depth - 1)?;
            let right_proof = derive(right, context, depth - 1)?;
            Some(Proof::step(
                Conclusion::Sentence(goal.clone()),
                "and-intro",
                vec![left_proof, right_proof],
            ))
        }
        Sentence::Or(left, right) => derive(left, context, depth - 1)
            .or_else(|| derive(right, context, depth - 1))
            .map(|sub| {
                Proof::step(Conclusion::Sentence(goal.clone()), "or-intro", vec![sub])
            }),
        _ => derive_by_modus_ponens(goal, context, depth),
    }
}

/// Look for an implication concluding the goal whose antecedent is derivable.
fn derive_by_modus_ponens(goal: &Sentence, context: &ProofContext, depth: usize) -> Option<Proof> {
    let givens = context
        .premises()
        .iter()
        .map(Premise::sentence)
        .chain(context.rules().iter());
    for given in givens {
        if let Sentence::Implies(antecedent, consequent) = given {
            if consequent.as_ref() != goal {
                continue;
            }
            let implication = lookup(given, context)?;
            if let Some(antecedent_proof) = derive(antecedent, context, depth - 1) {
                return Some(Proof::step(
                    Conclusion::Sentence(goal.clone()),
                    "modus-ponens",
                    vec![implication, antecedent_proof],
                ));
            }
        }
    }
    None
}

/// Derive absurdity: some given sentence whose complement is also derivable.
fn derive_contradiction(context: &ProofContext, depth: usize) -> Option<Proof> {
    let candidates: Vec<Sentence> = context
        .premises()
        .iter()
        .map(|p| p.sentence().clone())
        .chain(context.rules().iter().cloned())
        .collect();
    for candidate in candidates {
        let positive = lookup(&candidate, context)?;
        if let Some(negative) = derive(&candidate.negated(), context, depth) {
            return Some(Proof::step(
                Conclusion::Absurdity,
                "contradiction",
                vec![positive, negative],
            ));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::Term;

    fn p_of(name: &str) -> Sentence {
        Sentence::atom("P", vec![Term::new(name)])
    }

    fn first_success(solver: &NaiveStrategy, context: &ProofContext) -> Option<Proof> {
        solver.prove(context).find_map(|result| match result {
            ProofResult::Success(proof) => Some(proof),
            ProofResult::Failure => None,
        })
    }

    #[test]
    fn test_goal_found_directly_in_rules() {
        let solver = NaiveStrategy::default();
        let context = ProofContext::verification(p_of("a"), vec![p_of("a")]);
        let proof = first_success(&solver, &context).expect("should verify");
        assert_eq!(proof.justification(), "rule");
        assert_eq!(proof.conclusion(), &Conclusion::Sentence(p_of("a")));
    }

    #[test]
    fn test_goal_found_in_premises() {
        let solver = NaiveStrategy::default();
        let context = ProofContext::new(
            Some(p_of("a")),
            vec![],
            vec![Premise::assumed(p_of("a"))],
        );
        let proof = first_success(&solver, &context).expect("should verify");
        assert_eq!(proof.justification(), "assumption");
    }

    #[test]
    fn test_modus_ponens() {
        let solver = NaiveStrategy::default();
        let rules = vec![Sentence::implies(p_of("a"), p_of("b")), p_of("a")];
        let context = ProofContext::verification(p_of("b"), rules);
        let proof = first_success(&solver, &context).expect("should verify");
        assert_eq!(proof.justification(), "modus-ponens");
        assert_eq!(proof.subproofs().len(), 2);
    }

    #[test]
    fn test_conjunction_introduction() {
        let solver = NaiveStrategy::default();
        let goal = Sentence::and(p_of("a"), p_of("b"));
        let context = ProofContext::verification(goal.clone(), vec![p_of("a"), p_of("b")]);
        let proof = first_success(&solver, &context).expect("should verify");
        assert_eq!(proof.justification(), "and-intro");
        assert_eq!(proof.conclusion(), &Conclusion::Sentence(goal));
    }

    #[test]
    fn test_disjunction_introduction() {
        let solver = NaiveStrategy::default();
        let goal = Sentence::or(p_of("a"), p_of("b"));
        let context = ProofContext::verification(goal, vec![p_of("b")]);
        let proof = first_success(&solver, &context).expect("should verify");
        assert_eq!(proof.justification(), "or-intro");
        assert_eq!(proof.subproofs().len(), 1);
    }

    #[test]
    fn test_refutation_by_assumption() {
        let solver = NaiveStrategy::default();
        let context = ProofContext::refutation(
            vec![Sentence::not(p_of("a"))],
            Premise::assumed(p_of("a")),
        );
        let proof = first_success(&solver, &context).expect("should refute");
        assert_eq!(proof.conclusion(), &Conclusion::Absurdity);
        assert_eq!(proof.justification(), "contradiction");
    }

    #[test]
    fn test_contradiction_through_modus_ponens() {
        // assuming q, rules q -> not p and p give a contradiction
        let solver = NaiveStrategy::default();
        let rules = vec![
            Sentence::implies(Sentence::prop("q"), Sentence::not(Sentence::prop("p"))),
            Sentence::prop("p"),
        ];
        let context = ProofContext::refutation(rules, Premise::assumed(Sentence::prop("q")));
        let proof = first_success(&solver, &context).expect("should refute");
        assert_eq!(proof.conclusion(), &Conclusion::Absurdity);
    }

    #[test]
    fn test_underivable_goal_exhausts_with_failures() {
        let solver = NaiveStrategy::new(2);
        let context = ProofContext::verification(p_of("z"), vec![p_of("a")]);
        let results: Vec<ProofResult> = solver.prove(&context).collect();
        assert_eq!(results.len(), 3);
        assert!(results.iter().all(|r| *r == ProofResult::Failure));
    }

    #[test]
    fn test_depth_limit_bounds_chaining() {
        // b needs one modus ponens step, c needs two
        let rules = vec![
            Sentence::implies(p_of("a"), p_of("b")),
            Sentence::implies(p_of("b"), p_of("c")),
            p_of("a"),
        ];
        let shallow = NaiveStrategy::new(1);
        let context = ProofContext::verification(p_of("c"), rules.clone());
        assert!(first_success(&shallow, &context).is_none());

        let deeper = NaiveStrategy::new(2);
        assert!(first_success(&deeper, &context).is_some());
    }

    #[test]
    fn test_sequence_is_lazy_per_depth() {
        let solver = NaiveStrategy::default();
        let context = ProofContext::verification(p_of("a"), vec![p_of("a")]);
        // depth 0 already succeeds; taking one result must be enough
        let first = solver.prove(&context).next().expect("one result");
        assert!(matches!(first, ProofResult::Success(_)));
    }
}
