//! Command execution, including the two-phase query resolution protocol.

use crate::model::{Context, Model};
use crate::proof::{Premise, Proof, ProofContext, ProofResult, ProofSolver};
use crate::syntax::Sentence;

/// A unit of work produced from one line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Resolve a sentence against the current model.
    Query(Sentence),
    /// Replace the current model wholesale.
    Set(Model),
}

/// What executing a command produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Execution {
    /// The next session context. For queries this equals the input context.
    pub context: Context,
    pub result: ExecResult,
}

/// Result of executing a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecResult {
    ModelReplaced,
    QueryResolved(QueryOutcome),
}

/// How a query resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryOutcome {
    /// The sentence was proved from the model's rules.
    Verified(Proof),
    /// Assuming the sentence let the rules derive a contradiction.
    Falsified(Proof),
    /// Neither phase found a proof.
    Undetermined,
}

impl Command {
    /// Execute against the given context, producing the next context.
    ///
    /// Never mutates its inputs. A set command ignores the current model
    /// entirely; a query returns the input context unchanged in all cases.
    pub fn execute(&self, context: &Context, solver: &dyn ProofSolver) -> Execution {
        match self {
            Command::Set(model) => Execution {
                context: Context::new(model.clone()),
                result: ExecResult::ModelReplaced,
            },
            Command::Query(sentence) => Execution {
                context: context.clone(),
                result: ExecResult::QueryResolved(resolve_query(
                    sentence,
                    context.model(),
                    solver,
                )),
            },
        }
    }
}

/// Two-phase resolution: verify, then falsify, first success wins.
///
/// Phase 1 asks the solver to prove the sentence from the model's rules with
/// no premises. Only if that result sequence is exhausted without a success
/// does phase 2 build an independent context asking for any contradiction
/// from the rules plus the sentence as an assumed-true premise. Each phase
/// consumes its results strictly in order and stops at the first success.
fn resolve_query(sentence: &Sentence, model: &Model, solver: &dyn ProofSolver) -> QueryOutcome {
    let verify = ProofContext::verification(sentence.clone(), model.rules().to_vec());
    if let Some(proof) = first_success(solver.prove(&verify)) {
        return QueryOutcome::Verified(proof);
    }

    let falsify = ProofContext::refutation(
        model.rules().to_vec(),
        Premise::assumed(sentence.clone()),
    );
    if let Some(proof) = first_success(solver.prove(&falsify)) {
        return QueryOutcome::Falsified(proof);
    }

    QueryOutcome::Undetermined
}

fn first_success(results: impl Iterator<Item = ProofResult>) -> Option<Proof> {
    for result in results {
        match result {
            ProofResult::Success(proof) => return Some(proof),
            ProofResult::Failure => {}
        }
    }
    None
}
