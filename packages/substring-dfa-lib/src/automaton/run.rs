use petgraph::graph::NodeIndex;
use tracing::debug;

use crate::automaton::{AutomatonEdge, AutomatonNode, dfa::DFA};

/// One consumed symbol in a run: which symbol was read at which position and
/// which transition was taken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunStep<E: AutomatonEdge> {
    /// Zero-based position of the symbol in the input.
    pub position: usize,
    pub symbol: E,
    pub from: NodeIndex<u32>,
    pub to: NodeIndex<u32>,
}

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome<E: AutomatonEdge> {
    /// The whole input was consumed. `accepted` is true iff the run ended in
    /// an accepting state.
    Finished {
        accepted: bool,
        end: NodeIndex<u32>,
    },
    /// The run hit a state with no transition for the next symbol. Since the
    /// automaton is complete over its alphabet, this means the symbol is not
    /// part of the alphabet. The input is rejected and no further symbols are
    /// processed.
    DeadEnd {
        position: usize,
        symbol: E,
        state: NodeIndex<u32>,
    },
}

/// The trace of executing a DFA on one input string.
///
/// The trace is purely observational. Acceptance is decided by the state the
/// cursor ends in, never by the recorded steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run<E: AutomatonEdge> {
    pub start: NodeIndex<u32>,
    pub steps: Vec<RunStep<E>>,
    pub outcome: RunOutcome<E>,
}

impl<E: AutomatonEdge> Run<E> {
    pub fn accepted(&self) -> bool {
        matches!(self.outcome, RunOutcome::Finished { accepted: true, .. })
    }
}

impl<N: AutomatonNode, E: AutomatonEdge> DFA<N, E> {
    /// Runs the automaton on the given input, recording every transition
    /// taken.
    ///
    /// Runs only read the automaton and own their cursor and trace, so any
    /// number of runs against the same automaton are independent.
    pub fn run<'a>(&self, input: impl IntoIterator<Item = &'a E>) -> Run<E>
    where
        E: 'a,
    {
        let start = self.get_start().expect("DFA must have a start state");

        let mut current = start;
        let mut steps = Vec::new();

        for (position, symbol) in input.into_iter().enumerate() {
            let Some(next) = self.successor(current, symbol) else {
                debug!(position, ?symbol, state = current.index(), "dead end");
                return Run {
                    start,
                    steps,
                    outcome: RunOutcome::DeadEnd {
                        position,
                        symbol: symbol.clone(),
                        state: current,
                    },
                };
            };

            debug!(
                position,
                ?symbol,
                from = current.index(),
                to = next.index(),
                "step"
            );

            steps.push(RunStep {
                position,
                symbol: symbol.clone(),
                from: current,
                to: next,
            });
            current = next;
        }

        Run {
            start,
            steps,
            outcome: RunOutcome::Finished {
                accepted: self.graph[current].accepting,
                end: current,
            },
        }
    }
}
