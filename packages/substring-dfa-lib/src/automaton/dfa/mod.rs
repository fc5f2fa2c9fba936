use std::fmt::Debug;

use itertools::Itertools;
use node::DfaNode;
use petgraph::{
    Direction,
    graph::{DiGraph, EdgeIndex, NodeIndex},
    visit::EdgeRef,
};

use crate::automaton::{AutBuild, Automaton, AutomatonEdge, AutomatonNode};

pub mod node;

/// A deterministic finite automaton over the alphabet `E` with node data `N`.
///
/// States and transitions live in a petgraph graph. Node indices are handed
/// out in insertion order and are treated as the stable state identifiers,
/// so two automata built with the same sequence of `add_state` and
/// `add_transition` calls are structurally identical.
#[derive(Clone)]
pub struct DFA<N: AutomatonNode, E: AutomatonEdge> {
    start: Option<NodeIndex<u32>>,
    pub graph: DiGraph<DfaNode<N>, E>,
    alphabet: Vec<E>,
    complete: bool,
}

impl<N: AutomatonNode, E: AutomatonEdge> DFA<N, E> {
    pub fn new(alphabet: Vec<E>) -> Self {
        DFA {
            alphabet,
            start: None,
            graph: DiGraph::new(),
            complete: false,
        }
    }

    pub fn set_start(&mut self, start: NodeIndex<u32>) {
        self.start = Some(start);
    }

    pub fn get_start(&self) -> Option<NodeIndex<u32>> {
        self.start
    }

    pub fn state_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Sets the DFA to be complete. This is useful when the construction
    /// guarantees completeness and we don't want to spend the time to check.
    pub fn set_complete_unchecked(&mut self) {
        self.complete = true;
    }

    /// Returns the transition target for the given state and letter, if one
    /// exists.
    pub fn successor(&self, state: NodeIndex<u32>, letter: &E) -> Option<NodeIndex<u32>> {
        self.graph
            .edges_directed(state, Direction::Outgoing)
            .find(|edge| edge.weight() == letter)
            .map(|edge| edge.target())
    }

    /// Returns all accepting states, in index order.
    pub fn finals(&self) -> Vec<NodeIndex<u32>> {
        self.graph
            .node_indices()
            .filter(|node| self.graph[*node].accepting)
            .collect()
    }

    /// Assert that the DFA is complete.
    /// This means that every state has a transition for every letter in the
    /// alphabet.
    ///
    /// If the DFA is not complete, this function will panic.
    pub fn assert_complete(&self) {
        for state in self.graph.node_indices() {
            for letter in self.alphabet.iter() {
                assert!(
                    self.successor(state, letter).is_some(),
                    "DFA is not complete. State {:?} does not have a transition for letter {:?}",
                    state,
                    letter
                );
            }
        }
    }
}

impl<N: AutomatonNode, E: AutomatonEdge> AutBuild<NodeIndex, EdgeIndex, DfaNode<N>, E>
    for DFA<N, E>
{
    fn add_state(&mut self, data: DfaNode<N>) -> NodeIndex<u32> {
        self.graph.add_node(data)
    }

    fn add_transition(
        &mut self,
        from: NodeIndex<u32>,
        to: NodeIndex<u32>,
        label: E,
    ) -> EdgeIndex<u32> {
        let existing_edge = self
            .graph
            .edges_directed(from, Direction::Outgoing)
            .find(|edge| *edge.weight() == label);
        if let Some(edge) = existing_edge {
            let target = edge.target();
            if target != to {
                panic!(
                    "Transition conflict, adding the new transition causes this automaton to no longer be a DFA. Existing: {:?} -{:?}-> {:?}. New: {:?} -{:?}-> {:?}",
                    from, label, target, from, label, to
                );
            }
        }

        self.graph.add_edge(from, to, label)
    }
}

impl<N: AutomatonNode, E: AutomatonEdge> Automaton<E> for DFA<N, E> {
    fn accepts<'a>(&self, input: impl IntoIterator<Item = &'a E>) -> bool
    where
        E: 'a,
    {
        self.run(input).accepted()
    }

    fn alphabet(&self) -> &Vec<E> {
        &self.alphabet
    }
}

impl<N: AutomatonNode, E: AutomatonEdge> Debug for DFA<N, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DFA")
            .field("alphabet", &self.alphabet)
            .field("state_count", &self.graph.node_count())
            .field(
                "states",
                &self
                    .graph
                    .node_indices()
                    .map(|node| (&self.graph[node].data, node))
                    .collect_vec(),
            )
            .field("initial_state", &self.start)
            .field("final_states", &self.finals())
            .field("edge_count", &self.graph.edge_count())
            .field(
                "edges",
                &self
                    .graph
                    .edge_references()
                    .map(|edge| {
                        format!(
                            "{:?} --- {:?} --> {:?}",
                            edge.source(),
                            edge.weight(),
                            edge.target()
                        )
                    })
                    .collect_vec(),
            )
            .finish()
    }
}
