use std::fmt::Display;

use hashbrown::HashMap;
use itertools::Itertools;
use petgraph::{graph::NodeIndex, visit::EdgeRef};

use crate::{
    automaton::{AutomatonEdge, AutomatonNode, dfa::DFA},
    views::display_id,
};

/// A directed edge of the transition relation with every symbol that causes
/// it, for graph rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledEdge<E: AutomatonEdge> {
    pub from: NodeIndex<u32>,
    pub to: NodeIndex<u32>,
    pub symbols: Vec<E>,
}

/// The transition relation as a labeled directed multigraph, with parallel
/// same-direction transitions collapsed into one edge. Display only; the
/// automaton's logic never consumes this.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphView<E: AutomatonEdge> {
    pub edges: Vec<LabeledEdge<E>>,
    pub start: NodeIndex<u32>,
    pub finals: Vec<NodeIndex<u32>>,
}

impl<E: AutomatonEdge> GraphView<E> {
    pub fn new<N: AutomatonNode>(dfa: &DFA<N, E>) -> Self {
        let mut edges: Vec<LabeledEdge<E>> = Vec::new();
        // first-seen order keeps the view deterministic
        let mut edge_positions: HashMap<(NodeIndex<u32>, NodeIndex<u32>), usize> = HashMap::new();

        for edge in dfa.graph.edge_references() {
            let key = (edge.source(), edge.target());
            match edge_positions.get(&key) {
                Some(&position) => edges[position].symbols.push(edge.weight().clone()),
                None => {
                    edge_positions.insert(key, edges.len());
                    edges.push(LabeledEdge {
                        from: edge.source(),
                        to: edge.target(),
                        symbols: vec![edge.weight().clone()],
                    });
                }
            }
        }

        GraphView {
            edges,
            start: dfa.get_start().expect("DFA must have a start state"),
            finals: dfa.finals(),
        }
    }
}

impl<E: AutomatonEdge + Display> GraphView<E> {
    /// Renders the view as a Graphviz dot digraph. Accepting states are
    /// double circles, the start state is marked by an arrow from an
    /// invisible point.
    pub fn to_graphviz(&self) -> String {
        let mut dot = String::new();
        dot.push_str("digraph finite_state_machine {\n");
        dot.push_str("fontname=\"Helvetica,Arial,sans-serif\"\n");
        dot.push_str("node [fontname=\"Helvetica,Arial,sans-serif\"]\n");
        dot.push_str("edge [fontname=\"Helvetica,Arial,sans-serif\"]\n");
        dot.push_str("rankdir=LR;\n");
        dot.push_str("node [shape=point,label=\"\"]START\n");

        dot.push_str(&format!(
            "node [shape = doublecircle]; {};\n",
            self.finals.iter().map(|node| display_id(*node)).join(" ")
        ));
        dot.push_str("node [shape = circle];\n");

        dot.push_str(&format!("START -> {};\n", display_id(self.start)));

        for edge in &self.edges {
            dot.push_str(&format!(
                "{} -> {} [ label=\"{}\" ];\n",
                display_id(edge.from),
                display_id(edge.to),
                edge.symbols.iter().map(|symbol| symbol.to_string()).join(",")
            ));
        }

        dot.push_str("}\n");

        dot
    }
}
