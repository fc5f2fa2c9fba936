use std::fmt::Display;

use crate::{
    automaton::{Automaton, AutomatonEdge, AutomatonNode, dfa::DFA},
    views::display_id,
};

/// The transition function as a table: one row per state, one column per
/// alphabet symbol, plus the state id and its start/final role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionTable {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl TransitionTable {
    pub fn new<N: AutomatonNode, E: AutomatonEdge + Display>(dfa: &DFA<N, E>) -> Self {
        let header = ["State".to_string(), "Start/Final".to_string()]
            .into_iter()
            .chain(dfa.alphabet().iter().map(|symbol| symbol.to_string()))
            .collect();

        let rows = dfa
            .graph
            .node_indices()
            .map(|state| {
                let role = if Some(state) == dfa.get_start() {
                    "Start"
                } else if dfa.graph[state].accepting {
                    "Final"
                } else {
                    ""
                };

                let mut row = vec![display_id(state), role.to_string()];
                for symbol in dfa.alphabet() {
                    row.push(
                        dfa.successor(state, symbol)
                            .map(display_id)
                            .unwrap_or_else(|| "-".to_string()),
                    );
                }
                row
            })
            .collect();

        TransitionTable { header, rows }
    }

    /// Renders the table as tab separated lines, header first.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.header.join("\t"));
        out.push('\n');
        for row in &self.rows {
            out.push_str(&row.join("\t"));
            out.push('\n');
        }
        out
    }
}

impl Display for TransitionTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render())
    }
}
