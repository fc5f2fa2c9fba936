use std::fmt::Display;
use std::fs;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{
    automaton::{Automaton, AutomatonEdge, AutomatonNode, dfa::DFA},
    views::display_id,
};

/// The persisted exchange format of an automaton.
///
/// `transitions` maps `"<stateId>,<symbol>"` to the destination state id.
/// Entries are kept in enumeration order (state outer, alphabet inner), so
/// serializing the same automaton twice yields byte-identical output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutomatonExport {
    pub states: Vec<String>,
    pub start_state: String,
    pub final_states: Vec<String>,
    pub transitions: Map<String, Value>,
}

impl AutomatonExport {
    pub fn new<N: AutomatonNode, E: AutomatonEdge + Display>(dfa: &DFA<N, E>) -> Self {
        let start = dfa.get_start().expect("DFA must have a start state");

        let mut transitions = Map::new();
        for state in dfa.graph.node_indices() {
            for symbol in dfa.alphabet() {
                if let Some(target) = dfa.successor(state, symbol) {
                    transitions.insert(
                        format!("{},{}", display_id(state), symbol),
                        Value::String(display_id(target)),
                    );
                }
            }
        }

        AutomatonExport {
            states: dfa.graph.node_indices().map(display_id).collect(),
            start_state: display_id(start),
            final_states: dfa.finals().into_iter().map(display_id).collect(),
            transitions,
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).expect("export serialization cannot fail")
    }

    pub fn save_to_file(&self, path: &str) -> anyhow::Result<()> {
        fs::write(path, self.to_json())
            .with_context(|| format!("Failed to write automaton export: {}", path))
    }
}
