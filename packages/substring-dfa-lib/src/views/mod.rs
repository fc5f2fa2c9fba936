//! Read-only projections of a built automaton: the transition table, the
//! JSON exchange format, the labeled graph view, and trace rendering.
//!
//! Internally states are plain node indices; the `qN` display identifiers
//! exist only at this boundary. Every projection is derived from the
//! automaton alone and is deterministic, so repeated exports of the same
//! automaton are identical.

use petgraph::graph::NodeIndex;

pub mod graph;
pub mod json;
pub mod table;
pub mod trace;

/// The user visible identifier of a state. Indices are handed out in
/// enumeration order, so `q1` is always the start state `(0, 0)`.
pub fn display_id(state: NodeIndex<u32>) -> String {
    format!("q{}", state.index() + 1)
}
