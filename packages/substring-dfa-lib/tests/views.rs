use itertools::Itertools;
use substring_dfa_lib::{
    language::{LanguageSpec, build::build_dfa, matcher::MatchPolicy},
    views::{
        display_id,
        graph::GraphView,
        json::AutomatonExport,
        table::TransitionTable,
        trace::{TraceExport, render_run},
    },
};

fn example_dfa() -> substring_dfa_lib::language::build::LanguageDfa {
    build_dfa(
        &LanguageSpec {
            alphabet: vec!['a', 'b'],
            pattern: vec!['a', 'b'],
            modulus: 2,
        },
        MatchPolicy::Restart,
    )
}

#[test]
fn test_transition_table() {
    let table = TransitionTable::new(&example_dfa());

    assert_eq!(table.header, vec!["State", "Start/Final", "a", "b"]);
    assert_eq!(table.rows.len(), 6);

    assert_eq!(table.rows[0], vec!["q1", "Start", "q4", "q2"]);
    assert_eq!(table.rows[1], vec!["q2", "", "q3", "q1"]);
    assert_eq!(table.rows[2], vec!["q3", "", "q4", "q6"]);
    assert_eq!(table.rows[3], vec!["q4", "", "q3", "q5"]);
    assert_eq!(table.rows[4], vec!["q5", "Final", "q6", "q6"]);
    assert_eq!(table.rows[5], vec!["q6", "", "q5", "q5"]);
}

#[test]
fn test_transition_table_rendering() {
    let rendered = TransitionTable::new(&example_dfa()).render();
    let lines = rendered.lines().collect_vec();

    assert_eq!(lines[0], "State\tStart/Final\ta\tb");
    assert_eq!(lines[1], "q1\tStart\tq4\tq2");
    assert_eq!(lines.len(), 7);
    assert!(rendered.ends_with('\n'));
}

#[test]
fn test_export_shape() {
    let export = AutomatonExport::new(&example_dfa());

    assert_eq!(export.states, vec!["q1", "q2", "q3", "q4", "q5", "q6"]);
    assert_eq!(export.start_state, "q1");
    assert_eq!(export.final_states, vec!["q5"]);
    assert_eq!(export.transitions.len(), 12);

    assert_eq!(export.transitions["q1,a"], "q4");
    assert_eq!(export.transitions["q1,b"], "q2");
    assert_eq!(export.transitions["q5,a"], "q6");
    assert_eq!(export.transitions["q6,b"], "q5");

    // enumeration order: state outer, alphabet inner
    let keys = export
        .transitions
        .keys()
        .map(|key| key.as_str())
        .take(4)
        .collect_vec();
    assert_eq!(keys, vec!["q1,a", "q1,b", "q2,a", "q2,b"]);
}

#[test]
fn test_export_round_trip() {
    let export = AutomatonExport::new(&example_dfa());

    let json = export.to_json();
    let parsed: AutomatonExport = serde_json::from_str(&json).unwrap();

    assert_eq!(export, parsed);
    // repeated serialization is byte-identical
    assert_eq!(json, parsed.to_json());
}

#[test]
fn test_graph_view_groups_parallel_edges() {
    let dfa = example_dfa();
    let view = GraphView::new(&dfa);

    assert_eq!(view.start, dfa.get_start().unwrap());
    assert_eq!(view.finals, dfa.finals());

    // q5 reaches q6 on both symbols, collapsed into one labeled edge
    let edge = view
        .edges
        .iter()
        .find(|edge| display_id(edge.from) == "q5" && display_id(edge.to) == "q6")
        .unwrap();
    assert_eq!(edge.symbols, vec!['a', 'b']);

    // every transition is represented exactly once
    let labels: usize = view.edges.iter().map(|edge| edge.symbols.len()).sum();
    assert_eq!(labels, 12);
}

#[test]
fn test_graphviz_output() {
    let dot = GraphView::new(&example_dfa()).to_graphviz();

    assert!(dot.starts_with("digraph finite_state_machine {"));
    assert!(dot.contains("node [shape = doublecircle]; q5;"));
    assert!(dot.contains("START -> q1;"));
    assert!(dot.contains("q5 -> q6 [ label=\"a,b\" ];"));
    assert!(dot.ends_with("}\n"));
}

#[test]
fn test_trace_rendering() {
    let dfa = example_dfa();
    let input = "ab".chars().collect_vec();
    let run = dfa.run(&input);

    let lines = render_run(&run);
    assert_eq!(lines, vec![
        "Initial state: q1",
        "Step 1: symbol 'a', state q1 -> state q4",
        "Step 2: symbol 'b', state q4 -> state q5",
        "End state: q5",
    ]);
}

#[test]
fn test_trace_rendering_dead_end() {
    let dfa = example_dfa();
    let input = "abc".chars().collect_vec();
    let run = dfa.run(&input);

    let lines = render_run(&run);
    assert_eq!(lines.len(), 4);
    assert!(lines[3].starts_with("Error: no transition from state q5 for symbol 'c'"));
}

#[test]
fn test_trace_export() {
    let dfa = example_dfa();
    let input = "abc".chars().collect_vec();
    let run = dfa.run(&input);

    let export = TraceExport::new(&run);
    assert!(!export.accepted);
    assert_eq!(export.start_state, "q1");
    assert_eq!(export.steps.len(), 2);
    assert_eq!(export.steps[1].from, "q4");
    assert_eq!(export.steps[1].to, "q5");

    let error = export.error.unwrap();
    assert_eq!(error.position, 2);
    assert_eq!(error.symbol, "c");
    assert_eq!(error.state, "q5");
}
