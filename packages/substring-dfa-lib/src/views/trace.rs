use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::{
    automaton::{
        AutomatonEdge,
        run::{Run, RunOutcome},
    },
    views::display_id,
};

/// Renders a run as human readable lines: the start state, one line per
/// consumed symbol, the failure if the run dead-ended, and the end state
/// otherwise. The verdict is not part of the lines; read it from the run.
pub fn render_run<E: AutomatonEdge + Display>(run: &Run<E>) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push(format!("Initial state: {}", display_id(run.start)));

    for step in &run.steps {
        lines.push(format!(
            "Step {}: symbol '{}', state {} -> state {}",
            step.position + 1,
            step.symbol,
            display_id(step.from),
            display_id(step.to),
        ));
    }

    match &run.outcome {
        RunOutcome::Finished { end, .. } => {
            lines.push(format!("End state: {}", display_id(*end)));
        }
        RunOutcome::DeadEnd {
            position,
            symbol,
            state,
        } => {
            lines.push(format!(
                "Error: no transition from state {} for symbol '{}' at position {}, the symbol is not part of the language alphabet.",
                display_id(*state),
                symbol,
                position + 1,
            ));
        }
    }

    lines
}

/// A serializable projection of a run, with display state identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceExport {
    pub accepted: bool,
    pub start_state: String,
    pub steps: Vec<TraceStep>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<TraceError>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceStep {
    pub position: usize,
    pub symbol: String,
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceError {
    pub position: usize,
    pub symbol: String,
    pub state: String,
}

impl TraceExport {
    pub fn new<E: AutomatonEdge + Display>(run: &Run<E>) -> Self {
        TraceExport {
            accepted: run.accepted(),
            start_state: display_id(run.start),
            steps: run
                .steps
                .iter()
                .map(|step| TraceStep {
                    position: step.position,
                    symbol: step.symbol.to_string(),
                    from: display_id(step.from),
                    to: display_id(step.to),
                })
                .collect(),
            error: match &run.outcome {
                RunOutcome::Finished { .. } => None,
                RunOutcome::DeadEnd {
                    position,
                    symbol,
                    state,
                } => Some(TraceError {
                    position: *position,
                    symbol: symbol.to_string(),
                    state: display_id(*state),
                }),
            },
        }
    }
}
