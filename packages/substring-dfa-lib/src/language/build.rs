use hashbrown::HashMap;
use tracing::debug;

use crate::{
    automaton::{
        AutBuild,
        dfa::{DFA, node::DfaNode},
    },
    language::{
        LanguageSpec,
        matcher::{MatchPolicy, ProgressRule},
    },
};

/// The logical identity of a state in the product automaton: how many leading
/// pattern symbols are currently matched as a suffix of the consumed input,
/// and the consumed length modulo the modulus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StateData {
    /// In `[0, pattern_len]`. `pattern_len` means the pattern has been seen
    /// at least once and is sticky.
    pub progress: usize,
    /// In `[0, modulus - 1]`.
    pub remainder: usize,
}

/// The automaton recognizing the given language spec.
pub type LanguageDfa = DFA<StateData, char>;

/// Builds the complete DFA for a language spec: the product of the pattern
/// matching automaton and the length counting automaton.
///
/// All `(pattern_len + 1) * modulus` states are materialized up front, in a
/// fixed enumeration order (progress outer, remainder inner), so node indices
/// are reproducible across builds of the same spec. `(0, 0)` is the start
/// state and `(pattern_len, 0)` the single accepting state. Every state gets
/// exactly one outgoing transition per alphabet symbol.
///
/// The caller is responsible for validating the spec first; inputs that
/// violate the [`LanguageSpec`] invariants panic here.
pub fn build_dfa(spec: &LanguageSpec, policy: MatchPolicy) -> LanguageDfa {
    assert!(!spec.alphabet.is_empty(), "Alphabet must not be empty");
    assert!(!spec.pattern.is_empty(), "Pattern must not be empty");
    assert!(spec.modulus >= 1, "Modulus must be at least 1");
    assert!(
        spec.pattern.iter().all(|c| spec.alphabet.contains(c)),
        "Pattern must only use alphabet symbols"
    );

    let pattern_len = spec.pattern.len();
    let rule = ProgressRule::new(&spec.pattern, policy);

    let mut dfa = DFA::new(spec.alphabet.clone());
    let mut state_map = HashMap::new();

    for progress in 0..=pattern_len {
        for remainder in 0..spec.modulus {
            let data = StateData {
                progress,
                remainder,
            };
            let accepting = progress == pattern_len && remainder == 0;
            let state = dfa.add_state(DfaNode::new(accepting, data));

            if progress == 0 && remainder == 0 {
                dfa.set_start(state);
            }

            debug!(index = state.index(), ?data, accepting, "created state");

            state_map.insert(data, state);
        }
    }

    // second pass in the same enumeration order, so edge insertion order is
    // deterministic as well
    for progress in 0..=pattern_len {
        for remainder in 0..spec.modulus {
            let from = state_map[&StateData {
                progress,
                remainder,
            }];

            for &symbol in &spec.alphabet {
                let next = StateData {
                    progress: rule.advance(progress, symbol),
                    remainder: (remainder + 1) % spec.modulus,
                };

                debug!(
                    from = from.index(),
                    symbol = %symbol,
                    to = state_map[&next].index(),
                    "created transition"
                );

                dfa.add_transition(from, state_map[&next], symbol);
            }
        }
    }

    dfa.set_complete_unchecked();

    dfa
}
