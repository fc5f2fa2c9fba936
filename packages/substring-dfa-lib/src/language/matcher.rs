use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

/// How pattern match progress advances when the read symbol does not extend
/// the current partial match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MatchPolicy {
    /// On a mismatch, restart a fresh partial match if the symbol equals the
    /// first pattern symbol, otherwise drop to no progress.
    ///
    /// This is not a full failure-function automaton. For patterns whose
    /// internal structure repeats (e.g. `aab`) it can lose partial matches
    /// that [`MatchPolicy::FailureFunction`] keeps. Established
    /// classification results depend on this rule, so it stays the default.
    #[default]
    Restart,
    /// On a mismatch, fall back along the KMP failure function. Opt-in
    /// corrected mode.
    FailureFunction,
}

impl FromStr for MatchPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "restart" => Ok(MatchPolicy::Restart),
            "failure-function" | "failure_function" | "kmp" => Ok(MatchPolicy::FailureFunction),
            _ => Err(format!("Invalid match policy: {}", s)),
        }
    }
}

impl Display for MatchPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchPolicy::Restart => write!(f, "restart"),
            MatchPolicy::FailureFunction => write!(f, "failure-function"),
        }
    }
}

/// Computes the next match progress for a fixed pattern under a
/// [`MatchPolicy`].
///
/// Progress `p` means the last `p` consumed symbols equal the first `p`
/// pattern symbols. Full progress is sticky: once the pattern has been seen,
/// no symbol can unsee it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressRule {
    pattern: Vec<char>,
    policy: MatchPolicy,
    failure: Vec<usize>,
}

impl ProgressRule {
    pub fn new(pattern: &[char], policy: MatchPolicy) -> Self {
        assert!(!pattern.is_empty(), "Pattern must not be empty");

        ProgressRule {
            pattern: pattern.to_vec(),
            policy,
            failure: failure_function(pattern),
        }
    }

    pub fn pattern_len(&self) -> usize {
        self.pattern.len()
    }

    pub fn advance(&self, progress: usize, symbol: char) -> usize {
        let len = self.pattern.len();
        assert!(progress <= len, "Progress {} out of range", progress);

        // full progress is absorbing under both policies
        if progress == len {
            return len;
        }

        match self.policy {
            MatchPolicy::Restart => {
                if symbol == self.pattern[progress] {
                    progress + 1
                } else if symbol == self.pattern[0] {
                    1
                } else {
                    0
                }
            }
            MatchPolicy::FailureFunction => {
                let mut progress = progress;
                while progress > 0 && symbol != self.pattern[progress] {
                    progress = self.failure[progress - 1];
                }
                if symbol == self.pattern[progress] {
                    progress + 1
                } else {
                    0
                }
            }
        }
    }
}

/// The KMP failure function: `failure[i]` is the length of the longest proper
/// prefix of `pattern[..=i]` that is also a suffix of it.
fn failure_function(pattern: &[char]) -> Vec<usize> {
    let mut failure = vec![0; pattern.len()];
    let mut k = 0;

    for i in 1..pattern.len() {
        while k > 0 && pattern[i] != pattern[k] {
            k = failure[k - 1];
        }
        if pattern[i] == pattern[k] {
            k += 1;
        }
        failure[i] = k;
    }

    failure
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_failure_function() {
        assert_eq!(failure_function(&chars("ab")), vec![0, 0]);
        assert_eq!(failure_function(&chars("aa")), vec![0, 1]);
        assert_eq!(failure_function(&chars("aab")), vec![0, 1, 0]);
        assert_eq!(failure_function(&chars("ababc")), vec![0, 0, 1, 2, 0]);
    }

    #[test]
    fn test_restart_rule() {
        let rule = ProgressRule::new(&chars("ab"), MatchPolicy::Restart);

        assert_eq!(rule.advance(0, 'a'), 1);
        assert_eq!(rule.advance(0, 'b'), 0);
        assert_eq!(rule.advance(1, 'b'), 2);
        // 'a' restarts a fresh partial match
        assert_eq!(rule.advance(1, 'a'), 1);
    }

    #[test]
    fn test_sticky_full_progress() {
        for policy in [MatchPolicy::Restart, MatchPolicy::FailureFunction] {
            let rule = ProgressRule::new(&chars("ab"), policy);
            assert_eq!(rule.advance(2, 'a'), 2);
            assert_eq!(rule.advance(2, 'b'), 2);
        }
    }

    #[test]
    fn test_policies_diverge_on_self_overlap() {
        // after "aa" of pattern "aab", reading another 'a' keeps two matched
        // symbols under KMP but the restart rule drops back to one
        let restart = ProgressRule::new(&chars("aab"), MatchPolicy::Restart);
        let kmp = ProgressRule::new(&chars("aab"), MatchPolicy::FailureFunction);

        assert_eq!(restart.advance(2, 'a'), 1);
        assert_eq!(kmp.advance(2, 'a'), 2);
    }
}
