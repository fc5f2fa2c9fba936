use std::fmt::Display;

use crate::language::LanguageSpec;

/// A single problem with a raw language specification.
///
/// The variants are the contract; the `Display` wording is for presentation
/// only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    EmptyAlphabet,
    EmptyAlphabetElement,
    MultiSymbolAlphabetElement(String),
    EmptyPattern,
    PatternSymbolOutsideAlphabet(char),
    NonIntegerModulus(String),
    NonPositiveModulus(i64),
}

impl Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Violation::EmptyAlphabet => write!(f, "The alphabet must not be empty."),
            Violation::EmptyAlphabetElement => write!(f, "The alphabet contains empty elements."),
            Violation::MultiSymbolAlphabetElement(element) => write!(
                f,
                "The alphabet must consist of single symbols separated by commas, got '{}'.",
                element
            ),
            Violation::EmptyPattern => write!(f, "The required substring must not be empty."),
            Violation::PatternSymbolOutsideAlphabet(symbol) => write!(
                f,
                "The required substring must only use alphabet symbols, '{}' is not one.",
                symbol
            ),
            Violation::NonIntegerModulus(raw) => {
                write!(f, "The length modulus must be an integer, got '{}'.", raw)
            }
            Violation::NonPositiveModulus(value) => {
                write!(f, "The length modulus must be positive, got {}.", value)
            }
        }
    }
}

/// Checks a raw language specification. All checks run independently and
/// every violation is collected, so the caller can surface all problems in
/// one pass.
///
/// The alphabet spec is a comma separated list of single symbols, the
/// pattern spec is a string over those symbols, and the modulus spec is a
/// positive integer string.
pub fn validate(alphabet_spec: &str, pattern_spec: &str, modulus_spec: &str) -> Vec<Violation> {
    let mut violations = Vec::new();

    let alphabet = parse_alphabet(alphabet_spec, &mut violations);

    if pattern_spec.is_empty() {
        violations.push(Violation::EmptyPattern);
    } else if !alphabet.is_empty() {
        // membership is only meaningful once an alphabet parsed
        for symbol in pattern_spec.chars() {
            if !alphabet.contains(&symbol) {
                violations.push(Violation::PatternSymbolOutsideAlphabet(symbol));
                break;
            }
        }
    }

    match modulus_spec.trim().parse::<i64>() {
        Ok(value) => {
            if value <= 0 {
                violations.push(Violation::NonPositiveModulus(value));
            }
        }
        Err(_) => violations.push(Violation::NonIntegerModulus(modulus_spec.to_string())),
    }

    violations
}

/// Validates a raw language specification and turns it into a
/// [`LanguageSpec`]. Returns all violations if there are any; building must
/// not proceed while violations exist.
pub fn parse_spec(
    alphabet_spec: &str,
    pattern_spec: &str,
    modulus_spec: &str,
) -> Result<LanguageSpec, Vec<Violation>> {
    let violations = validate(alphabet_spec, pattern_spec, modulus_spec);
    if !violations.is_empty() {
        return Err(violations);
    }

    let alphabet = parse_alphabet(alphabet_spec, &mut Vec::new());

    Ok(LanguageSpec {
        alphabet,
        pattern: pattern_spec.chars().collect(),
        modulus: modulus_spec.trim().parse::<i64>().expect("validated above") as usize,
    })
}

/// Splits the alphabet spec on commas into single symbols, recording
/// violations for empty and multi symbol elements. Duplicate symbols are
/// collapsed, keeping the first occurrence.
fn parse_alphabet(alphabet_spec: &str, violations: &mut Vec<Violation>) -> Vec<char> {
    if alphabet_spec.is_empty() {
        violations.push(Violation::EmptyAlphabet);
        return Vec::new();
    }

    let mut alphabet = Vec::new();

    for element in alphabet_spec.split(',') {
        let mut chars = element.chars();
        match (chars.next(), chars.next()) {
            (Some(symbol), None) => {
                if !alphabet.contains(&symbol) {
                    alphabet.push(symbol);
                }
            }
            (None, _) => {
                if !violations.contains(&Violation::EmptyAlphabetElement) {
                    violations.push(Violation::EmptyAlphabetElement);
                }
            }
            (Some(_), Some(_)) => {
                violations.push(Violation::MultiSymbolAlphabetElement(element.to_string()));
            }
        }
    }

    alphabet
}
