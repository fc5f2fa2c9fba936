use std::fs;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::validation::{self, Violation};

pub mod build;
pub mod matcher;

/// A validated language description: strings over `alphabet` that contain
/// `pattern` as a contiguous substring and whose length is divisible by
/// `modulus`.
///
/// Values of this type always satisfy the invariants checked by
/// [`validation::validate`]: the alphabet is non-empty and duplicate-free,
/// the pattern is non-empty and drawn from the alphabet, and the modulus is
/// at least 1. Use [`validation::parse_spec`] or [`LanguageSpecFile`] to
/// obtain one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageSpec {
    pub alphabet: Vec<char>,
    pub pattern: Vec<char>,
    pub modulus: usize,
}

/// The on-disk form of a language description, before validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageSpecFile {
    pub alphabet: Vec<String>,
    pub substring: String,
    pub modulus: i64,
}

impl LanguageSpecFile {
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read language spec file: {}", path))?;
        let spec = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse language spec file: {}", path))?;
        Ok(spec)
    }

    /// Funnels the file contents through the same validation as raw text
    /// input.
    pub fn validate(&self) -> Result<LanguageSpec, Vec<Violation>> {
        validation::parse_spec(
            &self.alphabet.join(","),
            &self.substring,
            &self.modulus.to_string(),
        )
    }
}
