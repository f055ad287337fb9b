use regex::Regex;
use tracing::{debug, trace};

use crate::error::{MaskError, Result};

/// Trims an in-progress value to the longest prefix that some completion
/// with the canonical example can still bring to a full match.
#[derive(Debug, Clone)]
pub struct ProgressValidator {
    pattern: Regex,
    canonical: Vec<char>,
}

impl ProgressValidator {
    pub fn new(pattern: &str, canonical_example: impl Into<String>) -> Result<Self> {
        Ok(Self {
            pattern: compile_pattern(pattern)?,
            canonical: canonical_example.into().chars().collect(),
        })
    }

    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    pub fn validate(&self, value: &str, template: &str) -> String {
        if let Some(padded) = pad_month(value, template) {
            debug!(value, padded = padded.as_str(), "month padded");
            return padded;
        }

        let chars: Vec<char> = value.chars().collect();
        for len in (0..=chars.len()).rev() {
            let prefix: String = chars[..len].iter().collect();
            let mut candidate = prefix.clone();
            candidate.extend(self.canonical.iter().skip(len));

            if self.pattern.is_match(candidate.as_str()) {
                return prefix;
            }
            trace!(candidate = candidate.as_str(), "no completion, trimming");
        }

        String::new()
    }
}

/// Compile a caller-supplied pattern, reporting failure as `InvalidPattern`.
pub fn compile_pattern(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| MaskError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}

/// One-shot form of [`ProgressValidator::validate`] that compiles `pattern`.
pub fn validate(
    value: &str,
    canonical_example: &str,
    pattern: &str,
    template: &str,
) -> Result<String> {
    let validator = ProgressValidator::new(pattern, canonical_example)?;
    Ok(validator.validate(value, template))
}

/// A lone digit 2-9 in a template starting with `MM` becomes `0N`.
fn pad_month(value: &str, template: &str) -> Option<String> {
    let mut chars = value.chars();
    let (Some(ch), None) = (chars.next(), chars.next()) else {
        return None;
    };

    let lead: String = template.chars().take(2).collect();
    if lead.to_uppercase() != "MM" {
        return None;
    }

    match ch.to_digit(10) {
        Some(2..=9) => Some(format!("0{ch}")),
        _ => None,
    }
}
