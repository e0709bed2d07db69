use tracing::debug;

use crate::error::{Error, Result};
use crate::types::NumeralSystem;

const ROMAN_LETTERS: [char; 7] = ['I', 'V', 'X', 'L', 'C', 'D', 'M'];

/// True if any Roman numeral letter occurs anywhere in the line.
pub fn has_roman_numerals(expression: &str) -> bool {
    expression
        .chars()
        .any(|c| ROMAN_LETTERS.contains(&c.to_ascii_uppercase()))
}

/// True if any ASCII digit occurs anywhere in the line.
pub fn has_arabic_numerals(expression: &str) -> bool {
    expression.chars().any(|c| c.is_ascii_digit())
}

/// Classify the whole line. Scanning is not token-aware: operators and
/// stray characters simply never match either alphabet.
pub fn detect_system(expression: &str) -> Result<NumeralSystem> {
    let roman = has_roman_numerals(expression);
    let arabic = has_arabic_numerals(expression);
    debug!(roman, arabic, "numeral scan");

    match (roman, arabic) {
        (true, false) => Ok(NumeralSystem::Roman),
        (false, true) => Ok(NumeralSystem::Arabic),
        _ => Err(Error::AmbiguousOrMissingNumeralSystem),
    }
}
