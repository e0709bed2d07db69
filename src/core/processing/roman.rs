//! Conversions between Roman numeral text and integers.
//!
//! Parsing only knows `I`, `V` and `X`, and applies the two-symbol
//! subtractive rule without checking canonical grammar, so inputs such as
//! `IIII` or `IIV` are accepted. Rendering uses a table that tops out at
//! `C`; values of 100 and above are written with repeated `C` and never
//! with `D` or `M`.
use crate::error::{Error, Result};

pub const MIN_ROMAN: i64 = 1;
pub const MAX_ROMAN: i64 = 3999;

const ROMAN_TABLE: [(i64, &str); 9] = [
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

fn symbol_value(symbol: char) -> Option<i64> {
    match symbol {
        'I' => Some(1),
        'V' => Some(5),
        'X' => Some(10),
        _ => None,
    }
}

/// Parse an upper-case Roman token. An empty token is 0.
pub fn roman_to_int(token: &str) -> Result<i64> {
    let invalid = || Error::InvalidRomanNumeral {
        token: token.to_string(),
    };

    let mut total: i64 = 0;
    let mut prev: i64 = 0;

    for symbol in token.chars() {
        let value = symbol_value(symbol).ok_or_else(invalid)?;

        // A larger symbol turns the previously added one into a subtrahend.
        let step = if value > prev { value - 2 * prev } else { value };
        total = total.checked_add(step).ok_or_else(invalid)?;
        prev = value;
    }

    Ok(total)
}

/// Render `value` with the greedy table. Valid for 1..=3999.
pub fn int_to_roman(value: i64) -> Result<String> {
    if !(MIN_ROMAN..=MAX_ROMAN).contains(&value) {
        return Err(Error::InvalidArabicNumeral {
            value: value.to_string(),
        });
    }

    let mut remaining = value;
    let mut out = String::new();
    for &(step, symbol) in ROMAN_TABLE.iter() {
        while remaining >= step {
            out.push_str(symbol);
            remaining -= step;
        }
    }

    Ok(out)
}

/// Parse a decimal Arabic token.
pub fn arabic_to_int(token: &str) -> Result<i64> {
    token.parse::<i64>().map_err(|_| Error::InvalidArabicNumeral {
        value: token.to_string(),
    })
}
