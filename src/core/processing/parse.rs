use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::processing::roman::{arabic_to_int, roman_to_int};
use crate::error::{Error, Result};
use crate::types::NumeralSystem;

/// Operands converted to integers; the operator token is kept verbatim and
/// resolved later by the evaluator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedExpression {
    pub left: i64,
    pub operator: String,
    pub right: i64,
}

pub fn parse_operand(token: &str, system: NumeralSystem) -> Result<i64> {
    match system {
        NumeralSystem::Roman => roman_to_int(token),
        NumeralSystem::Arabic => arabic_to_int(token),
    }
}

/// Split on single spaces and convert both operands.
pub fn parse_expression(expression: &str, system: NumeralSystem) -> Result<ParsedExpression> {
    let parts: Vec<&str> = expression.split(' ').collect();
    let [left, operator, right] = parts.as_slice() else {
        return Err(Error::MalformedExpression {
            tokens: parts.len(),
        });
    };

    let left = parse_operand(left, system)?;
    let right = parse_operand(right, system)?;
    debug!(left, operator = *operator, right, %system, "parsed expression");

    Ok(ParsedExpression {
        left,
        operator: operator.to_string(),
        right,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_both_systems() -> Result<()> {
        let arabic = parse_expression("2 + 3", NumeralSystem::Arabic)?;
        assert_eq!(
            arabic,
            ParsedExpression {
                left: 2,
                operator: "+".to_string(),
                right: 3
            }
        );

        let roman = parse_expression("X / II", NumeralSystem::Roman)?;
        assert_eq!((roman.left, roman.operator.as_str(), roman.right), (10, "/", 2));
        Ok(())
    }

    #[test]
    fn operator_is_not_checked_here() -> Result<()> {
        let parsed = parse_expression("4 % 2", NumeralSystem::Arabic)?;
        assert_eq!(parsed.operator, "%");
        Ok(())
    }

    #[test]
    fn requires_exactly_three_tokens() {
        for line in ["2+3", "2 + 3 + 4", "2  + 3", "2 +"] {
            assert!(
                matches!(
                    parse_expression(line, NumeralSystem::Arabic),
                    Err(Error::MalformedExpression { .. })
                ),
                "line {line:?}"
            );
        }
    }

    #[test]
    fn reports_token_count() {
        match parse_expression("2+3", NumeralSystem::Arabic) {
            Err(Error::MalformedExpression { tokens }) => assert_eq!(tokens, 1),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn conversion_errors_propagate() {
        assert!(matches!(
            parse_expression("L + I", NumeralSystem::Roman),
            Err(Error::InvalidRomanNumeral { .. })
        ));
        assert!(matches!(
            parse_expression("2 + 3x", NumeralSystem::Arabic),
            Err(Error::InvalidArabicNumeral { .. })
        ));
    }
}
