use tracing::debug;

use crate::error::{Error, Result};
use crate::types::Operator;

/// Apply a binary operator token. Division truncates toward zero.
///
/// Overflow can only happen for operands far outside 1..=10, so it is
/// reported as `OperandOutOfRange`, matching what the range check would
/// say about the same input.
pub fn evaluate(left: i64, operator: &str, right: i64) -> Result<i64> {
    let op = Operator::from_token(operator).ok_or_else(|| Error::UnsupportedOperator {
        operator: operator.to_string(),
    })?;

    let result = match op {
        Operator::Add => left.checked_add(right),
        Operator::Sub => left.checked_sub(right),
        Operator::Mul => left.checked_mul(right),
        Operator::Div => {
            if right == 0 {
                return Err(Error::DivisionByZero);
            }
            left.checked_div(right)
        }
    };

    let value = result.ok_or(Error::OperandOutOfRange { left, right })?;
    debug!(left, %op, right, value, "evaluated");
    Ok(value)
}
