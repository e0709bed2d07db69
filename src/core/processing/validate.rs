use crate::core::processing::parse::ParsedExpression;
use crate::error::{Error, Result};
use crate::types::NumeralSystem;

pub const MIN_OPERAND: i64 = 1;
pub const MAX_OPERAND: i64 = 10;

/// Post-evaluation checks. Runs only once evaluation has succeeded, so
/// operator and division errors take precedence over range errors.
pub fn validate(parsed: &ParsedExpression, system: NumeralSystem, result: i64) -> Result<()> {
    let range = MIN_OPERAND..=MAX_OPERAND;
    if !range.contains(&parsed.left) || !range.contains(&parsed.right) {
        return Err(Error::OperandOutOfRange {
            left: parsed.left,
            right: parsed.right,
        });
    }

    if system == NumeralSystem::Roman && result <= 0 {
        return Err(Error::NonPositiveRomanResult { result });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expr(left: i64, right: i64) -> ParsedExpression {
        ParsedExpression {
            left,
            operator: "+".to_string(),
            right,
        }
    }

    #[test]
    fn accepts_bounds() -> Result<()> {
        validate(&expr(1, 10), NumeralSystem::Arabic, 11)?;
        validate(&expr(10, 1), NumeralSystem::Roman, 9)?;
        Ok(())
    }

    #[test]
    fn rejects_out_of_range_operands() {
        for (l, r) in [(0, 5), (5, 0), (11, 2), (2, 11), (-3, 4)] {
            assert!(
                matches!(
                    validate(&expr(l, r), NumeralSystem::Arabic, l + r),
                    Err(Error::OperandOutOfRange { .. })
                ),
                "operands {l}, {r}"
            );
        }
    }

    #[test]
    fn range_error_precedes_roman_sign_error() {
        assert!(matches!(
            validate(&expr(0, 1), NumeralSystem::Roman, -1),
            Err(Error::OperandOutOfRange { .. })
        ));
    }

    #[test]
    fn non_positive_roman_result() {
        assert!(matches!(
            validate(&expr(1, 1), NumeralSystem::Roman, 0),
            Err(Error::NonPositiveRomanResult { result: 0 })
        ));
        assert!(matches!(
            validate(&expr(1, 5), NumeralSystem::Roman, -4),
            Err(Error::NonPositiveRomanResult { .. })
        ));
    }

    #[test]
    fn arabic_results_may_be_non_positive() -> Result<()> {
        validate(&expr(1, 5), NumeralSystem::Arabic, -4)?;
        validate(&expr(1, 1), NumeralSystem::Arabic, 0)?;
        Ok(())
    }
}
