//! Crate-level error type and `Result` alias.
//! Each calculation variant displays the fixed user-facing message printed
//! after `Ошибка: `; `Io` covers failures reading the expression.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Выражение должно содержать либо только римские числа, либо только арабские числа.")]
    AmbiguousOrMissingNumeralSystem,

    #[error("Некорректный ввод. Введите выражение в формате число оператор число")]
    MalformedExpression { tokens: usize },

    #[error("Введено некорректное римское число.")]
    InvalidRomanNumeral { token: String },

    #[error("Введено некорректное арабское число.")]
    InvalidArabicNumeral { value: String },

    #[error("Некорректный ввод. Введите оператор +, -, /, *")]
    UnsupportedOperator { operator: String },

    #[error("Делить на ноль нельзя")]
    DivisionByZero,

    #[error("Числа должны быть в диапазоне от 1 до 10.")]
    OperandOutOfRange { left: i64, right: i64 },

    #[error("Римские числа не могут быть отрицательными или равны нулю.")]
    NonPositiveRomanResult { result: i64 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Stable machine-readable identifier, used by JSON output.
    pub fn kind(&self) -> &'static str {
        match self {
            Error::AmbiguousOrMissingNumeralSystem => "ambiguous_or_missing_numeral_system",
            Error::MalformedExpression { .. } => "malformed_expression",
            Error::InvalidRomanNumeral { .. } => "invalid_roman_numeral",
            Error::InvalidArabicNumeral { .. } => "invalid_arabic_numeral",
            Error::UnsupportedOperator { .. } => "unsupported_operator",
            Error::DivisionByZero => "division_by_zero",
            Error::OperandOutOfRange { .. } => "operand_out_of_range",
            Error::NonPositiveRomanResult { .. } => "non_positive_roman_result",
            Error::Io(_) => "io",
        }
    }
}
