#![doc = r#"
romcalc — a two-operand calculator for Arabic and Roman numerals.

An expression is `<operand> <operator> <operand>` separated by single spaces,
with both operands written in the same numeral system: `2 + 3` or `II + III`.
The result is written back in the input's system. Operands must lie in 1..=10,
and Roman results must be positive.

Quick start
-----------
```rust
use romcalc::{calculate_line, NumeralSystem};

fn main() -> romcalc::Result<()> {
    let calc = calculate_line("X / II")?;
    assert_eq!(calc.system, NumeralSystem::Roman);
    assert_eq!(calc.rendered, "V");
    Ok(())
}
```

Error handling
--------------
Every failure is a `romcalc::Error` whose `Display` is the fixed message the
CLI prints after `Ошибка: `.

```rust
use romcalc::{calculate_line, Error};

match calculate_line("10 / 0") {
    Err(Error::DivisionByZero) => {}
    other => panic!("unexpected: {other:?}"),
}
```

Numeral quirks
--------------
Roman parsing maps only `I`, `V` and `X` and does not enforce canonical form
(`IIII` reads as 4). Rendering never emits `D` or `M`: 100 and above are
written with repeated `C`, up to 3999.

Useful modules
--------------
- [`api`] — high-level entry points and output rendering.
- [`core`] — the individual pipeline steps.
- [`types`] — `NumeralSystem`, `Operator`, `OutputFormat`.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod types;

pub use core::params::{CalcParams, DEFAULT_PROMPT};
pub use core::processing::parse::ParsedExpression;
pub use error::{Error, Result};
pub use types::{NumeralSystem, Operator, OutputFormat};

pub use core::processing::detect::detect_system;
pub use core::processing::eval::evaluate;
pub use core::processing::parse::parse_expression;
pub use core::processing::roman::{arabic_to_int, int_to_roman, roman_to_int};
pub use core::processing::validate::validate;

pub use api::{
    Calculation, calculate_line, calculate_normalized, format_result, normalize, render_outcome,
    run_session,
};
