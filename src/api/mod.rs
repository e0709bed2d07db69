//! High-level library API: normalize a raw line, run it through the whole
//! pipeline, and render the outcome as text or JSON. Prefer these entry
//! points over the individual `core::processing` steps when embedding the
//! calculator.
use std::io::{BufRead, Write};

use serde::Serialize;
use serde_json::json;
use tracing::{debug, info, warn};

use crate::core::params::CalcParams;
use crate::core::processing::detect::detect_system;
use crate::core::processing::eval::evaluate;
use crate::core::processing::parse::{ParsedExpression, parse_expression};
use crate::core::processing::roman::int_to_roman;
use crate::core::processing::validate::validate;
use crate::error::{Error, Result};
use crate::types::{NumeralSystem, OutputFormat};

/// Successful outcome of one expression
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Calculation {
    pub system: NumeralSystem,
    pub expression: ParsedExpression,
    pub value: i64,
    /// `value` written in the input's numeral system
    pub rendered: String,
}

/// Upper-case and trim surrounding whitespace, including the trailing newline.
pub fn normalize(line: &str) -> String {
    line.to_uppercase().trim().to_string()
}

/// Render a result in the given numeral system.
pub fn format_result(value: i64, system: NumeralSystem) -> Result<String> {
    match system {
        NumeralSystem::Roman => int_to_roman(value),
        NumeralSystem::Arabic => Ok(value.to_string()),
    }
}

/// Run an already-normalized expression through detect, parse, evaluate,
/// validate and format, in that order.
pub fn calculate_normalized(expression: &str) -> Result<Calculation> {
    let system = detect_system(expression)?;
    let parsed = parse_expression(expression, system)?;
    let value = evaluate(parsed.left, &parsed.operator, parsed.right)?;
    validate(&parsed, system, value)?;
    let rendered = format_result(value, system)?;

    info!(%system, value, rendered = rendered.as_str(), "calculated");
    Ok(Calculation {
        system,
        expression: parsed,
        value,
        rendered,
    })
}

/// Normalize a raw input line and calculate it.
pub fn calculate_line(line: &str) -> Result<Calculation> {
    let expression = normalize(line);
    debug!(expression = expression.as_str(), "normalized input");
    calculate_normalized(&expression)
}

/// The single output line for an outcome, without a trailing newline.
pub fn render_outcome(outcome: &Result<Calculation>, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => match outcome {
            Ok(calc) => format!("Результат: {}", calc.rendered),
            Err(e) => format!("Ошибка: {e}"),
        },
        OutputFormat::Json => render_json(outcome).to_string(),
    }
}

fn render_json(outcome: &Result<Calculation>) -> serde_json::Value {
    match outcome {
        Ok(calc) => json!({
            "ok": true,
            "system": calc.system,
            "result": calc.rendered,
            "value": calc.value,
        }),
        Err(e) => error_json(e),
    }
}

fn error_json(e: &Error) -> serde_json::Value {
    json!({
        "ok": false,
        "kind": e.kind(),
        "message": e.to_string(),
    })
}

/// Read one line (unless `expression` is given), calculate it and write the
/// outcome line. Calculation failures are written to `output` like results;
/// only I/O failures are returned as `Err`. Returns whether the calculation
/// succeeded.
pub fn run_session<R: BufRead, W: Write>(
    params: &CalcParams,
    expression: Option<&str>,
    mut input: R,
    mut output: W,
) -> Result<bool> {
    let line = match expression {
        Some(expr) => expr.to_string(),
        None => {
            if let Some(prompt) = &params.prompt {
                writeln!(output, "{prompt}")?;
                output.flush()?;
            }
            // Raw bytes: undecodable input is rejected by the detector or
            // parser rather than failing the read.
            let mut buf = Vec::new();
            let read = input.read_until(b'\n', &mut buf)?;
            if read == 0 {
                debug!("input closed before a line was read");
            }
            String::from_utf8_lossy(&buf).into_owned()
        }
    };

    let outcome = calculate_line(&line);
    if let Err(e) = &outcome {
        warn!(kind = e.kind(), "calculation failed: {e}");
    }

    writeln!(output, "{}", render_outcome(&outcome, params.format))?;
    output.flush()?;
    Ok(outcome.is_ok())
}
