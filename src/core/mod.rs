//! Core calculation building blocks: numeral detection, expression parsing,
//! numeral conversion, evaluation and range checks. These are the pure
//! primitives consumed by the high-level `api` module.
pub mod params;
pub mod processing;
