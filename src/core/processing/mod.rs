pub mod detect;
pub mod eval;
pub mod parse;
pub mod roman;
pub mod validate;
