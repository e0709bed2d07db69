//! Command Line Interface (CLI) layer for romcalc.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) that wires stdin/stdout to the
//! library's `romcalc::api::run_session`.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
