use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to run calculator session: {0}")]
    Session(#[from] romcalc::Error),
}
