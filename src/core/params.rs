use serde::{Deserialize, Serialize};

use crate::types::OutputFormat;

pub const DEFAULT_PROMPT: &str = "Введите выражение (например: 2 + 3 или II + III):";

/// Run settings suitable for presets and embedding
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalcParams {
    pub format: OutputFormat,
    /// Prompt printed before reading stdin; None disables it
    pub prompt: Option<String>,
}

impl Default for CalcParams {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            prompt: Some(DEFAULT_PROMPT.to_string()),
        }
    }
}
