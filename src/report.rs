//! Structured round-trip output.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Everything a round trip produced, for `--json` mode.
///
/// Serialized field order follows the declaration order below and is part
/// of the output contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundTripReport {
    pub from: String,
    pub to: String,
    pub original: String,
    pub translated: String,
    pub round_tripped: String,
}

impl RoundTripReport {
    /// Renders the report as a single line of JSON.
    pub fn to_json_line(&self) -> Result<String> {
        serde_json::to_string(self).context("Failed to serialize round-trip report")
    }
}
