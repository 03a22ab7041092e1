//! CLI configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Output configuration.
    #[serde(default)]
    pub output: OutputConfig,

    /// Validation configuration.
    #[serde(default)]
    pub validation: ValidationConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;
        Self::parse(path, &content)
    }

    /// Parse config content, choosing JSON or TOML by file extension.
    pub fn parse(path: &str, content: &str) -> Result<Self> {
        if path.ends_with(".json") {
            serde_json::from_str(content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }
}

/// Output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Pretty-print JSON exports.
    #[serde(default)]
    pub pretty: bool,

    /// Symbol printed before prices in tables.
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pretty: false,
            currency_symbol: default_currency_symbol(),
        }
    }
}

impl OutputConfig {
    /// Format a whole-unit price for display.
    pub fn format_price(&self, price: u32) -> String {
        format!("{}{}", self.currency_symbol, price)
    }
}

/// Validation settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Fail `validate` on warnings as well as errors.
    #[serde(default)]
    pub warnings_as_errors: bool,
}
