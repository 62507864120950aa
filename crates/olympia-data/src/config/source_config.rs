//! Options for reading a tabular source

use serde::{Deserialize, Serialize};

use super::null_handling::NullConfig;

/// Columns every source must provide
pub const REQUIRED_COLUMNS: [&str; 7] = ["year", "sport", "team", "medal", "age", "height", "weight"];

/// Column read when present
pub const SEX_COLUMN: &str = "sex";

/// Configuration for a CSV source
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Field delimiter
    pub delimiter: u8,

    /// Null value handling for numeric columns
    pub null_config: NullConfig,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            null_config: NullConfig::default(),
        }
    }
}
