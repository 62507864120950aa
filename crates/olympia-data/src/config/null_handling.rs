//! Null value handling and numeric coercion

use serde::{Deserialize, Serialize};

/// Null value configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NullConfig {
    /// Patterns to treat as null
    pub patterns: Vec<String>,

    /// Whether to trim whitespace before checking
    pub trim_whitespace: bool,

    /// Case sensitive matching
    pub case_sensitive: bool,
}

impl Default for NullConfig {
    fn default() -> Self {
        Self {
            patterns: vec![
                String::new(), // Empty string
                "-".to_string(),
                "NA".to_string(),
                "N/A".to_string(),
                "null".to_string(),
                "None".to_string(),
                "NaN".to_string(),
            ],
            trim_whitespace: true,
            case_sensitive: false,
        }
    }
}

impl NullConfig {
    /// Check if a value should be treated as null
    pub fn is_null(&self, value: &str) -> bool {
        let test_value = if self.trim_whitespace {
            value.trim()
        } else {
            value
        };

        self.patterns.iter().any(|pattern| {
            if self.case_sensitive {
                test_value == pattern
            } else {
                test_value.eq_ignore_ascii_case(pattern)
            }
        })
    }

    /// Coerce a cell to a number.
    ///
    /// Never fails: null markers and unparsable text become NaN so that
    /// aggregation can skip them uniformly.
    pub fn parse_numeric(&self, value: &str) -> f64 {
        if self.is_null(value) {
            return f64::NAN;
        }
        value.trim().parse::<f64>().unwrap_or(f64::NAN)
    }

    /// Coerce a year cell; accepts integral floats such as `1896.0`
    pub fn parse_year(&self, value: &str) -> Option<i32> {
        let number = self.parse_numeric(value);
        if number.is_finite() && number.fract() == 0.0 {
            Some(number as i32)
        } else {
            None
        }
    }

    /// Add a null pattern
    pub fn add_pattern(&mut self, pattern: String) {
        if !self.patterns.contains(&pattern) {
            self.patterns.push(pattern);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_patterns() {
        let config = NullConfig::default();
        assert!(config.is_null(""));
        assert!(config.is_null("  "));
        assert!(config.is_null("na"));
        assert!(config.is_null("NULL"));
        assert!(!config.is_null("180"));
    }

    #[test]
    fn test_parse_numeric_never_fails() {
        let config = NullConfig::default();
        assert_eq!(config.parse_numeric(" 180.5 "), 180.5);
        assert!(config.parse_numeric("").is_nan());
        assert!(config.parse_numeric("NA").is_nan());
        assert!(config.parse_numeric("tall").is_nan());
    }

    #[test]
    fn test_parse_year() {
        let config = NullConfig::default();
        assert_eq!(config.parse_year("1896"), Some(1896));
        assert_eq!(config.parse_year("1896.0"), Some(1896));
        assert_eq!(config.parse_year("1896.5"), None);
        assert_eq!(config.parse_year(""), None);
        assert_eq!(config.parse_year("unknown"), None);
    }

    #[test]
    fn test_custom_pattern() {
        let mut config = NullConfig::default();
        config.add_pattern("?".to_string());
        config.add_pattern("?".to_string());
        assert!(config.parse_numeric("?").is_nan());
        assert_eq!(config.patterns.iter().filter(|p| *p == "?").count(), 1);
    }
}
