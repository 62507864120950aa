//! Periods without Games

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;

/// A contiguous range of years in which no Games took place
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarPeriod {
    /// Last Olympic year before the gap
    pub start: i32,
    /// First Olympic year after the gap
    pub end: i32,
    pub label: String,
}

impl WarPeriod {
    pub fn new(start: i32, end: i32, label: impl Into<String>) -> Self {
        Self {
            start,
            end,
            label: label.into(),
        }
    }

    /// Whether a chart line must break immediately before `year`
    pub fn breaks_before(&self, year: i32) -> bool {
        year == self.end
    }

    pub fn midpoint(&self) -> f64 {
        (self.start + self.end) as f64 / 2.0
    }
}

/// The two world-war gaps
pub fn default_war_periods() -> Vec<WarPeriod> {
    vec![
        WarPeriod::new(1912, 1920, "WWI"),
        WarPeriod::new(1936, 1948, "WWII"),
    ]
}

/// Check that periods are well formed, sorted and non-overlapping
pub fn validate_war_periods(periods: &[WarPeriod]) -> Result<(), ConfigError> {
    for period in periods {
        if period.start >= period.end {
            return Err(ConfigError::Invalid(format!(
                "war period '{}' must start before it ends ({} >= {})",
                period.label, period.start, period.end
            )));
        }
    }

    for pair in periods.windows(2) {
        if pair[1].start < pair[0].end {
            return Err(ConfigError::Invalid(format!(
                "war periods '{}' and '{}' overlap or are out of order",
                pair[0].label, pair[1].label
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_periods_are_valid() {
        let periods = default_war_periods();
        assert_eq!(periods.len(), 2);
        assert!(validate_war_periods(&periods).is_ok());
        assert!(periods[0].breaks_before(1920));
        assert!(!periods[0].breaks_before(1912));
    }

    #[test]
    fn test_rejects_inverted_period() {
        let periods = vec![WarPeriod::new(1920, 1912, "bad")];
        assert!(validate_war_periods(&periods).is_err());
    }

    #[test]
    fn test_rejects_overlap_and_unsorted() {
        let overlapping = vec![
            WarPeriod::new(1912, 1940, "a"),
            WarPeriod::new(1936, 1948, "b"),
        ];
        assert!(validate_war_periods(&overlapping).is_err());

        let unsorted = vec![
            WarPeriod::new(1936, 1948, "b"),
            WarPeriod::new(1912, 1920, "a"),
        ];
        assert!(validate_war_periods(&unsorted).is_err());
    }
}
