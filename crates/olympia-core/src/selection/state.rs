use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::YearRange;

/// Selected year value meaning "no specific year".
pub const ALL_YEARS: i32 = 0;

/// Sport value meaning "no sport filter".
pub const ALL_SPORTS: &str = "All";

/// Numeric athlete attribute shown on the stat range chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Statistic {
    #[default]
    Height,
    Weight,
    Age,
}

impl Statistic {
    pub const ALL: [Statistic; 3] = [Statistic::Height, Statistic::Weight, Statistic::Age];

    /// Short name, as used by the statistic selector
    pub fn name(&self) -> &'static str {
        match self {
            Statistic::Height => "height",
            Statistic::Weight => "weight",
            Statistic::Age => "age",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Statistic::Height => "Height",
            Statistic::Weight => "Weight",
            Statistic::Age => "Age",
        }
    }

    /// Y-axis label of the stat range chart
    pub fn axis_label(&self) -> &'static str {
        match self {
            Statistic::Height => "Average Height (cm)",
            Statistic::Weight => "Average Weight (kg)",
            Statistic::Age => "Average Age (years)",
        }
    }
}

impl fmt::Display for Statistic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Statistic {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "height" => Ok(Statistic::Height),
            "weight" => Ok(Statistic::Weight),
            "age" => Ok(Statistic::Age),
            other => Err(format!("Unknown statistic '{}'", other)),
        }
    }
}

/// The shared selection driving every chart
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionState {
    /// Selected Olympic year, or [`ALL_YEARS`]
    pub selected_year: i32,

    /// Statistic shown on the stat range chart
    pub statistic: Statistic,

    /// Selected sport, or [`ALL_SPORTS`]
    pub sport: String,

    /// The year slider is being dragged
    pub is_dragging: bool,

    /// The year animation is running
    pub is_playing: bool,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self {
            selected_year: ALL_YEARS,
            statistic: Statistic::Height,
            sport: ALL_SPORTS.to_string(),
            is_dragging: false,
            is_playing: false,
        }
    }
}

impl SelectionState {
    pub fn is_all_years(&self) -> bool {
        self.selected_year == ALL_YEARS
    }

    pub fn is_all_sports(&self) -> bool {
        self.sport == ALL_SPORTS
    }

    /// Whether `year` should be drawn highlighted.
    ///
    /// A year is active when it is the selected year, or when no year is
    /// selected and it lies inside the supported range. Every chart uses
    /// this rule.
    pub fn is_year_active(&self, year: i32, range: YearRange) -> bool {
        if self.is_all_years() {
            range.contains(year)
        } else {
            year == self.selected_year
        }
    }

    /// Label shown next to the year slider
    pub fn year_label(&self) -> String {
        if self.is_all_years() {
            "None Selected".to_string()
        } else {
            self.selected_year.to_string()
        }
    }

    /// Label for the sport selector and chart titles
    pub fn sport_label(&self) -> &str {
        if self.is_all_sports() {
            "All sports"
        } else {
            &self.sport
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = SelectionState::default();
        assert_eq!(state.selected_year, ALL_YEARS);
        assert_eq!(state.statistic, Statistic::Height);
        assert_eq!(state.sport, "All");
        assert!(!state.is_dragging);
        assert!(!state.is_playing);
    }

    #[test]
    fn test_active_year_rule() {
        let range = YearRange::new(1896, 2016);
        let mut state = SelectionState::default();

        assert!(state.is_year_active(1896, range));
        assert!(state.is_year_active(2016, range));
        assert!(!state.is_year_active(1892, range));

        state.selected_year = 1936;
        assert!(state.is_year_active(1936, range));
        assert!(!state.is_year_active(1948, range));
    }

    #[test]
    fn test_statistic_parse() {
        assert_eq!("Weight".parse::<Statistic>(), Ok(Statistic::Weight));
        assert_eq!(" age ".parse::<Statistic>(), Ok(Statistic::Age));
        assert!("bmi".parse::<Statistic>().is_err());
        assert_eq!(Statistic::Height.axis_label(), "Average Height (cm)");
    }

    #[test]
    fn test_labels() {
        let mut state = SelectionState::default();
        assert_eq!(state.year_label(), "None Selected");
        assert_eq!(state.sport_label(), "All sports");

        state.selected_year = 2000;
        state.sport = "Rowing".to_string();
        assert_eq!(state.year_label(), "2000");
        assert_eq!(state.sport_label(), "Rowing");
    }
}
