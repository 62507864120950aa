//! Athlete record model

use serde::{Deserialize, Serialize};

use olympia_core::Statistic;

/// Medal won for an event entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Medal {
    Gold,
    Silver,
    Bronze,
    #[default]
    None,
}

impl Medal {
    /// Parse a medal cell; anything but the three medal names is no medal
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "Gold" => Medal::Gold,
            "Silver" => Medal::Silver,
            "Bronze" => Medal::Bronze,
            _ => Medal::None,
        }
    }

    pub fn is_medal(&self) -> bool {
        *self != Medal::None
    }
}

/// Athlete sex, when the source has it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    Female,
    Male,
}

impl Sex {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "F" | "f" => Some(Sex::Female),
            "M" | "m" => Some(Sex::Male),
            _ => None,
        }
    }
}

/// One athlete-event entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AthleteRecord {
    pub year: i32,
    pub sport: String,
    pub team: String,
    pub medal: Medal,
    pub sex: Option<Sex>,
    /// NaN when missing
    pub height: f64,
    /// NaN when missing
    pub weight: f64,
    /// NaN when missing
    pub age: f64,
}

impl AthleteRecord {
    pub fn new(year: i32, sport: impl Into<String>, team: impl Into<String>) -> Self {
        Self {
            year,
            sport: sport.into(),
            team: team.into(),
            medal: Medal::None,
            sex: None,
            height: f64::NAN,
            weight: f64::NAN,
            age: f64::NAN,
        }
    }

    pub fn with_medal(mut self, medal: Medal) -> Self {
        self.medal = medal;
        self
    }

    pub fn with_sex(mut self, sex: Sex) -> Self {
        self.sex = Some(sex);
        self
    }

    pub fn with_height(mut self, height: f64) -> Self {
        self.height = height;
        self
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    pub fn with_age(mut self, age: f64) -> Self {
        self.age = age;
        self
    }

    /// Value of the given statistic, possibly NaN
    pub fn stat(&self, statistic: Statistic) -> f64 {
        match statistic {
            Statistic::Height => self.height,
            Statistic::Weight => self.weight,
            Statistic::Age => self.age,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_medal_parse() {
        assert_eq!(Medal::parse("Gold"), Medal::Gold);
        assert_eq!(Medal::parse(" Bronze "), Medal::Bronze);
        assert_eq!(Medal::parse(""), Medal::None);
        assert_eq!(Medal::parse("NA"), Medal::None);
        assert_eq!(Medal::parse("gold"), Medal::None);
        assert!(Medal::Silver.is_medal());
    }

    #[test]
    fn test_stat_lookup() {
        let record = AthleteRecord::new(2000, "Rowing", "Norway")
            .with_height(190.0)
            .with_age(24.0);
        assert_eq!(record.stat(Statistic::Height), 190.0);
        assert_eq!(record.stat(Statistic::Age), 24.0);
        assert!(record.stat(Statistic::Weight).is_nan());
    }
}
