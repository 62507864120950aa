//! The loaded, immutable dataset

use std::sync::Arc;

use olympia_core::{OlympicYears, Statistic, ALL_SPORTS};

use crate::record::AthleteRecord;

/// All athlete records plus the catalogs derived from them.
///
/// Cheap to clone; the records are shared and never mutated after load.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Arc<[AthleteRecord]>,
    years: OlympicYears,
    sports: Vec<String>,
    source_name: String,
    skipped_rows: usize,
}

impl Dataset {
    pub fn new(records: Vec<AthleteRecord>, source_name: impl Into<String>) -> Self {
        let years = OlympicYears::new(records.iter().map(|r| r.year));

        let mut sports: Vec<String> = records.iter().map(|r| r.sport.clone()).collect();
        sports.sort();
        sports.dedup();

        Self {
            records: records.into(),
            years,
            sports,
            source_name: source_name.into(),
            skipped_rows: 0,
        }
    }

    pub(crate) fn with_skipped_rows(mut self, skipped: usize) -> Self {
        self.skipped_rows = skipped;
        self
    }

    pub fn records(&self) -> &[AthleteRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn years(&self) -> &OlympicYears {
        &self.years
    }

    /// Distinct sports, sorted
    pub fn sports(&self) -> &[String] {
        &self.sports
    }

    /// Sport selector entries: [`ALL_SPORTS`] followed by every sport
    pub fn sport_catalog(&self) -> Vec<String> {
        std::iter::once(ALL_SPORTS.to_string())
            .chain(self.sports.iter().cloned())
            .collect()
    }

    /// Largest value of `statistic` over every record, ignoring NaN
    pub fn max_stat(&self, statistic: Statistic) -> Option<f64> {
        self.records
            .iter()
            .map(|r| r.stat(statistic))
            .filter(|v| !v.is_nan())
            .fold(None, |max, v| Some(max.map_or(v, |m: f64| m.max(v))))
    }

    /// Whether any record carries the athlete's sex
    pub fn has_sex_data(&self) -> bool {
        self.records.iter().any(|r| r.sex.is_some())
    }

    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    /// Rows dropped during load because their year was unusable
    pub fn skipped_rows(&self) -> usize {
        self.skipped_rows
    }
}
