use std::collections::BTreeMap;

use serde::Serialize;

use olympia_core::{SelectionState, YearRange};

use super::sport_filtered;
use crate::record::{AthleteRecord, Sex};

/// Number of athlete entries in one year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YearCount {
    pub year: i32,
    pub count: usize,
    pub is_active: bool,
}

/// Athlete entries per year for the selected sport, ascending by year
pub fn athlete_count_by_year(
    records: &[AthleteRecord],
    selection: &SelectionState,
    range: YearRange,
) -> Vec<YearCount> {
    let mut counts: BTreeMap<i32, usize> = BTreeMap::new();
    for record in sport_filtered(records, selection) {
        *counts.entry(record.year).or_default() += 1;
    }

    counts
        .into_iter()
        .map(|(year, count)| YearCount {
            year,
            count,
            is_active: selection.is_year_active(year, range),
        })
        .collect()
}

/// Women's share of the entries with a known sex in one year
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WomenShare {
    pub year: i32,
    pub women: usize,
    /// Entries with a known sex
    pub total: usize,
    /// `women / total`, in `[0, 1]`
    pub share: f64,
    pub is_active: bool,
}

impl WomenShare {
    pub fn percent(&self) -> f64 {
        self.share * 100.0
    }
}

/// Women's participation per year for the selected sport.
///
/// Years where no entry has a known sex are left out.
pub fn women_participation_by_year(
    records: &[AthleteRecord],
    selection: &SelectionState,
    range: YearRange,
) -> Vec<WomenShare> {
    let mut counts: BTreeMap<i32, (usize, usize)> = BTreeMap::new();
    for record in sport_filtered(records, selection) {
        let Some(sex) = record.sex else { continue };
        let (women, total) = counts.entry(record.year).or_default();
        if sex == Sex::Female {
            *women += 1;
        }
        *total += 1;
    }

    counts
        .into_iter()
        .map(|(year, (women, total))| WomenShare {
            year,
            women,
            total,
            share: women as f64 / total as f64,
            is_active: selection.is_year_active(year, range),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<AthleteRecord> {
        vec![
            AthleteRecord::new(1900, "Tennis", "France").with_sex(Sex::Female),
            AthleteRecord::new(1900, "Tennis", "France").with_sex(Sex::Male),
            AthleteRecord::new(1900, "Rowing", "France").with_sex(Sex::Male),
            AthleteRecord::new(1896, "Rowing", "Greece").with_sex(Sex::Male),
            AthleteRecord::new(1904, "Rowing", "Canada"),
        ]
    }

    #[test]
    fn test_counts_all_sports() {
        let counts = athlete_count_by_year(&records(), &SelectionState::default(), YearRange::default());
        let pairs: Vec<(i32, usize)> = counts.iter().map(|c| (c.year, c.count)).collect();
        assert_eq!(pairs, vec![(1896, 1), (1900, 3), (1904, 1)]);
        assert!(counts.iter().all(|c| c.is_active));
    }

    #[test]
    fn test_counts_single_sport() {
        let selection = SelectionState {
            sport: "Tennis".to_string(),
            selected_year: 1900,
            ..SelectionState::default()
        };
        let counts = athlete_count_by_year(&records(), &selection, YearRange::default());
        assert_eq!(counts, vec![YearCount { year: 1900, count: 2, is_active: true }]);
    }

    #[test]
    fn test_unknown_sport_is_empty() {
        let selection = SelectionState {
            sport: "Quidditch".to_string(),
            ..SelectionState::default()
        };
        assert!(athlete_count_by_year(&records(), &selection, YearRange::default()).is_empty());
    }

    #[test]
    fn test_women_share() {
        let shares = women_participation_by_year(&records(), &SelectionState::default(), YearRange::default());
        // 1904 has no known sex
        assert_eq!(shares.iter().map(|s| s.year).collect::<Vec<_>>(), vec![1896, 1900]);
        assert_eq!(shares[0].share, 0.0);
        assert_eq!(shares[1].women, 1);
        assert_eq!(shares[1].total, 3);
        assert!((shares[1].percent() - 33.333).abs() < 0.01);
    }
}
