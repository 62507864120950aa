//! Distinct Olympic years and the closest-year search

/// Sorted, distinct years in which Games appear in the dataset
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OlympicYears {
    years: Vec<i32>,
}

impl OlympicYears {
    /// Build from any sequence of years; duplicates are dropped
    pub fn new(years: impl IntoIterator<Item = i32>) -> Self {
        let mut years: Vec<i32> = years.into_iter().collect();
        years.sort_unstable();
        years.dedup();
        Self { years }
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.years
    }

    pub fn len(&self) -> usize {
        self.years.len()
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    pub fn first(&self) -> Option<i32> {
        self.years.first().copied()
    }

    pub fn last(&self) -> Option<i32> {
        self.years.last().copied()
    }

    pub fn contains(&self, year: i32) -> bool {
        self.years.binary_search(&year).is_ok()
    }

    /// Snap an arbitrary slider value to the nearest Olympic year.
    ///
    /// On an exact tie the earlier (smaller) year wins, since it is
    /// encountered first in sorted order. Returns `None` when there are no
    /// years at all.
    pub fn closest(&self, value: f64) -> Option<i32> {
        let mut best: Option<(i32, f64)> = None;
        for &year in &self.years {
            let distance = (year as f64 - value).abs();
            match best {
                Some((_, best_distance)) if distance >= best_distance => {}
                _ => best = Some((year, distance)),
            }
        }
        best.map(|(year, _)| year)
    }

    /// The Olympic year following `year`, if any
    pub fn next_after(&self, year: i32) -> Option<i32> {
        self.years.iter().copied().find(|&y| y > year)
    }

    /// The Olympic year preceding `year`, if any
    pub fn previous_before(&self, year: i32) -> Option<i32> {
        self.years.iter().rev().copied().find(|&y| y < year)
    }
}
