use std::collections::BTreeMap;

use serde::Serialize;

use olympia_core::{SelectionState, YearRange};

use crate::record::AthleteRecord;

/// Distribution of the selected statistic for one Olympic year
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct YearStat {
    pub year: i32,
    pub avg: f64,
    pub min: f64,
    pub max: f64,
    pub is_active: bool,
}

#[derive(Default)]
struct Accumulator {
    sum: f64,
    count: usize,
    min: f64,
    max: f64,
}

impl Accumulator {
    fn push(&mut self, value: f64) {
        if self.count == 0 {
            self.min = value;
            self.max = value;
        } else {
            self.min = self.min.min(value);
            self.max = self.max.max(value);
        }
        self.sum += value;
        self.count += 1;
    }
}

/// Min/avg/max of `selection.statistic` per year, ascending by year.
///
/// NaN values are skipped, and a year whose values are all NaN is not
/// emitted at all.
pub fn stat_by_year(
    records: &[AthleteRecord],
    selection: &SelectionState,
    range: YearRange,
) -> Vec<YearStat> {
    let mut by_year: BTreeMap<i32, Accumulator> = BTreeMap::new();

    for record in records {
        let value = record.stat(selection.statistic);
        if value.is_nan() {
            continue;
        }
        by_year.entry(record.year).or_default().push(value);
    }

    by_year
        .into_iter()
        .map(|(year, acc)| YearStat {
            year,
            avg: acc.sum / acc.count as f64,
            min: acc.min,
            max: acc.max,
            is_active: selection.is_year_active(year, range),
        })
        .collect()
}
