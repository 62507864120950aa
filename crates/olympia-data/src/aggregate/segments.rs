use olympia_core::WarPeriod;

use super::{WomenShare, YearCount, YearStat};

/// A per-year point
pub trait YearKeyed {
    fn year(&self) -> i32;
}

impl YearKeyed for i32 {
    fn year(&self) -> i32 {
        *self
    }
}

impl YearKeyed for YearStat {
    fn year(&self) -> i32 {
        self.year
    }
}

impl YearKeyed for YearCount {
    fn year(&self) -> i32 {
        self.year
    }
}

impl YearKeyed for WomenShare {
    fn year(&self) -> i32 {
        self.year
    }
}

/// Split a year-sorted sequence into runs that do not cross a war.
///
/// A new run starts at every point whose year equals a war period's end.
/// Every input point lands in exactly one run.
pub fn line_segments<'a, T: YearKeyed>(points: &'a [T], wars: &[WarPeriod]) -> Vec<&'a [T]> {
    let mut segments = Vec::new();
    let mut start = 0;

    for (i, point) in points.iter().enumerate().skip(1) {
        if wars.iter().any(|w| w.breaks_before(point.year())) {
            segments.push(&points[start..i]);
            start = i;
        }
    }

    if start < points.len() {
        segments.push(&points[start..]);
    }
    segments
}
