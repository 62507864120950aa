//! Pure aggregations over the athlete records.
//!
//! Every function here is a deterministic function of its inputs: the
//! record slice and (part of) the current selection. Nothing is cached.

pub mod medals;
pub mod participation;
pub mod segments;
pub mod stats;

pub use medals::{medal_tally, medals_by_country, MedalStandings, MedalTally};
pub use participation::{athlete_count_by_year, women_participation_by_year, WomenShare, YearCount};
pub use segments::{line_segments, YearKeyed};
pub use stats::{stat_by_year, YearStat};

use olympia_core::SelectionState;

use crate::record::AthleteRecord;

/// Records matching the selected sport, or every record for "All"
pub(crate) fn sport_filtered<'a>(
    records: &'a [AthleteRecord],
    selection: &'a SelectionState,
) -> impl Iterator<Item = &'a AthleteRecord> + 'a {
    records
        .iter()
        .filter(move |r| selection.is_all_sports() || r.sport == selection.sport)
}
