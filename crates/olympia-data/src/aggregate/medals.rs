use ahash::RandomState;
use indexmap::IndexMap;
use serde::Serialize;

use olympia_core::ALL_YEARS;

use crate::record::{AthleteRecord, Medal};

/// Medal counts for one team
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MedalTally {
    pub team: String,
    pub gold: u32,
    pub silver: u32,
    pub bronze: u32,
    pub total: u32,
}

impl MedalTally {
    fn new(team: &str) -> Self {
        Self {
            team: team.to_string(),
            gold: 0,
            silver: 0,
            bronze: 0,
            total: 0,
        }
    }

    fn add(&mut self, medal: Medal) {
        match medal {
            Medal::Gold => self.gold += 1,
            Medal::Silver => self.silver += 1,
            Medal::Bronze => self.bronze += 1,
            Medal::None => return,
        }
        self.total += 1;
    }
}

/// The top of the medal table plus figures about the whole table
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MedalStandings {
    /// Best teams, descending by total
    pub entries: Vec<MedalTally>,
    /// Teams with at least one medal in the filtered records
    pub teams_with_medals: usize,
    /// Every team seen in the filtered records
    pub teams: usize,
}

impl MedalStandings {
    /// 1-based position of `team` in the entries
    pub fn rank(&self, team: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.team == team).map(|i| i + 1)
    }

    pub fn max_total(&self) -> u32 {
        self.entries.iter().map(|e| e.total).max().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Full medal table, descending by total.
///
/// With a specific year the count is cumulative: every record up to and
/// including that year. Teams keep their first-encountered order on equal
/// totals. Teams without medals are listed with a zero total.
pub fn medal_tally(records: &[AthleteRecord], selected_year: i32) -> Vec<MedalTally> {
    let mut tallies: IndexMap<&str, MedalTally, RandomState> = IndexMap::default();

    for record in records {
        if selected_year != ALL_YEARS && record.year > selected_year {
            continue;
        }
        tallies
            .entry(record.team.as_str())
            .or_insert_with(|| MedalTally::new(&record.team))
            .add(record.medal);
    }

    let mut table: Vec<MedalTally> = tallies.into_values().collect();
    // sort_by is stable
    table.sort_by(|a, b| b.total.cmp(&a.total));
    table
}

/// Top `top_n` teams of [`medal_tally`]
pub fn medals_by_country(records: &[AthleteRecord], selected_year: i32, top_n: usize) -> MedalStandings {
    let mut table = medal_tally(records, selected_year);
    let teams = table.len();
    let teams_with_medals = table.iter().filter(|t| t.total > 0).count();
    table.truncate(top_n);

    MedalStandings {
        entries: table,
        teams_with_medals,
        teams,
    }
}
