//! Athlete data loading and the aggregations behind each chart

pub mod aggregate;
pub mod config;
pub mod dataset;
pub mod record;
pub mod sources;

use std::path::PathBuf;

use thiserror::Error;
use tokio::task::JoinError;

// Re-exports
pub use aggregate::{
    athlete_count_by_year, line_segments, medal_tally, medals_by_country, stat_by_year,
    women_participation_by_year, MedalStandings, MedalTally, WomenShare, YearCount, YearKeyed,
    YearStat,
};
pub use config::{NullConfig, SourceConfig};
pub use dataset::Dataset;
pub use record::{AthleteRecord, Medal, Sex};
pub use sources::{CsvSource, DatasetSource};

/// Errors that can occur while loading athlete data
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV parsing error: {0}")]
    Csv(String),

    #[error("missing required column '{0}'")]
    MissingColumn(String),

    #[error("Join error: {0}")]
    Join(#[from] JoinError),
}

impl From<csv::Error> for LoadError {
    fn from(error: csv::Error) -> Self {
        LoadError::Csv(error.to_string())
    }
}
