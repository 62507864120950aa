use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::{debug, info, warn};

use super::DatasetSource;
use crate::config::{SourceConfig, REQUIRED_COLUMNS, SEX_COLUMN};
use crate::record::{AthleteRecord, Medal, Sex};
use crate::{Dataset, LoadError};

/// Positions of the columns we read, resolved from the header row
#[derive(Debug, Clone, Copy)]
struct ColumnMap {
    year: usize,
    sport: usize,
    team: usize,
    medal: usize,
    age: usize,
    height: usize,
    weight: usize,
    sex: Option<usize>,
}

impl ColumnMap {
    fn resolve(headers: &StringRecord) -> Result<Self, LoadError> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(name))
        };
        let require = |name: &str| find(name).ok_or_else(|| LoadError::MissingColumn(name.to_string()));

        // Report the first missing column in declaration order
        for name in REQUIRED_COLUMNS {
            require(name)?;
        }

        Ok(Self {
            year: require("year")?,
            sport: require("sport")?,
            team: require("team")?,
            medal: require("medal")?,
            age: require("age")?,
            height: require("height")?,
            weight: require("weight")?,
            sex: find(SEX_COLUMN),
        })
    }
}

/// CSV data source for athlete records
pub struct CsvSource {
    /// Path to the CSV file
    path: PathBuf,
    /// Reader options
    config: SourceConfig,
}

impl CsvSource {
    /// Create a new CSV source from a file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_config(path, SourceConfig::default())
    }

    pub fn with_config(path: impl Into<PathBuf>, config: SourceConfig) -> Self {
        Self {
            path: path.into(),
            config,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse athlete records from any reader.
    ///
    /// Numeric cells that are blank or not numbers become NaN. Rows whose
    /// year cannot be read are skipped and counted.
    pub fn parse<R: Read>(
        reader: R,
        config: &SourceConfig,
        source_name: &str,
    ) -> Result<Dataset, LoadError> {
        let mut csv_reader = ReaderBuilder::new()
            .has_headers(true)
            .delimiter(config.delimiter)
            .trim(Trim::Headers)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        let columns = ColumnMap::resolve(&headers)?;
        debug!(?columns, "Resolved CSV columns for {}", source_name);

        let nulls = &config.null_config;
        let mut records = Vec::new();
        let mut skipped = 0usize;

        for result in csv_reader.records() {
            let row = result?;
            let cell = |idx: usize| row.get(idx).unwrap_or("");

            let Some(year) = nulls.parse_year(cell(columns.year)) else {
                skipped += 1;
                continue;
            };

            records.push(AthleteRecord {
                year,
                sport: cell(columns.sport).trim().to_string(),
                team: cell(columns.team).trim().to_string(),
                medal: Medal::parse(cell(columns.medal)),
                sex: columns.sex.and_then(|idx| Sex::parse(cell(idx))),
                height: nulls.parse_numeric(cell(columns.height)),
                weight: nulls.parse_numeric(cell(columns.weight)),
                age: nulls.parse_numeric(cell(columns.age)),
            });
        }

        if skipped > 0 {
            warn!("Skipped {} rows without a usable year in {}", skipped, source_name);
        }

        Ok(Dataset::new(records, source_name).with_skipped_rows(skipped))
    }

    /// Read and parse the file synchronously
    fn read_file(path: &Path, config: &SourceConfig) -> Result<Dataset, LoadError> {
        let file = File::open(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unknown.csv");
        Self::parse(BufReader::new(file), config, name)
    }
}

#[async_trait]
impl DatasetSource for CsvSource {
    async fn load(&self) -> Result<Dataset, LoadError> {
        info!("Loading athlete records from {}", self.path.display());

        let path = self.path.clone();
        let config = self.config.clone();
        let dataset = tokio::task::spawn_blocking(move || Self::read_file(&path, &config)).await??;

        info!(
            rows = dataset.len(),
            years = dataset.years().len(),
            sports = dataset.sports().len(),
            "Loaded {}",
            dataset.source_name()
        );
        Ok(dataset)
    }

    fn source_name(&self) -> &str {
        self.path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unknown.csv")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use olympia_core::Statistic;

    const SAMPLE: &str = "\
year,sport,team,medal,sex,age,height,weight
1896,Athletics,Greece,Gold,M,24,180,70
1896,Athletics,United States,,M,,,
1900,Tennis,Great Britain,Silver,F,29,NA,60.5
1900,Swimming,France,Bronze,F,19,172,
";

    fn parse(text: &str) -> Result<Dataset, LoadError> {
        CsvSource::parse(text.as_bytes(), &SourceConfig::default(), "sample.csv")
    }

    #[test]
    fn test_parse_records() {
        let dataset = parse(SAMPLE).unwrap();
        assert_eq!(dataset.len(), 4);
        assert_eq!(dataset.years().as_slice(), &[1896, 1900]);

        let first = &dataset.records()[0];
        assert_eq!(first.team, "Greece");
        assert_eq!(first.medal, Medal::Gold);
        assert_eq!(first.sex, Some(Sex::Male));
        assert_eq!(first.height, 180.0);

        let tennis = &dataset.records()[2];
        assert_eq!(tennis.sex, Some(Sex::Female));
        assert!(tennis.height.is_nan());
        assert_eq!(tennis.weight, 60.5);
    }

    #[test]
    fn test_blank_cells_become_nan() {
        let dataset = parse(SAMPLE).unwrap();
        let blank = &dataset.records()[1];
        assert_eq!(blank.medal, Medal::None);
        assert!(blank.age.is_nan());
        assert!(blank.stat(Statistic::Height).is_nan());
        assert!(blank.stat(Statistic::Weight).is_nan());
    }

    #[test]
    fn test_header_order_and_case_do_not_matter() {
        let text = "Team,Medal,Year,Sport,Weight,Height,Age\nNorway,Gold,1994,Biathlon,70,178,27\n";
        let dataset = parse(text).unwrap();
        let record = &dataset.records()[0];
        assert_eq!(record.year, 1994);
        assert_eq!(record.sport, "Biathlon");
        assert_eq!(record.age, 27.0);
        assert_eq!(record.sex, None);
    }

    #[test]
    fn test_missing_column_is_load_error() {
        let text = "year,sport,team,age,height,weight\n1896,Athletics,Greece,24,180,70\n";
        match parse(text) {
            Err(LoadError::MissingColumn(name)) => assert_eq!(name, "medal"),
            other => panic!("expected missing column, got {:?}", other.map(|d| d.len())),
        }
    }

    #[test]
    fn test_empty_source_is_load_error() {
        assert!(matches!(parse(""), Err(LoadError::MissingColumn(_))));
    }

    #[test]
    fn test_rows_without_year_are_skipped() {
        let text = "year,sport,team,medal,age,height,weight\n,Rowing,Italy,,,,\nabc,Rowing,Italy,,,,\n1908,Rowing,Italy,,,,\n";
        let dataset = parse(text).unwrap();
        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.skipped_rows(), 2);
    }

    #[test]
    fn test_ragged_row_is_load_error() {
        let text = "year,sport,team,medal,age,height,weight\n1896,Athletics\n";
        assert!(matches!(parse(text), Err(LoadError::Csv(_))));
    }

    #[test]
    fn test_custom_delimiter() {
        let config = SourceConfig {
            delimiter: b';',
            ..SourceConfig::default()
        };
        let text = "year;sport;team;medal;age;height;weight\n1924;Rugby;France;Silver;25;175;80\n";
        let dataset = CsvSource::parse(text.as_bytes(), &config, "semi.csv").unwrap();
        assert_eq!(dataset.records()[0].medal, Medal::Silver);
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let source = CsvSource::new("/nonexistent/olympics.csv");
        assert_eq!(source.source_name(), "olympics.csv");
        assert!(matches!(source.load().await, Err(LoadError::Io { .. })));
    }
}
