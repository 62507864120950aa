//! End-to-end scenarios over a small fixed dataset

use std::time::Duration;

use olympia_core::{
    default_war_periods, AnimationDriver, IntervalTimer, ManualClock, SelectionEngine,
    SelectionState, TickOutcome, WarPeriod, YearRange, ALL_YEARS,
};
use olympia_data::{
    athlete_count_by_year, line_segments, medal_tally, medals_by_country, stat_by_year,
    AthleteRecord, CsvSource, Dataset, Medal, SourceConfig,
};

const GOLDEN_CSV: &str = "\
year,sport,team,medal,sex,age,height,weight
1896,Athletics,Greece,Gold,M,23,178,70
1896,Athletics,United States,Silver,M,21,183,74
1900,Swimming,France,Bronze,F,19,170,58
1900,Swimming,Great Britain,,M,25,,
1908,Athletics,United States,Gold,M,24,181,75
1908,Rowing,Great Britain,Gold,M,27,189,88
1912,Rowing,Sweden,Silver,M,26,186,85
1920,Athletics,Finland,Gold,M,28,176,66
1924,Athletics,Finland,Bronze,M,,174,64
1924,Swimming,United States,Gold,F,17,168,57
2000,Rowing,Italy,,M,30,180,90
2000,Rowing,Italy,,M,31,NA,92
2000,Rowing,Italy,Bronze,M,29,190,95
2016,Athletics,Jamaica,Gold,M,29,195,94
";

fn golden() -> Dataset {
    CsvSource::parse(GOLDEN_CSV.as_bytes(), &SourceConfig::default(), "golden.csv").unwrap()
}

fn engine_for(dataset: &Dataset) -> SelectionEngine {
    let engine = SelectionEngine::new();
    engine.update_catalog(dataset.years().clone(), dataset.sports().to_vec());
    engine
}

#[test]
fn test_closest_year_snap() {
    let dataset = golden();
    let years = dataset.years();

    let mut value = 1880.0;
    while value <= 2030.0 {
        let snapped = years.closest(value).unwrap();
        assert!(years.contains(snapped));
        let best = (snapped as f64 - value).abs();
        for &other in years.as_slice() {
            assert!((other as f64 - value).abs() >= best, "{other} beats {snapped} at {value}");
        }
        value += 0.5;
    }

    // 1904 is equidistant from 1900 and 1908
    assert_eq!(years.closest(1904.0), Some(1900));
}

#[test]
fn test_toggle_idempotence() {
    let dataset = golden();
    let engine = engine_for(&dataset);

    engine.toggle_year(1908);
    engine.toggle_year(1908);
    assert_eq!(engine.selection().selected_year, ALL_YEARS);

    engine.toggle_year(1908);
    engine.toggle_year(1924);
    assert_eq!(engine.selection().selected_year, 1924);
}

#[test]
fn test_medal_tally_conservation() {
    let dataset = golden();
    for year in [ALL_YEARS, 1896, 1908, 1924, 2016] {
        let table = medal_tally(dataset.records(), year);
        for tally in &table {
            assert_eq!(tally.total, tally.gold + tally.silver + tally.bronze);
        }

        let medals = dataset
            .records()
            .iter()
            .filter(|r| year == ALL_YEARS || r.year <= year)
            .filter(|r| r.medal.is_medal())
            .count();
        assert_eq!(table.iter().map(|t| t.total as usize).sum::<usize>(), medals);
    }
}

#[test]
fn test_cumulative_medal_monotonicity() {
    let dataset = golden();
    let years = dataset.years().as_slice().to_vec();
    let total_for = |team: &str, year: i32| {
        medal_tally(dataset.records(), year)
            .into_iter()
            .find(|t| t.team == team)
            .map_or(0, |t| t.total)
    };

    for team in ["United States", "Finland", "Great Britain", "Italy"] {
        for pair in years.windows(2) {
            assert!(total_for(team, pair[0]) <= total_for(team, pair[1]));
        }
    }
}

#[test]
fn test_segment_break_correctness() {
    let years = [1908, 1912, 1916, 1920, 1924];
    let wars = [WarPeriod::new(1912, 1920, "WWI")];
    let segments = line_segments(&years, &wars);
    assert_eq!(segments.len(), 2);
    assert_eq!(segments[0], &[1908, 1912, 1916]);
    assert_eq!(segments[1], &[1920, 1924]);
}

#[test]
fn test_golden_sport_segments() {
    let dataset = golden();
    let counts = athlete_count_by_year(dataset.records(), &SelectionState::default(), YearRange::default());
    let segments = line_segments(&counts, &default_war_periods());
    let runs: Vec<Vec<i32>> = segments
        .iter()
        .map(|s| s.iter().map(|c| c.year).collect())
        .collect();
    assert_eq!(
        runs,
        vec![vec![1896, 1900, 1908, 1912], vec![1920, 1924, 2000, 2016]]
    );
}

#[test]
fn test_top_fifteen_truncation() {
    let records: Vec<AthleteRecord> = (0..20u32)
        .flat_map(|team| {
            (0..=team).map(move |_| {
                AthleteRecord::new(1996, "Judo", format!("Country {team}")).with_medal(Medal::Bronze)
            })
        })
        .collect();

    let standings = medals_by_country(&records, ALL_YEARS, 15);
    assert_eq!(standings.entries.len(), 15);
    assert!(standings.entries.windows(2).all(|w| w[0].total > w[1].total));
}

#[test]
fn test_nan_exclusion() {
    let dataset = golden();
    let stats = stat_by_year(dataset.records(), &SelectionState::default(), YearRange::default());
    let y2000 = stats.iter().find(|s| s.year == 2000).unwrap();
    assert_eq!((y2000.min, y2000.avg, y2000.max), (180.0, 185.0, 190.0));

    // 1900 has one blank height left
    let y1900 = stats.iter().find(|s| s.year == 1900).unwrap();
    assert_eq!((y1900.min, y1900.avg, y1900.max), (170.0, 170.0, 170.0));
}

#[test]
fn test_animation_termination() {
    let dataset = golden();
    let engine = engine_for(&dataset);
    engine.toggle_year(2016);

    let clock = ManualClock::new();
    let period = Duration::from_millis(150);
    let mut driver = AnimationDriver::new(IntervalTimer::new(clock.clone()), YearRange::default(), period);

    driver.play(&engine);
    assert_eq!(engine.selection().selected_year, 1896);

    let mut seen = vec![1896];
    let mut ticks = 0;
    loop {
        clock.advance(period);
        ticks += 1;
        match driver.poll(&engine) {
            TickOutcome::Advanced(year) => {
                assert!(year > *seen.last().unwrap());
                seen.push(year);
            }
            TickOutcome::Finished(year) => {
                assert_eq!(year, 2016);
                break;
            }
            TickOutcome::Unchanged => {}
            TickOutcome::Ignored => panic!("timer stopped early"),
        }
        assert!(ticks <= 200, "animation never finished");
    }

    assert!(!driver.is_running());
    assert!(!engine.selection().is_playing);
    clock.advance(period * 3);
    assert_eq!(driver.poll(&engine), TickOutcome::Ignored);
    assert_eq!(engine.selection().selected_year, 2016);
}
