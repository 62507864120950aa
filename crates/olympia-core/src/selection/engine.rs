//! Selection engine implementation

use std::sync::{Arc, Weak};

use parking_lot::RwLock;
use tracing::debug;

use super::{
    OlympicYears, SelectionContext, SelectionState, SelectionSubscriber, Statistic, ALL_SPORTS,
    ALL_YEARS,
};

/// Selection state stored internally
#[derive(Debug, Clone)]
struct EngineState {
    selection: SelectionState,
    years: OlympicYears,
    /// Sport catalog, [`ALL_SPORTS`] first
    sports: Vec<String>,
    revision: u64,
    /// A change was made while dragging and has not been published yet
    pending: bool,
}

/// Owner of the shared selection.
///
/// Every mutator applies the transition rules, then publishes the new
/// selection to all live subscribers. While the year slider is being
/// dragged, publication is deferred until the drag ends.
pub struct SelectionEngine {
    state: Arc<RwLock<EngineState>>,
    subscribers: Arc<RwLock<Vec<Weak<dyn SelectionSubscriber>>>>,
}

impl SelectionEngine {
    /// Create an engine with an empty catalog and the initial selection
    pub fn new() -> Self {
        let state = EngineState {
            selection: SelectionState::default(),
            years: OlympicYears::default(),
            sports: vec![ALL_SPORTS.to_string()],
            revision: 0,
            pending: false,
        };

        Self {
            state: Arc::new(RwLock::new(state)),
            subscribers: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Install the years and sports found in a freshly loaded dataset.
    ///
    /// The selection is reset to its initial value.
    pub fn update_catalog(&self, years: OlympicYears, sports: impl IntoIterator<Item = String>) {
        let mut state = self.state.write();
        let mut catalog = vec![ALL_SPORTS.to_string()];
        catalog.extend(sports.into_iter().filter(|s| s != ALL_SPORTS));

        debug!(years = years.len(), sports = catalog.len() - 1, "Selection catalog updated");

        state.years = years;
        state.sports = catalog;
        state.selection = SelectionState::default();
        state.pending = false;
        state.revision += 1;

        drop(state);
        self.notify_subscribers();
    }

    /// Set the year from a continuous slider value.
    ///
    /// The value snaps to the nearest Olympic year; the snapped year is
    /// returned. Returns `None` when no years are known.
    pub fn set_year(&self, value: f64) -> Option<i32> {
        let year = self.state.read().years.closest(value)?;
        self.apply(|selection| {
            if selection.selected_year == year {
                return false;
            }
            debug!(year, "Year selected");
            selection.selected_year = year;
            true
        });
        Some(year)
    }

    /// Click-to-select: selecting the current year again clears it
    pub fn toggle_year(&self, year: i32) {
        self.apply(|selection| {
            selection.selected_year = if selection.selected_year == year {
                ALL_YEARS
            } else {
                year
            };
            debug!(year = selection.selected_year, "Year toggled");
            true
        });
    }

    /// Reset to the all-years sentinel
    pub fn clear_year(&self) {
        self.apply(|selection| {
            if selection.is_all_years() {
                return false;
            }
            debug!("Year selection cleared");
            selection.selected_year = ALL_YEARS;
            true
        });
    }

    /// Move to the neighbouring Olympic year.
    ///
    /// From "all years", forward selects the first year and backward the
    /// last. Stepping past either end leaves the selection unchanged.
    pub fn step_year(&self, forward: bool) -> Option<i32> {
        let target = {
            let state = self.state.read();
            let current = state.selection.selected_year;
            match (current == ALL_YEARS, forward) {
                (true, true) => state.years.first(),
                (true, false) => state.years.last(),
                (false, true) => state.years.next_after(current),
                (false, false) => state.years.previous_before(current),
            }
        }?;
        self.apply(|selection| {
            selection.selected_year = target;
            true
        });
        Some(target)
    }

    pub fn set_statistic(&self, statistic: Statistic) {
        self.apply(|selection| {
            if selection.statistic == statistic {
                return false;
            }
            debug!(%statistic, "Statistic selected");
            selection.statistic = statistic;
            true
        });
    }

    /// Select a sport by name, or [`ALL_SPORTS`] to remove the filter.
    ///
    /// Names outside the catalog are accepted; they simply match no records.
    pub fn set_sport(&self, sport: impl Into<String>) {
        let sport = sport.into();
        self.apply(|selection| {
            if selection.sport == sport {
                return false;
            }
            debug!(sport = %sport, "Sport selected");
            selection.sport = sport;
            true
        });
    }

    /// Select the next sport in catalog order, wrapping around
    pub fn next_sport(&self) -> String {
        self.cycle_sport(true)
    }

    /// Select the previous sport in catalog order, wrapping around
    pub fn previous_sport(&self) -> String {
        self.cycle_sport(false)
    }

    fn cycle_sport(&self, forward: bool) -> String {
        let target = {
            let state = self.state.read();
            let len = state.sports.len();
            let current = state
                .sports
                .iter()
                .position(|s| *s == state.selection.sport);
            let index = match (current, forward) {
                (Some(idx), true) => (idx + 1) % len,
                (Some(idx), false) => (idx + len - 1) % len,
                (None, true) => 0,
                (None, false) => len - 1,
            };
            state.sports[index].clone()
        };
        self.set_sport(target.clone());
        target
    }

    /// Mark the start or end of a slider drag.
    ///
    /// Ending a drag always publishes, flushing anything deferred.
    pub fn set_dragging(&self, dragging: bool) {
        let mut state = self.state.write();
        if dragging {
            state.selection.is_dragging = true;
            return;
        }

        state.selection.is_dragging = false;
        if state.pending {
            debug!("Publishing changes deferred during drag");
        }
        state.pending = false;
        state.revision += 1;

        drop(state);
        self.notify_subscribers();
    }

    pub fn set_playing(&self, playing: bool) {
        self.apply(|selection| {
            if selection.is_playing == playing {
                return false;
            }
            selection.is_playing = playing;
            true
        });
    }

    /// Snapshot of the current selection
    pub fn selection(&self) -> SelectionState {
        self.state.read().selection.clone()
    }

    /// Number of changes published so far
    pub fn revision(&self) -> u64 {
        self.state.read().revision
    }

    pub fn years(&self) -> OlympicYears {
        self.state.read().years.clone()
    }

    /// Sport catalog, [`ALL_SPORTS`] first
    pub fn sports(&self) -> Vec<String> {
        self.state.read().sports.clone()
    }

    /// Whether changes are waiting for the drag to end
    pub fn has_pending_changes(&self) -> bool {
        self.state.read().pending
    }

    /// Get current selection context
    pub fn get_context(&self) -> SelectionContext {
        let state = self.state.read();
        SelectionContext {
            selection: state.selection.clone(),
            revision: state.revision,
        }
    }

    /// Add a subscriber. Only a weak reference is kept.
    pub fn add_subscriber(&self, subscriber: Arc<dyn SelectionSubscriber>) {
        let mut subscribers = self.subscribers.write();
        subscribers.push(Arc::downgrade(&subscriber));
    }

    /// Apply a mutation; `mutate` returns whether anything changed
    fn apply(&self, mutate: impl FnOnce(&mut SelectionState) -> bool) {
        let mut state = self.state.write();
        if !mutate(&mut state.selection) {
            return;
        }

        if state.selection.is_dragging {
            state.pending = true;
            return;
        }
        state.revision += 1;

        drop(state);
        self.notify_subscribers();
    }

    /// Notify all subscribers of a selection change
    fn notify_subscribers(&self) {
        let context = self.get_context();

        // Collect first so subscribers may call back into the engine
        let live: Vec<Arc<dyn SelectionSubscriber>> = {
            let mut subscribers = self.subscribers.write();
            subscribers.retain(|weak| weak.strong_count() > 0);
            subscribers.iter().filter_map(Weak::upgrade).collect()
        };

        for subscriber in live {
            subscriber.on_selection_change(&context);
        }
    }
}

impl Default for SelectionEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    #[derive(Default)]
    struct Recorder {
        seen: Mutex<Vec<SelectionContext>>,
    }

    impl SelectionSubscriber for Recorder {
        fn on_selection_change(&self, context: &SelectionContext) {
            self.seen.lock().push(context.clone());
        }
    }

    impl Recorder {
        fn count(&self) -> usize {
            self.seen.lock().len()
        }

        fn last_year(&self) -> Option<i32> {
            self.seen.lock().last().map(|c| c.selection.selected_year)
        }
    }

    fn engine_with_recorder() -> (SelectionEngine, Arc<Recorder>) {
        let engine = SelectionEngine::new();
        engine.update_catalog(
            OlympicYears::new([1896, 1900, 1904, 1908, 1912, 1920]),
            vec!["Athletics".to_string(), "Rowing".to_string(), "Swimming".to_string()],
        );
        let recorder = Arc::new(Recorder::default());
        engine.add_subscriber(recorder.clone());
        (engine, recorder)
    }

    #[test]
    fn test_set_year_snaps_and_publishes() {
        let (engine, recorder) = engine_with_recorder();

        assert_eq!(engine.set_year(1906.5), Some(1908));
        assert_eq!(engine.selection().selected_year, 1908);
        assert_eq!(recorder.count(), 1);
        assert_eq!(recorder.last_year(), Some(1908));

        // Same snapped year: nothing to publish
        assert_eq!(engine.set_year(1907.0), Some(1908));
        assert_eq!(recorder.count(), 1);
    }

    #[test]
    fn test_set_year_without_catalog() {
        let engine = SelectionEngine::new();
        assert_eq!(engine.set_year(1900.0), None);
        assert_eq!(engine.selection().selected_year, ALL_YEARS);
    }

    #[test]
    fn test_toggle_year_twice_returns_to_all_years() {
        let (engine, recorder) = engine_with_recorder();

        engine.toggle_year(1904);
        assert_eq!(engine.selection().selected_year, 1904);
        engine.toggle_year(1904);
        assert_eq!(engine.selection().selected_year, ALL_YEARS);
        assert_eq!(recorder.count(), 2);
    }

    #[test]
    fn test_toggle_other_year_selects_it() {
        let (engine, _recorder) = engine_with_recorder();

        engine.toggle_year(1904);
        engine.toggle_year(1912);
        assert_eq!(engine.selection().selected_year, 1912);

        engine.clear_year();
        engine.toggle_year(1900);
        assert_eq!(engine.selection().selected_year, 1900);
    }

    #[test]
    fn test_dragging_defers_publication() {
        let (engine, recorder) = engine_with_recorder();

        engine.set_dragging(true);
        engine.set_year(1900.0);
        engine.set_year(1910.0);
        assert_eq!(engine.selection().selected_year, 1908);
        assert_eq!(recorder.count(), 0);
        assert!(engine.has_pending_changes());

        engine.set_dragging(false);
        assert_eq!(recorder.count(), 1);
        assert_eq!(recorder.last_year(), Some(1908));
        assert!(!engine.has_pending_changes());
    }

    #[test]
    fn test_revision_increments_per_publication() {
        let (engine, _recorder) = engine_with_recorder();
        let start = engine.revision();

        engine.set_statistic(Statistic::Age);
        engine.set_statistic(Statistic::Age);
        engine.set_sport("Rowing");

        assert_eq!(engine.revision(), start + 2);
    }

    #[test]
    fn test_sport_navigation_wraps_in_catalog_order() {
        let (engine, _recorder) = engine_with_recorder();

        assert_eq!(engine.next_sport(), "Athletics");
        assert_eq!(engine.next_sport(), "Rowing");
        assert_eq!(engine.next_sport(), "Swimming");
        assert_eq!(engine.next_sport(), ALL_SPORTS);
        assert_eq!(engine.previous_sport(), "Swimming");
    }

    #[test]
    fn test_sport_navigation_from_unknown_sport() {
        let (engine, _recorder) = engine_with_recorder();

        engine.set_sport("Curling");
        assert_eq!(engine.previous_sport(), "Swimming");
        engine.set_sport("Curling");
        assert_eq!(engine.next_sport(), ALL_SPORTS);
    }

    #[test]
    fn test_step_year() {
        let (engine, _recorder) = engine_with_recorder();

        assert_eq!(engine.step_year(true), Some(1896));
        assert_eq!(engine.step_year(true), Some(1900));
        assert_eq!(engine.step_year(false), Some(1896));
        assert_eq!(engine.step_year(false), None);
        assert_eq!(engine.selection().selected_year, 1896);
    }

    #[test]
    fn test_dropped_subscribers_are_pruned() {
        let (engine, recorder) = engine_with_recorder();
        let transient = Arc::new(Recorder::default());
        engine.add_subscriber(transient.clone());
        drop(transient);

        engine.toggle_year(1900);
        assert_eq!(recorder.count(), 1);
        assert_eq!(engine.subscribers.read().len(), 1);
    }

    #[test]
    fn test_update_catalog_resets_selection() {
        let (engine, _recorder) = engine_with_recorder();
        engine.toggle_year(1900);
        engine.set_sport("Rowing");

        engine.update_catalog(OlympicYears::new([2000]), Vec::new());
        assert_eq!(engine.selection(), SelectionState::default());
        assert_eq!(engine.sports(), vec![ALL_SPORTS.to_string()]);
    }
}
