mod engine;
mod state;
mod subscriber;
mod years;

pub use engine::SelectionEngine;
pub use state::{SelectionState, Statistic, ALL_SPORTS, ALL_YEARS};
pub use subscriber::SelectionSubscriber;
pub use years::OlympicYears;

/// Context passed to subscribers on every published change
#[derive(Debug, Clone)]
pub struct SelectionContext {
    pub selection: SelectionState,
    /// Incremented once per published change
    pub revision: u64,
}
