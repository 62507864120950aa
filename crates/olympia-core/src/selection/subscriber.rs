//! Selection subscriber trait

use super::SelectionContext;

/// Trait for components that re-render when the selection changes
pub trait SelectionSubscriber: Send + Sync {
    /// Called after every published selection change
    fn on_selection_change(&self, context: &SelectionContext);
}
