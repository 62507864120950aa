//! User interface components for the Olympic athletes dashboard
//!
//! This crate provides the controls panel above the charts, the
//! keyboard shortcuts and the dashboard theme.

pub mod controls_panel;
pub mod shortcuts;
pub mod theme;

/// Re-export commonly used types
pub use controls_panel::{ControlsPanel, ControlsPanelConfig, SliderEvent};
pub use shortcuts::Shortcut;
pub use theme::{apply_theme, Theme};

// Common icon definitions
pub mod icons {
    pub const PLAY: &str = "▶";
    pub const PAUSE: &str = "⏸";
    pub const PREVIOUS: &str = "◀";
    pub const NEXT: &str = "▶";
}
