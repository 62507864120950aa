//! Keyboard shortcuts

use egui::{Context, Key};
use tracing::debug;

use olympia_core::{AnimationDriver, SelectionEngine, Timer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    /// Space
    TogglePlayback,
    /// Left arrow
    PreviousYear,
    /// Right arrow
    NextYear,
    /// Escape
    ClearYear,
}

impl Shortcut {
    pub const ALL: [Shortcut; 4] = [
        Shortcut::TogglePlayback,
        Shortcut::PreviousYear,
        Shortcut::NextYear,
        Shortcut::ClearYear,
    ];

    pub fn key(&self) -> Key {
        match self {
            Shortcut::TogglePlayback => Key::Space,
            Shortcut::PreviousYear => Key::ArrowLeft,
            Shortcut::NextYear => Key::ArrowRight,
            Shortcut::ClearYear => Key::Escape,
        }
    }

    /// Shortcuts pressed this frame, ignored while a text field has focus
    pub fn pressed(ctx: &Context) -> Vec<Shortcut> {
        if ctx.wants_keyboard_input() {
            return Vec::new();
        }
        ctx.input(|input| {
            Self::ALL
                .into_iter()
                .filter(|shortcut| input.key_pressed(shortcut.key()))
                .collect()
        })
    }

    /// Stepping through years by hand stops the animation first
    pub fn apply<T: Timer>(&self, engine: &SelectionEngine, driver: &mut AnimationDriver<T>) {
        debug!(shortcut = ?self, "Keyboard shortcut");
        match self {
            Shortcut::TogglePlayback => {
                driver.toggle(engine);
            }
            Shortcut::PreviousYear => {
                driver.pause(engine);
                engine.step_year(false);
            }
            Shortcut::NextYear => {
                driver.pause(engine);
                engine.step_year(true);
            }
            Shortcut::ClearYear => {
                driver.pause(engine);
                engine.clear_year();
            }
        }
    }
}
