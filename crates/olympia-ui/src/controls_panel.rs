//! Controls panel shown above the charts
//! Statistic selector, year slider, sport navigation and playback

use egui::{Button, Color32, ComboBox, RichText, Slider, Ui};
use tracing::debug;

use olympia_core::{
    AnimationDriver, PlaybackState, SelectionEngine, SelectionState, Statistic, Timer, YearRange,
    ALL_SPORTS,
};
use olympia_views::ViewerContext;

use crate::icons;

/// Controls panel configuration
#[derive(Debug, Clone)]
pub struct ControlsPanelConfig {
    /// Minimum height of the panel
    pub height: f32,

    /// Width of the year slider
    pub slider_width: f32,

    /// Width of the sport selector
    pub sport_width: f32,

    pub play_color: Color32,
    pub pause_color: Color32,
}

impl Default for ControlsPanelConfig {
    fn default() -> Self {
        Self {
            height: 36.0,
            slider_width: 320.0,
            sport_width: 180.0,
            play_color: Color32::from_rgb(76, 175, 80),
            pause_color: Color32::from_rgb(220, 80, 80),
        }
    }
}

/// What the year slider reported during one frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SliderEvent {
    pub drag_started: bool,
    pub changed: bool,
    pub drag_released: bool,
    /// Slider value after the frame
    pub value: f64,
}

/// Controls panel widget
pub struct ControlsPanel {
    config: ControlsPanelConfig,

    /// Continuous slider value; the selection holds the snapped year
    slider_value: f64,
}

impl ControlsPanel {
    pub fn new(range: YearRange) -> Self {
        Self {
            config: ControlsPanelConfig::default(),
            slider_value: range.start as f64,
        }
    }

    pub fn with_config(mut self, config: ControlsPanelConfig) -> Self {
        self.config = config;
        self
    }

    pub fn slider_value(&self) -> f64 {
        self.slider_value
    }

    /// Show the controls panel UI
    pub fn ui<T: Timer>(&mut self, ui: &mut Ui, ctx: &ViewerContext, driver: &mut AnimationDriver<T>) {
        let engine = ctx.selection.as_ref();
        let selection = engine.selection();
        let range = ctx.year_range();

        ui.horizontal(|ui| {
            ui.set_min_height(self.config.height);

            self.statistic_selector(ui, engine, &selection);
            ui.separator();
            self.year_slider(ui, engine, &selection, range);
            ui.separator();
            self.sport_selector(ui, engine, &selection);
            ui.separator();
            self.playback_button(ui, engine, driver);
        });
    }

    fn statistic_selector(&self, ui: &mut Ui, engine: &SelectionEngine, selection: &SelectionState) {
        let mut statistic = selection.statistic;

        ui.label("Statistic:");
        ComboBox::from_id_source("statistic_selector")
            .selected_text(statistic.label())
            .show_ui(ui, |ui| {
                for option in Statistic::ALL {
                    ui.selectable_value(&mut statistic, option, option.label());
                }
            });

        if statistic != selection.statistic {
            engine.set_statistic(statistic);
        }
    }

    fn year_slider(&mut self, ui: &mut Ui, engine: &SelectionEngine, selection: &SelectionState, range: YearRange) {
        // Follow the selection unless the user is holding the handle
        if !selection.is_dragging {
            self.slider_value = slider_position(selection, range);
        }

        ui.label("Year:");
        ui.spacing_mut().slider_width = self.config.slider_width;
        let response = ui.add(
            Slider::new(&mut self.slider_value, range.start as f64..=range.end as f64)
                .step_by(1.0)
                .show_value(false),
        );

        let event = SliderEvent {
            drag_started: response.drag_started(),
            changed: response.changed(),
            drag_released: response.drag_released(),
            value: self.slider_value,
        };
        self.handle_slider(engine, event);

        ui.label(RichText::new(engine.selection().year_label()).strong());
    }

    /// Forward one frame of slider input to the selection.
    ///
    /// Year changes made between drag start and release are deferred by
    /// the engine and published together on release.
    pub fn handle_slider(&mut self, engine: &SelectionEngine, event: SliderEvent) {
        if event.drag_started {
            engine.set_dragging(true);
        }

        if event.changed {
            self.slider_value = event.value;
            if let Some(year) = engine.set_year(event.value) {
                debug!(year, value = event.value, "Year slider moved");
            }
        }

        if event.drag_released {
            engine.set_dragging(false);
        }
    }

    fn sport_selector(&self, ui: &mut Ui, engine: &SelectionEngine, selection: &SelectionState) {
        let sports = engine.sports();
        let mut sport = selection.sport.clone();

        ui.label("Sport:");
        if ui.button(icons::PREVIOUS).on_hover_text("Previous sport").clicked() {
            engine.previous_sport();
            return;
        }

        ComboBox::from_id_source("sport_selector")
            .width(self.config.sport_width)
            .selected_text(selection.sport_label())
            .show_ui(ui, |ui| {
                for option in &sports {
                    ui.selectable_value(&mut sport, option.clone(), sport_option_label(option));
                }
            });

        if ui.button(icons::NEXT).on_hover_text("Next sport").clicked() {
            engine.next_sport();
            return;
        }

        if sport != selection.sport {
            engine.set_sport(sport);
        }
    }

    fn playback_button<T: Timer>(&self, ui: &mut Ui, engine: &SelectionEngine, driver: &mut AnimationDriver<T>) {
        let (icon, hover_text, fill) = if driver.is_running() {
            (icons::PAUSE, "Pause (Space)", self.config.pause_color)
        } else {
            (icons::PLAY, "Play (Space)", self.config.play_color)
        };

        let button = ui.add_sized([36.0, 28.0], Button::new(RichText::new(icon).size(18.0)).fill(fill));
        if button.on_hover_text(hover_text).clicked() {
            let state = driver.toggle(engine);
            debug!(?state, "Playback toggled from controls");
            if state == PlaybackState::Running {
                ui.ctx().request_repaint();
            }
        }
    }
}

/// Slider value for the current selection; "all years" parks it at the start
pub fn slider_position(selection: &SelectionState, range: YearRange) -> f64 {
    if selection.is_all_years() {
        range.start as f64
    } else {
        selection.selected_year as f64
    }
}

fn sport_option_label(sport: &str) -> &str {
    if sport == ALL_SPORTS {
        "All sports"
    } else {
        sport
    }
}
