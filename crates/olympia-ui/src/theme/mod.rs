use egui::{Color32, Context, FontFamily, FontId, Rounding, Stroke, Style, TextStyle, Visuals};
use std::collections::BTreeMap;

use olympia_core::DashboardConfig;
use olympia_views::colors;

/// Theme configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub name: String,
    pub dark_mode: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            name: "Olympia Light".to_string(),
            dark_mode: false,
        }
    }
}

impl Theme {
    pub fn from_config(config: &DashboardConfig) -> Self {
        if config.dark_mode {
            Self {
                name: "Olympia Dark".to_string(),
                dark_mode: true,
            }
        } else {
            Self::default()
        }
    }

    /// Panel and plot background
    pub fn background(&self) -> Color32 {
        if self.dark_mode {
            Color32::from_rgb(31, 31, 31)
        } else {
            colors::BACKGROUND
        }
    }

    pub fn text_color(&self) -> Color32 {
        if self.dark_mode {
            Color32::from_rgb(220, 220, 220)
        } else {
            colors::FOREGROUND
        }
    }
}

/// Apply the dashboard theme: a light page with a gold accent
pub fn apply_theme(ctx: &Context, theme: &Theme) {
    let mut style = Style::default();
    let mut visuals = if theme.dark_mode { Visuals::dark() } else { Visuals::light() };

    let panel_bg = theme.background();
    let text_color = theme.text_color();
    let (widget_bg, hover_color, border) = if theme.dark_mode {
        (
            Color32::from_rgb(40, 40, 40),
            Color32::from_rgb(50, 50, 50),
            Color32::from_rgb(70, 70, 70),
        )
    } else {
        (Color32::WHITE, colors::LIGHT_GRAY, Color32::from_gray(200))
    };

    visuals.window_fill = panel_bg;
    visuals.panel_fill = panel_bg;
    visuals.faint_bg_color = widget_bg;
    visuals.override_text_color = Some(text_color);

    for widgets in [
        &mut visuals.widgets.noninteractive,
        &mut visuals.widgets.inactive,
        &mut visuals.widgets.hovered,
    ] {
        widgets.bg_stroke = Stroke::new(1.0, border);
        widgets.fg_stroke = Stroke::new(1.0, text_color);
        widgets.rounding = Rounding::same(4.0);
    }
    visuals.widgets.noninteractive.bg_fill = panel_bg;
    visuals.widgets.inactive.bg_fill = widget_bg;
    visuals.widgets.hovered.bg_fill = hover_color;

    visuals.widgets.active.bg_fill = colors::SECONDARY;
    visuals.widgets.active.bg_stroke = Stroke::new(1.0, colors::PRIMARY);
    visuals.widgets.active.fg_stroke = Stroke::new(1.0, text_color);
    visuals.widgets.active.rounding = Rounding::same(4.0);

    visuals.selection.bg_fill = colors::PRIMARY.linear_multiply(0.4);
    visuals.selection.stroke = Stroke::new(1.0, colors::PRIMARY);
    visuals.hyperlink_color = colors::PRIMARY;

    visuals.window_shadow.extrusion = 8.0;
    visuals.popup_shadow.extrusion = 4.0;

    style.spacing.item_spacing = egui::vec2(8.0, 4.0);
    style.spacing.button_padding = egui::vec2(8.0, 4.0);
    style.spacing.menu_margin = egui::Margin::same(8.0);

    let mut font_sizes = BTreeMap::new();
    font_sizes.insert(TextStyle::Small, FontId::new(11.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Body, FontId::new(13.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Button, FontId::new(13.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Heading, FontId::new(18.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Monospace, FontId::new(12.0, FontFamily::Monospace));
    style.text_styles = font_sizes;

    ctx.set_style(style);
    ctx.set_visuals(visuals);
}

/// Get the error color for the theme
pub fn error_color() -> Color32 {
    Color32::from_rgb(200, 60, 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_follows_config() {
        let light = Theme::from_config(&DashboardConfig::default());
        assert!(!light.dark_mode);
        assert_eq!(light.background(), colors::BACKGROUND);

        let config = DashboardConfig {
            dark_mode: true,
            ..DashboardConfig::default()
        };
        let dark = Theme::from_config(&config);
        assert!(dark.dark_mode);
        assert_eq!(dark.name, "Olympia Dark");
    }
}
