//! Dashboard palette and per-country bar colours

use ahash::AHashMap;
use egui::Color32;
use once_cell::sync::Lazy;

/// Text, average marks and the selected point
pub const FOREGROUND: Color32 = Color32::from_rgb(0x11, 0x11, 0x11);
/// Gold accent: maximum marks, line points, fallback bar colour
pub const PRIMARY: Color32 = Color32::from_rgb(0xda, 0xa5, 0x20);
/// Pale gold: minimum marks
pub const SECONDARY: Color32 = Color32::from_rgb(0xf0, 0xde, 0xa3);
/// Range bars and war bands
pub const LIGHT_GRAY: Color32 = Color32::from_rgb(0xf0, 0xf0, 0xf0);
pub const BACKGROUND: Color32 = Color32::from_rgb(0xf4, 0xf4, 0xf4);

pub const GOLD: Color32 = Color32::from_rgb(0xff, 0xd7, 0x00);
pub const SILVER: Color32 = Color32::from_rgb(0xc0, 0xc0, 0xc0);
pub const BRONZE: Color32 = Color32::from_rgb(0xcd, 0x7f, 0x32);

static COUNTRY_COLORS: Lazy<AHashMap<&'static str, Color32>> = Lazy::new(|| {
    [
        ("United States", 0x3C3B6E),
        ("Soviet Union", 0xCC0000),
        ("Russia", 0x0039A6),
        ("Germany", 0xFFCC00),
        ("East Germany", 0x000000),
        ("West Germany", 0xFFCC00),
        ("China", 0xDE2910),
        ("Great Britain", 0x012169),
        ("Japan", 0xBC002D),
        ("France", 0x0055A4),
        ("Italy", 0x008C45),
        ("Australia", 0x00843D),
        ("Canada", 0xFF0000),
        ("South Korea", 0x0047A0),
        ("Brazil", 0x009C3B),
        ("Netherlands", 0xFF9B00),
        ("Sweden", 0x006AA7),
        ("Hungary", 0xCD2A3E),
        ("Romania", 0x002B7F),
        ("Cuba", 0x0018A8),
        ("Finland", 0x002F6C),
        ("Norway", 0xBA0C2F),
        ("Spain", 0xAA151B),
        ("Poland", 0xDC143C),
        ("Bulgaria", 0x00966E),
        ("Switzerland", 0xFF0000),
        ("New Zealand", 0x000000),
        ("Denmark", 0xC8102E),
        ("Ukraine", 0x0057B7),
        ("Belgium", 0x000000),
        ("Greece", 0x0D5EAF),
        ("Austria", 0xED2939),
        ("Turkey", 0xE30A17),
    ]
    .into_iter()
    .map(|(team, rgb)| (team, hex(rgb)))
    .collect()
});

const fn hex(rgb: u32) -> Color32 {
    Color32::from_rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
}

/// Bar colour for a team; teams without a national colour get [`PRIMARY`]
pub fn country_color(team: &str) -> Color32 {
    COUNTRY_COLORS.get(team).copied().unwrap_or(PRIMARY)
}

/// Scale a colour's alpha by `opacity` in `[0, 1]`
pub fn with_opacity(color: Color32, opacity: f32) -> Color32 {
    color.gamma_multiply(opacity.clamp(0.0, 1.0))
}

/// Opacity of a per-year mark
pub fn mark_opacity(is_active: bool) -> f32 {
    if is_active {
        1.0
    } else {
        0.3
    }
}
