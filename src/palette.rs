use ratatui::style::Color;

use crate::session::Intensity;

pub const SKY_BLUE: Color = Color::Rgb(0x87, 0xCE, 0xEB);
pub const LIGHT_SKY_BLUE: Color = Color::Rgb(0xE0, 0xF6, 0xFF);
pub const DEEP_SKY_BLUE: Color = Color::Rgb(0x46, 0x82, 0xB4);
pub const TITLE_BLUE: Color = Color::Rgb(0x15, 0x65, 0xC0);
pub const ICON_BLUE: Color = Color::Rgb(0x21, 0x96, 0xF3);
pub const MUTED: Color = Color::Rgb(0x75, 0x75, 0x75);

pub const GREEN: Color = Color::Rgb(0x4C, 0xAF, 0x50);
pub const ORANGE: Color = Color::Rgb(0xFF, 0x98, 0x00);
pub const RED: Color = Color::Rgb(0xF4, 0x43, 0x36);
pub const NEUTRAL_GRAY: Color = Color::Rgb(0x88, 0x88, 0x88);

pub const CALORIES: Color = Color::Rgb(0xFF, 0x57, 0x22);
pub const HEART_RATE: Color = Color::Rgb(0xE9, 0x1E, 0x63);
pub const OXYGEN: Color = ICON_BLUE;

/// Badge color for an intensity level
pub fn intensity_color(intensity: &Intensity) -> Color {
    match intensity {
        Intensity::Light => GREEN,
        Intensity::Moderate => ORANGE,
        Intensity::High => RED,
        Intensity::Unrecognized(_) => NEUTRAL_GRAY,
    }
}
