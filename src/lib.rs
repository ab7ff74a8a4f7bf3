//! Color accessibility engine for palette generation: hex/RGB/HSL
//! conversion, WCAG contrast ratios and compliance classification,
//! palette-wide audits and palette export.

#[cfg(feature = "node")]
#[macro_use]
extern crate napi_derive;

pub mod engine;
pub mod error;
pub mod format;
pub mod math;
pub mod types;

#[cfg(feature = "node")]
pub mod node;

pub use engine::check_palette;
pub use error::{Channel, ColorError, ColorRole, FormatError, FormatIssue, PairError};
pub use format::{export_palette, ExportFormat, FormatOptions};
pub use math::adjust::{adjust_brightness, analogous, complementary};
pub use math::checker::{check_contrast, classify, recommendations, ContrastResult};
pub use math::color::{Color, Hsl};
pub use math::color_parse::{detect_format, parse_css_color, ColorFormat, CssColor};
pub use math::hex::parse_hex;
pub use math::wcag::{
    contrast_ratio, highest_level, meets_wcag, relative_luminance, TextSize, WcagLevel,
};
pub use types::{Combination, ContrastReport, PaletteReport};

/// `Color::to_rgb` as a free function.
pub fn to_rgb(color: Color) -> (u8, u8, u8) {
    color.to_rgb()
}

pub fn from_rgb(r: i32, g: i32, b: i32) -> Result<Color, ColorError> {
    Color::from_rgb(r, g, b)
}

pub fn to_hsl(color: Color) -> Hsl {
    color.to_hsl()
}

pub fn from_hsl(h: f64, s: f64, l: f64) -> Color {
    Color::from_hsl(h, s, l)
}
