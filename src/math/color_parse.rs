use serde::Serialize;

use crate::error::{Channel, ColorError, FormatIssue};

use super::color::Color;
use super::composite::composite_over;
use super::hex::parse_hex;

/// Syntax a CSS color string was written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorFormat {
    Hex,
    Rgb,
    Rgba,
    Hsl,
    Hsla,
    Named,
    Other,
}

/// A parsed CSS color: the opaque color plus its alpha (0.0-1.0).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CssColor {
    pub color: Color,
    pub alpha: f64,
    pub format: ColorFormat,
}

impl CssColor {
    pub fn is_opaque(&self) -> bool {
        self.alpha >= 0.999
    }

    /// The color as it appears drawn over `backdrop`.
    pub fn flatten_over(&self, backdrop: Color) -> Color {
        if self.is_opaque() {
            self.color
        } else {
            composite_over(self.color, backdrop, self.alpha)
        }
    }
}

/// Parse any CSS color value.
/// Handles: hex (3/4/6/8 digit), rgb(a), hsl(a), named colors and the other
/// syntaxes csscolorparser understands.
/// Rejects: transparent, inherit, currentColor, initial, unset, and integer
/// rgb() channels outside 0-255.
pub fn parse_css_color(value: &str) -> Result<CssColor, ColorError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ColorError::invalid_format(value, FormatIssue::Empty));
    }

    let lower = trimmed.to_ascii_lowercase();
    if matches!(
        lower.as_str(),
        "transparent" | "inherit" | "currentcolor" | "initial" | "unset"
    ) {
        return Err(ColorError::invalid_format(value, FormatIssue::Keyword));
    }

    // Plain hex goes through the strict parser; only #RGBA / #RRGGBBAA
    // (which carry alpha) fall through to csscolorparser.
    match parse_hex(trimmed) {
        Ok(color) => {
            return Ok(CssColor {
                color,
                alpha: 1.0,
                format: ColorFormat::Hex,
            })
        }
        Err(err) => {
            if let Some(raw) = trimmed.strip_prefix('#') {
                let digits = raw.chars().count();
                if (digits != 4 && digits != 8) || !raw.chars().all(|c| c.is_ascii_hexdigit()) {
                    return Err(err);
                }
            }
        }
    }

    let format = if lower.starts_with('#') {
        ColorFormat::Hex
    } else if lower.starts_with("rgba(") {
        ColorFormat::Rgba
    } else if lower.starts_with("rgb(") {
        ColorFormat::Rgb
    } else if lower.starts_with("hsla(") {
        ColorFormat::Hsla
    } else if lower.starts_with("hsl(") {
        ColorFormat::Hsl
    } else if lower.chars().all(|c| c.is_ascii_alphabetic()) {
        ColorFormat::Named
    } else {
        ColorFormat::Other
    };

    if matches!(format, ColorFormat::Rgb | ColorFormat::Rgba) {
        check_rgb_channels(&lower)?;
    }

    let parsed = trimmed
        .parse::<csscolorparser::Color>()
        .map_err(|_| ColorError::invalid_format(value, FormatIssue::Unrecognized))?;
    let [r, g, b, a] = parsed.to_rgba8();

    Ok(CssColor {
        color: Color::new(r, g, b),
        alpha: a as f64 / 255.0,
        format,
    })
}

/// Syntax of `value` if it parses as a color, `None` otherwise.
pub fn detect_format(value: &str) -> Option<ColorFormat> {
    parse_css_color(value).ok().map(|c| c.format)
}

/// Integer channels in `rgb()`/`rgba()` must lie in 0-255. Percentages and
/// fractional values are left to csscolorparser.
fn check_rgb_channels(lower: &str) -> Result<(), ColorError> {
    let Some(inner) = lower
        .split_once('(')
        .and_then(|(_, rest)| rest.strip_suffix(')'))
    else {
        return Ok(());
    };

    let channels = inner
        .split(|c: char| c == ',' || c == '/' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .take(3);

    for (channel, token) in [Channel::Red, Channel::Green, Channel::Blue]
        .into_iter()
        .zip(channels)
    {
        if let Ok(value) = token.parse::<i64>() {
            if !(0..=255).contains(&value) {
                return Err(ColorError::OutOfRange { channel, value });
            }
        }
    }
    Ok(())
}
