use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Channel, ColorError};

use super::hex::{format_hex, parse_hex};

/// An opaque sRGB color.
///
/// Hex, RGB and HSL are three encodings of the same value; the canonical
/// form is `#RRGGBB` in uppercase, which is also how the color serializes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
}

/// Hue in degrees [0, 360), saturation and lightness in percent [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

pub const BLACK: Color = Color::new(0, 0, 0);
pub const WHITE: Color = Color::new(255, 255, 255);

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_rgb(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Build from integer channels; any channel outside 0-255 is an error.
    pub fn from_rgb(r: i32, g: i32, b: i32) -> Result<Self, ColorError> {
        Ok(Self {
            r: channel(Channel::Red, r)?,
            g: channel(Channel::Green, g)?,
            b: channel(Channel::Blue, b)?,
        })
    }

    pub fn to_hex(self) -> String {
        format_hex(self.r, self.g, self.b)
    }

    /// HSL with every component rounded half-up to an integer, as CSS
    /// `hsl()` notation shows it. A hue that rounds to 360 wraps to 0.
    pub fn to_hsl(self) -> Hsl {
        let Hsl { h, s, l } = self.to_hsl_precise();
        Hsl {
            h: round_half_up(h) % 360.0,
            s: round_half_up(s),
            l: round_half_up(l),
        }
    }

    /// Unrounded HSL; converting this back with [`Color::from_hsl`] gives
    /// the original color.
    pub fn to_hsl_precise(self) -> Hsl {
        let r = self.r as f64 / 255.0;
        let g = self.g as f64 / 255.0;
        let b = self.b as f64 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        // achromatic
        if self.r == self.g && self.g == self.b {
            return Hsl { h: 0.0, s: 0.0, l: l * 100.0 };
        }

        let d = max - min;
        let s = if l > 0.5 { d / (2.0 - max - min) } else { d / (max + min) };
        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        Hsl {
            h: h * 60.0,
            s: s * 100.0,
            l: l * 100.0,
        }
    }

    /// Lenient constructor: hue wraps modulo 360, saturation and lightness
    /// clamp to [0, 100], non-finite components count as 0. Never fails.
    pub fn from_hsl(h: f64, s: f64, l: f64) -> Self {
        let h = (if h.is_finite() { h.rem_euclid(360.0) } else { 0.0 }) / 360.0;
        let s = percent(s) / 100.0;
        let l = percent(l) / 100.0;

        if s == 0.0 {
            let v = to_channel(l);
            return Self::new(v, v, v);
        }

        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;

        Self::new(
            to_channel(hue_to_rgb(p, q, h + 1.0 / 3.0)),
            to_channel(hue_to_rgb(p, q, h)),
            to_channel(hue_to_rgb(p, q, h - 1.0 / 3.0)),
        )
    }

    pub fn from_hsl_value(hsl: Hsl) -> Self {
        Self::from_hsl(hsl.h, hsl.s, hsl.l)
    }
}

fn channel(channel: Channel, value: i32) -> Result<u8, ColorError> {
    u8::try_from(value).map_err(|_| ColorError::OutOfRange {
        channel,
        value: value.into(),
    })
}

fn percent(v: f64) -> f64 {
    if v.is_nan() {
        0.0
    } else {
        v.clamp(0.0, 100.0)
    }
}

fn to_channel(v: f64) -> u8 {
    round_half_up(v * 255.0).clamp(0.0, 255.0) as u8
}

fn round_half_up(v: f64) -> f64 {
    (v + 0.5).floor()
}

fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        return p + (q - p) * 6.0 * t;
    }
    if t < 1.0 / 2.0 {
        return q;
    }
    if t < 2.0 / 3.0 {
        return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
    }
    p
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex(s)
    }
}

impl TryFrom<String> for Color {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        parse_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}
