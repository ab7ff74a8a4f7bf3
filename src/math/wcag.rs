use std::fmt;

use serde::{Deserialize, Serialize};

use super::color::Color;

pub const AA_NORMAL: f64 = 4.5;
pub const AA_LARGE: f64 = 3.0;
pub const AAA_NORMAL: f64 = 7.0;
pub const AAA_LARGE: f64 = 4.5;
/// Level A has one threshold for every text size.
pub const A_ANY: f64 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum WcagLevel {
    A,
    AA,
    AAA,
}

impl fmt::Display for WcagLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            WcagLevel::A => "A",
            WcagLevel::AA => "AA",
            WcagLevel::AAA => "AAA",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextSize {
    Normal,
    Large,
}

/// Convert an sRGB channel (0-255) to linear light.
/// v <= 0.03928: v/12.92, else ((v+0.055)/1.055)^2.4
fn srgb_to_linear(channel: u8) -> f64 {
    let v = channel as f64 / 255.0;
    if v <= 0.03928 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance per WCAG 2.x.
/// L = 0.2126 * R + 0.7152 * G + 0.0722 * B (linear channels)
pub fn relative_luminance(color: Color) -> f64 {
    let (r, g, b) = color.to_rgb();
    0.2126 * srgb_to_linear(r) + 0.7152 * srgb_to_linear(g) + 0.0722 * srgb_to_linear(b)
}

/// ratio = (L1 + 0.05) / (L2 + 0.05) where L1 >= L2
pub fn ratio_from_luminance(l1: f64, l2: f64) -> f64 {
    let (lighter, darker) = if l1 > l2 { (l1, l2) } else { (l2, l1) };
    (lighter + 0.05) / (darker + 0.05)
}

/// WCAG contrast ratio between two colors, in [1, 21] and order-independent.
pub fn contrast_ratio(c1: Color, c2: Color) -> f64 {
    ratio_from_luminance(relative_luminance(c1), relative_luminance(c2))
}

pub fn threshold(level: WcagLevel, text_size: TextSize) -> f64 {
    match (level, text_size) {
        (WcagLevel::A, _) => A_ANY,
        (WcagLevel::AA, TextSize::Normal) => AA_NORMAL,
        (WcagLevel::AA, TextSize::Large) => AA_LARGE,
        (WcagLevel::AAA, TextSize::Normal) => AAA_NORMAL,
        (WcagLevel::AAA, TextSize::Large) => AAA_LARGE,
    }
}

pub fn meets_wcag(ratio: f64, level: WcagLevel, text_size: TextSize) -> bool {
    ratio >= threshold(level, text_size)
}

/// Strictest level the ratio satisfies at the given text size.
pub fn highest_level(ratio: f64, text_size: TextSize) -> Option<WcagLevel> {
    [WcagLevel::AAA, WcagLevel::AA, WcagLevel::A]
        .into_iter()
        .find(|&level| meets_wcag(ratio, level, text_size))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex(s: &str) -> Color {
        s.parse().unwrap()
    }

    fn ratio(a: &str, b: &str) -> f64 {
        contrast_ratio(hex(a), hex(b))
    }

    #[test]
    fn black_on_white_is_21() {
        assert!((ratio("#000000", "#ffffff") - 21.0).abs() < 1e-3);
    }

    #[test]
    fn white_on_white_is_1() {
        assert_eq!(ratio("#ffffff", "#ffffff"), 1.0);
    }

    #[test]
    fn gray_on_white() {
        // 4.54:1, the darkest gray that still passes AA on white
        assert!((ratio("#767676", "#ffffff") - 4.54).abs() < 0.01);
    }

    #[test]
    fn order_independent() {
        assert_eq!(ratio("#ff0000", "#ffffff"), ratio("#ffffff", "#ff0000"));
    }

    #[test]
    fn red_on_white() {
        assert!((ratio("#ff0000", "#ffffff") - 3.99).abs() < 0.01);
    }

    #[test]
    fn slate_on_white() {
        assert!((ratio("#1e293b", "#ffffff") - 14.62).abs() < 0.05);
    }

    #[test]
    fn luminance_extremes() {
        assert_eq!(relative_luminance(hex("#000000")), 0.0);
        assert!((relative_luminance(hex("#ffffff")) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn low_channels_use_linear_segment() {
        // 10/255 = 0.0392 <= 0.03928
        let l = relative_luminance(Color::new(10, 10, 10));
        assert!((l - (10.0 / 255.0) / 12.92).abs() < 1e-12);
    }

    #[test]
    fn thresholds_table() {
        assert!(meets_wcag(4.5, WcagLevel::AA, TextSize::Normal));
        assert!(!meets_wcag(4.49, WcagLevel::AA, TextSize::Normal));
        assert!(meets_wcag(3.0, WcagLevel::AA, TextSize::Large));
        assert!(!meets_wcag(2.99, WcagLevel::AA, TextSize::Large));
        assert!(meets_wcag(7.0, WcagLevel::AAA, TextSize::Normal));
        assert!(!meets_wcag(6.99, WcagLevel::AAA, TextSize::Normal));
        assert!(meets_wcag(4.5, WcagLevel::AAA, TextSize::Large));
        assert!(!meets_wcag(4.49, WcagLevel::AAA, TextSize::Large));
    }

    #[test]
    fn level_a_ignores_text_size() {
        for size in [TextSize::Normal, TextSize::Large] {
            assert!(meets_wcag(3.0, WcagLevel::A, size));
            assert!(!meets_wcag(2.99, WcagLevel::A, size));
        }
    }

    #[test]
    fn highest_level_picks_strictest() {
        assert_eq!(highest_level(21.0, TextSize::Normal), Some(WcagLevel::AAA));
        assert_eq!(highest_level(5.0, TextSize::Normal), Some(WcagLevel::AA));
        assert_eq!(highest_level(5.0, TextSize::Large), Some(WcagLevel::AAA));
        assert_eq!(highest_level(3.5, TextSize::Normal), Some(WcagLevel::A));
        assert_eq!(highest_level(2.0, TextSize::Large), None);
    }

    #[test]
    fn level_serializes_uppercase() {
        assert_eq!(serde_json::to_string(&WcagLevel::AAA).unwrap(), "\"AAA\"");
        assert_eq!(serde_json::to_string(&TextSize::Large).unwrap(), "\"large\"");
    }
}
