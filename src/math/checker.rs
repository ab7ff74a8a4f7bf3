use serde::Serialize;

use crate::error::{ColorRole, PairError};
use crate::types::ContrastReport;

use super::color::{Color, WHITE};
use super::color_parse::parse_css_color;
use super::wcag::{
    meets_wcag, ratio_from_luminance, relative_luminance, TextSize, WcagLevel, AAA_LARGE,
    AA_LARGE, AA_NORMAL,
};

/// Backdrop a translucent background is composited against.
pub const PAGE_BACKGROUND: Color = WHITE;

/// Contrast ratio of a color pair plus its pass/fail flags.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ContrastResult {
    pub ratio: f64,
    pub aa_normal: bool,
    pub aa_large: bool,
    pub aaa_normal: bool,
    pub aaa_large: bool,
}

impl ContrastResult {
    pub fn from_ratio(ratio: f64) -> Self {
        Self {
            ratio,
            aa_normal: meets_wcag(ratio, WcagLevel::AA, TextSize::Normal),
            aa_large: meets_wcag(ratio, WcagLevel::AA, TextSize::Large),
            aaa_normal: meets_wcag(ratio, WcagLevel::AAA, TextSize::Normal),
            aaa_large: meets_wcag(ratio, WcagLevel::AAA, TextSize::Large),
        }
    }

    pub fn passes(&self, level: WcagLevel, text_size: TextSize) -> bool {
        match (level, text_size) {
            // A shares the AA large threshold (3:1)
            (WcagLevel::A, _) | (WcagLevel::AA, TextSize::Large) => self.aa_large,
            (WcagLevel::AA, TextSize::Normal) => self.aa_normal,
            (WcagLevel::AAA, TextSize::Normal) => self.aaa_normal,
            (WcagLevel::AAA, TextSize::Large) => self.aaa_large,
        }
    }

    /// Readable at all: passes level A.
    pub fn readable(&self) -> bool {
        self.aa_large
    }
}

/// Classify a color pair. Luminance is computed once per color and the
/// ratio once; every flag is derived from that single ratio.
pub fn classify(c1: Color, c2: Color) -> ContrastResult {
    let l1 = relative_luminance(c1);
    let l2 = relative_luminance(c2);
    ContrastResult::from_ratio(ratio_from_luminance(l1, l2))
}

/// Human-readable advice for a ratio, weakest failure last.
pub fn recommendations(ratio: f64) -> Vec<&'static str> {
    let mut out = Vec::new();
    if ratio < AA_LARGE {
        out.push("Increase contrast for better readability");
    }
    if ratio < AA_NORMAL {
        out.push("Not suitable for body text");
    }
    if ratio < AAA_LARGE {
        out.push("Consider using larger text sizes");
    }
    out
}

/// Check a text/background pair given as CSS color strings.
///
/// Translucent colors are flattened first: the background over
/// [`PAGE_BACKGROUND`], then the text over the effective background.
/// Either both colors parse and a full report comes back, or the error
/// names the input that failed.
pub fn check_contrast(text_color: &str, bg_color: &str) -> Result<ContrastReport, PairError> {
    let text = parse_css_color(text_color).map_err(|e| PairError::new(ColorRole::Text, e))?;
    let bg = parse_css_color(bg_color).map_err(|e| PairError::new(ColorRole::Background, e))?;

    // Step 1: composite bg alpha against page bg
    let effective_bg = bg.flatten_over(PAGE_BACKGROUND);
    // Step 2: composite text alpha against effective bg
    let effective_fg = text.flatten_over(effective_bg);

    Ok(ContrastReport::from(classify(effective_fg, effective_bg)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ColorError, FormatIssue};

    fn hex(s: &str) -> Color {
        s.parse().unwrap()
    }

    // --- classify tests ---

    #[test]
    fn black_on_white_passes_all() {
        let r = classify(hex("#000000"), hex("#ffffff"));
        assert!((r.ratio - 21.0).abs() < 1e-3);
        assert!(r.aa_normal && r.aa_large && r.aaa_normal && r.aaa_large);
    }

    #[test]
    fn adjacent_grays_fail_aa_normal() {
        let r = classify(hex("#777777"), hex("#888888"));
        assert!(r.ratio < 4.5);
        assert!(!r.aa_normal);
        assert!(!r.readable());
    }

    #[test]
    fn classify_matches_threshold_table() {
        // #767676 on white ~= 4.54: AA normal yes, AAA normal no
        let r = classify(hex("#767676"), hex("#ffffff"));
        assert!(r.aa_normal);
        assert!(r.aa_large);
        assert!(!r.aaa_normal);
        assert!(r.aaa_large);
        assert!(r.passes(WcagLevel::A, TextSize::Normal));
        assert!(!r.passes(WcagLevel::AAA, TextSize::Normal));
    }

    #[test]
    fn from_ratio_boundaries() {
        let r = ContrastResult::from_ratio(3.0);
        assert!(r.aa_large && !r.aa_normal && !r.aaa_large);
        let r = ContrastResult::from_ratio(7.0);
        assert!(r.aa_normal && r.aaa_normal);
    }

    // --- recommendations tests ---

    #[test]
    fn high_ratio_has_no_recommendations() {
        assert!(recommendations(7.0).is_empty());
        assert!(recommendations(4.5).is_empty());
    }

    #[test]
    fn mid_ratio_warns_about_body_text() {
        assert_eq!(
            recommendations(3.5),
            vec!["Not suitable for body text", "Consider using larger text sizes"]
        );
    }

    #[test]
    fn low_ratio_gets_every_recommendation() {
        assert_eq!(recommendations(1.5).len(), 3);
    }

    // --- check_contrast tests ---

    #[test]
    fn report_rounds_ratio_to_2_decimals() {
        let report = check_contrast("#767676", "#ffffff").unwrap();
        assert_eq!(report.contrast_ratio, 4.54);
        assert!(report.aa_small);
        assert!(!report.aaa_small);
    }

    #[test]
    fn semi_transparent_text_composited() {
        // White text at 50% on black -> effective #808080, ~5.3:1
        let report = check_contrast("rgba(255, 255, 255, 0.5)", "#000000").unwrap();
        assert!(report.contrast_ratio > 4.0 && report.contrast_ratio < 6.0);
    }

    #[test]
    fn semi_transparent_bg_composited_against_page() {
        // 50% black over the white page -> gray bg, black text ~5.3:1
        let report = check_contrast("#000000", "rgba(0, 0, 0, 0.5)").unwrap();
        assert!(report.contrast_ratio > 4.0 && report.contrast_ratio < 6.0);
    }

    #[test]
    fn bad_text_color_names_text() {
        let err = check_contrast("#12345", "#ffffff").unwrap_err();
        assert_eq!(err.role, ColorRole::Text);
        assert!(matches!(
            err.source,
            ColorError::InvalidFormat { issue: FormatIssue::Length(5), .. }
        ));
    }

    #[test]
    fn bad_bg_color_names_background() {
        let err = check_contrast("#000000", "").unwrap_err();
        assert_eq!(err.role, ColorRole::Background);
    }
}
