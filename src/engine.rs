use rayon::prelude::*;
use tracing::debug;

use crate::error::{ColorRole, PairError};
use crate::math::checker::{classify, PAGE_BACKGROUND};
use crate::math::color::Color;
use crate::math::color_parse::parse_css_color;
use crate::math::wcag::{AAA_LARGE, AAA_NORMAL, AA_LARGE, AA_NORMAL};
use crate::types::{Combination, ContrastReport, PaletteReport};

/// Parse every palette entry. Translucent entries are flattened over white.
pub fn parse_palette<S: AsRef<str>>(colors: &[S]) -> Result<Vec<Color>, PairError> {
    colors
        .iter()
        .enumerate()
        .map(|(i, value)| {
            parse_css_color(value.as_ref())
                .map(|c| c.flatten_over(PAGE_BACKGROUND))
                .map_err(|e| PairError::new(ColorRole::PaletteEntry(i), e))
        })
        .collect()
}

/// Check every unordered pair of a palette.
///
/// All entries are parsed before any pair is checked, so a bad entry fails
/// the whole call. Pairs are classified in parallel with Rayon; the output
/// keeps `(i, j)` order with `i < j`.
pub fn check_palette<S: AsRef<str>>(colors: &[S]) -> Result<PaletteReport, PairError> {
    let parsed = parse_palette(colors)?;
    Ok(check_parsed_palette(&parsed))
}

pub fn check_parsed_palette(colors: &[Color]) -> PaletteReport {
    let pairs: Vec<(usize, usize)> = (0..colors.len())
        .flat_map(|i| (i + 1..colors.len()).map(move |j| (i, j)))
        .collect();
    debug!(colors = colors.len(), pairs = pairs.len(), "checking palette");

    // Rayon's indexed collect preserves input order.
    let combinations: Vec<Combination> = pairs
        .par_iter()
        .map(|&(i, j)| Combination {
            colors: [colors[i], colors[j]],
            results: ContrastReport::from(classify(colors[i], colors[j])),
        })
        .collect();

    let overall_score = overall_score(&combinations);
    let recommendations = palette_recommendations(&combinations);
    debug!(
        overall_score,
        failing = recommendations.len().saturating_sub(1),
        "palette checked"
    );

    PaletteReport {
        combinations,
        overall_score,
        recommendations,
    }
}

/// Score one pair from its reported (2-decimal) ratio.
fn pair_score(ratio: f64) -> f64 {
    if ratio >= AAA_NORMAL {
        100.0
    } else if ratio >= AAA_LARGE {
        90.0
    } else if ratio >= AA_NORMAL {
        // unreachable while AAA large and AA normal share 4.5
        80.0
    } else if ratio >= AA_LARGE {
        70.0
    } else {
        (ratio * 10.0).round().clamp(0.0, 60.0)
    }
}

/// Mean pair score, rounded; 0 for a palette with no pairs.
pub fn overall_score(combinations: &[Combination]) -> u8 {
    if combinations.is_empty() {
        return 0;
    }
    let total: f64 = combinations
        .iter()
        .map(|c| pair_score(c.results.contrast_ratio))
        .sum();
    (total / combinations.len() as f64).round() as u8
}

pub fn palette_recommendations(combinations: &[Combination]) -> Vec<String> {
    let failing: Vec<String> = combinations
        .iter()
        .filter(|c| c.results.contrast_ratio < AA_LARGE)
        .map(|c| {
            format!(
                "Colors {} and {} have insufficient contrast",
                c.colors[0], c.colors[1]
            )
        })
        .collect();

    if failing.is_empty() {
        return failing;
    }
    let mut out = Vec::with_capacity(failing.len() + 1);
    out.push("Consider adjusting these color pairs:".to_string());
    out.extend(failing);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairs_are_unordered_and_ordered_by_index() {
        let report = check_palette(&["#000000", "#FFFFFF", "#777777"]).unwrap();
        assert_eq!(report.combinations.len(), 3);
        let hexes: Vec<(String, String)> = report
            .combinations
            .iter()
            .map(|c| (c.colors[0].to_hex(), c.colors[1].to_hex()))
            .collect();
        assert_eq!(
            hexes,
            vec![
                ("#000000".to_string(), "#FFFFFF".to_string()),
                ("#000000".to_string(), "#777777".to_string()),
                ("#FFFFFF".to_string(), "#777777".to_string()),
            ]
        );
    }

    #[test]
    fn black_and_white_scores_100() {
        let report = check_palette(&["#000", "#fff"]).unwrap();
        assert_eq!(report.overall_score, 100);
        assert!(report.recommendations.is_empty());
    }

    #[test]
    fn low_contrast_pair_is_flagged() {
        let report = check_palette(&["#777777", "#888888"]).unwrap();
        // ratio ~1.26 -> score round(12.6) = 13
        assert_eq!(report.overall_score, 13);
        assert_eq!(
            report.recommendations,
            vec![
                "Consider adjusting these color pairs:".to_string(),
                "Colors #777777 and #888888 have insufficient contrast".to_string(),
            ]
        );
    }

    #[test]
    fn score_bands() {
        assert_eq!(pair_score(7.0), 100.0);
        assert_eq!(pair_score(4.5), 90.0);
        assert_eq!(pair_score(3.0), 70.0);
        assert_eq!(pair_score(2.94), 29.0);
        assert_eq!(pair_score(1.0), 10.0);
    }

    #[test]
    fn mean_of_scores() {
        // black/white 100, black/red (5.25) 90, white/red (4.0) 70 -> 86.67 -> 87
        let report = check_palette(&["#000000", "#FFFFFF", "#FF0000"]).unwrap();
        assert_eq!(report.overall_score, 87);
    }

    #[test]
    fn single_color_has_no_pairs() {
        let report = check_palette(&["#123456"]).unwrap();
        assert!(report.combinations.is_empty());
        assert_eq!(report.overall_score, 0);
    }

    #[test]
    fn empty_palette() {
        let report = check_palette::<&str>(&[]).unwrap();
        assert_eq!(report.overall_score, 0);
        assert!(report.recommendations.is_empty());
    }

    #[test]
    fn bad_entry_fails_whole_call() {
        let err = check_palette(&["#000000", "#FFFFFF", "nope"]).unwrap_err();
        assert_eq!(err.role, ColorRole::PaletteEntry(2));
    }

    #[test]
    fn many_colors_stress_test() {
        let colors: Vec<String> = (0..40)
            .map(|i| format!("#{:02X}{:02X}{:02X}", i * 6, 255 - i * 6, i * 3))
            .collect();
        let report = check_palette(&colors).unwrap();
        assert_eq!(report.combinations.len(), 40 * 39 / 2);
        for combo in &report.combinations {
            assert!(combo.results.contrast_ratio >= 1.0 && combo.results.contrast_ratio <= 21.0);
        }
    }
}
