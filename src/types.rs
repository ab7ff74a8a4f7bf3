use serde::{Deserialize, Serialize};

use crate::math::checker::{recommendations, ContrastResult};
use crate::math::color::Color;

/// Ratio rounded to 2 decimal places, as reported to callers.
pub fn round_ratio(ratio: f64) -> f64 {
    (ratio * 100.0).round() / 100.0
}

/// JSON body for a single contrast check.
/// `*_small` is normal-size text; `readable` means the pair passes level A.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContrastReport {
    pub contrast_ratio: f64,
    pub aa_large: bool,
    pub aa_small: bool,
    pub aaa_large: bool,
    pub aaa_small: bool,
    pub readable: bool,
    pub recommendations: Vec<String>,
}

impl From<ContrastResult> for ContrastReport {
    fn from(result: ContrastResult) -> Self {
        Self {
            contrast_ratio: round_ratio(result.ratio),
            aa_large: result.aa_large,
            aa_small: result.aa_normal,
            aaa_large: result.aaa_large,
            aaa_small: result.aaa_normal,
            readable: result.readable(),
            recommendations: recommendations(result.ratio)
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

/// One unordered pair of palette colors and its report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Combination {
    pub colors: [Color; 2],
    pub results: ContrastReport,
}

/// JSON body for a whole-palette check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaletteReport {
    pub combinations: Vec<Combination>,
    /// 0-100, mean of the per-pair scores.
    pub overall_score: u8,
    pub recommendations: Vec<String>,
}
