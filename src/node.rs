//! Node bindings (feature `node`). Errors surface as JS exceptions carrying
//! the Rust error's message.

use napi_derive::napi;
use tracing::warn;

use crate::engine;
use crate::format::{export_palette as export, ExportFormat, FormatOptions};
use crate::math::checker;
use crate::math::color_parse::parse_css_color;
use crate::types::{Combination, ContrastReport, PaletteReport};

/// Equivalent of ContrastReport
#[napi(object)]
#[derive(Debug, Clone)]
pub struct ContrastReportJs {
    pub contrast_ratio: f64,
    pub aa_large: bool,
    pub aa_small: bool,
    pub aaa_large: bool,
    pub aaa_small: bool,
    pub readable: bool,
    pub recommendations: Vec<String>,
}

#[napi(object)]
#[derive(Debug, Clone)]
pub struct CombinationJs {
    pub colors: Vec<String>,
    pub results: ContrastReportJs,
}

#[napi(object)]
#[derive(Debug, Clone)]
pub struct PaletteReportJs {
    pub combinations: Vec<CombinationJs>,
    pub overall_score: u32,
    pub recommendations: Vec<String>,
}

/// One color in every encoding.
#[napi(object)]
#[derive(Debug, Clone)]
pub struct ColorInfoJs {
    pub hex: String,
    /// [r, g, b]
    pub rgb: Vec<u32>,
    /// [h, s, l], rounded
    pub hsl: Vec<f64>,
    pub alpha: f64,
    /// "hex" | "rgb" | "rgba" | "hsl" | "hsla" | "named" | "other"
    pub format: String,
}

impl From<ContrastReport> for ContrastReportJs {
    fn from(r: ContrastReport) -> Self {
        Self {
            contrast_ratio: r.contrast_ratio,
            aa_large: r.aa_large,
            aa_small: r.aa_small,
            aaa_large: r.aaa_large,
            aaa_small: r.aaa_small,
            readable: r.readable,
            recommendations: r.recommendations,
        }
    }
}

impl From<Combination> for CombinationJs {
    fn from(c: Combination) -> Self {
        Self {
            colors: c.colors.iter().map(|c| c.to_hex()).collect(),
            results: c.results.into(),
        }
    }
}

impl From<PaletteReport> for PaletteReportJs {
    fn from(r: PaletteReport) -> Self {
        Self {
            combinations: r.combinations.into_iter().map(Into::into).collect(),
            overall_score: r.overall_score.into(),
            recommendations: r.recommendations,
        }
    }
}

fn reject(err: impl std::fmt::Display) -> napi::Error {
    warn!(error = %err, "rejected input");
    napi::Error::from_reason(err.to_string())
}

#[napi]
pub fn health_check() -> String {
    "palette-a11y-native ok".to_string()
}

#[napi]
pub fn check_contrast(text_color: String, bg_color: String) -> napi::Result<ContrastReportJs> {
    checker::check_contrast(&text_color, &bg_color)
        .map(Into::into)
        .map_err(reject)
}

#[napi]
pub fn check_palette(colors: Vec<String>) -> napi::Result<PaletteReportJs> {
    engine::check_palette(&colors).map(Into::into).map_err(reject)
}

#[napi]
pub fn convert_color(value: String) -> napi::Result<ColorInfoJs> {
    let parsed = parse_css_color(&value).map_err(reject)?;
    let (r, g, b) = parsed.color.to_rgb();
    let hsl = parsed.color.to_hsl();
    let format = serde_json::to_value(parsed.format)
        .ok()
        .and_then(|v| v.as_str().map(String::from))
        .unwrap_or_default();

    Ok(ColorInfoJs {
        hex: parsed.color.to_hex(),
        rgb: vec![r.into(), g.into(), b.into()],
        hsl: vec![hsl.h, hsl.s, hsl.l],
        alpha: parsed.alpha,
        format,
    })
}

#[napi]
pub fn export_palette(
    colors: Vec<String>,
    format: String,
    options_json: Option<String>,
) -> napi::Result<String> {
    let format: ExportFormat = format.parse().map_err(reject)?;
    let options = match options_json {
        Some(json) => FormatOptions::from_json(&json).map_err(reject)?,
        None => FormatOptions::default(),
    };
    let palette = engine::parse_palette(&colors).map_err(reject)?;
    export(&palette, format, &options).map_err(reject)
}
