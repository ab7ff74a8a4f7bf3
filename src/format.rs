//! Palette export: CSS custom properties, SCSS, LESS, Tailwind config and JSON.

use std::fmt::Write as _;
use std::str::FromStr;

use serde::ser::{Serialize, Serializer};
use serde::Deserialize;
use tracing::debug;

use crate::error::FormatError;
use crate::math::color::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Css,
    Scss,
    Less,
    Tailwind,
    Json,
}

impl FromStr for ExportFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "css" => Ok(ExportFormat::Css),
            "scss" => Ok(ExportFormat::Scss),
            "less" => Ok(ExportFormat::Less),
            "tailwind" => Ok(ExportFormat::Tailwind),
            "json" => Ok(ExportFormat::Json),
            _ => Err(FormatError::UnknownFormat(s.to_string())),
        }
    }
}

/// Export options. Every field has a default, so a partial JSON object
/// (or `{}`) is a valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FormatOptions {
    pub variable_prefix: String,
    pub class_prefix: String,
    pub include_comments: bool,
    pub indent: String,
    pub line_ending: String,
    /// CSS only: append `-bg`, `-text` and `-border` utility classes.
    pub generate_classes: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            variable_prefix: "--color".to_string(),
            class_prefix: "color".to_string(),
            include_comments: true,
            indent: "  ".to_string(),
            line_ending: "\n".to_string(),
            generate_classes: false,
        }
    }
}

impl FormatOptions {
    pub fn from_json(json: &str) -> Result<Self, FormatError> {
        serde_json::from_str(json).map_err(FormatError::InvalidOptions)
    }
}

pub fn export_palette(
    colors: &[Color],
    format: ExportFormat,
    options: &FormatOptions,
) -> Result<String, FormatError> {
    debug!(?format, colors = colors.len(), "exporting palette");
    match format {
        ExportFormat::Css => Ok(format_css(colors, options)),
        ExportFormat::Scss => Ok(format_scss(colors, options)),
        ExportFormat::Less => Ok(format_less(colors, options)),
        ExportFormat::Tailwind => Ok(format_tailwind(colors, options)),
        ExportFormat::Json => format_json(colors, options),
    }
}

// `write!` into a String cannot fail; the results below are discarded.

fn format_css(colors: &[Color], o: &FormatOptions) -> String {
    let nl = &o.line_ending;
    let mut out = format!(":root {{{nl}");
    for (n, color) in numbered(colors) {
        if o.include_comments {
            let _ = write!(out, "{}/* Color {n} */{nl}", o.indent);
        }
        let _ = write!(out, "{}{}-{n}: {color};{nl}", o.indent, o.variable_prefix);
    }
    let _ = write!(out, "}}{nl}");

    if o.generate_classes {
        out.push_str(&css_classes(colors, o));
    }
    out
}

fn css_classes(colors: &[Color], o: &FormatOptions) -> String {
    let nl = &o.line_ending;
    let mut out = String::new();
    for (n, color) in numbered(colors) {
        let class = format!(".{}-{n}", o.class_prefix);
        if o.include_comments {
            let _ = write!(out, "/* Color {n} Utility Classes */{nl}");
        }
        for (suffix, property) in [
            ("bg", "background-color"),
            ("text", "color"),
            ("border", "border-color"),
        ] {
            let _ = write!(
                out,
                "{class}-{suffix} {{{nl}{}{property}: {color};{nl}}}{nl}",
                o.indent
            );
        }
    }
    out
}

fn format_scss(colors: &[Color], o: &FormatOptions) -> String {
    let nl = &o.line_ending;
    let mut out = String::new();
    for (n, color) in numbered(colors) {
        if o.include_comments {
            let _ = write!(out, "// Color {n}{nl}");
        }
        let _ = write!(out, "${}-{n}: {color};{nl}", o.variable_prefix);
    }

    let _ = write!(out, "{nl}$colors: ({nl}");
    for (n, color) in numbered(colors) {
        let _ = write!(out, "{}'color-{n}': {color},{nl}", o.indent);
    }
    let _ = write!(out, ");{nl}");
    out
}

fn format_less(colors: &[Color], o: &FormatOptions) -> String {
    let nl = &o.line_ending;
    let mut out = String::new();
    for (n, color) in numbered(colors) {
        if o.include_comments {
            let _ = write!(out, "// Color {n}{nl}");
        }
        let _ = write!(out, "@{}-{n}: {color};{nl}", o.variable_prefix);
    }
    out
}

fn format_tailwind(colors: &[Color], o: &FormatOptions) -> String {
    let nl = &o.line_ending;
    let i1 = &o.indent;
    let i2 = o.indent.repeat(2);
    let i3 = o.indent.repeat(3);

    let mut out = format!("module.exports = {{{nl}{i1}theme: {{{nl}{i2}colors: {{{nl}");
    for (n, color) in numbered(colors) {
        if o.include_comments {
            let _ = write!(out, "{i3}// Color {n}{nl}");
        }
        let _ = write!(out, "{i3}'{}-{n}': '{color}',{nl}", o.class_prefix);
    }
    let _ = write!(out, "{i2}}},{nl}{i1}}},{nl}}};{nl}");
    out
}

/// JSON object keyed `<class_prefix>-<n>`, in palette order.
struct NamedColors<'a> {
    prefix: &'a str,
    colors: &'a [Color],
}

impl Serialize for NamedColors<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(
            numbered(self.colors).map(|(n, color)| (format!("{}-{n}", self.prefix), color)),
        )
    }
}

fn format_json(colors: &[Color], o: &FormatOptions) -> Result<String, FormatError> {
    let named = NamedColors {
        prefix: &o.class_prefix,
        colors,
    };
    let json = if o.include_comments {
        serde_json::to_string_pretty(&named)
    } else {
        serde_json::to_string(&named)
    };
    json.map_err(FormatError::Serialize)
}

fn numbered(colors: &[Color]) -> impl Iterator<Item = (usize, &Color)> {
    colors.iter().enumerate().map(|(i, c)| (i + 1, c))
}
