//! Error types for color parsing, contrast checks and palette export.

use std::fmt;

use thiserror::Error;

/// Why a string was rejected as a color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatIssue {
    Empty,
    /// Hex digit count other than 3 or 6.
    Length(usize),
    InvalidChar { ch: char, position: usize },
    /// CSS keyword with no concrete color (`transparent`, `currentColor`, ...).
    Keyword,
    Unrecognized,
}

impl fmt::Display for FormatIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatIssue::Empty => write!(f, "empty string"),
            FormatIssue::Length(n) => write!(f, "expected 3 or 6 hex digits, got {n}"),
            FormatIssue::InvalidChar { ch, position } => {
                write!(f, "invalid hex character {ch:?} at position {position}")
            }
            FormatIssue::Keyword => write!(f, "keyword does not name a concrete color"),
            FormatIssue::Unrecognized => write!(f, "unrecognized color syntax"),
        }
    }
}

/// RGB channel named in an [`ColorError::OutOfRange`] error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
        })
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ColorError {
    #[error("invalid color {input:?}: {issue}")]
    InvalidFormat { input: String, issue: FormatIssue },

    #[error("{channel} channel out of range: {value} (expected 0-255)")]
    OutOfRange { channel: Channel, value: i64 },

    #[error("{name} out of range: {value} (expected {min} to {max})")]
    ParameterOutOfRange {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

impl ColorError {
    pub(crate) fn invalid_format(input: &str, issue: FormatIssue) -> Self {
        ColorError::InvalidFormat {
            input: input.to_string(),
            issue,
        }
    }
}

/// Which input of a contrast or palette check failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorRole {
    Text,
    Background,
    PaletteEntry(usize),
}

impl fmt::Display for ColorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorRole::Text => write!(f, "text color"),
            ColorRole::Background => write!(f, "background color"),
            ColorRole::PaletteEntry(i) => write!(f, "palette entry {i}"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
#[error("{role}: {source}")]
pub struct PairError {
    pub role: ColorRole,
    pub source: ColorError,
}

impl PairError {
    pub fn new(role: ColorRole, source: ColorError) -> Self {
        Self { role, source }
    }
}

#[derive(Error, Debug)]
pub enum FormatError {
    #[error("unknown export format: {0}")]
    UnknownFormat(String),

    #[error("invalid export options: {0}")]
    InvalidOptions(#[source] serde_json::Error),

    #[error("failed to serialize palette: {0}")]
    Serialize(#[source] serde_json::Error),
}
