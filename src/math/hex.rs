use crate::error::{ColorError, FormatIssue};

use super::color::Color;

/// Parse `#RGB` or `#RRGGBB` (leading `#` optional, any case).
/// 3-digit shorthand expands by digit duplication: `#F00` -> `#FF0000`.
pub fn parse_hex(input: &str) -> Result<Color, ColorError> {
    let raw = input.strip_prefix('#').unwrap_or(input);
    if raw.is_empty() {
        return Err(ColorError::invalid_format(input, FormatIssue::Empty));
    }

    let count = raw.chars().count();
    if count != 3 && count != 6 {
        return Err(ColorError::invalid_format(input, FormatIssue::Length(count)));
    }

    let offset = input.len() - raw.len();
    let mut digits = [0u8; 6];
    for (i, ch) in raw.chars().enumerate() {
        let Some(d) = ch.to_digit(16) else {
            let issue = FormatIssue::InvalidChar {
                ch,
                position: offset + i,
            };
            return Err(ColorError::invalid_format(input, issue));
        };
        digits[i] = d as u8;
    }

    let [r, g, b] = if count == 3 {
        [
            digits[0] * 17,
            digits[1] * 17,
            digits[2] * 17,
        ]
    } else {
        [
            digits[0] * 16 + digits[1],
            digits[2] * 16 + digits[3],
            digits[4] * 16 + digits[5],
        ]
    };
    Ok(Color::new(r, g, b))
}

/// Canonical `#RRGGBB`, uppercase.
pub fn format_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{:02X}{:02X}{:02X}", r, g, b)
}
