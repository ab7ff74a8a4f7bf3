use crate::error::ColorError;

use super::color::Color;

/// Lighten (factor > 0) or darken (factor < 0) every channel.
/// A positive factor moves each channel toward 255 by that fraction of the
/// remaining headroom, a negative one toward 0.
pub fn adjust_brightness(color: Color, factor: f64) -> Result<Color, ColorError> {
    check_range("brightness factor", factor, -1.0, 1.0)?;

    let shift = |c: u8| -> u8 {
        let v = c as f64;
        let v = if factor > 0.0 {
            v + (255.0 - v) * factor
        } else {
            v + v * factor
        };
        v.round().clamp(0.0, 255.0) as u8
    };

    let (r, g, b) = color.to_rgb();
    Ok(Color::new(shift(r), shift(g), shift(b)))
}

/// Rotate the hue by 180 degrees.
pub fn complementary(color: Color) -> Color {
    rotate_hue(color, 180.0)
}

/// `count` colors spaced `angle` degrees apart around the input's hue.
/// The input itself comes first.
pub fn analogous(color: Color, count: usize, angle: f64) -> Result<Vec<Color>, ColorError> {
    check_range("analogous count", count as f64, 2.0, 5.0)?;
    check_range("analogous angle", angle, 15.0, 45.0)?;

    let start = -((count - 1) as f64 * angle) / 2.0;
    let mut colors = Vec::with_capacity(count);
    colors.push(color);
    colors.extend((1..count).map(|i| rotate_hue(color, start + i as f64 * angle)));
    Ok(colors)
}

fn rotate_hue(color: Color, degrees: f64) -> Color {
    let hsl = color.to_hsl_precise();
    Color::from_hsl(hsl.h + degrees, hsl.s, hsl.l)
}

fn check_range(name: &'static str, value: f64, min: f64, max: f64) -> Result<(), ColorError> {
    if value.is_nan() || value < min || value > max {
        return Err(ColorError::ParameterOutOfRange { name, value, min, max });
    }
    Ok(())
}
