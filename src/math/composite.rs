use super::color::Color;

/// Alpha-composite a foreground color over a background color.
/// formula per channel: result = fg * alpha + bg * (1 - alpha)
/// Alpha is clamped to [0, 1].
pub fn composite_over(fg: Color, bg: Color, alpha: f64) -> Color {
    let alpha = if alpha.is_nan() { 1.0 } else { alpha.clamp(0.0, 1.0) };
    let (fr, fg_g, fb) = fg.to_rgb();
    let (br, bg_g, bb) = bg.to_rgb();

    let blend = |f: u8, b: u8| -> u8 {
        let result = f as f64 * alpha + b as f64 * (1.0 - alpha);
        result.round().clamp(0.0, 255.0) as u8
    };

    Color::new(blend(fr, br), blend(fg_g, bg_g), blend(fb, bb))
}
