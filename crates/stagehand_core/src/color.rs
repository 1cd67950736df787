use glam::Vec4;

/// Parses an authored hex color (`RRGGBB` or `RRGGBBAA`, optional leading `#`)
/// into linear RGBA components in `[0, 1]`.
///
/// Returns `None` for anything else.
#[must_use]
pub fn parse_hex_color(hex: &str) -> Option<Vec4> {
    let digits = hex.trim().trim_start_matches('#');
    if !matches!(digits.len(), 6 | 8) || !digits.is_ascii() {
        return None;
    }

    let channel = |i: usize| -> Option<f32> {
        u8::from_str_radix(&digits[i * 2..i * 2 + 2], 16)
            .ok()
            .map(|v| f32::from(v) / 255.0)
    };

    let a = if digits.len() == 8 { channel(3)? } else { 1.0 };
    Some(Vec4::new(channel(0)?, channel(1)?, channel(2)?, a))
}

/// Like [`parse_hex_color`] but falls back to opaque white with a warning.
#[must_use]
pub fn hex_color_or_white(hex: &str) -> Vec4 {
    parse_hex_color(hex).unwrap_or_else(|| {
        log::warn!("Invalid hex color '{hex}', using white");
        Vec4::ONE
    })
}
