//! Hex color helpers shared by the style resolver and the input controls.

/// Parse `#rgb` or `#rrggbb` (case-insensitive) into RGB bytes.
///
/// Returns `None` for anything else, including a missing `#`.
pub fn parse_hex(s: &str) -> Option<[u8; 3]> {
    let rest = s.strip_prefix('#')?;
    match rest.len() {
        3 => {
            let mut out = [0u8; 3];
            for (i, c) in rest.chars().enumerate() {
                let v = c.to_digit(16)? as u8;
                out[i] = v << 4 | v;
            }
            Some(out)
        }
        6 => {
            let mut out = [0u8; 3];
            for (i, slot) in out.iter_mut().enumerate() {
                let pair = rest.get(i * 2..i * 2 + 2)?;
                *slot = u8::from_str_radix(pair, 16).ok()?;
            }
            Some(out)
        }
        _ => None,
    }
}

/// Format RGB bytes as lowercase `#rrggbb`.
pub fn format_hex(rgb: [u8; 3]) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb[0], rgb[1], rgb[2])
}
