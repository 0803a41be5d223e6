use image::Rgba;

use crate::error::{PrepError, Result};

/// Parse `RRGGBB` (optionally `#`-prefixed) into an opaque color.
pub fn parse_hex_color(hex_str: &str) -> Result<Rgba<u8>> {
    let digits = hex_str.strip_prefix('#').unwrap_or(hex_str);
    if digits.len() != 6 {
        return Err(PrepError::InvalidColorFormat(hex_str.to_string()));
    }
    let mut rgb = [0u8; 3];
    hex::decode_to_slice(digits, &mut rgb)
        .map_err(|_| PrepError::InvalidColorFormat(hex_str.to_string()))?;
    Ok(Rgba([rgb[0], rgb[1], rgb[2], 255]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_with_and_without_hash() {
        assert_eq!(parse_hex_color("#FF0000").unwrap(), Rgba([255, 0, 0, 255]));
        assert_eq!(parse_hex_color("00ff7f").unwrap(), Rgba([0, 255, 127, 255]));
        assert_eq!(parse_hex_color("#1a2B3c").unwrap(), Rgba([0x1a, 0x2b, 0x3c, 255]));
    }

    #[test]
    fn rejects_wrong_length() {
        for bad in ["", "#", "#FFF", "FF00000", "#FF00", "##FF0000"] {
            assert!(
                matches!(parse_hex_color(bad), Err(PrepError::InvalidColorFormat(_))),
                "accepted {bad:?}"
            );
        }
    }

    #[test]
    fn rejects_non_hex_digits() {
        assert!(matches!(
            parse_hex_color("#GG0000"),
            Err(PrepError::InvalidColorFormat(_))
        ));
    }
}
