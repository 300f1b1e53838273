// Colors are written as the original 32-bit literals and decoded into
// image's Rgba<u8> so each channel is explicit. minifb wants 0x00RRGGBB.

use image::Rgba;

pub const WHITE_LITERAL: u32 = 0xFFFF_FFFF;
pub const BLACK_LITERAL: u32 = 0x0000_0000;
// Only 24 bits wide: the top (alpha) byte ends up zero.
pub const RAY_LITERAL: u32 = 0x00FF_D43B;

/// Decode a `0xAARRGGBB` literal into channels, byte for byte.
pub fn from_literal(v: u32) -> Rgba<u8> {
    let [a, r, g, b] = v.to_be_bytes();
    Rgba([r, g, b, a])
}

/// Pack channels for minifb (alpha is not displayed and is dropped).
#[inline]
pub fn to_window(c: Rgba<u8>) -> u32 {
    let [r, g, b, _a] = c.0;
    ((r as u32) << 16) | ((g as u32) << 8) | b as u32
}

pub fn white() -> u32 {
    to_window(from_literal(WHITE_LITERAL))
}

pub fn black() -> u32 {
    to_window(from_literal(BLACK_LITERAL))
}

pub fn ray() -> u32 {
    to_window(from_literal(RAY_LITERAL))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ray_literal_keeps_its_bytes() {
        let c = from_literal(RAY_LITERAL);
        assert_eq!(c.0, [0xFF, 0xD4, 0x3B, 0x00]);
        assert_eq!(ray(), 0x00FF_D43B);
    }

    #[test]
    fn white_and_black() {
        assert_eq!(from_literal(WHITE_LITERAL).0, [0xFF; 4]);
        assert_eq!(white(), 0x00FF_FFFF);
        assert_eq!(black(), 0);
    }
}
