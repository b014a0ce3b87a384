//! RGB565変換処理
//!
//! パネルのビット配置は一般的なRGB565と逆順で、青が上位5bit、緑が中間6bit、
//! 赤が下位5bitに入る。

use crate::image::RGB;

const MASK_5BIT: u8 = 0xF8;
const MASK_6BIT: u8 = 0xFC;

/// RGB888からパネル用RGB565へ変換（切り捨て）
pub fn encode(r: u8, g: u8, b: u8) -> u16 {
    let b5 = ((b & MASK_5BIT) as u16) << 8; // bit 15-11
    let g6 = ((g & MASK_6BIT) as u16) << 3; // bit 10-5
    let r5 = ((r & MASK_5BIT) as u16) >> 3; // bit 4-0

    b5 + g6 + r5
}

/// パネル用RGB565からRGB888への逆変換（上位ビットを下位に複製）
pub fn decode(value: u16) -> RGB {
    let r5 = (value & 0x1F) as u8;
    let g6 = ((value >> 5) & 0x3F) as u8;
    let b5 = ((value >> 11) & 0x1F) as u8;

    RGB::new(
        (r5 << 3) | (r5 >> 2),
        (g6 << 2) | (g6 >> 4),
        (b5 << 3) | (b5 >> 2),
    )
}

impl RGB {
    /// パネル用RGB565値
    pub fn to_rgb565(&self) -> u16 {
        encode(self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_colors() {
        assert_eq!(encode(0, 0, 0), 0x0000);
        assert_eq!(encode(255, 255, 255), 0xFFFF);
        // 赤は下位5bit
        assert_eq!(encode(255, 0, 0), 0x001F);
        // 緑は中間6bit
        assert_eq!(encode(0, 255, 0), 0x07E0);
        // 青は上位5bit
        assert_eq!(encode(0, 0, 255), 0xF800);
    }

    #[test]
    fn test_low_bits_discarded() {
        // 5bit/6bitに収まらない下位ビットは切り捨て
        assert_eq!(encode(0x07, 0x03, 0x07), 0x0000);
        assert_eq!(encode(0x08, 0x04, 0x08), 0x0821);
    }

    #[test]
    fn test_matches_unmasked_red_shift() {
        for r in 0..=255u8 {
            for g in [0u8, 0x55, 0xAA, 0xFF] {
                for b in [0u8, 0x3C, 0xC3, 0xFF] {
                    let unmasked = (((b & 0xF8) as u16) << 8)
                        + (((g & 0xFC) as u16) << 3)
                        + ((r as u16) >> 3);
                    assert_eq!(encode(r, g, b), unmasked);
                }
            }
        }
    }

    #[test]
    fn test_channels_do_not_overlap() {
        let r = encode(255, 0, 0);
        let g = encode(0, 255, 0);
        let b = encode(0, 0, 255);
        assert_eq!(r & g, 0);
        assert_eq!(g & b, 0);
        assert_eq!(r & b, 0);
        assert_eq!(r | g | b, 0xFFFF);
    }

    #[test]
    fn test_decode_extremes() {
        assert_eq!(decode(0x0000), RGB::new(0, 0, 0));
        assert_eq!(decode(0xFFFF), RGB::new(255, 255, 255));
        assert_eq!(decode(0x001F), RGB::new(255, 0, 0));
        assert_eq!(decode(0x07E0), RGB::new(0, 255, 0));
        assert_eq!(decode(0xF800), RGB::new(0, 0, 255));
    }

    #[test]
    fn test_decode_encode_is_stable() {
        // 一度量子化した値は再エンコードしても変わらない
        for value in [0x0000u16, 0x0821, 0x1234, 0x8410, 0xBEEF, 0xFFFF] {
            let rgb = decode(value);
            assert_eq!(rgb.to_rgb565(), value, "value 0x{:04X}", value);
        }
    }

    #[test]
    fn test_rgb_to_rgb565() {
        let rgb = RGB::new(0x80, 0x40, 0x20);
        assert_eq!(rgb.to_rgb565(), encode(0x80, 0x40, 0x20));
        assert_eq!(rgb.to_rgb565(), 0x2210);
    }
}
