//! C配列形式での出力

use crate::error::Result;
use std::io::Write;

/// 生成する配列名
pub const CONTROLS_IMAGE: &str = "CONTROLS_IMAGE";

/// 配列宣言を3行で書き出す
///
/// 1行目は宣言と開き括弧、2行目は全値をカンマ区切り（末尾カンマなし）、
/// 3行目は閉じ括弧。各値は `0x` + 大文字16進で最低2桁、切り詰めはしない。
pub fn write_array<W: Write>(writer: &mut W, name: &str, values: &[u16]) -> Result<()> {
    writeln!(writer, "const uint16_t {}[] = {{", name)?;

    let mut values = values.iter();
    if let Some(first) = values.next() {
        write!(writer, "0x{:02X}", first)?;
        for value in values {
            write!(writer, ",0x{:02X}", value)?;
        }
    }
    writeln!(writer)?;

    writeln!(writer, "}};")?;
    Ok(())
}

/// 配列宣言を文字列として生成
pub fn render_array(name: &str, values: &[u16]) -> String {
    // 1値あたり最大7バイト（"0xFFFF,"）
    let mut buf = Vec::with_capacity(values.len() * 7 + name.len() + 32);
    write_array(&mut buf, name, values).expect("writing to a Vec<u8> cannot fail");
    String::from_utf8(buf).expect("array text is valid UTF-8")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::{encode_grid, PanelGeometry};
    use image::{Rgb, RgbImage};

    #[test]
    fn test_three_lines() {
        let text = render_array(CONTROLS_IMAGE, &[0x00, 0x1F, 0xF800]);
        assert_eq!(text, "const uint16_t CONTROLS_IMAGE[] = {\n0x00,0x1F,0xF800\n};\n");
    }

    #[test]
    fn test_minimum_two_digits() {
        let text = render_array("A", &[0x0, 0x7, 0xAB, 0x7E0, 0xFFFF]);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[1], "0x00,0x07,0xAB,0x7E0,0xFFFF");
    }

    #[test]
    fn test_empty_values() {
        let text = render_array(CONTROLS_IMAGE, &[]);
        assert_eq!(text, "const uint16_t CONTROLS_IMAGE[] = {\n\n};\n");
    }

    #[test]
    fn test_black_push_image_output() {
        let image = RgbImage::from_pixel(960, 160, Rgb([0, 0, 0]));
        let grid = encode_grid(&image, PanelGeometry::PUSH).unwrap();
        let text = render_array(CONTROLS_IMAGE, &grid.values);

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "const uint16_t CONTROLS_IMAGE[] = {");
        assert_eq!(lines[2], "};");

        let values: Vec<&str> = lines[1].split(',').collect();
        assert_eq!(values.len(), 163_840);
        assert!(values.iter().all(|v| *v == "0x00"));
    }

    #[test]
    fn test_write_array_to_writer() {
        let mut out = Vec::new();
        write_array(&mut out, CONTROLS_IMAGE, &[0xFFFF]).unwrap();
        assert!(out.starts_with(b"const uint16_t CONTROLS_IMAGE[] = {\n"));
        assert!(out.ends_with(b"\n0xFFFF\n};\n"));
    }
}
