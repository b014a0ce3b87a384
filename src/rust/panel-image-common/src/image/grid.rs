//! 固定グリッドへの展開（可視領域のエンコードと右端のパディング）

use crate::error::{PanelError, Result};
use crate::image::{rgb565, EncodedGrid, PanelGeometry, RGB};
use image::RgbImage;
use tracing::{debug, trace};

/// 画像を行優先で走査してグリッドを生成
///
/// `x < visible_width` の列は画素をエンコードし、それ以降の列は0で埋める。
/// 画像が可視領域より小さい場合は、最初に読めなかった座標を
/// `PanelError::OutOfBounds` として返す（部分的な結果は返さない）。
pub fn encode_grid(image: &RgbImage, geometry: PanelGeometry) -> Result<EncodedGrid> {
    let (width, height) = image.dimensions();
    let mut values = Vec::with_capacity(geometry.len());

    for y in 0..geometry.height {
        for x in 0..geometry.stride {
            if x < geometry.visible_width {
                let pixel = image.get_pixel_checked(x, y).ok_or(PanelError::OutOfBounds {
                    x,
                    y,
                    width,
                    height,
                })?;
                values.push(RGB::from(*pixel).to_rgb565());
            } else {
                values.push(0);
            }
        }
    }

    debug!(
        "グリッド生成: {}x{}画像 → {}値（{}x{}、パディング{}列）",
        width,
        height,
        values.len(),
        geometry.stride,
        geometry.height,
        geometry.padding()
    );

    if let Some(&first) = values.first() {
        trace!("先頭画素: 0x{:04X} → {:?}", first, rgb565::decode(first));
    }

    Ok(EncodedGrid { geometry, values })
}
