//! 画像処理モジュール

pub mod grid;
pub mod processor;
pub mod rgb565;

// 公開API
pub use grid::encode_grid;
pub use processor::PanelImageProcessor;
pub use rgb565::encode;

/// RGB色
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RGB {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl RGB {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        RGB { r, g, b }
    }
}

impl From<image::Rgb<u8>> for RGB {
    fn from(pixel: image::Rgb<u8>) -> Self {
        let [r, g, b] = pixel.0;
        RGB::new(r, g, b)
    }
}

/// 出力グリッドの形状
///
/// 1行は `stride` 個の値で構成され、先頭 `visible_width` 個だけが画素、
/// 残りは0で埋められる。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelGeometry {
    /// 1行あたりの値の数
    pub stride: u32,
    /// 行数
    pub height: u32,
    /// 実際に画素が入る列数
    pub visible_width: u32,
}

impl PanelGeometry {
    /// Push 3 ディスプレイ（960x160、ラインストライド1024）
    pub const PUSH: PanelGeometry = PanelGeometry {
        stride: 1024,
        height: 160,
        visible_width: 960,
    };

    /// グリッド全体の値の数
    pub fn len(&self) -> usize {
        self.stride as usize * self.height as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 1行あたりのパディング列数
    pub fn padding(&self) -> u32 {
        self.stride.saturating_sub(self.visible_width)
    }
}

impl Default for PanelGeometry {
    fn default() -> Self {
        PanelGeometry::PUSH
    }
}

/// エンコード済みグリッド（行優先）
#[derive(Debug, Clone, PartialEq)]
pub struct EncodedGrid {
    pub geometry: PanelGeometry,
    pub values: Vec<u16>,
}

impl EncodedGrid {
    /// 指定行の値
    pub fn row(&self, y: u32) -> Option<&[u16]> {
        if y >= self.geometry.height {
            return None;
        }
        let start = y as usize * self.geometry.stride as usize;
        self.values.get(start..start + self.geometry.stride as usize)
    }
}

/// 画像処理結果
#[derive(Debug, Clone)]
pub struct ProcessedImage {
    pub grid: EncodedGrid,
    /// 元画像のサイズ
    pub source_width: u32,
    pub source_height: u32,
    /// 入力のマジックバイトから判定した形式
    pub original_format: Option<image::ImageFormat>,
    pub processing_time_ms: u64,
}
