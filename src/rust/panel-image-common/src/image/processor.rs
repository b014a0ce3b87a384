//! 画像処理パイプライン

use crate::error::Result;
use crate::image::{grid, PanelGeometry, ProcessedImage};
use image::ImageFormat;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, warn};

pub struct PanelImageProcessor {
    geometry: PanelGeometry,
}

impl PanelImageProcessor {
    pub fn new() -> Self {
        Self::with_geometry(PanelGeometry::PUSH)
    }

    pub fn with_geometry(geometry: PanelGeometry) -> Self {
        Self { geometry }
    }

    pub fn geometry(&self) -> PanelGeometry {
        self.geometry
    }

    /// ファイルから画像を読み込んでグリッドに変換
    pub fn process_file(&self, path: impl AsRef<Path>) -> Result<ProcessedImage> {
        let path = path.as_ref();
        let image_data = std::fs::read(path)?;
        debug!("入力ファイル読み込み: {} ({}バイト)", path.display(), image_data.len());

        self.process_image(&image_data)
    }

    /// バイトデータから画像を処理してグリッドに変換
    pub fn process_image(&self, image_data: &[u8]) -> Result<ProcessedImage> {
        let start = Instant::now();

        // 1. フォーマット判定（PNG以外でもデコードは試みる）
        let original_format = image::guess_format(image_data).ok();
        match original_format {
            Some(ImageFormat::Png) => {}
            Some(format) => warn!("入力がPNGではありません ({:?})", format),
            None => warn!("画像形式を判定できません。デコーダーに任せます"),
        }

        // 2. デコード、RGB8へ変換（アルファは破棄、パレットは展開）
        let rgb = image::load_from_memory(image_data)?.into_rgb8();
        let (source_width, source_height) = rgb.dimensions();
        info!("画像デコード完了: {}x{} ({:?})", source_width, source_height, original_format);

        // 3. 固定グリッドへ展開
        let grid = grid::encode_grid(&rgb, self.geometry)?;

        let processing_time = start.elapsed().as_millis() as u64;
        info!("変換完了: {}値 ({}ms)", grid.values.len(), processing_time);

        Ok(ProcessedImage {
            grid,
            source_width,
            source_height,
            original_format,
            processing_time_ms: processing_time,
        })
    }
}

impl Default for PanelImageProcessor {
    fn default() -> Self {
        Self::new()
    }
}
