//! 共通エラー型定義

use thiserror::Error;

/// パネル画像変換の共通エラー型
#[derive(Debug, Error)]
pub enum PanelError {
    /// IO エラー（入力ファイル読み込み、標準出力への書き込み）
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// 画像デコードエラー
    #[error("Image decode error: {0}")]
    Decode(#[from] image::ImageError),

    /// 画像が固定グリッドより小さい
    #[error("Pixel ({x}, {y}) is out of bounds for a {width}x{height} image")]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// 設定エラー
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result型のエイリアス
pub type Result<T> = std::result::Result<T, PanelError>;

impl PanelError {
    /// エラーコードを返す（ログ出力用）
    pub fn error_code(&self) -> &str {
        match self {
            PanelError::Io(_) => "IO_ERROR",
            PanelError::Decode(_) => "DECODE_ERROR",
            PanelError::OutOfBounds { .. } => "OUT_OF_BOUNDS",
            PanelError::Config(_) => "CONFIG_ERROR",
        }
    }
}
