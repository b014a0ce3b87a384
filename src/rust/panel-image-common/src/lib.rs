//! パネル画像変換 共通ライブラリ
//!
//! PNG画像をRGB565の固定グリッド（1024x160、可視領域960列）に変換し、
//! C配列として出力する。

pub mod config;
pub mod error;
pub mod image;
pub mod output;

// バージョン情報
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");

// 主要な型の再エクスポート
pub use crate::config::Settings;
pub use crate::error::{PanelError, Result};
pub use crate::image::{EncodedGrid, PanelGeometry, PanelImageProcessor, ProcessedImage, RGB};
pub use crate::output::{render_array, write_array, CONTROLS_IMAGE};
