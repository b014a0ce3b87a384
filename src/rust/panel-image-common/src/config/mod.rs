//! 共通設定管理モジュール
//!
//! 設定はstderrへの診断ログにのみ影響し、出力される配列は変わらない。

use serde::{Deserialize, Serialize};
use std::env;
use crate::error::{PanelError, Result};

/// 設定ファイルパスの環境変数
pub const CONFIG_FILE_ENV: &str = "PNG_TO_ARRAY_CONFIG";

/// ログレベルの環境変数
pub const LOG_LEVEL_ENV: &str = "PNG_TO_ARRAY_LOG_LEVEL";

const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// ロギング設定
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// ログレベル (error, warn, info, debug, trace)
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            // 通常実行では配列以外何も出さない
            level: "warn".to_string(),
        }
    }
}

/// アプリケーション設定
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    /// ロギング設定
    pub logging: LoggingConfig,
}

impl Settings {
    /// 環境変数から設定を読み込む
    ///
    /// 読み込み優先順位：
    /// 1. 環境変数
    /// 2. 設定ファイル（指定された場合）
    /// 3. デフォルト値
    ///
    /// 設定は診断ログにしか影響しないため、読み込みや検証に失敗しても
    /// デフォルト値で続行する。発生した問題は呼び出し側でログ出力する。
    pub fn load() -> (Self, Vec<PanelError>) {
        let config_path = env::var(CONFIG_FILE_ENV).ok();
        let log_level = env::var(LOG_LEVEL_ENV).ok();

        Self::resolve(config_path.as_deref(), log_level)
    }

    /// 設定ファイルとログレベル指定から設定を組み立てる
    pub fn resolve(
        config_path: Option<&str>,
        log_level: Option<String>,
    ) -> (Self, Vec<PanelError>) {
        let mut issues = Vec::new();

        let mut settings = match config_path.map(Self::from_file) {
            Some(Ok(settings)) => settings,
            Some(Err(e)) => {
                issues.push(e);
                Self::default()
            }
            None => Self::default(),
        };

        if let Some(level) = log_level {
            settings.logging.level = level;
        }

        if let Err(e) = settings.validate() {
            issues.push(e);
            settings.logging = LoggingConfig::default();
        }

        (settings, issues)
    }

    /// 設定ファイルから読み込む
    pub fn from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| PanelError::Config(format!("Failed to read config file: {}", e)))?;

        // JSON形式
        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .map_err(|e| PanelError::Config(format!("Failed to parse JSON config: {}", e)))
        }
        // TOML形式
        else if path.ends_with(".toml") {
            toml::from_str(&content)
                .map_err(|e| PanelError::Config(format!("Failed to parse TOML config: {}", e)))
        }
        // YAML形式
        else if path.ends_with(".yaml") || path.ends_with(".yml") {
            serde_yaml::from_str(&content)
                .map_err(|e| PanelError::Config(format!("Failed to parse YAML config: {}", e)))
        } else {
            Err(PanelError::Config("Unsupported config file format".to_string()))
        }
    }

    /// 設定を検証
    pub fn validate(&self) -> Result<()> {
        let level = self.logging.level.to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(PanelError::Config(format!("Invalid log level: {}", self.logging.level)));
        }

        Ok(())
    }
}
