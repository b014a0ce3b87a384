//! png-to-array: PNG画像をコントロールパネル用のRGB565 C配列に変換

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, info, warn, Level};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use panel_image_common::{write_array, PanelImageProcessor, Settings, CONTROLS_IMAGE, VERSION};

/// PNG画像を1024x160のRGB565配列（CONTROLS_IMAGE）として標準出力に書き出す
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// 入力画像ファイル
    input: PathBuf,
}

/// ログレベル文字列を変換
fn parse_level(level: &str) -> Level {
    match level.to_lowercase().as_str() {
        "error" => Level::ERROR,
        "warn" => Level::WARN,
        "info" => Level::INFO,
        "debug" => Level::DEBUG,
        "trace" => Level::TRACE,
        _ => Level::WARN,
    }
}

/// ログ初期化（標準出力は配列専用なのでstderrへ）
fn init_logging(settings: &Settings) {
    let level = parse_level(&settings.logging.level);
    let filter = EnvFilter::default().add_directive(level.into());

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr).with_target(false))
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // 設定の問題は診断ログにのみ影響するので、警告して続行
    let (settings, config_issues) = Settings::load();
    init_logging(&settings);
    for issue in &config_issues {
        warn!("{} ({}): using default settings", issue, issue.error_code());
    }

    info!("png-to-array {} (git {}, built {})", VERSION, env!("GIT_HASH"), env!("BUILD_TIME"));
    debug!("build target: {}", env!("BUILD_TARGET"));

    let processor = PanelImageProcessor::new();
    let processed = processor
        .process_file(&args.input)
        .with_context(|| format!("failed to convert {}", args.input.display()))?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_array(&mut out, CONTROLS_IMAGE, &processed.grid.values).context("failed to write array")?;
    out.flush().context("failed to flush stdout")?;

    info!(
        "{} ({}x{}, {:?}) → {}値",
        args.input.display(),
        processed.source_width,
        processed.source_height,
        processed.original_format,
        processed.grid.values.len()
    );

    Ok(())
}
