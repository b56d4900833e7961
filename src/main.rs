mod application;
mod domain;
mod infrastructure;
mod logging;

use anyhow::bail;
use std::path::PathBuf;

use crate::application::aggregator::calculate_all_platforms;
use crate::application::normalizer::{normalize_input, validate_price_range};
use crate::domain::config::{AppConfig, OutputFormat};
use crate::infrastructure::report::{render_json, render_text};
use crate::logging::init_logging;

fn main() {
    // 設定ファイルの読み込み（存在しない場合はデフォルト設定を使用）
    let load_result = AppConfig::from_file("config.toml");
    let config = match &load_result {
        Ok(config) => config.clone(),
        Err(_) => AppConfig::default(),
    };

    // ログシステムの初期化
    // 注意: _guardはmain終了まで保持する必要がある（Dropでログスレッドが終了）
    let log_dir = config.logging.dir.as_ref().map(PathBuf::from);
    let _guard = init_logging(&config.logging.level, config.logging.json, log_dir);

    tracing::info!("tedori starting...");
    match load_result {
        Ok(_) => tracing::info!("Loaded configuration from config.toml"),
        Err(e) => tracing::warn!("Failed to load config.toml: {:?}, using defaults", e),
    }

    match run(&config) {
        Ok(_) => {
            tracing::info!("tedori finished.");
        }
        Err(e) => {
            tracing::error!("Fatal error: {:?}", e);
            eprintln!("エラー: {}", e);
            std::process::exit(1);
        }
    }
}

/// アプリケーションのメイン処理
fn run(config: &AppConfig) -> anyhow::Result<()> {
    config.validate()?;

    // 第1引数 = 販売価格
    let raw_price = match std::env::args().nth(1) {
        Some(arg) => arg,
        None => {
            bail!("使い方: tedori <販売価格>  例: tedori 4000");
        }
    };

    // 入力文字列の正規化（全角数字→半角、桁区切り等の数字以外を除去）
    let raw_price = normalize_input(&raw_price);

    // ユーザー向けの事前バリデーション
    // （計算エンジン自体は上限超過を黙ってクランプするため、ここで拒否する）
    let validation = validate_price_range(&raw_price);
    if !validation.is_valid {
        bail!("{}", validation.message);
    }

    tracing::info!(price = %raw_price, "calculating all platforms");

    let result = match calculate_all_platforms(&raw_price) {
        Some(result) => result,
        None => {
            // validate_price_rangeを通過した入力では到達しないはず
            bail!("計算に失敗しました");
        }
    };

    match config.output.format {
        OutputFormat::Text => {
            print!("{}", render_text(&result, &config.output));
        }
        OutputFormat::Json => {
            println!("{}", render_json(&result)?);
        }
    }

    Ok(())
}
