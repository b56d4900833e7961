/// ログ・トレーシング基盤
///
/// tracingを使用した統一的なログ出力。
///
/// 計算結果は標準出力に出すため、ログはデフォルトで標準エラー出力へ流す。
/// ファイル出力時はtracing-appenderの非同期書き込みを使い、
/// 計算経路への影響を最小化する。

use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// ログシステムを初期化
///
/// # Arguments
/// - `log_level`: ログレベル（"info", "debug", "trace"等）
/// - `json_format`: JSON形式で出力するか
/// - `log_dir`: ログファイル出力先（None = 標準エラー出力）
///
/// # Returns
/// ファイル出力時は`Some(WorkerGuard)`。プログラム終了まで保持必須
/// （Drop時にログスレッドがフラッシュ・終了する）。
pub fn init_logging(
    log_level: &str,
    json_format: bool,
    log_dir: Option<PathBuf>,
) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    match log_dir {
        Some(dir) => {
            // ファイル出力（非同期）
            if std::fs::create_dir_all(&dir).is_err() {
                return None;
            }

            let file_appender = tracing_appender::rolling::daily(dir, "tedori.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

            let subscriber = tracing_subscriber::registry().with(env_filter);

            let result = if json_format {
                subscriber
                    .with(fmt::layer().json().with_writer(non_blocking))
                    .try_init()
            } else {
                subscriber
                    .with(
                        fmt::layer()
                            .with_target(true)
                            .with_ansi(false) // ファイル出力時はANSIエスケープ無効
                            .with_writer(non_blocking),
                    )
                    .try_init()
            };

            if result.is_err() {
                return None;
            }

            info!(
                "Logging initialized (async file): level={}, format={}",
                log_level,
                if json_format { "json" } else { "text" }
            );
            Some(guard)
        }
        None => {
            // 標準エラー出力（標準出力はレポート用に空けておく）
            let subscriber = tracing_subscriber::registry().with(env_filter);

            let result = if json_format {
                subscriber
                    .with(fmt::layer().json().with_writer(std::io::stderr))
                    .try_init()
            } else {
                subscriber
                    .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
                    .try_init()
            };

            if result.is_ok() {
                info!(
                    "Logging initialized (stderr): level={}, format={}",
                    log_level,
                    if json_format { "json" } else { "text" }
                );
            }
            None
        }
    }
}
