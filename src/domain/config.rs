//! 設定管理
//!
//! TOML設定ファイルの読み込みとバリデーション。
//! 料率テーブルは仕様上実行時に変更できないため設定には含めない
//! （`domain::rates`のコンパイル時定数を参照）。
//! ここで扱うのは出力とログの動作設定のみ。

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::domain::{DomainError, DomainResult};

/// 出力形式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// テキストレポート（標準出力）
    #[default]
    Text,
    /// JSON（計算結果をそのままシリアライズ）
    Json,
}

/// アプリケーション設定のルート構造
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct AppConfig {
    /// 出力設定
    #[serde(default)]
    pub output: OutputConfig,
    /// ログ設定
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// 出力設定
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct OutputConfig {
    /// 出力形式
    ///
    /// 選択肢: "text", "json"
    /// デフォルト: "text"
    #[serde(default)]
    pub format: OutputFormat,

    /// noteの決済方法別内訳を表示するか
    ///
    /// デフォルト: true
    #[serde(default = "default_true")]
    pub show_payment_methods: bool,

    /// 手取り額ランキングを表示するか
    ///
    /// デフォルト: true
    #[serde(default = "default_true")]
    pub show_ranking: bool,
}

fn default_true() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            show_payment_methods: true,
            show_ranking: true,
        }
    }
}

/// ログ設定
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct LoggingConfig {
    /// ログレベル
    ///
    /// 選択肢: "trace", "debug", "info", "warn", "error"
    /// デフォルト: "info"
    #[serde(default = "LoggingConfig::default_level")]
    pub level: String,

    /// JSON形式でログを出力するか
    ///
    /// デフォルト: false
    #[serde(default)]
    pub json: bool,

    /// ログファイルの出力先ディレクトリ
    ///
    /// 省略時は標準エラー出力
    #[serde(default)]
    pub dir: Option<String>,
}

impl LoggingConfig {
    /// デフォルトのログレベル
    pub const DEFAULT_LEVEL: &'static str = "info";

    fn default_level() -> String {
        Self::DEFAULT_LEVEL.to_string()
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Self::default_level(),
            json: false,
            dir: None,
        }
    }
}

impl AppConfig {
    /// TOMLファイルから設定を読み込む
    pub fn from_file<P: AsRef<Path>>(path: P) -> DomainResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            DomainError::Configuration(format!("Failed to read config file: {}", e))
        })?;

        toml::from_str(&content)
            .map_err(|e| DomainError::Configuration(format!("Failed to parse config file: {}", e)))
    }

    /// デフォルト設定をTOMLファイルに書き出す
    #[allow(dead_code)]
    pub fn write_default<P: AsRef<Path>>(path: P) -> DomainResult<()> {
        let config = Self::default();
        let content = toml::to_string_pretty(&config).map_err(|e| {
            DomainError::Configuration(format!("Failed to serialize config: {}", e))
        })?;

        std::fs::write(path, content)
            .map_err(|e| DomainError::Configuration(format!("Failed to write config file: {}", e)))
    }

    /// 設定の妥当性を検証
    pub fn validate(&self) -> DomainResult<()> {
        // ログレベルの検証
        const VALID_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
        if !VALID_LEVELS.contains(&self.logging.level.as_str()) {
            return Err(DomainError::Configuration(format!(
                "Invalid log level: {} (must be one of trace/debug/info/warn/error)",
                self.logging.level
            )));
        }

        // ログディレクトリの検証（空文字列は不可）
        if let Some(dir) = &self.logging.dir {
            if dir.is_empty() {
                return Err(DomainError::Configuration(
                    "logging.dir must not be empty (omit the key to log to stderr)".to_string(),
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.output.format, OutputFormat::Text);
        assert!(config.output.show_payment_methods);
        assert!(config.output.show_ranking);
        assert_eq!(config.logging.level, "info");
        assert!(!config.logging.json);
        assert!(config.logging.dir.is_none());
    }

    #[test]
    fn test_config_validation() {
        let mut config = AppConfig::default();
        assert!(config.validate().is_ok());

        // 不正なログレベル
        config.logging.level = "verbose".to_string();
        assert!(config.validate().is_err());

        config.logging.level = "debug".to_string();
        assert!(config.validate().is_ok());

        // 空のログディレクトリ
        config.logging.dir = Some(String::new());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_output_format_parsing() {
        let toml = r#"
            [output]
            format = "json"
            show_payment_methods = false
            show_ranking = false
        "#;
        let config: AppConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(!config.output.show_payment_methods);
        assert!(!config.output.show_ranking);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        // セクション・キーを省略した場合はデフォルト値が入ること
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.output.format, OutputFormat::Text);
        assert_eq!(config.logging.level, "info");

        let toml = r#"
            [logging]
            level = "warn"
        "#;
        let config: AppConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.logging.level, "warn");
        assert!(config.output.show_ranking);
    }

    #[test]
    fn test_config_loads() {
        // config.tomlが正常に読み込めることを確認
        let config = AppConfig::from_file("config.toml").expect("config.tomlが読み込めません");

        config
            .validate()
            .expect("設定値のバリデーションに失敗しました");
    }

    #[test]
    fn test_config_example_loads() {
        // config.toml.exampleが正常に読み込めることを確認
        let config = AppConfig::from_file("config.toml.example")
            .expect("config.toml.exampleが読み込めません");

        config
            .validate()
            .expect("設定値のバリデーションに失敗しました");
    }
}
