//! 設定ファイルの読み書きテスト
//!
//! write_defaultで書き出したTOMLがfrom_fileで読み戻せること、
//! 不正なファイルが設定エラーになることを確認する。

use tedori::domain::config::{AppConfig, OutputFormat};
use tedori::domain::error::DomainError;

#[test]
fn default_config_roundtrips_through_toml() {
    let dir = tempfile::tempdir().expect("一時ディレクトリが作成できません");
    let path = dir.path().join("config.toml");

    AppConfig::write_default(&path).expect("デフォルト設定の書き出しに失敗");

    let loaded = AppConfig::from_file(&path).expect("書き出した設定が読み戻せません");
    loaded.validate().expect("デフォルト設定は検証に通るはず");

    assert_eq!(loaded.output.format, OutputFormat::Text);
    assert!(loaded.output.show_payment_methods);
    assert!(loaded.output.show_ranking);
    assert_eq!(loaded.logging.level, "info");
}

#[test]
fn missing_file_is_configuration_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no_such_config.toml");

    let err = AppConfig::from_file(&path).unwrap_err();
    assert!(matches!(err, DomainError::Configuration(_)));
}

#[test]
fn malformed_toml_is_configuration_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.toml");
    std::fs::write(&path, "[output\nformat = ???").unwrap();

    let err = AppConfig::from_file(&path).unwrap_err();
    assert!(matches!(err, DomainError::Configuration(_)));
}

#[test]
fn unknown_log_level_fails_validation() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[logging]
level = "loud"
"#,
    )
    .unwrap();

    let config = AppConfig::from_file(&path).expect("パース自体は成功する");
    assert!(config.validate().is_err());
}
