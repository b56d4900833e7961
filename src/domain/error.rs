/// エラー型定義
///
/// Domain層の統一エラー型。thiserrorを使用して型安全なエラー処理を提供します。
///
/// # 設計方針
/// - unwrap()の使用を禁止し、明示的なエラーハンドリングを強制
/// - Result型でエラー伝播を明示化
/// - 計算エンジン本体は例外を投げず、集約関数がOption::Noneで失敗を表現する。
///   このエラー型は設定読み込み・出力生成などエンジン外周の失敗に使う

use thiserror::Error;

/// Domain層の統一エラー型
#[allow(dead_code)]
#[derive(Error, Debug)]
pub enum DomainError {
    /// 設定関連のエラー
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// 出力生成のエラー
    #[error("Render error: {0}")]
    Render(String),

    /// その他のエラー
    #[error("Unexpected error: {0}")]
    Other(String),
}

/// Domain層の統一Result型
pub type DomainResult<T> = Result<T, DomainError>;
