//! tedori - Library
//!
//! このライブラリは、バイナリターゲット（schema生成など）と
//! 統合テスト・ベンチマークからプロジェクトのモジュールに
//! アクセスするために提供されています。

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod logging;
