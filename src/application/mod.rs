//! Application Layer
//!
//! 手数料計算のユースケースを実装します。
//! 各プラットフォームの計算は同じ正規化済み価格に対する独立した純粋関数で、
//! 相互に順序依存を持ちません。
//!
//! ## モジュール構成
//! - `normalizer`: 入力価格の正規化・範囲バリデーション
//! - `note` / `tips` / `brain` / `coconala`: プラットフォーム別計算
//! - `aggregator`: 全プラットフォーム一括計算と結果検証
//! - `ranking`: 手取り額によるランキング

pub mod aggregator;
pub mod brain;
pub mod coconala;
pub mod normalizer;
pub mod note;
pub mod ranking;
pub mod tips;
