//! Infrastructure Layer
//!
//! 計算結果の出力アダプタを実装します。
//! エンジン本体は数値のみを返し、通貨の文字列整形は
//! すべてこの層の責務とする。

pub mod report;
