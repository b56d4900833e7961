//! Domain層: 手数料計算の中心
//!
//! 外部依存を持たない純粋なRust型と料率テーブル。
//! Application層の計算関数から参照され、Infrastructure層で表示される。

pub mod config;
pub mod error;
pub mod rates;
pub mod types;

pub use config::*;
pub use error::*;
pub use rates::*;
pub use types::*;
