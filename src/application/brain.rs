//! Brainの手数料計算
//!
//! コンテンツ販売手数料12%と出金手数料を差し引きます。

use crate::domain::rates::{floor_fee, BRAIN_CONTENT_RATE, BRAIN_WITHDRAWAL_FEE};
use crate::domain::types::{BrainResult, Yen};

/// Brainの手数料計算
///
/// # Arguments
/// * `price` - 正規化済みの販売価格（1円以上）
pub fn calculate_brain(price: Yen) -> BrainResult {
    // コンテンツ販売手数料（12%）
    let content_fee = floor_fee(price, BRAIN_CONTENT_RATE);

    // 手数料差し引き後
    let after_fee = price - content_fee;

    // 最終手取り額（0円未満にはならない）
    let net_amount = after_fee.saturating_sub(BRAIN_WITHDRAWAL_FEE);

    BrainResult {
        content_fee,
        withdrawal_fee: BRAIN_WITHDRAWAL_FEE,
        net_amount,
    }
}
