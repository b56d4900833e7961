//! tipsの手数料計算
//!
//! コンテンツ販売手数料14%を差し引き、会員種別ごとの振込手数料を
//! 適用します。通常会員・プラス会員の手数料定数は独立に調整可能な
//! ノブであるため、現在同額（0円）でも両方の結果を保持する。

use crate::domain::rates::{
    floor_fee, TIPS_CONTENT_RATE, TIPS_TRANSFER_FEE_NORMAL, TIPS_TRANSFER_FEE_PLUS,
};
use crate::domain::types::{TipsResult, Yen};

/// tipsの手数料計算
///
/// # Arguments
/// * `price` - 正規化済みの販売価格（1円以上）
pub fn calculate_tips(price: Yen) -> TipsResult {
    // コンテンツ販売手数料（14%）
    let content_fee = floor_fee(price, TIPS_CONTENT_RATE);

    // 手数料差し引き後
    let after_fee = price - content_fee;

    // 最終手取り額（会員種別ごと、0円未満にはならない）
    let net_amount_normal = after_fee.saturating_sub(TIPS_TRANSFER_FEE_NORMAL);
    let net_amount_plus = after_fee.saturating_sub(TIPS_TRANSFER_FEE_PLUS);

    TipsResult {
        content_fee,
        transfer_fee_normal: TIPS_TRANSFER_FEE_NORMAL,
        transfer_fee_plus: TIPS_TRANSFER_FEE_PLUS,
        net_amount_normal,
        net_amount_plus,
        // 表示用の手取り額（プラス会員）
        net_amount: net_amount_plus,
    }
}
