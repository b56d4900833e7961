//! noteの手数料計算
//!
//! 6種類の決済方法それぞれについて決済手数料→プラットフォーム利用料の
//! 順で差し引き、手取り額の範囲（最小・最大）を求めます。
//! 決済方法の並び順は正準順序のまま保持する（下流が位置で参照するため）。

use crate::domain::rates::{floor_fee, NOTE_PAYMENT_METHODS, NOTE_PLATFORM_RATE, NOTE_TRANSFER_FEE};
use crate::domain::types::{NoteResult, PaymentMethodResult, Yen};

/// noteの手数料計算
///
/// # Arguments
/// * `price` - 正規化済みの販売価格（1円以上）
pub fn calculate_note(price: Yen) -> NoteResult {
    let payment_methods: Vec<PaymentMethodResult> = NOTE_PAYMENT_METHODS
        .iter()
        .map(|entry| {
            // 決済手数料
            let service_fee = floor_fee(price, entry.rate);

            // 決済手数料差し引き後
            let after_service_fee = price - service_fee;

            // プラットフォーム利用料（10%）
            let platform_fee = floor_fee(after_service_fee, NOTE_PLATFORM_RATE);

            // 手取り額（振込手数料前）
            let net_amount_before_transfer = after_service_fee - platform_fee;

            // 最終手取り額（振込手数料後、0円未満にはならない）
            let final_net_amount = net_amount_before_transfer.saturating_sub(NOTE_TRANSFER_FEE);

            PaymentMethodResult {
                method: entry.method,
                service_fee,
                platform_fee,
                net_amount_before_transfer,
                final_net_amount,
            }
        })
        .collect();

    // プラットフォーム利用料の平均値（整数和の切り捨て除算、表示用）
    let platform_fee = payment_methods
        .iter()
        .map(|m| m.platform_fee)
        .sum::<Yen>()
        / payment_methods.len() as Yen;

    // 手取り額の範囲
    let min_amount = payment_methods
        .iter()
        .map(|m| m.final_net_amount)
        .min()
        .unwrap_or(0);
    let max_amount = payment_methods
        .iter()
        .map(|m| m.final_net_amount)
        .max()
        .unwrap_or(0);

    NoteResult {
        platform_fee,
        transfer_fee: NOTE_TRANSFER_FEE,
        payment_methods,
        min_amount,
        max_amount,
    }
}
