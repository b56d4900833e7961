//! ココナラコンテンツマーケットの手数料計算
//!
//! 販売手数料22%を差し引いた後、振込手数料の段階を判定します。
//! 段階判定は販売価格ではなく手数料差引後の金額（3,000円境界）で行う。
//! 3,000円以上の段階では振込手数料を数値として差し引かない
//! （元システムの挙動を意図的に保存。表示文言との食い違いは
//! レンダリング層の持ち物）。

use crate::domain::rates::{
    floor_fee, COCONALA_SALES_RATE, COCONALA_TIER_THRESHOLD, COCONALA_TRANSFER_FEE_OVER_3000,
    COCONALA_TRANSFER_FEE_UNDER_3000,
};
use crate::domain::types::{CoconalaResult, Yen};

/// ココナラコンテンツマーケットの手数料計算
///
/// # Arguments
/// * `price` - 正規化済みの販売価格（1円以上）
pub fn calculate_coconala(price: Yen) -> CoconalaResult {
    // 販売手数料（22%固定）
    let sales_fee = floor_fee(price, COCONALA_SALES_RATE);

    // 手数料差し引き後
    let after_fee = price - sales_fee;

    // 3,000円基準での手取り額（両段階とも常に算出して保持）
    let net_amount_under_3000 = after_fee.saturating_sub(COCONALA_TRANSFER_FEE_UNDER_3000);
    let net_amount_over_3000 = after_fee;

    // 実際の振込手数料と手取り額を決定（判定は手数料差引後の金額）
    let (actual_transfer_fee, net_amount) = if after_fee >= COCONALA_TIER_THRESHOLD {
        (COCONALA_TRANSFER_FEE_OVER_3000, net_amount_over_3000)
    } else {
        (COCONALA_TRANSFER_FEE_UNDER_3000, net_amount_under_3000)
    };

    CoconalaResult {
        sales_fee,
        transfer_fee_under_3000: COCONALA_TRANSFER_FEE_UNDER_3000,
        transfer_fee_over_3000: COCONALA_TRANSFER_FEE_OVER_3000,
        net_amount_under_3000,
        net_amount_over_3000,
        actual_transfer_fee,
        net_amount,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coconala_4000yen() {
        // 手数料880円 → 差引後3,120円 ≥ 3,000円 → そのまま手取り
        let result = calculate_coconala(4000);
        assert_eq!(result.sales_fee, 880);
        assert_eq!(result.net_amount, 3120);
        assert_eq!(result.actual_transfer_fee, 0);
    }

    #[test]
    fn test_coconala_1yen() {
        // floor(1 * 0.22) = 0 なので手取り1円
        let result = calculate_coconala(1);
        assert_eq!(result.sales_fee, 0);
        assert_eq!(result.net_amount, 1);
    }

    #[test]
    fn test_tier_boundary_on_after_fee_not_price() {
        // 境界は差引後金額3,000円。価格3,845円で差引後がちょうど3,000円になる
        // 3845: floor(845.9)=845 → 差引後3,000円 → 3,000円以上の段階
        let over = calculate_coconala(3845);
        assert_eq!(over.sales_fee, 845);
        assert_eq!(over.net_amount, 3000);
        assert_eq!(over.actual_transfer_fee, COCONALA_TRANSFER_FEE_OVER_3000);

        // 3844: floor(845.68)=845 → 差引後2,999円 → 3,000円未満の段階
        let under = calculate_coconala(3844);
        assert_eq!(under.sales_fee, 845);
        assert_eq!(under.net_amount, 2999);
        assert_eq!(under.actual_transfer_fee, COCONALA_TRANSFER_FEE_UNDER_3000);
    }

    #[test]
    fn test_tier_not_selected_by_price() {
        // 価格3,000円では差引後2,340円 → 3,000円未満の段階になること
        let result = calculate_coconala(3000);
        assert_eq!(result.sales_fee, 660);
        assert_eq!(result.net_amount, 2340);
        assert_eq!(result.actual_transfer_fee, COCONALA_TRANSFER_FEE_UNDER_3000);
    }

    #[test]
    fn test_both_tier_amounts_exposed() {
        let result = calculate_coconala(10_000);
        // 両段階の手取り額が常に保持されていること
        assert_eq!(result.net_amount_under_3000, 7800);
        assert_eq!(result.net_amount_over_3000, 7800);
        assert_eq!(result.net_amount, 7800);
    }
}
