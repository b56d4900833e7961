//! 全プラットフォーム一括計算
//!
//! 入力を正規化し、4プラットフォームの計算を実行して結果を組み立てます。
//! 失敗は`None`のみで表現する（呼び出し側に例外は伝播しない）。
//! 各プラットフォームの計算は同一の正規化済み価格に対する独立した
//! 純粋関数であり、実行順序に正しさが依存しない。

use tracing::debug;

use crate::application::brain::calculate_brain;
use crate::application::coconala::calculate_coconala;
use crate::application::normalizer::{clamp_price, parse_to_safe_price};
use crate::application::note::calculate_note;
use crate::application::tips::calculate_tips;
use crate::domain::rates::{PRICE_MAX, PRICE_MIN};
use crate::domain::types::{CalculationResult, Yen};

/// 全プラットフォームの手数料計算（文字列入力）
///
/// # Returns
/// - `Some(CalculationResult)`: 4プラットフォームすべての結果
/// - `None`: 正規化後の価格が0以下（無効入力）
pub fn calculate_all_platforms(raw_price: &str) -> Option<CalculationResult> {
    let price = parse_to_safe_price(raw_price);
    calculate_for_price(price)
}

/// 全プラットフォームの手数料計算（数値入力）
///
/// 上限超過はクランプし、0は無効入力として`None`を返す。
pub fn calculate_for_price(price: Yen) -> Option<CalculationResult> {
    let safe_price = clamp_price(price as f64);

    if safe_price == 0 {
        debug!(price, "invalid price input, returning no result");
        return None;
    }

    Some(CalculationResult {
        price: safe_price,
        note: calculate_note(safe_price),
        tips: calculate_tips(safe_price),
        brain: calculate_brain(safe_price),
        coconala: calculate_coconala(safe_price),
    })
}

/// 計算結果の妥当性検証
///
/// 表示・出力前のガードとして使う。結果を修復・変更はしない。
pub fn validate_result(result: &CalculationResult) -> bool {
    // 価格の妥当性確認
    if result.price < PRICE_MIN || result.price > PRICE_MAX {
        return false;
    }

    // noteの内訳が6決済方法すべて揃っていること
    if result.note.payment_methods.len() != 6 {
        return false;
    }

    // min/maxが内訳と整合していること
    let nets: Vec<Yen> = result
        .note
        .payment_methods
        .iter()
        .map(|m| m.final_net_amount)
        .collect();
    let min = nets.iter().min().copied().unwrap_or(0);
    let max = nets.iter().max().copied().unwrap_or(0);
    if result.note.min_amount != min || result.note.max_amount != max {
        return false;
    }

    // 手取り額は販売価格を超えない
    if result.tips.net_amount > result.price
        || result.brain.net_amount > result.price
        || result.coconala.net_amount > result.price
        || result.note.max_amount > result.price
    {
        return false;
    }

    true
}
