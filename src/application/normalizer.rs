//! 入力正規化モジュール
//!
//! 文字列・数値入力を安全な価格（正の整数円）へ正規化します。
//! 失敗時は例外ではなく無効マーカー0を返すフェイルクローズ方式。
//!
//! 上限超過は黙って1億円に丸める。拒否が必要な呼び出し側は
//! 計算前に`validate_price_range`で範囲チェックを行うこと。

use crate::domain::rates::{PRICE_MAX, PRICE_MIN};
use crate::domain::types::Yen;

/// 範囲バリデーションの結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceValidation {
    /// 有効な価格か
    pub is_valid: bool,
    /// ユーザー向けエラーメッセージ（有効時は空文字列）
    pub message: &'static str,
}

impl PriceValidation {
    fn ok() -> Self {
        Self {
            is_valid: true,
            message: "",
        }
    }

    fn error(message: &'static str) -> Self {
        Self {
            is_valid: false,
            message,
        }
    }
}

/// 数値を安全な価格に正規化する
///
/// 非有限・0以下は無効マーカー0。有効値は切り捨てのうえ
/// [1, 100_000_000] にクランプする。
pub fn clamp_price(value: f64) -> Yen {
    if !value.is_finite() || value <= 0.0 {
        return 0;
    }

    let floored = value.floor();
    if floored < PRICE_MIN as f64 {
        // 0 < value < 1 は下限に切り上げる（正の入力は拒否しない）
        PRICE_MIN
    } else if floored > PRICE_MAX as f64 {
        PRICE_MAX
    } else {
        floored as Yen
    }
}

/// 文字列を安全な価格に正規化する
///
/// 数値として解釈できない入力は0を返す。
pub fn parse_to_safe_price(raw: &str) -> Yen {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0;
    }

    match trimmed.parse::<f64>() {
        Ok(value) => clamp_price(value),
        Err(_) => 0,
    }
}

/// 価格の範囲をチェックする（ユーザー向けメッセージ付き）
///
/// 計算エンジン本体は上限超過をクランプするため、
/// 拒否したい場合はこの関数を事前に呼ぶ。
pub fn validate_price_range(raw: &str) -> PriceValidation {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return PriceValidation::error("有効な数値を入力してください");
    }

    let value = match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 => v,
        _ => return PriceValidation::error("有効な数値を入力してください"),
    };

    if value < PRICE_MIN as f64 {
        return PriceValidation::error("1円以上の価格を入力してください");
    }

    if value > PRICE_MAX as f64 {
        return PriceValidation::error("価格は1億円以下で入力してください");
    }

    PriceValidation::ok()
}

/// 入力文字列の正規化（全角数字を半角に変換等）
///
/// 数字以外の文字を除去し、先頭の0を取り除く。
/// 数字が残らない場合は"0"を返す。
pub fn normalize_input(raw: &str) -> String {
    let digits: String = raw
        .chars()
        .filter_map(|c| match c {
            '0'..='9' => Some(c),
            // 全角数字（U+FF10〜U+FF19）を半角へ
            '０'..='９' => char::from_u32(c as u32 - 0xFEE0),
            _ => None,
        })
        .collect();

    let stripped = digits.trim_start_matches('0');
    if stripped.is_empty() {
        "0".to_string()
    } else {
        stripped.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_prices() {
        assert_eq!(parse_to_safe_price("4000"), 4000);
        assert_eq!(parse_to_safe_price("1"), 1);
        assert_eq!(parse_to_safe_price("100000000"), 100_000_000);
        // 小数は切り捨て
        assert_eq!(parse_to_safe_price("4000.9"), 4000);
        // 前後の空白は許容
        assert_eq!(parse_to_safe_price(" 500 "), 500);
    }

    #[test]
    fn test_parse_invalid_inputs_are_zero() {
        assert_eq!(parse_to_safe_price(""), 0);
        assert_eq!(parse_to_safe_price("abc"), 0);
        assert_eq!(parse_to_safe_price("12a3"), 0);
        assert_eq!(parse_to_safe_price("-5"), 0);
        assert_eq!(parse_to_safe_price("0"), 0);
        assert_eq!(parse_to_safe_price("nan"), 0);
        assert_eq!(parse_to_safe_price("inf"), 0);
        // 全角数字はparseでは受け付けない（normalize_inputを先に通す）
        assert_eq!(parse_to_safe_price("１２３４"), 0);
    }

    #[test]
    fn test_clamp_boundaries() {
        // 上限超過は1億円に丸める（拒否しない）
        assert_eq!(parse_to_safe_price("200000000"), 100_000_000);
        assert_eq!(clamp_price(1e12), 100_000_000);
        // 0 < value < 1 は下限1円
        assert_eq!(clamp_price(0.5), 1);
        // 0以下・非有限は無効マーカー
        assert_eq!(clamp_price(0.0), 0);
        assert_eq!(clamp_price(-100.0), 0);
        assert_eq!(clamp_price(f64::NAN), 0);
        assert_eq!(clamp_price(f64::INFINITY), 0);
    }

    #[test]
    fn test_validate_price_range() {
        assert!(validate_price_range("4000").is_valid);
        assert!(validate_price_range("1").is_valid);
        assert!(validate_price_range("100000000").is_valid);

        let invalid = validate_price_range("abc");
        assert!(!invalid.is_valid);
        assert_eq!(invalid.message, "有効な数値を入力してください");

        let too_small = validate_price_range("0.5");
        assert!(!too_small.is_valid);
        assert_eq!(too_small.message, "1円以上の価格を入力してください");

        let too_large = validate_price_range("100000001");
        assert!(!too_large.is_valid);
        assert_eq!(too_large.message, "価格は1億円以下で入力してください");

        let zero = validate_price_range("0");
        assert!(!zero.is_valid);
        assert_eq!(zero.message, "有効な数値を入力してください");
    }

    #[test]
    fn test_normalize_input() {
        // 全角→半角
        assert_eq!(normalize_input("１２３４"), "1234");
        // 数字以外を除去
        assert_eq!(normalize_input("1,000円"), "1000");
        // 先頭の0を除去
        assert_eq!(normalize_input("007"), "7");
        // 数字が残らない場合は"0"
        assert_eq!(normalize_input(""), "0");
        assert_eq!(normalize_input("abc"), "0");
        assert_eq!(normalize_input("000"), "0");
    }
}
