//! 計算結果の出力
//!
//! テキストレポートとJSONの2形式をサポートします。
//! 数値のカンマ区切り・円表示・手数料のマイナス表示など、
//! 通貨の文字列整形もここで行う。

use std::fmt::Write as _;

use crate::application::ranking::rank_by_net_amount;
use crate::domain::config::OutputConfig;
use crate::domain::types::{CalculationResult, Yen};
use crate::domain::{DomainError, DomainResult};

/// 数値をカンマ区切り形式にフォーマットする
pub fn format_number(num: Yen) -> String {
    let digits = num.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    let offset = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - offset) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// 価格を円表示形式にフォーマットする（"1,234円"）
pub fn format_price(price: Yen) -> String {
    format!("{}円", format_number(price))
}

/// 手数料を負の値表示形式にフォーマットする（"-1,234円"）
pub fn format_fee(fee: Yen) -> String {
    format!("-{}円", format_number(fee))
}

/// 計算結果をテキストレポートとして整形する
pub fn render_text(result: &CalculationResult, options: &OutputConfig) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "販売価格: {}", format_price(result.price));
    let _ = writeln!(out);

    // note: 手取り額は決済方法により範囲になる
    let note = &result.note;
    let _ = writeln!(out, "【note】");
    let _ = writeln!(
        out,
        "  プラットフォーム利用料（平均）: {}",
        format_fee(note.platform_fee)
    );
    let _ = writeln!(
        out,
        "  手取り額: {} 〜 {}",
        format_price(note.min_amount),
        format_price(note.max_amount)
    );
    if options.show_payment_methods {
        for method in &note.payment_methods {
            let _ = writeln!(
                out,
                "    {}: 決済手数料 {} / 手取り {}",
                method.method.label(),
                format_fee(method.service_fee),
                format_price(method.final_net_amount)
            );
        }
    }
    let _ = writeln!(out);

    let tips = &result.tips;
    let _ = writeln!(out, "【tips】");
    let _ = writeln!(
        out,
        "  コンテンツ販売手数料: {}",
        format_fee(tips.content_fee)
    );
    let _ = writeln!(out, "  手取り額: {}", format_price(tips.net_amount));
    let _ = writeln!(out);

    let brain = &result.brain;
    let _ = writeln!(out, "【Brain】");
    let _ = writeln!(
        out,
        "  コンテンツ販売手数料: {}",
        format_fee(brain.content_fee)
    );
    let _ = writeln!(out, "  手取り額: {}", format_price(brain.net_amount));
    let _ = writeln!(out);

    let coconala = &result.coconala;
    let _ = writeln!(out, "【ココナラコンテンツマーケット】");
    let _ = writeln!(out, "  販売手数料: {}", format_fee(coconala.sales_fee));
    let _ = writeln!(out, "  手取り額: {}", format_price(coconala.net_amount));

    if options.show_ranking {
        let ranking = rank_by_net_amount(result);
        if !ranking.is_empty() {
            let _ = writeln!(out);
            let _ = writeln!(out, "■ 手取り額ランキング（noteは最大値で比較）");
            for (i, entry) in ranking.iter().enumerate() {
                let _ = writeln!(
                    out,
                    "  {}位 {}: {}",
                    i + 1,
                    entry.display_name,
                    format_price(entry.net_amount)
                );
            }
        }
    }

    out
}

/// 計算結果をJSON文字列として整形する
pub fn render_json(result: &CalculationResult) -> DomainResult<String> {
    serde_json::to_string_pretty(result)
        .map_err(|e| DomainError::Render(format!("Failed to serialize result: {}", e)))
}
