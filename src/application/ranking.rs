//! 手取り額ランキング
//!
//! 各プラットフォームを手取り額の降順に並べます。
//! noteは手取り額が範囲で返るため、比較には最大値（楽観値）を使う。
//! ソートは安定ソートで、同額の場合は投入順
//! （tips → Brain → ココナラ → note）が保たれる。

use crate::application::aggregator::validate_result;
use crate::domain::types::{CalculationResult, Platform, RankedPlatform};

/// 手取り額でプラットフォームを並び替え
///
/// # Returns
/// 降順のランキング。結果が検証に通らない場合は空のシーケンス。
pub fn rank_by_net_amount(result: &CalculationResult) -> Vec<RankedPlatform> {
    if !validate_result(result) {
        return Vec::new();
    }

    let mut platforms = vec![
        RankedPlatform {
            platform: Platform::Tips,
            display_name: Platform::Tips.display_name(),
            net_amount: result.tips.net_amount,
        },
        RankedPlatform {
            platform: Platform::Brain,
            display_name: Platform::Brain.display_name(),
            net_amount: result.brain.net_amount,
        },
        RankedPlatform {
            platform: Platform::Coconala,
            display_name: Platform::Coconala.display_name(),
            net_amount: result.coconala.net_amount,
        },
    ];

    // noteは範囲があるので最大値を使用（他3件の後に追加）
    platforms.push(RankedPlatform {
        platform: Platform::Note,
        display_name: Platform::Note.display_name(),
        net_amount: result.note.max_amount,
    });

    // 手取り額の降順でソート（sort_byは安定ソート）
    platforms.sort_by(|a, b| b.net_amount.cmp(&a.net_amount));

    platforms
}
