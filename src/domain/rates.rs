/// 料率テーブル
///
/// 各プラットフォームの手数料率と固定手数料の定数定義。
/// 計算ロジックに分岐を埋め込まず、ここのテーブルを参照する
/// データ駆動構成とする（項目単位でテスト可能）。
///
/// 振込・出金手数料はすべて0円でモデル化している。UI文言上の
/// 金額（270円、275円等）は表示レイヤーの持ち物であり、
/// 計算エンジンの数値には配線されていない。

use crate::domain::types::{PaymentMethod, Yen};

/// 受け付ける販売価格の下限
pub const PRICE_MIN: Yen = 1;

/// 受け付ける販売価格の上限（1億円）
pub const PRICE_MAX: Yen = 100_000_000;

/// noteの決済方法と決済手数料率の対応
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaymentMethodRate {
    /// 決済方法
    pub method: PaymentMethod,
    /// 決済手数料率
    pub rate: f64,
}

/// noteの決済方法別手数料率（正準順序）
pub const NOTE_PAYMENT_METHODS: [PaymentMethodRate; 6] = [
    PaymentMethodRate { method: PaymentMethod::Credit, rate: 0.05 },
    PaymentMethodRate { method: PaymentMethod::Carrier, rate: 0.15 },
    PaymentMethodRate { method: PaymentMethod::PayPay, rate: 0.07 },
    PaymentMethodRate { method: PaymentMethod::AmazonPay, rate: 0.07 },
    PaymentMethodRate { method: PaymentMethod::NotePoint, rate: 0.10 },
    PaymentMethodRate { method: PaymentMethod::PayPal, rate: 0.065 },
];

/// noteのプラットフォーム利用料率（決済手数料差引後に適用）
pub const NOTE_PLATFORM_RATE: f64 = 0.10;

/// noteの振込手数料
pub const NOTE_TRANSFER_FEE: Yen = 0;

/// tipsのコンテンツ販売手数料率
pub const TIPS_CONTENT_RATE: f64 = 0.14;

/// tipsの振込手数料（通常会員）
pub const TIPS_TRANSFER_FEE_NORMAL: Yen = 0;

/// tipsの振込手数料（プラス会員）
pub const TIPS_TRANSFER_FEE_PLUS: Yen = 0;

/// Brainのコンテンツ販売手数料率
pub const BRAIN_CONTENT_RATE: f64 = 0.12;

/// Brainの出金手数料
pub const BRAIN_WITHDRAWAL_FEE: Yen = 0;

/// ココナラの販売手数料率
pub const COCONALA_SALES_RATE: f64 = 0.22;

/// ココナラの振込手数料（売上3,000円未満）
pub const COCONALA_TRANSFER_FEE_UNDER_3000: Yen = 0;

/// ココナラの振込手数料（売上3,000円以上）
pub const COCONALA_TRANSFER_FEE_OVER_3000: Yen = 0;

/// ココナラの振込手数料段階の境界（手数料差引後の金額で判定）
pub const COCONALA_TIER_THRESHOLD: Yen = 3_000;

/// 料率を掛けて切り捨てた手数料額を求める
///
/// 元実装と同じくIEEE-754倍精度の乗算＋切り捨てで計算する。
/// 価格は1億円以下の整数でf64で正確に表現できるため、
/// 丸めの挙動は元実装と完全に一致する。
pub fn floor_fee(price: Yen, rate: f64) -> Yen {
    (price as f64 * rate).floor() as Yen
}
