/// コア型定義
///
/// Domain層の中心となるデータ構造。
/// 計算結果はすべて不変の値オブジェクトとして呼び出しごとに新規構築され、
/// 返却後は呼び出し側が単独で所有する（共有可変状態なし）。

use serde::Serialize;

/// 金額（円）。最小通貨単位の整数で扱う
pub type Yen = u64;

/// 販売プラットフォーム
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// note
    Note,
    /// tips
    Tips,
    /// Brain
    Brain,
    /// ココナラコンテンツマーケット
    Coconala,
}

impl Platform {
    /// 結果オブジェクトのキー名（JSON出力と同じ表記）
    #[allow(dead_code)]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Note => "note",
            Self::Tips => "tips",
            Self::Brain => "brain",
            Self::Coconala => "coconala",
        }
    }

    /// ユーザー向け表示名
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Note => "note",
            Self::Tips => "tips",
            Self::Brain => "Brain",
            Self::Coconala => "ココナラコンテンツマーケット",
        }
    }
}

/// noteの決済方法
///
/// `ALL` の並び順が正準順序。下流の表示処理が位置で参照するため、
/// 手数料率順などに並べ替えてはならない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    /// クレジットカード決済
    Credit,
    /// 携帯キャリア決済
    Carrier,
    /// PayPay決済
    PayPay,
    /// Amazon Pay決済
    AmazonPay,
    /// noteポイント決済
    NotePoint,
    /// PayPal決済
    PayPal,
}

impl PaymentMethod {
    /// 正準順序（credit → carrier → paypay → amazonpay → notepoint → paypal）
    #[allow(dead_code)]
    pub const ALL: [PaymentMethod; 6] = [
        Self::Credit,
        Self::Carrier,
        Self::PayPay,
        Self::AmazonPay,
        Self::NotePoint,
        Self::PayPal,
    ];

    /// enumタグ名
    #[allow(dead_code)]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Credit => "credit",
            Self::Carrier => "carrier",
            Self::PayPay => "paypay",
            Self::AmazonPay => "amazonpay",
            Self::NotePoint => "notepoint",
            Self::PayPal => "paypal",
        }
    }

    /// ユーザー向け表示名
    pub fn label(&self) -> &'static str {
        match self {
            Self::Credit => "クレジットカード決済",
            Self::Carrier => "携帯キャリア決済",
            Self::PayPay => "PayPay決済",
            Self::AmazonPay => "Amazon Pay決済",
            Self::NotePoint => "noteポイント決済",
            Self::PayPal => "PayPal決済",
        }
    }
}

/// noteの決済方法別計算結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaymentMethodResult {
    /// 決済方法
    pub method: PaymentMethod,
    /// 決済手数料
    pub service_fee: Yen,
    /// プラットフォーム利用料（決済手数料差引後の10%）
    pub platform_fee: Yen,
    /// 振込手数料差引前の手取り額
    pub net_amount_before_transfer: Yen,
    /// 最終手取り額
    pub final_net_amount: Yen,
}

/// noteの計算結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteResult {
    /// プラットフォーム利用料（6決済方法の平均、表示用）
    pub platform_fee: Yen,
    /// 振込手数料（固定）
    pub transfer_fee: Yen,
    /// 決済方法別の内訳（正準順序を保持）
    pub payment_methods: Vec<PaymentMethodResult>,
    /// 手取り額の最小値
    pub min_amount: Yen,
    /// 手取り額の最大値
    pub max_amount: Yen,
}

/// tipsの計算結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TipsResult {
    /// コンテンツ販売手数料（14%）
    pub content_fee: Yen,
    /// 振込手数料（通常会員）
    pub transfer_fee_normal: Yen,
    /// 振込手数料（プラス会員）
    pub transfer_fee_plus: Yen,
    /// 手取り額（通常会員）
    pub net_amount_normal: Yen,
    /// 手取り額（プラス会員）
    pub net_amount_plus: Yen,
    /// 表示用の手取り額（プラス会員と同値）
    pub net_amount: Yen,
}

/// Brainの計算結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BrainResult {
    /// コンテンツ販売手数料（12%）
    pub content_fee: Yen,
    /// 出金手数料
    pub withdrawal_fee: Yen,
    /// 手取り額
    pub net_amount: Yen,
}

/// ココナラコンテンツマーケットの計算結果
///
/// 振込手数料の段階判定は販売価格ではなく手数料差引後の金額で行う。
/// 両段階の手取り額を常に保持し、実際に適用された値を別フィールドで返す。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoconalaResult {
    /// 販売手数料（22%）
    pub sales_fee: Yen,
    /// 振込手数料（売上3,000円未満）
    pub transfer_fee_under_3000: Yen,
    /// 振込手数料（売上3,000円以上）
    pub transfer_fee_over_3000: Yen,
    /// 手取り額（3,000円未満の場合）
    pub net_amount_under_3000: Yen,
    /// 手取り額（3,000円以上の場合）
    pub net_amount_over_3000: Yen,
    /// 実際に適用された振込手数料
    pub actual_transfer_fee: Yen,
    /// 手取り額（適用された段階の値）
    pub net_amount: Yen,
}

/// 全プラットフォームの計算結果
///
/// 構築された時点で4プラットフォームすべての結果が揃っていることを
/// 型で保証する。部分的な結果は存在しない。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalculationResult {
    /// 正規化済みの販売価格
    pub price: Yen,
    /// noteの計算結果
    pub note: NoteResult,
    /// tipsの計算結果
    pub tips: TipsResult,
    /// Brainの計算結果
    pub brain: BrainResult,
    /// ココナラの計算結果
    pub coconala: CoconalaResult,
}

/// 手取り額ランキングの1エントリ
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedPlatform {
    /// プラットフォーム
    pub platform: Platform,
    /// 表示名
    pub display_name: &'static str,
    /// 比較に使う手取り額（noteは最大値）
    pub net_amount: Yen,
}
