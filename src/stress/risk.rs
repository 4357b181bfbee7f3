/// 関節角度から推定した負荷レベル
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

/// 安全域の色 (RGB)
const COLOR_SAFE: u32 = 0x00FF00; // 緑

/// 警告域の色 (RGB)
const COLOR_WARN: u32 = 0xFFFF00; // 黄色

/// 危険域の色 (RGB)
const COLOR_DANGER: u32 = 0xFF0000; // 赤

impl RiskLevel {
    /// 肘関節向けに調整した固定閾値で角度を分類する
    ///
    /// - 160度超または40度未満: 極端な屈曲/伸展 (High)
    /// - 140度超または60度未満: 中程度の逸脱 (Medium)
    /// - それ以外（おおむね80〜120度の中立域）: Low
    ///
    /// 比較は厳密な大小のみ。境界値 160/140/60/40 は上のレベルに入らない。
    pub fn classify(angle: f32) -> Self {
        if angle > 160.0 || angle < 40.0 {
            Self::High
        } else if angle > 140.0 || angle < 60.0 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    /// オーバーレイ表示用ラベル
    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
        }
    }

    /// オーバーレイ表示色 (RGB)
    pub fn color(&self) -> u32 {
        match self {
            Self::Low => COLOR_SAFE,
            Self::Medium => COLOR_WARN,
            Self::High => COLOR_DANGER,
        }
    }
}
