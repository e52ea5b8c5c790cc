// ==========================================
// 银行业绩看板 - 达成率计算引擎
// ==========================================
// 职责: 达成率、期间差值、达成等级、改善判定
// 输入: 当前值/目标值/历史值 + 类别极性
// 约束: 纯函数，无共享可变状态
// ==========================================
// 除零不做特殊处理: 结果按 IEEE-754 为 inf / NaN，由展示层决定如何呈现
// ==========================================

use crate::config::category_registry::CategoryRegistry;
use crate::domain::types::{Band, Polarity};

/// 等级阈值
pub const CAUTION_THRESHOLD: f64 = 95.0;
pub const GOOD_THRESHOLD: f64 = 100.0;
pub const EXCELLENT_THRESHOLD: f64 = 105.0;

/// 四舍五入到 2 位小数（对放大后的值做 half-up）
pub fn round2(value: f64) -> f64 {
    (value * 100.0 + 0.5).floor() / 100.0
}

/// 达成率（%）
///
/// - Normal: current / target * 100
/// - Inverse: target / current * 100
pub fn achievement(current: f64, target: f64, polarity: Polarity) -> f64 {
    let ratio = match polarity {
        Polarity::Normal => current / target,
        Polarity::Inverse => target / current,
    };
    round2(ratio * 100.0)
}

/// 期间差值: current - previous（不取整、不按极性调整）
pub fn difference(current: f64, previous: f64) -> f64 {
    current - previous
}

/// 达成等级划分
///
/// - < 95 → Poor
/// - [95, 100) → Caution
/// - [100, 105] → Good
/// - > 105 → Excellent（NaN 不满足任何比较，同样落入此分支）
pub fn classify_band(percentage: f64) -> Band {
    if percentage < CAUTION_THRESHOLD {
        Band::Poor
    } else if percentage < GOOD_THRESHOLD {
        Band::Caution
    } else if percentage <= EXCELLENT_THRESHOLD {
        Band::Good
    } else {
        Band::Excellent
    }
}

/// 差值是否代表改善（严格不等，0 不算改善）
pub fn is_improvement(delta: f64, polarity: Polarity) -> bool {
    match polarity {
        Polarity::Normal => delta > 0.0,
        Polarity::Inverse => delta < 0.0,
    }
}

// ==========================================
// AchievementEngine - 按类别名解析极性
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct AchievementEngine {
    registry: CategoryRegistry,
}

impl AchievementEngine {
    pub fn new(registry: CategoryRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &CategoryRegistry {
        &self.registry
    }

    pub fn polarity(&self, category: &str) -> Polarity {
        self.registry.polarity(category)
    }

    /// 计算类别达成率
    pub fn compute_achievement(&self, current: f64, target: f64, category: &str) -> f64 {
        let polarity = self.polarity(category);
        let result = achievement(current, target, polarity);
        if !result.is_finite() {
            tracing::debug!(
                category,
                current,
                target,
                %polarity,
                "达成率非有限值（分母为 0）"
            );
        }
        result
    }

    pub fn compute_difference(&self, current: f64, previous: f64) -> f64 {
        difference(current, previous)
    }

    pub fn classify_band(&self, percentage: f64) -> Band {
        classify_band(percentage)
    }

    pub fn is_improvement(&self, delta: f64, category: &str) -> bool {
        is_improvement(delta, self.polarity(category))
    }
}
