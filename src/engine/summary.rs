// ==========================================
// 银行业绩看板 - 类别摘要构建
// ==========================================
// 职责: 将 Dataset 转换为展示用视图模型
// - 总览卡片: 当前值/目标/达成率/等级
// - 类别详情: DTD/MTD/YTD 差值 + 细分达成率
// 细分达成率沿用所属类别的极性
// ==========================================

use crate::config::palette::{BandColors, BandPalette, PaletteTheme};
use crate::domain::metrics::{CategoryMetrics, Dataset};
use crate::domain::types::{Band, Polarity};
use crate::engine::achievement::AchievementEngine;
use crate::i18n::t;
use serde::Serialize;
use tracing::instrument;

// ==========================================
// 视图模型
// ==========================================

/// 差值期间
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Period {
    DayToDay,
    MonthToDate,
    YearToDate,
}

impl Period {
    pub const ALL: [Period; 3] = [Period::DayToDay, Period::MonthToDate, Period::YearToDate];

    pub fn label_key(self) -> &'static str {
        match self {
            Period::DayToDay => "period.day_to_day",
            Period::MonthToDate => "period.month_to_date",
            Period::YearToDate => "period.year_to_date",
        }
    }

    /// 取对应的历史快照值
    pub fn previous_of(self, metrics: &CategoryMetrics) -> f64 {
        match self {
            Period::DayToDay => metrics.previous_day,
            Period::MonthToDate => metrics.previous_month,
            Period::YearToDate => metrics.previous_year,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PeriodDifference {
    pub period: Period,
    pub label: String,
    pub delta: f64,
    pub improved: bool,
    /// 带符号、千分位的整数文本，如 "+500,000"
    pub formatted: String,
    pub colors: BandColors,
}

#[derive(Debug, Clone, Serialize)]
pub struct SegmentSummary {
    pub name: String,
    pub value: f64,
    pub target: f64,
    pub achievement: f64,
    pub band: Band,
    pub band_label: String,
    pub colors: BandColors,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategorySummary {
    pub category: String,
    pub polarity: Polarity,
    pub current: f64,
    pub target: f64,
    pub achievement: f64,
    pub band: Band,
    pub band_label: String,
    pub colors: BandColors,
    pub differences: Vec<PeriodDifference>,
    pub segments: Vec<SegmentSummary>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryCard {
    pub category: String,
    pub current: f64,
    pub target: f64,
    pub achievement: f64,
    pub band: Band,
    pub band_label: String,
    pub colors: BandColors,
    /// 进度条宽度（达成率封顶 100）
    pub progress_pct: f64,
}

// ==========================================
// SummaryEngine
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct SummaryEngine {
    achievement: AchievementEngine,
}

impl SummaryEngine {
    pub fn new(achievement: AchievementEngine) -> Self {
        Self { achievement }
    }

    pub fn achievement_engine(&self) -> &AchievementEngine {
        &self.achievement
    }

    /// 构建总览卡片（按数据集顺序）
    #[instrument(skip(self, dataset), fields(categories = dataset.len()))]
    pub fn build_overview(&self, dataset: &Dataset) -> Vec<CategoryCard> {
        dataset
            .categories()
            .map(|(category, metrics)| {
                let achievement =
                    self.achievement
                        .compute_achievement(metrics.current, metrics.target, category);
                let band = self.achievement.classify_band(achievement);
                CategoryCard {
                    category: category.clone(),
                    current: metrics.current,
                    target: metrics.target,
                    achievement,
                    band,
                    band_label: t(band.label_key()),
                    colors: BandPalette::colors(band, PaletteTheme::Light),
                    progress_pct: achievement.min(100.0),
                }
            })
            .collect()
    }

    /// 构建单个类别详情
    pub fn build_summary(
        &self,
        category: &str,
        metrics: &CategoryMetrics,
        theme: PaletteTheme,
    ) -> CategorySummary {
        let achievement =
            self.achievement
                .compute_achievement(metrics.current, metrics.target, category);
        let band = self.achievement.classify_band(achievement);

        let differences = Period::ALL
            .iter()
            .map(|&period| {
                let delta = self
                    .achievement
                    .compute_difference(metrics.current, period.previous_of(metrics));
                let improved = self.achievement.is_improvement(delta, category);
                PeriodDifference {
                    period,
                    label: t(period.label_key()),
                    delta,
                    improved,
                    formatted: format_difference(delta),
                    colors: BandPalette::difference_colors(improved),
                }
            })
            .collect();

        let segments = metrics
            .segments
            .iter()
            .map(|segment| {
                let seg_achievement =
                    self.achievement
                        .compute_achievement(segment.value, segment.target, category);
                let seg_band = self.achievement.classify_band(seg_achievement);
                SegmentSummary {
                    name: segment.name.clone(),
                    value: segment.value,
                    target: segment.target,
                    achievement: seg_achievement,
                    band: seg_band,
                    band_label: t(seg_band.label_key()),
                    colors: BandPalette::colors(seg_band, theme),
                }
            })
            .collect();

        CategorySummary {
            category: category.to_string(),
            polarity: self.achievement.polarity(category),
            current: metrics.current,
            target: metrics.target,
            achievement,
            band,
            band_label: t(band.label_key()),
            colors: BandPalette::colors(band, theme),
            differences,
            segments,
        }
    }
}

// ==========================================
// 差值格式化
// ==========================================

/// 格式化差值: 先取整（half-up），非负加 "+"，千分位以 "," 分隔
///
/// 非有限值原样输出（"NaN" / "inf" / "-inf"）
pub fn format_difference(delta: f64) -> String {
    if !delta.is_finite() {
        return delta.to_string();
    }

    let rounded = (delta + 0.5).floor();
    // -0 视为 0
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    let sign = if rounded >= 0.0 { "+" } else { "-" };

    format!("{}{}", sign, group_thousands(&format!("{:.0}", rounded.abs())))
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::sample::default_dataset;

    #[test]
    fn test_format_difference() {
        assert_eq!(format_difference(500_000.0), "+500,000");
        assert_eq!(format_difference(-100_000.0), "-100,000");
        assert_eq!(format_difference(0.0), "+0");
        assert_eq!(format_difference(-0.4), "+0");
        assert_eq!(format_difference(999.5), "+1,000");
        assert_eq!(format_difference(-1_234_567.2), "-1,234,567");
        assert_eq!(format_difference(12.0), "+12");
        assert_eq!(format_difference(f64::NAN), "NaN");
    }

    #[test]
    fn test_overview_cards() {
        let engine = SummaryEngine::default();
        let cards = engine.build_overview(&default_dataset());

        assert_eq!(cards.len(), 5);
        let pinjaman = &cards[0];
        assert_eq!(pinjaman.category, "Pinjaman");
        assert_eq!(pinjaman.achievement, 90.0);
        assert_eq!(pinjaman.band, Band::Poor);
        assert_eq!(pinjaman.progress_pct, 90.0);

        let sml = &cards[1];
        assert_eq!(sml.achievement, 117.65);
        assert_eq!(sml.band, Band::Excellent);
        assert_eq!(sml.progress_pct, 100.0);
    }

    #[test]
    fn test_sml_summary_differences() {
        let engine = SummaryEngine::default();
        let dataset = default_dataset();
        let summary = engine.build_summary("SML", dataset.get("SML").unwrap(), PaletteTheme::Light);

        assert_eq!(summary.polarity, Polarity::Inverse);
        assert_eq!(summary.differences.len(), 3);

        // DTD: 8.5M - 8.6M = -100,000 → 反向类别视为改善
        let dtd = &summary.differences[0];
        assert_eq!(dtd.period, Period::DayToDay);
        assert_eq!(dtd.delta, -100_000.0);
        assert!(dtd.improved);
        assert_eq!(dtd.formatted, "-100,000");

        // YTD: 8.5M - 9.7M
        let ytd = &summary.differences[2];
        assert_eq!(ytd.delta, -1_200_000.0);
        assert!(ytd.improved);
    }

    #[test]
    fn test_segments_use_category_polarity() {
        let engine = SummaryEngine::default();
        let dataset = default_dataset();
        let summary = engine.build_summary("NPL", dataset.get("NPL").unwrap(), PaletteTheme::Dark);

        // Micro: 目标 400K / 实际 600K = 66.67
        let micro = &summary.segments[0];
        assert_eq!(micro.name, "Micro");
        assert_eq!(micro.achievement, 66.67);
        assert_eq!(micro.band, Band::Poor);
        assert!(micro.colors.glow.is_some());
    }

    #[test]
    fn test_normal_category_differences() {
        let engine = SummaryEngine::default();
        let dataset = default_dataset();
        let summary =
            engine.build_summary("Pinjaman", dataset.get("Pinjaman").unwrap(), PaletteTheme::Light);

        let dtd = &summary.differences[0];
        assert_eq!(dtd.delta, 500_000.0);
        assert!(dtd.improved);
        assert_eq!(dtd.formatted, "+500,000");

        // Consumer 细分正好达标
        let consumer = summary.segments.iter().find(|s| s.name == "Consumer").unwrap();
        assert_eq!(consumer.achievement, 100.0);
        assert_eq!(consumer.band, Band::Good);
    }
}
