// ==========================================
// 银行业绩看板 - 引擎层
// ==========================================
// 职责: 达成率/差值/等级计算 + 视图摘要构建
// 红线: Engine 不做 I/O，不读写存储
// ==========================================

pub mod achievement;
pub mod summary;

// 重导出核心引擎
pub use achievement::{
    achievement, classify_band, difference, is_improvement, round2, AchievementEngine,
};
pub use summary::{
    format_difference, CategoryCard, CategorySummary, Period, PeriodDifference, SegmentSummary,
    SummaryEngine,
};
