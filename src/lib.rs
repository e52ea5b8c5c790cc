// ==========================================
// 银行业绩看板 - 核心库
// ==========================================
// 技术栈: Tauri + Rust + SQLite/JSON
// 系统定位: 分行业绩指标看板（达成率、等级、同比差值）
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "en");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 指标数据模型
pub mod domain;

// 数据仓储层 - 数据集快照
pub mod repository;

// 引擎层 - 达成率与摘要
pub mod engine;

// 导入层 - 表格读写
pub mod importer;

// 配置层 - 系统配置
pub mod config;

// 数据库基础设施（连接初始化/PRAGMA 统一）
pub mod db;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// API 层 - 业务接口
pub mod api;

// 应用层 - Tauri 集成
pub mod app;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{Band, Polarity};

// 领域实体
pub use domain::{CategoryMetrics, Dataset, FlatRow, Segment};

// 引擎
pub use engine::{AchievementEngine, SummaryEngine};

// API
pub use api::{ApiError, DashboardApi, ImportApi};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "Banking Performance Dashboard";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
