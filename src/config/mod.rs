// ==========================================
// 银行业绩看板 - 配置层
// ==========================================
// 职责: 系统配置管理、类别极性注册表、等级配色表
// 存储: config_kv 表
// ==========================================

pub mod category_registry;
pub mod config_manager;
pub mod dashboard_config_trait;
pub mod palette;

// 重导出
pub use category_registry::{CategoryRegistry, DEFAULT_INVERSE_CATEGORIES};
pub use config_manager::{config_keys, ConfigManager, StorageBackend};
pub use dashboard_config_trait::DashboardConfigReader;
pub use palette::{BandColors, BandPalette, PaletteTheme};
