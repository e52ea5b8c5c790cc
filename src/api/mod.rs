// ==========================================
// 银行业绩看板 - API 层
// ==========================================
// 职责: 提供业务 API 接口,供 Tauri 命令与命令行工具调用
// ==========================================

pub mod dashboard_api;
pub mod error;
pub mod import_api;

// 重导出核心类型
pub use dashboard_api::{DashboardApi, SaveDatasetRequest, SaveDatasetResponse};
pub use error::{ApiError, ApiResult};
pub use import_api::{ExportFormat, FileDownload, ImportApi, UploadResponse};
