// ==========================================
// 银行业绩看板 - 数据仓储层
// ==========================================
// 红线: Repository 不含业务逻辑
// ==========================================
// 职责: 数据集快照的读写、备份与恢复
// ==========================================

pub mod backup;
pub mod dataset_store;
pub mod error;
pub mod json_store;
pub mod sqlite_store;

// 重导出核心仓储
pub use backup::{backup_file_name, DatasetBackupManager, BACKUP_PREFIX};
pub use dataset_store::DatasetStore;
pub use error::{RepositoryError, RepositoryResult};
pub use json_store::JsonFileDatasetStore;
pub use sqlite_store::SqliteDatasetStore;
