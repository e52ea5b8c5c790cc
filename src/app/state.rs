// ==========================================
// 银行业绩看板 - 应用状态
// ==========================================
// 职责: 管理应用级别的共享状态和API实例
// ==========================================

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::api::{DashboardApi, ImportApi};
use crate::config::config_manager::{ConfigManager, StorageBackend};
use crate::config::dashboard_config_trait::DashboardConfigReader;
use crate::db::open_sqlite_connection;
use crate::domain::sample::default_dataset;
use crate::engine::{AchievementEngine, SummaryEngine};
use crate::i18n;
use crate::importer::{DatasetCodec, DatasetImporterImpl};
use crate::repository::{
    DatasetBackupManager, DatasetStore, JsonFileDatasetStore, RepositoryError,
    SqliteDatasetStore,
};

/// 应用状态
///
/// 包含所有API实例和共享资源
/// 在Tauri应用中作为全局状态管理
pub struct AppState {
    /// 数据库路径（配置表 + SQLite 快照）
    pub db_path: String,

    /// 配置管理器
    pub config_manager: Arc<ConfigManager>,

    /// 数据集存储（按 storage_backend 选择）
    pub store: Arc<dyn DatasetStore>,

    /// 备份目录
    pub backup_dir: PathBuf,

    /// 写入门控（保存/上传/恢复/重置共享）
    pub write_gate: Arc<Mutex<()>>,

    /// 看板API
    pub dashboard_api: Arc<DashboardApi>,

    /// 导入/导出API
    pub import_api: Arc<ImportApi>,
}

impl AppState {
    /// 创建新的AppState实例
    ///
    /// # 参数
    /// - db_path: 数据库文件路径
    ///
    /// # 说明
    /// 该方法会：
    /// 1. 读取配置（极性、存储后端、路径、语言）
    /// 2. 初始化存储，空库时写入默认数据集
    /// 3. 创建所有API实例
    pub fn new(db_path: String) -> Result<Self, String> {
        tracing::info!("初始化AppState，数据库路径: {}", db_path);

        // 共享连接: 配置表与 SQLite 快照表同库
        let conn = open_sqlite_connection(&db_path)
            .map_err(|e| format!("无法打开数据库: {}", e))?;
        let conn = Arc::new(Mutex::new(conn));

        // ==========================================
        // 初始化配置层
        // ==========================================
        let config_manager = Arc::new(
            ConfigManager::from_connection(conn.clone())
                .map_err(|e| format!("无法创建ConfigManager: {}", e))?,
        );

        let locale = config_manager
            .get_display_locale()
            .map_err(|e| format!("读取语言配置失败: {}", e))?;
        i18n::set_locale(&locale);

        let registry = config_manager
            .get_category_registry()
            .map_err(|e| format!("读取类别极性配置失败: {}", e))?;
        tracing::info!(inverse = ?registry.inverse_categories(), "类别极性已加载");

        let base_dir = Path::new(&db_path)
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        let backup_dir = resolve_path(
            &base_dir,
            &config_manager
                .get_backup_dir()
                .map_err(|e| format!("读取备份目录配置失败: {}", e))?,
        );

        // ==========================================
        // 初始化Repository层
        // ==========================================
        let backend = config_manager
            .get_storage_backend()
            .map_err(|e| format!("读取存储后端配置失败: {}", e))?;

        let store: Arc<dyn DatasetStore> = match backend {
            StorageBackend::Json => {
                let data_path = resolve_path(
                    &base_dir,
                    &config_manager
                        .get_data_file_path()
                        .map_err(|e| format!("读取数据文件配置失败: {}", e))?,
                );
                Arc::new(JsonFileDatasetStore::new(data_path))
            }
            StorageBackend::Sqlite => Arc::new(
                SqliteDatasetStore::from_connection(conn.clone())
                    .map_err(|e| format!("无法创建SqliteDatasetStore: {}", e))?,
            ),
        };
        tracing::info!(backend = %backend, location = %store.location(), "数据集存储已就绪");

        seed_if_empty(store.as_ref())?;

        // ==========================================
        // 初始化Engine层
        // ==========================================
        let summary_engine = SummaryEngine::new(AchievementEngine::new(registry));

        // ==========================================
        // 初始化API层
        // ==========================================

        // 写入门控（保存/上传/恢复/重置共享）
        let write_gate = Arc::new(Mutex::new(()));

        let dashboard_api = Arc::new(DashboardApi::new(
            store.clone(),
            summary_engine,
            write_gate.clone(),
        ));

        let importer = Arc::new(DatasetImporterImpl::new(DatasetCodec::default()));
        let import_api = Arc::new(ImportApi::new(importer, dashboard_api.clone()));

        tracing::info!("AppState初始化完成");

        Ok(Self {
            db_path,
            config_manager,
            store,
            backup_dir,
            write_gate,
            dashboard_api,
            import_api,
        })
    }

    /// 获取数据库路径
    pub fn get_db_path(&self) -> &str {
        &self.db_path
    }

    /// 备份管理器（备份/恢复/重置）
    pub fn backup_manager(&self) -> DatasetBackupManager<'_> {
        DatasetBackupManager::new(self.store.as_ref(), &self.backup_dir)
            .with_write_gate(self.write_gate.clone())
    }
}

/// 首次启动时写入默认数据集；已有数据（含损坏数据）保持不动
fn seed_if_empty(store: &dyn DatasetStore) -> Result<(), String> {
    match store.load() {
        Ok(_) => Ok(()),
        Err(RepositoryError::NotFound(_)) => {
            tracing::info!(location = %store.location(), "数据集不存在，写入默认数据");
            store
                .save(&default_dataset())
                .map_err(|e| format!("默认数据写入失败: {}", e))
        }
        Err(e) => {
            tracing::warn!(error = %e, "数据集读取失败，保留原文件");
            Ok(())
        }
    }
}

/// 相对路径以数据库所在目录为基准
fn resolve_path(base_dir: &Path, configured: &str) -> PathBuf {
    let path = PathBuf::from(configured.trim());
    if path.is_absolute() {
        path
    } else {
        base_dir.join(path)
    }
}

// ==========================================
// 默认数据库路径辅助函数
// ==========================================

/// 获取默认数据库路径
///
/// # 返回
/// - 环境变量 BANKING_DASHBOARD_DB_PATH（若设置）
/// - 开发环境: 用户数据目录/banking-dashboard-dev/banking_dashboard.db
/// - 生产环境: 用户数据目录/banking-dashboard/banking_dashboard.db
pub fn get_default_db_path() -> String {
    if let Ok(path) = std::env::var("BANKING_DASHBOARD_DB_PATH") {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
    }

    let mut path = PathBuf::from("./banking_dashboard.db");

    if let Some(data_dir) = dirs::data_dir() {
        #[cfg(debug_assertions)]
        {
            path = data_dir.join("banking-dashboard-dev");
        }

        #[cfg(not(debug_assertions))]
        {
            path = data_dir.join("banking-dashboard");
        }

        std::fs::create_dir_all(&path).ok();
        path = path.join("banking_dashboard.db");
    }

    path.to_string_lossy().to_string()
}
