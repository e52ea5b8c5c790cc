// ==========================================
// 银行业绩看板 - 看板配置读取 Trait
// ==========================================
// 职责: 定义看板运行所需的配置读取接口（不包含实现）
// 约束: 不包含配置写入、不包含业务逻辑
// ==========================================

use crate::config::category_registry::CategoryRegistry;
use crate::config::config_manager::StorageBackend;
use std::error::Error;

// ==========================================
// DashboardConfigReader Trait
// ==========================================
// 实现者: ConfigManager（从 config_kv 表读取）
pub trait DashboardConfigReader: Send + Sync {
    /// 获取反向类别列表（数值越低越好）
    ///
    /// # 默认值
    /// - SML,NPL
    fn get_inverse_categories(&self) -> Result<Vec<String>, Box<dyn Error>>;

    /// 基于反向类别配置构建极性注册表
    fn get_category_registry(&self) -> Result<CategoryRegistry, Box<dyn Error>> {
        let names = self.get_inverse_categories()?;
        Ok(CategoryRegistry::from_inverse_names(names))
    }

    /// 获取数据集存储后端
    ///
    /// # 默认值
    /// - JSON（与历史 banking-data.json 兼容）
    fn get_storage_backend(&self) -> Result<StorageBackend, Box<dyn Error>>;

    /// 获取 JSON 数据文件路径
    ///
    /// # 默认值
    /// - data/banking-data.json
    fn get_data_file_path(&self) -> Result<String, Box<dyn Error>>;

    /// 获取备份目录
    ///
    /// # 默认值
    /// - data/backups
    fn get_backup_dir(&self) -> Result<String, Box<dyn Error>>;

    /// 获取界面语言
    ///
    /// # 默认值
    /// - en
    fn get_display_locale(&self) -> Result<String, Box<dyn Error>>;
}
