// ==========================================
// 银行业绩看板 - 数据集存储接口
// ==========================================
// 整体读取、整体替换；不做版本控制与合并
// 实现者: JsonFileDatasetStore, SqliteDatasetStore
// ==========================================

use crate::domain::metrics::Dataset;
use crate::repository::error::RepositoryResult;

pub trait DatasetStore: Send + Sync {
    /// 读取当前快照
    ///
    /// # 返回
    /// - Err(ReadError): 不可读或内容损坏
    /// - Err(NotFound): 尚未保存过任何快照
    fn load(&self) -> RepositoryResult<Dataset>;

    /// 读取当前快照的原始字节（不解析，备份用；内容损坏时同样返回）
    ///
    /// # 返回
    /// - Err(NotFound): 尚未保存过任何快照
    fn load_raw(&self) -> RepositoryResult<Vec<u8>>;

    /// 整体替换当前快照
    fn save(&self, dataset: &Dataset) -> RepositoryResult<()>;

    /// 存储位置描述（日志用）
    fn location(&self) -> String;
}
