// ==========================================
// 银行业绩看板 - JSON 文件存储
// ==========================================
// 格式: { "data": {...}, "lastUpdated": "..." }（缩进 2 空格）
// 写入为整文件覆盖，文件级不加锁（写入串行化由 API 层负责）
// ==========================================

use crate::domain::metrics::Dataset;
use crate::repository::dataset_store::DatasetStore;
use crate::repository::error::{RepositoryError, RepositoryResult};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct JsonFileDatasetStore {
    path: PathBuf,
}

impl JsonFileDatasetStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DatasetStore for JsonFileDatasetStore {
    fn load(&self) -> RepositoryResult<Dataset> {
        let content = std::fs::read_to_string(&self.path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => RepositoryError::NotFound(self.path.display().to_string()),
            _ => RepositoryError::ReadError(format!("{}: {}", self.path.display(), e)),
        })?;

        let dataset: Dataset = serde_json::from_str(&content)
            .map_err(|e| RepositoryError::ReadError(format!("{}: {}", self.path.display(), e)))?;

        debug!(path = %self.path.display(), categories = dataset.len(), "数据集已读取");
        Ok(dataset)
    }

    fn load_raw(&self) -> RepositoryResult<Vec<u8>> {
        std::fs::read(&self.path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => RepositoryError::NotFound(self.path.display().to_string()),
            _ => RepositoryError::ReadError(format!("{}: {}", self.path.display(), e)),
        })
    }

    fn save(&self, dataset: &Dataset) -> RepositoryResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| RepositoryError::WriteError(e.to_string()))?;
            }
        }

        let content = serde_json::to_string_pretty(dataset)
            .map_err(|e| RepositoryError::WriteError(e.to_string()))?;
        std::fs::write(&self.path, content)
            .map_err(|e| RepositoryError::WriteError(format!("{}: {}", self.path.display(), e)))?;

        debug!(path = %self.path.display(), categories = dataset.len(), "数据集已写入");
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
