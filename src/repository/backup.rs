// ==========================================
// 银行业绩看板 - 数据备份管理
// ==========================================
// 职责: backup / restore / view / reset
// 备份文件: <backup_dir>/banking-data-<ISO 时间戳，':' '.' 替换为 '-'>.json
// 恢复: 按文件名字典序取最新
// 备份内容是存储中的原始字节，损坏的数据也能备份
// ==========================================

use crate::domain::metrics::Dataset;
use crate::domain::sample::default_dataset;
use crate::repository::dataset_store::DatasetStore;
use crate::repository::error::{RepositoryError, RepositoryResult};
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{info, warn};

/// 备份文件名前缀
pub const BACKUP_PREFIX: &str = "banking-data-";

/// 生成备份文件名
pub fn backup_file_name(at: DateTime<Utc>) -> String {
    format!("{}{}.json", BACKUP_PREFIX, at.format("%Y-%m-%dT%H-%M-%S-%3fZ"))
}

pub struct DatasetBackupManager<'a> {
    store: &'a dyn DatasetStore,
    backup_dir: PathBuf,
    /// 与 DashboardApi 共享的写入门控（应用内使用；独立进程不设置）
    write_gate: Option<Arc<Mutex<()>>>,
}

impl<'a> DatasetBackupManager<'a> {
    pub fn new<P: AsRef<Path>>(store: &'a dyn DatasetStore, backup_dir: P) -> Self {
        Self {
            store,
            backup_dir: backup_dir.as_ref().to_path_buf(),
            write_gate: None,
        }
    }

    /// restore / reset 写入前先获取门控
    pub fn with_write_gate(mut self, write_gate: Arc<Mutex<()>>) -> Self {
        self.write_gate = Some(write_gate);
        self
    }

    fn lock_gate(&self) -> RepositoryResult<Option<MutexGuard<'_, ()>>> {
        self.write_gate
            .as_ref()
            .map(|gate| {
                gate.lock()
                    .map_err(|e| RepositoryError::LockError(e.to_string()))
            })
            .transpose()
    }

    fn ensure_backup_dir(&self) -> RepositoryResult<()> {
        std::fs::create_dir_all(&self.backup_dir)
            .map_err(|e| RepositoryError::WriteError(format!("{}: {}", self.backup_dir.display(), e)))
    }

    /// 备份当前数据集
    ///
    /// # 返回
    /// - Ok(Some(path)): 备份文件路径
    /// - Ok(None): 当前没有可备份的数据
    pub fn backup(&self) -> RepositoryResult<Option<PathBuf>> {
        let content = match self.store.load_raw() {
            Ok(content) => content,
            Err(RepositoryError::NotFound(_)) => return Ok(None),
            Err(e) => return Err(e),
        };

        self.ensure_backup_dir()?;
        let path = self.backup_dir.join(backup_file_name(Utc::now()));
        std::fs::write(&path, content)
            .map_err(|e| RepositoryError::WriteError(format!("{}: {}", path.display(), e)))?;

        info!(backup = %path.display(), "备份已创建");
        Ok(Some(path))
    }

    /// 列出全部备份（字典序升序）
    pub fn list_backups(&self) -> RepositoryResult<Vec<PathBuf>> {
        if !self.backup_dir.exists() {
            return Ok(Vec::new());
        }

        let entries = std::fs::read_dir(&self.backup_dir)
            .map_err(|e| RepositoryError::ReadError(format!("{}: {}", self.backup_dir.display(), e)))?;

        let mut backups: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| {
                path.file_name()
                    .and_then(|n| n.to_str())
                    .map(|n| n.starts_with(BACKUP_PREFIX))
                    .unwrap_or(false)
            })
            .collect();
        backups.sort();
        Ok(backups)
    }

    /// 从最新备份恢复
    ///
    /// # 返回
    /// - Ok(Some(path)): 使用的备份文件
    /// - Ok(None): 没有可用备份
    pub fn restore(&self) -> RepositoryResult<Option<PathBuf>> {
        let Some(latest) = self.list_backups()?.pop() else {
            return Ok(None);
        };

        let content = std::fs::read_to_string(&latest)
            .map_err(|e| RepositoryError::ReadError(format!("{}: {}", latest.display(), e)))?;
        let dataset: Dataset = serde_json::from_str(&content)
            .map_err(|e| RepositoryError::ReadError(format!("{}: {}", latest.display(), e)))?;

        let _gate = self.lock_gate()?;
        self.store.save(&dataset)?;
        info!(backup = %latest.display(), target = %self.store.location(), "已从备份恢复");
        Ok(Some(latest))
    }

    /// 查看当前数据集
    pub fn view(&self) -> RepositoryResult<Dataset> {
        self.store.load()
    }

    /// 重置为默认数据（先备份）
    ///
    /// 当前数据无法读取时只记录警告，仍写入默认数据
    pub fn reset(&self) -> RepositoryResult<Dataset> {
        let _gate = self.lock_gate()?;
        match self.backup() {
            Ok(_) => {}
            Err(RepositoryError::ReadError(e)) => {
                warn!(error = %e, "当前数据无法读取，跳过备份");
            }
            Err(e) => return Err(e),
        }

        let dataset = default_dataset();
        self.store.save(&dataset)?;
        info!(target = %self.store.location(), "已重置为默认数据");
        Ok(dataset)
    }
}
