// ==========================================
// 银行业绩看板 - SQLite 快照存储
// ==========================================
// 表: dataset_snapshot（单行，id = 1）
// 写入在事务内完成: 要么整体替换，要么保持原值
// ==========================================

use crate::db::open_sqlite_connection;
use crate::domain::metrics::Dataset;
use crate::repository::dataset_store::DatasetStore;
use crate::repository::error::{RepositoryError, RepositoryResult};
use rusqlite::{params, Connection, OptionalExtension};
use std::sync::{Arc, Mutex};
use tracing::debug;

pub struct SqliteDatasetStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteDatasetStore {
    /// 创建新的 SqliteDatasetStore 实例
    pub fn new(db_path: &str) -> RepositoryResult<Self> {
        let conn = open_sqlite_connection(db_path)?;
        Self::from_connection(Arc::new(Mutex::new(conn)))
    }

    /// 从已有连接创建（确保表存在，幂等）
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> RepositoryResult<Self> {
        let store = Self { conn };
        store.ensure_table()?;
        Ok(store)
    }

    fn get_conn(&self) -> RepositoryResult<std::sync::MutexGuard<Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    fn ensure_table(&self) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS dataset_snapshot (
                id INTEGER PRIMARY KEY CHECK (id = 1),
                payload_json TEXT NOT NULL,
                last_updated TEXT NOT NULL,
                saved_at TEXT NOT NULL DEFAULT (datetime('now'))
            );
            "#,
        )?;
        Ok(())
    }
}

impl DatasetStore for SqliteDatasetStore {
    fn load(&self) -> RepositoryResult<Dataset> {
        let payload = self.load_raw()?;
        serde_json::from_slice(&payload).map_err(|e| RepositoryError::ReadError(e.to_string()))
    }

    fn load_raw(&self) -> RepositoryResult<Vec<u8>> {
        let conn = self.get_conn()?;
        let payload: Option<String> = conn
            .query_row(
                "SELECT payload_json FROM dataset_snapshot WHERE id = 1",
                [],
                |row| row.get(0),
            )
            .optional()
            .map_err(|e| RepositoryError::ReadError(e.to_string()))?;

        payload
            .map(String::into_bytes)
            .ok_or_else(|| RepositoryError::NotFound("dataset_snapshot".to_string()))
    }

    fn save(&self, dataset: &Dataset) -> RepositoryResult<()> {
        let payload = serde_json::to_string(dataset)
            .map_err(|e| RepositoryError::WriteError(e.to_string()))?;

        let mut conn = self.get_conn()?;
        let tx = conn
            .transaction()
            .map_err(|e| RepositoryError::DatabaseTransactionError(e.to_string()))?;
        tx.execute(
            r#"
            INSERT INTO dataset_snapshot (id, payload_json, last_updated)
            VALUES (1, ?1, ?2)
            ON CONFLICT(id) DO UPDATE SET
                payload_json = excluded.payload_json,
                last_updated = excluded.last_updated,
                saved_at = datetime('now')
            "#,
            params![payload, dataset.last_updated.to_rfc3339()],
        )
        .map_err(|e| RepositoryError::WriteError(e.to_string()))?;
        tx.commit()
            .map_err(|e| RepositoryError::DatabaseTransactionError(e.to_string()))?;

        debug!(categories = dataset.len(), "快照已提交");
        Ok(())
    }

    fn location(&self) -> String {
        "sqlite:dataset_snapshot".to_string()
    }
}
