// ==========================================
// 银行业绩看板 - 看板 API
// ==========================================
// 职责: 数据集读取/保存 + 总览卡片 + 类别详情
// 写入经由写入门控串行化（与 ImportApi 共享同一把锁）
// ==========================================

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{error, info, instrument};

use crate::api::error::{ApiError, ApiResult};
use crate::config::palette::PaletteTheme;
use crate::domain::metrics::{CategoryMetrics, Dataset};
use crate::engine::summary::{CategoryCard, CategorySummary, SummaryEngine};
use crate::repository::dataset_store::DatasetStore;

/// 保存请求（lastUpdated 缺省时取当前时间）
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveDatasetRequest {
    pub data: Option<IndexMap<String, CategoryMetrics>>,
    pub last_updated: Option<DateTime<Utc>>,
}

/// 保存响应
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveDatasetResponse {
    pub success: bool,
    pub last_updated: DateTime<Utc>,
}

// ==========================================
// DashboardApi - 看板 API
// ==========================================
pub struct DashboardApi {
    store: Arc<dyn DatasetStore>,
    summary_engine: SummaryEngine,
    /// 写入门控（保存/上传/恢复/重置共享，见 AppState::backup_manager）
    write_gate: Arc<Mutex<()>>,
}

impl DashboardApi {
    /// 创建新的DashboardApi实例
    ///
    /// # 参数
    /// - store: 数据集存储
    /// - summary_engine: 摘要构建引擎（携带类别极性配置）
    /// - write_gate: 写入门控
    pub fn new(
        store: Arc<dyn DatasetStore>,
        summary_engine: SummaryEngine,
        write_gate: Arc<Mutex<()>>,
    ) -> Self {
        Self {
            store,
            summary_engine,
            write_gate,
        }
    }

    pub fn summary_engine(&self) -> &SummaryEngine {
        &self.summary_engine
    }

    /// 读取当前数据集
    pub fn fetch_dataset(&self) -> ApiResult<Dataset> {
        let dataset = self.store.load().map_err(|e| {
            error!(error = %e, location = %self.store.location(), "数据集读取失败");
            e
        })?;
        Ok(dataset)
    }

    /// 整体替换数据集
    ///
    /// # 返回
    /// - Ok(SaveDatasetResponse): 实际写入的 lastUpdated
    /// - Err(InvalidInput): 请求缺少 data
    #[instrument(skip(self, request))]
    pub fn save_dataset(&self, request: SaveDatasetRequest) -> ApiResult<SaveDatasetResponse> {
        let data = request
            .data
            .ok_or_else(|| ApiError::InvalidInput("No data provided".to_string()))?;

        let dataset = Dataset {
            data,
            last_updated: request.last_updated.unwrap_or_else(Utc::now),
        };
        self.persist(&dataset)?;

        info!(categories = dataset.len(), "数据集已保存");
        Ok(SaveDatasetResponse {
            success: true,
            last_updated: dataset.last_updated,
        })
    }

    /// 在写入门控内落库
    pub(crate) fn persist(&self, dataset: &Dataset) -> ApiResult<()> {
        let _guard = self
            .write_gate
            .lock()
            .map_err(|e| ApiError::InternalError(format!("写入门控获取失败: {}", e)))?;

        self.store.save(dataset).map_err(|e| {
            error!(error = %e, location = %self.store.location(), "数据集写入失败");
            e
        })?;
        Ok(())
    }

    /// 总览卡片（每类别一张）
    pub fn get_overview(&self) -> ApiResult<Vec<CategoryCard>> {
        let dataset = self.fetch_dataset()?;
        Ok(self.summary_engine.build_overview(&dataset))
    }

    /// 类别详情（详情页使用 Light 配色）
    pub fn get_category_detail(&self, category: &str) -> ApiResult<CategorySummary> {
        self.get_category_detail_with_theme(category, PaletteTheme::Light)
    }

    pub fn get_category_detail_with_theme(
        &self,
        category: &str,
        theme: PaletteTheme,
    ) -> ApiResult<CategorySummary> {
        let dataset = self.fetch_dataset()?;
        let metrics = dataset
            .get(category)
            .ok_or_else(|| ApiError::CategoryNotFound(category.to_string()))?;

        Ok(self.summary_engine.build_summary(category, metrics, theme))
    }

    /// 轮播大屏: 全部类别详情（Dark 配色，按数据集顺序）
    pub fn get_looping_details(&self) -> ApiResult<Vec<CategorySummary>> {
        let dataset = self.fetch_dataset()?;
        Ok(dataset
            .categories()
            .map(|(category, metrics)| {
                self.summary_engine
                    .build_summary(category, metrics, PaletteTheme::Dark)
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::sample::default_dataset;
    use crate::repository::json_store::JsonFileDatasetStore;

    fn api(dir: &tempfile::TempDir) -> DashboardApi {
        let store = Arc::new(JsonFileDatasetStore::new(dir.path().join("banking-data.json")));
        DashboardApi::new(store, SummaryEngine::default(), Arc::new(Mutex::new(())))
    }

    #[test]
    fn test_fetch_without_data_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = api(&dir).fetch_dataset();
        assert!(matches!(result, Err(ApiError::FetchFailed(_))));
    }

    #[test]
    fn test_store_errors_map_to_fetch_and_save_failures() {
        let dir = tempfile::tempdir().unwrap();
        // 数据路径是目录: 读写都失败
        let data_dir = dir.path().join("banking-data.json");
        std::fs::create_dir_all(&data_dir).unwrap();
        let api = DashboardApi::new(
            Arc::new(JsonFileDatasetStore::new(&data_dir)),
            SummaryEngine::default(),
            Arc::new(Mutex::new(())),
        );

        assert!(matches!(api.fetch_dataset(), Err(ApiError::FetchFailed(_))));
        assert!(matches!(api.get_overview(), Err(ApiError::FetchFailed(_))));

        let result = api.save_dataset(SaveDatasetRequest {
            data: Some(default_dataset().data),
            last_updated: None,
        });
        assert!(matches!(result, Err(ApiError::SaveFailed(_))));
    }

    #[test]
    fn test_save_without_data_is_invalid_input() {
        let dir = tempfile::tempdir().unwrap();
        let result = api(&dir).save_dataset(SaveDatasetRequest {
            data: None,
            last_updated: None,
        });
        assert!(matches!(result, Err(ApiError::InvalidInput(_))));
    }

    #[test]
    fn test_save_keeps_caller_timestamp() {
        let dir = tempfile::tempdir().unwrap();
        let api = api(&dir);
        let stamp: DateTime<Utc> = "2025-01-20T08:30:00Z".parse().unwrap();

        let response = api
            .save_dataset(SaveDatasetRequest {
                data: Some(default_dataset().data),
                last_updated: Some(stamp),
            })
            .unwrap();
        assert_eq!(response.last_updated, stamp);
        assert_eq!(api.fetch_dataset().unwrap().last_updated, stamp);
    }

    #[test]
    fn test_category_detail_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let api = api(&dir);
        api.persist(&default_dataset()).unwrap();

        assert!(api.get_category_detail("SML").is_ok());
        assert!(matches!(
            api.get_category_detail("Biaya"),
            Err(ApiError::CategoryNotFound(_))
        ));
        assert_eq!(api.get_looping_details().unwrap().len(), 5);
    }
}
