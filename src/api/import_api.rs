// ==========================================
// 银行业绩看板 - 导入/导出 API
// ==========================================
// 职责: 上传解析并整体替换数据集、模板下载、数据导出
// 上传失败时不落库任何数据
// ==========================================

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{error, info, instrument, warn};

use crate::api::dashboard_api::DashboardApi;
use crate::api::error::{ApiError, ApiResult};
use crate::domain::metrics::Dataset;
use crate::importer::{
    build_template, CsvWriter, DatasetImporter, DatasetImporterImpl, ExcelWriter, ImportReport,
    RowWriter, ValidationGap, TEMPLATE_FILE_NAME,
};

/// 上传响应
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub success: bool,
    pub data: Dataset,
    pub last_updated: DateTime<Utc>,
    /// 导入批次ID（日志追溯用）
    pub import_batch_id: String,
    /// 因缺少汇总行而丢弃的类别
    pub validation_gaps: Vec<ValidationGap>,
    /// 因类别为空而跳过的行数
    pub skipped_rows: usize,
    pub elapsed_ms: u64,
}

impl UploadResponse {
    fn from_report(report: ImportReport) -> Self {
        Self {
            success: true,
            last_updated: report.dataset.last_updated,
            data: report.dataset,
            import_batch_id: report.batch_id,
            validation_gaps: report.validation_gaps,
            skipped_rows: report.skipped_rows,
            elapsed_ms: report.elapsed_ms,
        }
    }
}

/// 导出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Xlsx,
    Csv,
}

/// 文件下载内容
#[derive(Debug, Clone, Serialize)]
pub struct FileDownload {
    pub file_name: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";
const CSV_CONTENT_TYPE: &str = "text/csv";

/// 导入API
pub struct ImportApi {
    importer: Arc<DatasetImporterImpl>,
    dashboard_api: Arc<DashboardApi>,
}

impl ImportApi {
    /// 创建新的ImportApi实例
    ///
    /// # 参数
    /// - importer: 数据集导入器
    /// - dashboard_api: 复用其存储与写入门控
    pub fn new(importer: Arc<DatasetImporterImpl>, dashboard_api: Arc<DashboardApi>) -> Self {
        Self {
            importer,
            dashboard_api,
        }
    }

    /// 上传表格并整体替换数据集
    ///
    /// # 参数
    /// - file_name: 原始文件名
    /// - bytes: 文件内容
    ///
    /// # 返回
    /// - Ok(UploadResponse): 新数据集（lastUpdated 为本次时间）+ 解码报告
    /// - Err(ApiError): 单一失败，未落库
    #[instrument(skip(self, bytes), fields(size = bytes.len()))]
    pub async fn upload_dataset(&self, file_name: &str, bytes: &[u8]) -> ApiResult<UploadResponse> {
        if bytes.is_empty() {
            return Err(ApiError::InvalidInput("No file provided".to_string()));
        }

        let report = self
            .importer
            .import_bytes(file_name, bytes)
            .await
            .map_err(|e| {
                error!(error = %e, file_name, "上传文件处理失败");
                ApiError::from(e)
            })?;

        self.commit(report)
    }

    /// 从本地文件上传（桌面端选择文件）
    pub async fn upload_file(&self, file_path: &str) -> ApiResult<UploadResponse> {
        if file_path.trim().is_empty() {
            return Err(ApiError::InvalidInput("No file provided".to_string()));
        }

        let report = self.importer.import_file(file_path).await.map_err(|e| {
            error!(error = %e, file_path, "上传文件处理失败");
            ApiError::from(e)
        })?;

        self.commit(report)
    }

    fn commit(&self, report: ImportReport) -> ApiResult<UploadResponse> {
        if !report.validation_gaps.is_empty() {
            let names: Vec<&str> = report
                .validation_gaps
                .iter()
                .map(|g| g.category.as_str())
                .collect();
            warn!(batch_id = %report.batch_id, dropped = ?names, "部分类别未导入");
        }

        self.dashboard_api.persist(&report.dataset).map_err(|e| {
            error!(batch_id = %report.batch_id, error = %e, "上传数据落库失败");
            ApiError::UploadFailed(e.to_string())
        })?;

        info!(
            batch_id = %report.batch_id,
            categories = report.dataset.len(),
            "上传数据已生效"
        );
        Ok(UploadResponse::from_report(report))
    }

    /// 下载上传模板（固定示例数据）
    pub fn download_template(&self) -> ApiResult<FileDownload> {
        let bytes = build_template(self.importer.codec()).map_err(|e| {
            error!(error = %e, "模板生成失败");
            ApiError::TemplateFailed(e.to_string())
        })?;

        Ok(FileDownload {
            file_name: TEMPLATE_FILE_NAME.to_string(),
            content_type: XLSX_CONTENT_TYPE,
            bytes,
        })
    }

    /// 导出当前数据集
    pub fn export_dataset(&self, format: ExportFormat) -> ApiResult<FileDownload> {
        let dataset = self.dashboard_api.fetch_dataset()?;
        let rows = self.importer.codec().encode(&dataset);

        let (writer, content_type): (&dyn RowWriter, &'static str) = match format {
            ExportFormat::Xlsx => (&ExcelWriter as &dyn RowWriter, XLSX_CONTENT_TYPE),
            ExportFormat::Csv => (&CsvWriter as &dyn RowWriter, CSV_CONTENT_TYPE),
        };

        let bytes = writer.write_rows(&rows).map_err(|e| {
            error!(error = %e, "数据导出失败");
            ApiError::ExportFailed(e.to_string())
        })?;

        Ok(FileDownload {
            file_name: format!(
                "banking-data-{}.{}",
                dataset.last_updated.format("%Y-%m-%d"),
                writer.file_extension()
            ),
            content_type,
            bytes,
        })
    }
}
