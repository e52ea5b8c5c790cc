// ==========================================
// 银行业绩看板 - 数据集导入器实现
// ==========================================
// 职责: 整合导入流程，从文件内容到 Dataset
// 流程: 解析 → 映射 → 层级重建 → 报告
// 落库由调用方（API 层）在写入门控内完成
// ==========================================

use crate::domain::metrics::Dataset;
use crate::importer::codec::{DatasetCodec, ValidationGap};
use crate::importer::dataset_importer_trait::DatasetImporter;
use crate::importer::error::ImportResult;
use crate::importer::file_parser::UniversalFileParser;
use serde::Serialize;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, error, info, instrument, warn};
use uuid::Uuid;

/// 单次导入结果
#[derive(Debug, Clone, Serialize)]
pub struct ImportReport {
    pub batch_id: String,
    pub file_name: String,
    pub dataset: Dataset,
    /// 解析出的非空行数
    pub total_rows: usize,
    pub validation_gaps: Vec<ValidationGap>,
    pub skipped_rows: usize,
    pub elapsed_ms: u64,
}

// ==========================================
// DatasetImporterImpl
// ==========================================
pub struct DatasetImporterImpl {
    file_parser: UniversalFileParser,
    codec: DatasetCodec,
}

impl Default for DatasetImporterImpl {
    fn default() -> Self {
        Self::new(DatasetCodec::default())
    }
}

impl DatasetImporterImpl {
    pub fn new(codec: DatasetCodec) -> Self {
        Self {
            file_parser: UniversalFileParser,
            codec,
        }
    }

    pub fn codec(&self) -> &DatasetCodec {
        &self.codec
    }

    fn run_pipeline(&self, batch_id: String, file_name: &str, bytes: &[u8]) -> ImportResult<ImportReport> {
        let start_time = Instant::now();

        // === 步骤 1: 解析文件 ===
        debug!("步骤 1: 解析文件");
        let records = self.file_parser.parse_bytes(file_name, bytes).map_err(|e| {
            error!(error = %e, "文件解析失败");
            e
        })?;
        let total_rows = records.len();
        info!(total_rows, "文件解析完成");

        // === 步骤 2: 映射 + 层级重建 ===
        debug!("步骤 2: 层级重建");
        let outcome = self.codec.decode(&records);

        if outcome.skipped_rows > 0 {
            warn!(skipped_rows = outcome.skipped_rows, "存在类别为空的行");
        }
        for gap in &outcome.validation_gaps {
            warn!(category = %gap.category, segment_rows = gap.segment_rows, "类别未导入: 缺少汇总行");
        }

        let elapsed_ms = start_time.elapsed().as_millis() as u64;
        info!(
            categories = outcome.dataset.len(),
            segments = outcome.dataset.segment_count(),
            dropped = outcome.validation_gaps.len(),
            elapsed_ms,
            "数据集导入完成"
        );

        Ok(ImportReport {
            batch_id,
            file_name: file_name.to_string(),
            dataset: outcome.dataset,
            total_rows,
            validation_gaps: outcome.validation_gaps,
            skipped_rows: outcome.skipped_rows,
            elapsed_ms,
        })
    }
}

#[async_trait::async_trait]
impl DatasetImporter for DatasetImporterImpl {
    #[instrument(skip(self, bytes), fields(batch_id, size = bytes.len()))]
    async fn import_bytes(&self, file_name: &str, bytes: &[u8]) -> ImportResult<ImportReport> {
        let batch_id = Uuid::new_v4().to_string();
        tracing::Span::current().record("batch_id", batch_id.as_str());
        info!(batch_id = %batch_id, file_name, "开始导入数据集");

        self.run_pipeline(batch_id, file_name, bytes)
    }

    async fn import_file<P: AsRef<Path> + Send>(&self, file_path: P) -> ImportResult<ImportReport> {
        let path = file_path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("")
            .to_string();

        self.import_bytes(&file_name, &bytes).await
    }
}
