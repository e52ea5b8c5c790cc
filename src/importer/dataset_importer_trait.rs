// ==========================================
// 银行业绩看板 - 数据集导入 Trait
// ==========================================
// 职责: 定义导入/导出管道各阶段接口（不包含实现）
// 阶段: 读取表格 → 字段映射（含数值容错） → 层级重建
// ==========================================

use crate::domain::flat_row::{FlatRow, RawRecord};
use crate::importer::dataset_importer::ImportReport;
use crate::importer::error::ImportResult;
use async_trait::async_trait;
use std::path::Path;

// ==========================================
// DatasetImporter Trait
// ==========================================
// 用途: 数据集导入主接口
// 实现者: DatasetImporterImpl
#[async_trait]
pub trait DatasetImporter: Send + Sync {
    /// 从上传内容导入数据集
    ///
    /// # 参数
    /// - file_name: 原始文件名（用于判断格式，可为空）
    /// - bytes: 文件内容
    ///
    /// # 返回
    /// - Ok(ImportReport): 重建后的数据集 + 解码报告（不落库）
    /// - Err: 文件无法解析
    async fn import_bytes(
        &self,
        file_name: &str,
        bytes: &[u8],
    ) -> ImportResult<ImportReport>;

    /// 从本地文件导入数据集
    async fn import_file<P: AsRef<Path> + Send>(
        &self,
        file_path: P,
    ) -> ImportResult<ImportReport>;
}

// ==========================================
// RowReader Trait
// ==========================================
// 用途: 表格读取接口（阶段 0）
// 实现者: ExcelParser, CsvParser
pub trait RowReader: Send + Sync {
    /// 解析文件内容为原始行记录（列名 → 单元格文本）
    ///
    /// 第一行为表头；完全空白的行跳过
    fn read_rows(&self, bytes: &[u8]) -> ImportResult<Vec<RawRecord>>;
}

// ==========================================
// RowWriter Trait
// ==========================================
// 用途: 表格写出接口（导出/模板）
// 实现者: ExcelWriter, CsvWriter
pub trait RowWriter: Send + Sync {
    /// 将扁平行写为文件内容（含表头）
    fn write_rows(&self, rows: &[FlatRow]) -> ImportResult<Vec<u8>>;

    /// 输出文件扩展名（不含点）
    fn file_extension(&self) -> &'static str;
}

// ==========================================
// FieldMapper Trait
// ==========================================
// 用途: 字段映射接口（阶段 1）
// 实现者: FieldMapperImpl
pub trait FieldMapper: Send + Sync {
    /// 将原始行记录映射为 FlatRow
    ///
    /// # 参数
    /// - record: 原始行记录
    /// - row_number: 行号（从 1 开始，不含表头）
    ///
    /// # 返回
    /// - Ok(FlatRow): 数值字段已按容错规则填充
    /// - Err(ImportError::MissingCategory): 类别为空
    fn map_to_flat_row(&self, record: &RawRecord, row_number: usize) -> ImportResult<FlatRow>;
}

// ==========================================
// DataCleaner Trait
// ==========================================
// 用途: 数据清洗接口（阶段 2）
// 实现者: DataCleanerImpl
pub trait DataCleaner: Send + Sync {
    /// 标准化 NULL 值（缺失/空串 → None，其余原样返回）
    fn normalize_null(&self, value: Option<&str>) -> Option<String>;

    /// 容错数值解析
    ///
    /// # 规则
    /// - 缺失或非数值 → 0
    /// - 取最长数值前缀（"12abc" → 12）
    /// - 非有限值 → 0
    fn parse_number(&self, value: Option<&str>) -> f64;
}
