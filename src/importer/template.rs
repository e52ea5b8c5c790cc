// ==========================================
// 银行业绩看板 - 上传模板
// ==========================================
// 固定示例数据（不读取当前数据集）: 每类别 1 汇总行 + 3 细分行
// ==========================================

use crate::domain::sample::template_dataset;
use crate::importer::codec::DatasetCodec;
use crate::importer::dataset_importer_trait::RowWriter;
use crate::importer::error::ImportResult;
use crate::importer::sheet_writer::ExcelWriter;

/// 模板下载文件名
pub const TEMPLATE_FILE_NAME: &str = "banking-metrics-template.xlsx";

/// 生成模板 xlsx 内容
pub fn build_template(codec: &DatasetCodec) -> ImportResult<Vec<u8>> {
    let rows = codec.encode(&template_dataset());
    ExcelWriter.write_rows(&rows)
}
