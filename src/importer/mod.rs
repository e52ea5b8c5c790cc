// ==========================================
// 银行业绩看板 - 导入层
// ==========================================
// 职责: 表格文件 ⇄ Dataset（上传、导出、模板）
// 支持: Excel (.xlsx/.xls), CSV
// ==========================================

// 模块声明
pub mod codec;
pub mod data_cleaner;
pub mod dataset_importer;
pub mod dataset_importer_trait;
pub mod error;
pub mod field_mapper;
pub mod file_parser;
pub mod sheet_writer;
pub mod template;

// 重导出核心类型
pub use codec::{DatasetCodec, DecodeOutcome, ValidationGap};
pub use data_cleaner::{parse_number, DataCleaner as DataCleanerImpl};
pub use dataset_importer::{DatasetImporterImpl, ImportReport};
pub use error::{ImportError, ImportResult};
pub use field_mapper::FieldMapper as FieldMapperImpl;
pub use file_parser::{CsvParser, ExcelParser, SheetFormat, UniversalFileParser};
pub use sheet_writer::{CsvWriter, ExcelWriter, SHEET_NAME};
pub use template::{build_template, TEMPLATE_FILE_NAME};

// 重导出 Trait 接口
pub use dataset_importer_trait::{DataCleaner, DatasetImporter, FieldMapper, RowReader, RowWriter};
