// ==========================================
// 银行业绩看板 - 文件解析器实现
// ==========================================
// 阶段 0: 文件读取与解析
// 支持: Excel (.xlsx/.xls) / CSV (.csv)
// 输入为内存中的文件内容（上传场景），路径读取为包装
// ==========================================

use crate::domain::flat_row::RawRecord;
use crate::importer::dataset_importer_trait::RowReader;
use crate::importer::error::{ImportError, ImportResult};
use calamine::{Data, Reader, Xls, Xlsx};
use csv::ReaderBuilder;
use std::io::{Cursor, Read, Seek};
use std::path::Path;

/// xlsx（zip 容器）文件头
const ZIP_MAGIC: &[u8] = b"PK\x03\x04";

/// xls（OLE 复合文档）文件头
const OLE_MAGIC: &[u8] = b"\xD0\xCF\x11\xE0";

/// 单元格文本化（整数值的浮点不带小数部分）
fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        other => other.to_string(),
    }
}

/// 按表头组装一行（单元格文本原样保留）；完全空白时返回 None
fn assemble_row<I>(headers: &[String], values: I) -> Option<RawRecord>
where
    I: IntoIterator<Item = String>,
{
    let mut row_map = RawRecord::new();
    for (col_idx, value) in values.into_iter().enumerate() {
        if let Some(header) = headers.get(col_idx) {
            if header.is_empty() {
                continue;
            }
            row_map.insert(header.clone(), value);
        }
    }

    if row_map.values().all(|v| v.trim().is_empty()) {
        None
    } else {
        Some(row_map)
    }
}

// ==========================================
// CSV Parser 实现
// ==========================================
pub struct CsvParser;

impl RowReader for CsvParser {
    fn read_rows(&self, bytes: &[u8]) -> ImportResult<Vec<RawRecord>> {
        let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true) // 允许行长度不一致
            .from_reader(bytes);

        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        if headers.iter().all(|h| h.is_empty()) {
            return Err(ImportError::FormatError("CSV 文件缺少表头".to_string()));
        }

        let mut records = Vec::new();
        for result in reader.records() {
            let record = result?;
            if let Some(row) = assemble_row(&headers, record.iter().map(str::to_string)) {
                records.push(row);
            }
        }

        Ok(records)
    }
}

// ==========================================
// Excel Parser 实现
// ==========================================
// .xlsx 与旧版 .xls 按文件头区分
pub struct ExcelParser;

impl ExcelParser {
    /// 读取第一个 sheet（第一行为表头）
    fn read_first_sheet<RS, R>(workbook: &mut R) -> ImportResult<Vec<RawRecord>>
    where
        RS: Read + Seek,
        R: Reader<RS>,
        ImportError: From<R::Error>,
    {
        let sheet_name = workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or_else(|| ImportError::FormatError("Excel 文件无工作表".to_string()))?;

        let range = workbook.worksheet_range(&sheet_name)?;

        let mut rows = range.rows();
        let header_row = rows
            .next()
            .ok_or_else(|| ImportError::FormatError("Excel 文件无数据行".to_string()))?;

        let headers: Vec<String> = header_row.iter().map(cell_to_string).collect();

        Ok(rows
            .filter_map(|data_row| assemble_row(&headers, data_row.iter().map(cell_to_string)))
            .collect())
    }
}

impl RowReader for ExcelParser {
    fn read_rows(&self, bytes: &[u8]) -> ImportResult<Vec<RawRecord>> {
        if bytes.starts_with(OLE_MAGIC) {
            let mut workbook: Xls<_> = Xls::new(Cursor::new(bytes))?;
            Self::read_first_sheet(&mut workbook)
        } else {
            let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(bytes))?;
            Self::read_first_sheet(&mut workbook)
        }
    }
}

// ==========================================
// 通用文件解析器（扩展名优先，其次内容嗅探）
// ==========================================
pub struct UniversalFileParser;

/// 识别出的表格格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetFormat {
    /// .xlsx / .xls（Excel 解析器内部按文件头区分）
    Excel,
    Csv,
}

impl UniversalFileParser {
    /// 判断文件格式
    ///
    /// - .xlsx / .xlsm / .xls → Excel
    /// - .csv → Csv
    /// - 无扩展名: zip/OLE 文件头 → Excel，否则 Csv
    /// - 其他扩展名: 仅 zip/OLE 文件头可识别为 Excel
    pub fn detect_format(file_name: &str, bytes: &[u8]) -> ImportResult<SheetFormat> {
        let ext = Path::new(file_name)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();
        let looks_like_excel = bytes.starts_with(ZIP_MAGIC) || bytes.starts_with(OLE_MAGIC);

        match ext.as_str() {
            "xlsx" | "xlsm" | "xls" => Ok(SheetFormat::Excel),
            "csv" => Ok(SheetFormat::Csv),
            "" if looks_like_excel => Ok(SheetFormat::Excel),
            "" => Ok(SheetFormat::Csv),
            _ if looks_like_excel => Ok(SheetFormat::Excel),
            _ => Err(ImportError::UnsupportedFormat(ext)),
        }
    }

    /// 解析内存中的文件内容
    pub fn parse_bytes(&self, file_name: &str, bytes: &[u8]) -> ImportResult<Vec<RawRecord>> {
        if bytes.is_empty() {
            return Err(ImportError::FormatError("文件内容为空".to_string()));
        }

        match Self::detect_format(file_name, bytes)? {
            SheetFormat::Excel => ExcelParser.read_rows(bytes),
            SheetFormat::Csv => CsvParser.read_rows(bytes),
        }
    }

    /// 解析本地文件
    pub fn parse<P: AsRef<Path>>(&self, file_path: P) -> ImportResult<Vec<RawRecord>> {
        let path = file_path.as_ref();
        let bytes = std::fs::read(path)?;
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("");
        self.parse_bytes(file_name, &bytes)
    }
}
