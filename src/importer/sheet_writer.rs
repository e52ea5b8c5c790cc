// ==========================================
// 银行业绩看板 - 表格写出器
// ==========================================
// 导出与模板共用: 表头 + 每个 FlatRow 一行
// Excel: 工作表 "Banking Metrics"，数值列写为数字
// ==========================================

use crate::domain::flat_row::{columns, FlatRow};
use crate::importer::dataset_importer_trait::RowWriter;
use crate::importer::error::{ImportError, ImportResult};
use rust_xlsxwriter::{Format, Workbook, Worksheet};

/// 导出工作表名
pub const SHEET_NAME: &str = "Banking Metrics";

/// 列宽（与 HEADERS 顺序一致）
const COLUMN_WIDTHS: [f64; 7] = [22.0, 20.0, 15.0, 15.0, 15.0, 15.0, 15.0];

/// 从 first_col 起依次设置列宽
fn set_column_widths(sheet: &mut Worksheet, first_col: u16, widths: &[f64]) -> ImportResult<()> {
    for (offset, width) in widths.iter().enumerate() {
        sheet.set_column_width(first_col + offset as u16, *width)?;
    }
    Ok(())
}

// ==========================================
// ExcelWriter - xlsx 写出
// ==========================================
pub struct ExcelWriter;

impl RowWriter for ExcelWriter {
    fn write_rows(&self, rows: &[FlatRow]) -> ImportResult<Vec<u8>> {
        let mut workbook = Workbook::new();
        let header_format = Format::new().set_bold();

        {
            let sheet = workbook.add_worksheet();
            sheet.set_name(SHEET_NAME)?;

            for (col, header) in columns::HEADERS.iter().enumerate() {
                sheet.write_string_with_format(0, col as u16, *header, &header_format)?;
            }

            set_column_widths(sheet, 0, &COLUMN_WIDTHS)?;

            for (idx, row) in rows.iter().enumerate() {
                let r = (idx + 1) as u32;
                sheet.write_string(r, 0, row.category.as_str())?;
                sheet.write_string(r, 1, row.segment.as_str())?;
                sheet.write_number(r, 2, row.current)?;
                sheet.write_number(r, 3, row.target)?;
                sheet.write_number(r, 4, row.previous_day)?;
                sheet.write_number(r, 5, row.previous_month)?;
                sheet.write_number(r, 6, row.previous_year)?;
            }
        }

        let buffer = workbook.save_to_buffer()?;
        Ok(buffer)
    }

    fn file_extension(&self) -> &'static str {
        "xlsx"
    }
}

// ==========================================
// CsvWriter - csv 写出
// ==========================================
pub struct CsvWriter;

impl RowWriter for CsvWriter {
    fn write_rows(&self, rows: &[FlatRow]) -> ImportResult<Vec<u8>> {
        let to_write_error = |e: csv::Error| ImportError::WriteError(e.to_string());
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(columns::HEADERS).map_err(to_write_error)?;

        for row in rows {
            writer.write_record([
                row.category.clone(),
                row.segment.clone(),
                row.current.to_string(),
                row.target.to_string(),
                row.previous_day.to_string(),
                row.previous_month.to_string(),
                row.previous_year.to_string(),
            ])
            .map_err(to_write_error)?;
        }

        writer
            .into_inner()
            .map_err(|e| ImportError::WriteError(e.to_string()))
    }

    fn file_extension(&self) -> &'static str {
        "csv"
    }
}
