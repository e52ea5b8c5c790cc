// ==========================================
// 银行业绩看板 - 字段映射器实现
// ==========================================
// 职责: 表格列 → FlatRow 映射 + 数值容错转换
// 类别列: "Category" 优先，为空时回退 "category"
// 其余列按名称精确匹配；文本值原样保留，仅缺失/空串视为空
// ==========================================

use crate::domain::flat_row::{columns, FlatRow, RawRecord};
use crate::importer::data_cleaner::DataCleaner;
use crate::importer::dataset_importer_trait::{
    DataCleaner as DataCleanerTrait, FieldMapper as FieldMapperTrait,
};
use crate::importer::error::{ImportError, ImportResult};

pub struct FieldMapper {
    cleaner: DataCleaner,
}

impl Default for FieldMapper {
    fn default() -> Self {
        Self {
            cleaner: DataCleaner,
        }
    }
}

impl FieldMapperTrait for FieldMapper {
    fn map_to_flat_row(&self, record: &RawRecord, row_number: usize) -> ImportResult<FlatRow> {
        let category = self
            .get_string(record, columns::CATEGORY)
            .or_else(|| self.get_string(record, columns::CATEGORY_LOWER))
            .ok_or(ImportError::MissingCategory { row: row_number })?;

        Ok(FlatRow {
            category,
            segment: self.get_string(record, columns::SEGMENT).unwrap_or_default(),
            current: self.get_number(record, columns::CURRENT),
            target: self.get_number(record, columns::TARGET),
            previous_day: self.get_number(record, columns::PREVIOUS_DAY),
            previous_month: self.get_number(record, columns::PREVIOUS_MONTH),
            previous_year: self.get_number(record, columns::PREVIOUS_YEAR),
        })
    }
}

impl FieldMapper {
    /// 提取字符串字段（缺失/空串视为缺失，不做 trim）
    fn get_string(&self, record: &RawRecord, key: &str) -> Option<String> {
        self.cleaner
            .normalize_null(record.get(key).map(|s| s.as_str()))
    }

    /// 提取数值字段（缺失/非法 → 0）
    fn get_number(&self, record: &RawRecord, key: &str) -> f64 {
        self.cleaner.parse_number(record.get(key).map(|s| s.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pairs: &[(&str, &str)]) -> RawRecord {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_map_aggregate_row() {
        let mapper = FieldMapper::default();
        let row = mapper
            .map_to_flat_row(
                &record(&[
                    ("Category", "Pinjaman"),
                    ("Segment", ""),
                    ("Current", "45000000"),
                    ("Target", "50000000"),
                    ("PreviousDay", "44500000"),
                    ("PreviousMonth", "41500000"),
                    ("PreviousYear", "38900000"),
                ]),
                1,
            )
            .unwrap();

        assert!(row.is_aggregate());
        assert_eq!(row.category, "Pinjaman");
        assert_eq!(row.current, 45_000_000.0);
        assert_eq!(row.previous_year, 38_900_000.0);
    }

    #[test]
    fn test_lowercase_category_fallback() {
        let mapper = FieldMapper::default();
        let row = mapper
            .map_to_flat_row(&record(&[("Category", ""), ("category", "NPL")]), 2)
            .unwrap();
        assert_eq!(row.category, "NPL");
    }

    #[test]
    fn test_names_are_kept_verbatim() {
        let mapper = FieldMapper::default();
        let row = mapper
            .map_to_flat_row(
                &record(&[
                    ("Category", "Dana Pihak Ketiga "),
                    ("Segment", " Micro"),
                    ("Current", " 1200 "),
                ]),
                4,
            )
            .unwrap();
        assert_eq!(row.category, "Dana Pihak Ketiga ");
        assert_eq!(row.segment, " Micro");
        assert_eq!(row.current, 1200.0);

        // 仅含空白的细分名是细分行，不是汇总行
        let row = mapper
            .map_to_flat_row(&record(&[("Category", "SML"), ("Segment", " ")]), 5)
            .unwrap();
        assert!(!row.is_aggregate());
    }

    #[test]
    fn test_missing_category_is_row_error() {
        let mapper = FieldMapper::default();
        let err = mapper
            .map_to_flat_row(&record(&[("Segment", "Micro"), ("Current", "1")]), 7)
            .unwrap_err();
        assert!(matches!(err, ImportError::MissingCategory { row: 7 }));
    }

    #[test]
    fn test_missing_numbers_default_to_zero() {
        let mapper = FieldMapper::default();
        let row = mapper
            .map_to_flat_row(
                &record(&[("Category", "SML"), ("Segment", "Micro"), ("Current", "abc")]),
                3,
            )
            .unwrap();
        assert_eq!(row.segment, "Micro");
        assert_eq!(row.current, 0.0);
        assert_eq!(row.target, 0.0);
        assert_eq!(row.previous_month, 0.0);
    }
}
