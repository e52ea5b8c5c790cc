// ==========================================
// 银行业绩看板 - 扁平/层级编解码器
// ==========================================
// encode: Dataset → Vec<FlatRow>（类别优先，汇总行在前）
// decode: 原始行记录 → Dataset（按类别首次出现顺序）
// ==========================================
// 约束:
// - 细分行不携带历史值，导出时写 0，导入时忽略
// - 没有汇总行的类别整体丢弃，作为 ValidationGap 上报（不是错误）
// - decode(encode(d)) 与 d 一致（last_updated 除外）
// ==========================================

use crate::domain::flat_row::{FlatRow, RawRecord};
use crate::domain::metrics::{CategoryMetrics, Dataset, Segment};
use crate::importer::dataset_importer_trait::FieldMapper;
use crate::importer::field_mapper::FieldMapper as FieldMapperImpl;
use indexmap::IndexMap;
use serde::Serialize;
use tracing::{debug, instrument, warn};

/// 被丢弃的类别（缺少汇总行）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationGap {
    pub category: String,
    /// 该类别被一并丢弃的细分行数
    pub segment_rows: usize,
}

/// 解码结果
#[derive(Debug, Clone)]
pub struct DecodeOutcome {
    pub dataset: Dataset,
    pub validation_gaps: Vec<ValidationGap>,
    /// 类别为空而跳过的行数
    pub skipped_rows: usize,
}

pub struct DatasetCodec {
    field_mapper: Box<dyn FieldMapper>,
}

impl Default for DatasetCodec {
    fn default() -> Self {
        Self::new(Box::new(FieldMapperImpl::default()))
    }
}

impl DatasetCodec {
    pub fn new(field_mapper: Box<dyn FieldMapper>) -> Self {
        Self { field_mapper }
    }

    /// 层级数据集 → 扁平行
    #[instrument(skip(self, dataset), fields(categories = dataset.len()))]
    pub fn encode(&self, dataset: &Dataset) -> Vec<FlatRow> {
        let mut rows = Vec::with_capacity(dataset.len() + dataset.segment_count());

        for (category, metrics) in dataset.categories() {
            rows.push(FlatRow {
                category: category.clone(),
                segment: String::new(),
                current: metrics.current,
                target: metrics.target,
                previous_day: metrics.previous_day,
                previous_month: metrics.previous_month,
                previous_year: metrics.previous_year,
            });

            rows.extend(metrics.segments.iter().map(|segment| FlatRow {
                category: category.clone(),
                segment: segment.name.clone(),
                current: segment.value,
                target: segment.target,
                previous_day: 0.0,
                previous_month: 0.0,
                previous_year: 0.0,
            }));
        }

        debug!(rows = rows.len(), "编码完成");
        rows
    }

    /// 原始行记录 → 层级数据集
    ///
    /// 行号从 1 开始（不含表头）
    #[instrument(skip(self, records), fields(records = records.len()))]
    pub fn decode(&self, records: &[RawRecord]) -> DecodeOutcome {
        let mut rows = Vec::with_capacity(records.len());
        let mut skipped_rows = 0;

        for (idx, record) in records.iter().enumerate() {
            match self.field_mapper.map_to_flat_row(record, idx + 1) {
                Ok(row) => rows.push(row),
                Err(e) if e.is_row_level() => {
                    debug!(row_number = idx + 1, error = %e, "行已跳过");
                    skipped_rows += 1;
                }
                Err(e) => {
                    warn!(row_number = idx + 1, error = %e, "行映射失败，已跳过");
                    skipped_rows += 1;
                }
            }
        }

        let (dataset, validation_gaps) = self.decode_rows(rows);

        DecodeOutcome {
            dataset,
            validation_gaps,
            skipped_rows,
        }
    }

    /// 已映射的扁平行 → 层级数据集
    pub fn decode_rows(&self, rows: Vec<FlatRow>) -> (Dataset, Vec<ValidationGap>) {
        // 按类别分组，保持首次出现顺序
        let mut groups: IndexMap<String, Vec<FlatRow>> = IndexMap::new();
        for row in rows {
            groups.entry(row.category.clone()).or_default().push(row);
        }

        let mut data = IndexMap::with_capacity(groups.len());
        let mut gaps = Vec::new();

        for (category, group) in groups {
            // 汇总行 = 第一条 Segment 为空的行；之后的空 Segment 行忽略
            let Some(aggregate) = group.iter().find(|r| r.is_aggregate()) else {
                warn!(category = %category, segment_rows = group.len(), "类别缺少汇总行，已丢弃");
                gaps.push(ValidationGap {
                    category,
                    segment_rows: group.len(),
                });
                continue;
            };

            let segments = group
                .iter()
                .filter(|r| !r.is_aggregate())
                .map(|r| Segment::new(r.segment.clone(), r.current, r.target))
                .collect();

            let metrics = CategoryMetrics::new(
                aggregate.current,
                aggregate.target,
                aggregate.previous_day,
                aggregate.previous_month,
                aggregate.previous_year,
            )
            .with_segments(segments);

            data.insert(category, metrics);
        }

        (Dataset::new(data), gaps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::sample::default_dataset;

    fn record(pairs: &[(&str, &str)]) -> RawRecord {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_encode_row_layout() {
        let codec = DatasetCodec::default();
        let dataset = default_dataset();
        let rows = codec.encode(&dataset);

        assert_eq!(rows.len(), dataset.len() + dataset.segment_count());

        // 第一个类别: 汇总行在前，细分行历史值为 0
        assert_eq!(rows[0].category, "Pinjaman");
        assert!(rows[0].is_aggregate());
        assert_eq!(rows[0].previous_day, 44_500_000.0);
        assert_eq!(rows[1].segment, "Micro");
        assert_eq!(rows[1].current, 12_000_000.0);
        assert_eq!(rows[1].previous_day, 0.0);
        assert_eq!(rows[4].category, "SML");
        assert!(rows[4].is_aggregate());
    }

    #[test]
    fn test_roundtrip_preserves_dataset() {
        let codec = DatasetCodec::default();
        let original = default_dataset();

        let records: Vec<RawRecord> = codec.encode(&original).iter().map(|r| r.to_record()).collect();
        let outcome = codec.decode(&records);

        assert!(outcome.validation_gaps.is_empty());
        assert_eq!(outcome.skipped_rows, 0);
        assert_eq!(outcome.dataset.data, original.data);
    }

    #[test]
    fn test_category_without_aggregate_is_dropped() {
        let codec = DatasetCodec::default();
        let records = vec![
            record(&[("Category", "X"), ("Segment", "A"), ("Current", "1"), ("Target", "2")]),
            record(&[("Category", "Y"), ("Segment", ""), ("Current", "5"), ("Target", "5")]),
        ];

        let outcome = codec.decode(&records);
        assert_eq!(outcome.dataset.len(), 1);
        assert!(outcome.dataset.get("X").is_none());
        assert_eq!(
            outcome.validation_gaps,
            vec![ValidationGap {
                category: "X".to_string(),
                segment_rows: 1
            }]
        );
    }

    #[test]
    fn test_non_numeric_values_become_zero() {
        let codec = DatasetCodec::default();
        let records = vec![record(&[
            ("Category", "Recovery"),
            ("Segment", ""),
            ("Current", "abc"),
            ("Target", "3500000"),
        ])];

        let outcome = codec.decode(&records);
        let metrics = outcome.dataset.get("Recovery").unwrap();
        assert_eq!(metrics.current, 0.0);
        assert_eq!(metrics.target, 3_500_000.0);
        assert_eq!(metrics.previous_year, 0.0);
    }

    #[test]
    fn test_rows_without_category_are_skipped() {
        let codec = DatasetCodec::default();
        let records = vec![
            record(&[("Segment", "Orphan"), ("Current", "1")]),
            record(&[("category", "NPL"), ("Segment", ""), ("Current", "2100000")]),
        ];

        let outcome = codec.decode(&records);
        assert_eq!(outcome.skipped_rows, 1);
        assert_eq!(outcome.dataset.get("NPL").unwrap().current, 2_100_000.0);
    }

    #[test]
    fn test_first_appearance_order_and_interleaving() {
        let codec = DatasetCodec::default();
        let records = vec![
            record(&[("Category", "SML"), ("Segment", "Micro"), ("Current", "1"), ("Target", "1")]),
            record(&[("Category", "Pinjaman"), ("Segment", ""), ("Current", "10")]),
            record(&[("Category", "SML"), ("Segment", ""), ("Current", "3")]),
            record(&[("Category", "SML"), ("Segment", "Small"), ("Current", "2"), ("Target", "2")]),
            // 第二条汇总行被忽略
            record(&[("Category", "SML"), ("Segment", ""), ("Current", "99")]),
        ];

        let outcome = codec.decode(&records);
        let names: Vec<&String> = outcome.dataset.data.keys().collect();
        assert_eq!(names, vec!["SML", "Pinjaman"]);

        let sml = outcome.dataset.get("SML").unwrap();
        assert_eq!(sml.current, 3.0);
        let segment_names: Vec<&str> = sml.segments.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(segment_names, vec!["Micro", "Small"]);
    }
}
