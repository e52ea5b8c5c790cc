// ==========================================
// 银行业绩看板 - 指标数据模型
// ==========================================
// 职责: 类别指标、细分指标、数据集快照
// 存储格式: 与 banking-data.json 保持一致（camelCase 字段）
// ==========================================

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

// ==========================================
// Segment - 细分指标
// ==========================================
// 名称仅在所属类别内唯一；不携带历史字段
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub name: String,
    pub value: f64,
    pub target: f64,
}

impl Segment {
    pub fn new(name: impl Into<String>, value: f64, target: f64) -> Self {
        Self {
            name: name.into(),
            value,
            target,
        }
    }
}

// ==========================================
// CategoryMetrics - 类别汇总指标
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryMetrics {
    pub current: f64,        // 最新值
    pub target: f64,         // RKA 目标
    pub previous_day: f64,   // 上日快照
    pub previous_month: f64, // 上月快照
    pub previous_year: f64,  // 上年快照
    #[serde(default)]
    pub segments: Vec<Segment>,
}

impl CategoryMetrics {
    /// 创建不含细分的类别指标
    pub fn new(
        current: f64,
        target: f64,
        previous_day: f64,
        previous_month: f64,
        previous_year: f64,
    ) -> Self {
        Self {
            current,
            target,
            previous_day,
            previous_month,
            previous_year,
            segments: Vec::new(),
        }
    }

    pub fn with_segments(mut self, segments: Vec<Segment>) -> Self {
        self.segments = segments;
        self
    }

    /// 按名称查找细分
    pub fn segment(&self, name: &str) -> Option<&Segment> {
        self.segments.iter().find(|s| s.name == name)
    }
}

// ==========================================
// Dataset - 全量数据快照
// ==========================================
// 每次请求整体读取，每次写入整体替换（无版本、无合并）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    /// 类别名 → 指标（保持插入顺序，决定导出行顺序）
    pub data: IndexMap<String, CategoryMetrics>,
    pub last_updated: DateTime<Utc>,
}

impl Dataset {
    /// 以当前时间创建数据集
    pub fn new(data: IndexMap<String, CategoryMetrics>) -> Self {
        Self {
            data,
            last_updated: Utc::now(),
        }
    }

    pub fn empty() -> Self {
        Self::new(IndexMap::new())
    }

    /// 刷新 last_updated 为当前时间
    pub fn touch(&mut self) {
        self.last_updated = Utc::now();
    }

    pub fn get(&self, category: &str) -> Option<&CategoryMetrics> {
        self.data.get(category)
    }

    pub fn insert(&mut self, category: impl Into<String>, metrics: CategoryMetrics) {
        self.data.insert(category.into(), metrics);
    }

    pub fn categories(&self) -> impl Iterator<Item = (&String, &CategoryMetrics)> {
        self.data.iter()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// 细分总数（所有类别）
    pub fn segment_count(&self) -> usize {
        self.data.values().map(|m| m.segments.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dataset {
        let mut dataset = Dataset::empty();
        dataset.insert(
            "Pinjaman",
            CategoryMetrics::new(45_000_000.0, 50_000_000.0, 44_500_000.0, 41_500_000.0, 38_900_000.0)
                .with_segments(vec![
                    Segment::new("Micro", 12_000_000.0, 15_000_000.0),
                    Segment::new("Small", 18_000_000.0, 20_000_000.0),
                ]),
        );
        dataset
    }

    #[test]
    fn test_json_shape_matches_storage_format() {
        let dataset = sample();
        let value = serde_json::to_value(&dataset).unwrap();

        assert!(value.get("lastUpdated").is_some());
        let pinjaman = &value["data"]["Pinjaman"];
        assert_eq!(pinjaman["previousDay"], 44_500_000.0);
        assert_eq!(pinjaman["segments"][1]["name"], "Small");
    }

    #[test]
    fn test_json_roundtrip_keeps_category_order() {
        let json = r#"{
            "data": {
                "NPL": {"current": 1, "target": 2, "previousDay": 0, "previousMonth": 0, "previousYear": 0, "segments": []},
                "Pinjaman": {"current": 3, "target": 4, "previousDay": 0, "previousMonth": 0, "previousYear": 0}
            },
            "lastUpdated": "2025-01-20T08:30:00.000Z"
        }"#;

        let dataset: Dataset = serde_json::from_str(json).unwrap();
        let names: Vec<&String> = dataset.data.keys().collect();
        assert_eq!(names, vec!["NPL", "Pinjaman"]);
        // segments 缺省为空
        assert!(dataset.get("Pinjaman").unwrap().segments.is_empty());
    }

    #[test]
    fn test_segment_lookup_and_counts() {
        let dataset = sample();
        let metrics = dataset.get("Pinjaman").unwrap();
        assert_eq!(metrics.segment("Micro").unwrap().value, 12_000_000.0);
        assert!(metrics.segment("Consumer").is_none());
        assert_eq!(dataset.segment_count(), 2);
        assert_eq!(dataset.len(), 1);
    }
}
