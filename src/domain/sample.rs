// ==========================================
// 银行业绩看板 - 内置样例数据
// ==========================================
// default_dataset: 数据重置时写入的默认快照
// template_dataset: 模板下载使用的示例（每类别 1 汇总 + 3 细分）
// ==========================================

use crate::domain::metrics::{CategoryMetrics, Dataset, Segment};
use indexmap::IndexMap;

fn segments(items: &[(&str, f64, f64)]) -> Vec<Segment> {
    items
        .iter()
        .map(|(name, value, target)| Segment::new(*name, *value, *target))
        .collect()
}

/// 默认数据集（Pinjaman / SML / NPL / Recovery / Dana Pihak Ketiga）
pub fn default_dataset() -> Dataset {
    let mut data = IndexMap::new();

    data.insert(
        "Pinjaman".to_string(),
        CategoryMetrics::new(45_000_000.0, 50_000_000.0, 44_500_000.0, 41_500_000.0, 38_900_000.0)
            .with_segments(segments(&[
                ("Micro", 12_000_000.0, 15_000_000.0),
                ("Small", 18_000_000.0, 20_000_000.0),
                ("Consumer", 15_000_000.0, 15_000_000.0),
            ])),
    );
    data.insert(
        "SML".to_string(),
        CategoryMetrics::new(8_500_000.0, 10_000_000.0, 8_600_000.0, 8_900_000.0, 9_700_000.0)
            .with_segments(segments(&[
                ("Micro", 3_000_000.0, 3_500_000.0),
                ("Small", 3_500_000.0, 4_000_000.0),
                ("Consumer", 2_000_000.0, 2_500_000.0),
            ])),
    );
    data.insert(
        "NPL".to_string(),
        CategoryMetrics::new(2_100_000.0, 1_500_000.0, 2_150_000.0, 2_320_000.0, 2_450_000.0)
            .with_segments(segments(&[
                ("Micro", 600_000.0, 400_000.0),
                ("Small", 800_000.0, 600_000.0),
                ("Consumer", 700_000.0, 500_000.0),
            ])),
    );
    data.insert(
        "Recovery".to_string(),
        CategoryMetrics::new(3_200_000.0, 3_500_000.0, 3_100_000.0, 2_920_000.0, 2_700_000.0)
            .with_segments(segments(&[
                ("Micro", 1_000_000.0, 1_100_000.0),
                ("Small", 1_200_000.0, 1_300_000.0),
                ("Consumer", 1_000_000.0, 1_100_000.0),
            ])),
    );
    data.insert(
        "Dana Pihak Ketiga".to_string(),
        CategoryMetrics::new(125_000_000.0, 130_000_000.0, 123_000_000.0, 117_800_000.0, 109_300_000.0)
            .with_segments(segments(&[
                ("Micro - Checking", 20_000_000.0, 22_000_000.0),
                ("Micro - Deposits", 18_000_000.0, 19_000_000.0),
                ("Micro - Savings", 15_000_000.0, 16_000_000.0),
                ("Small - Checking", 25_000_000.0, 26_000_000.0),
                ("Small - Deposits", 28_000_000.0, 29_000_000.0),
                ("Small - Savings", 19_000_000.0, 18_000_000.0),
            ])),
    );

    Dataset::new(data)
}

/// 模板示例数据集（每个类别恰好 3 个细分）
pub fn template_dataset() -> Dataset {
    let mut dataset = default_dataset();

    // 模板只保留每类别前 3 个细分；DPK 改用按产品划分的 3 个细分
    for (category, metrics) in dataset.data.iter_mut() {
        if category == "Dana Pihak Ketiga" {
            metrics.segments = segments(&[
                ("Checking", 45_000_000.0, 48_000_000.0),
                ("Deposits", 46_000_000.0, 48_000_000.0),
                ("Savings", 34_000_000.0, 34_000_000.0),
            ]);
        } else {
            metrics.segments.truncate(3);
        }
    }

    dataset
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_dataset_categories() {
        let dataset = default_dataset();
        let names: Vec<&str> = dataset.data.keys().map(|s| s.as_str()).collect();
        assert_eq!(
            names,
            vec!["Pinjaman", "SML", "NPL", "Recovery", "Dana Pihak Ketiga"]
        );
        assert_eq!(dataset.get("Dana Pihak Ketiga").unwrap().segments.len(), 6);
    }

    #[test]
    fn test_template_has_three_segments_per_category() {
        let dataset = template_dataset();
        for (category, metrics) in dataset.categories() {
            assert_eq!(metrics.segments.len(), 3, "类别 {} 细分数量不为 3", category);
        }
    }

    #[test]
    fn test_template_segments_sum_to_category_current() {
        let dataset = template_dataset();
        for (category, metrics) in dataset.categories() {
            let sum: f64 = metrics.segments.iter().map(|s| s.value).sum();
            assert_eq!(sum, metrics.current, "类别 {} 细分合计与汇总不一致", category);
        }
    }
}
