// ==========================================
// 银行业绩看板 - 扁平行结构（表格交换单元）
// ==========================================
// 每个类别: 1 行汇总行（Segment 为空）+ N 行细分行
// ==========================================

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 原始行记录（列名 → 单元格文本）
pub type RawRecord = HashMap<String, String>;

/// 表头列名常量
pub mod columns {
    pub const CATEGORY: &str = "Category";
    pub const CATEGORY_LOWER: &str = "category";
    pub const SEGMENT: &str = "Segment";
    pub const CURRENT: &str = "Current";
    pub const TARGET: &str = "Target";
    pub const PREVIOUS_DAY: &str = "PreviousDay";
    pub const PREVIOUS_MONTH: &str = "PreviousMonth";
    pub const PREVIOUS_YEAR: &str = "PreviousYear";

    /// 导出时的列顺序
    pub const HEADERS: [&str; 7] = [
        CATEGORY,
        SEGMENT,
        CURRENT,
        TARGET,
        PREVIOUS_DAY,
        PREVIOUS_MONTH,
        PREVIOUS_YEAR,
    ];
}

/// 扁平行
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FlatRow {
    pub category: String,
    /// 空字符串表示类别汇总行
    #[serde(default)]
    pub segment: String,
    pub current: f64,
    pub target: f64,
    pub previous_day: f64,
    pub previous_month: f64,
    pub previous_year: f64,
}

impl FlatRow {
    /// 是否为类别汇总行
    pub fn is_aggregate(&self) -> bool {
        self.segment.is_empty()
    }

    /// 转换为原始行记录（所有数值以文本表示）
    pub fn to_record(&self) -> RawRecord {
        let mut record = RawRecord::new();
        record.insert(columns::CATEGORY.to_string(), self.category.clone());
        record.insert(columns::SEGMENT.to_string(), self.segment.clone());
        record.insert(columns::CURRENT.to_string(), self.current.to_string());
        record.insert(columns::TARGET.to_string(), self.target.to_string());
        record.insert(columns::PREVIOUS_DAY.to_string(), self.previous_day.to_string());
        record.insert(columns::PREVIOUS_MONTH.to_string(), self.previous_month.to_string());
        record.insert(columns::PREVIOUS_YEAR.to_string(), self.previous_year.to_string());
        record
    }
}
