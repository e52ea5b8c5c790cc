// ==========================================
// 银行业绩看板 - 领域模型层
// ==========================================
// 职责: 定义数据集、扁平行、类别极性与达成等级
// 约束: 不含存储逻辑，不含计算逻辑
// ==========================================

pub mod flat_row;
pub mod metrics;
pub mod sample;
pub mod types;

// 重导出核心类型
pub use flat_row::{columns, FlatRow, RawRecord};
pub use metrics::{CategoryMetrics, Dataset, Segment};
pub use types::{Band, Polarity};
