// ==========================================
// 银行业绩看板 - 领域类型定义
// ==========================================
// 职责: 类别极性、达成等级
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 类别极性 (Polarity)
// ==========================================
// Normal: 数值越高越好（贷款、存款、回收）
// Inverse: 数值越低越好（SML/NPL 等信贷质量指标）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Polarity {
    #[default]
    Normal,
    Inverse,
}

impl Polarity {
    pub fn is_inverse(self) -> bool {
        matches!(self, Polarity::Inverse)
    }
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Polarity::Normal => write!(f, "NORMAL"),
            Polarity::Inverse => write!(f, "INVERSE"),
        }
    }
}

// ==========================================
// 达成等级 (Band)
// ==========================================
// 基于已按极性修正的达成率划分，与极性无关
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Band {
    Poor,      // < 95
    Caution,   // [95, 100)
    Good,      // [100, 105]
    Excellent, // > 105
}

impl Band {
    /// i18n 键（用于界面显示名称）
    pub fn label_key(self) -> &'static str {
        match self {
            Band::Poor => "band.poor",
            Band::Caution => "band.caution",
            Band::Good => "band.good",
            Band::Excellent => "band.excellent",
        }
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Band::Poor => write!(f, "POOR"),
            Band::Caution => write!(f, "CAUTION"),
            Band::Good => write!(f, "GOOD"),
            Band::Excellent => write!(f, "EXCELLENT"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polarity_default_is_normal() {
        assert_eq!(Polarity::default(), Polarity::Normal);
        assert!(!Polarity::Normal.is_inverse());
        assert!(Polarity::Inverse.is_inverse());
    }

    #[test]
    fn test_band_serde_format() {
        let json = serde_json::to_string(&Band::Excellent).unwrap();
        assert_eq!(json, "\"EXCELLENT\"");

        let band: Band = serde_json::from_str("\"CAUTION\"").unwrap();
        assert_eq!(band, Band::Caution);
    }

    #[test]
    fn test_band_ordering() {
        assert!(Band::Poor < Band::Caution);
        assert!(Band::Good < Band::Excellent);
    }
}
