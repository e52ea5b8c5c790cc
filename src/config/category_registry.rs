// ==========================================
// 银行业绩看板 - 类别极性注册表
// ==========================================
// 职责: 类别名 → Polarity 映射
// 默认: SML / NPL 为反向类别（数值越低越好），其余为正向
// 约束: 类别名精确匹配（区分大小写、不做 trim）
// ==========================================

use crate::domain::types::Polarity;
use std::collections::HashMap;

/// 默认反向类别
pub const DEFAULT_INVERSE_CATEGORIES: [&str; 2] = ["SML", "NPL"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRegistry {
    polarities: HashMap<String, Polarity>,
}

impl Default for CategoryRegistry {
    fn default() -> Self {
        Self::from_inverse_names(DEFAULT_INVERSE_CATEGORIES)
    }
}

impl CategoryRegistry {
    /// 空注册表（所有类别均按正向处理）
    pub fn empty() -> Self {
        Self {
            polarities: HashMap::new(),
        }
    }

    /// 以反向类别名列表构建
    pub fn from_inverse_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let polarities = names
            .into_iter()
            .map(|name| (name.into(), Polarity::Inverse))
            .collect();
        Self { polarities }
    }

    /// 登记类别极性（覆盖已有值）
    pub fn register(&mut self, category: impl Into<String>, polarity: Polarity) {
        self.polarities.insert(category.into(), polarity);
    }

    /// 查询类别极性，未登记的类别为 Normal
    pub fn polarity(&self, category: &str) -> Polarity {
        self.polarities
            .get(category)
            .copied()
            .unwrap_or(Polarity::Normal)
    }

    pub fn is_inverse(&self, category: &str) -> bool {
        self.polarity(category).is_inverse()
    }

    /// 当前登记的反向类别（排序后返回，便于展示与比较）
    pub fn inverse_categories(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .polarities
            .iter()
            .filter(|(_, p)| p.is_inverse())
            .map(|(name, _)| name.clone())
            .collect();
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_inverse_categories() {
        let registry = CategoryRegistry::default();
        assert_eq!(registry.polarity("SML"), Polarity::Inverse);
        assert_eq!(registry.polarity("NPL"), Polarity::Inverse);
        assert_eq!(registry.polarity("Pinjaman"), Polarity::Normal);
        assert_eq!(registry.polarity("Dana Pihak Ketiga"), Polarity::Normal);
    }

    #[test]
    fn test_exact_match_only() {
        let registry = CategoryRegistry::default();
        assert_eq!(registry.polarity("npl"), Polarity::Normal);
        assert_eq!(registry.polarity(" SML"), Polarity::Normal);
    }

    #[test]
    fn test_register_overrides() {
        let mut registry = CategoryRegistry::default();
        registry.register("Biaya Operasional", Polarity::Inverse);
        registry.register("SML", Polarity::Normal);

        assert!(registry.is_inverse("Biaya Operasional"));
        assert!(!registry.is_inverse("SML"));
        assert_eq!(
            registry.inverse_categories(),
            vec!["Biaya Operasional".to_string(), "NPL".to_string()]
        );
    }

    #[test]
    fn test_empty_registry_is_all_normal() {
        let registry = CategoryRegistry::empty();
        assert!(!registry.is_inverse("NPL"));
        assert!(registry.inverse_categories().is_empty());
    }
}
