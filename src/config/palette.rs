// ==========================================
// 银行业绩看板 - 等级配色表
// ==========================================
// 固定查表: Band → (背景/文字/边框) 样式标识
// Light: 详情页与总览卡片；Dark: 轮播大屏（附带 glow）
// ==========================================

use crate::domain::types::Band;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BandColors {
    pub bg: &'static str,
    pub text: &'static str,
    pub border: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub glow: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaletteTheme {
    #[default]
    Light,
    Dark,
}

const RED: BandColors = BandColors {
    bg: "bg-red-50 dark:bg-red-950/20",
    text: "text-red-600 dark:text-red-400",
    border: "border-red-200 dark:border-red-800",
    glow: None,
};

const YELLOW: BandColors = BandColors {
    bg: "bg-yellow-50 dark:bg-yellow-950/20",
    text: "text-yellow-600 dark:text-yellow-400",
    border: "border-yellow-200 dark:border-yellow-800",
    glow: None,
};

const GREEN: BandColors = BandColors {
    bg: "bg-green-50 dark:bg-green-950/20",
    text: "text-green-600 dark:text-green-400",
    border: "border-green-200 dark:border-green-800",
    glow: None,
};

const BLUE: BandColors = BandColors {
    bg: "bg-blue-50 dark:bg-blue-950/20",
    text: "text-blue-600 dark:text-blue-400",
    border: "border-blue-200 dark:border-blue-800",
    glow: None,
};

const RED_DARK: BandColors = BandColors {
    bg: "bg-red-500/10",
    text: "text-red-400",
    border: "border-red-500/50",
    glow: Some("from-red-500/20"),
};

const YELLOW_DARK: BandColors = BandColors {
    bg: "bg-yellow-500/10",
    text: "text-yellow-400",
    border: "border-yellow-500/50",
    glow: Some("from-yellow-500/20"),
};

const GREEN_DARK: BandColors = BandColors {
    bg: "bg-green-500/10",
    text: "text-green-400",
    border: "border-green-500/50",
    glow: Some("from-green-500/20"),
};

const BLUE_DARK: BandColors = BandColors {
    bg: "bg-blue-500/10",
    text: "text-blue-400",
    border: "border-blue-500/50",
    glow: Some("from-blue-500/20"),
};

/// 等级配色查表
pub struct BandPalette;

impl BandPalette {
    pub fn colors(band: Band, theme: PaletteTheme) -> BandColors {
        match (theme, band) {
            (PaletteTheme::Light, Band::Poor) => RED,
            (PaletteTheme::Light, Band::Caution) => YELLOW,
            (PaletteTheme::Light, Band::Good) => GREEN,
            (PaletteTheme::Light, Band::Excellent) => BLUE,
            (PaletteTheme::Dark, Band::Poor) => RED_DARK,
            (PaletteTheme::Dark, Band::Caution) => YELLOW_DARK,
            (PaletteTheme::Dark, Band::Good) => GREEN_DARK,
            (PaletteTheme::Dark, Band::Excellent) => BLUE_DARK,
        }
    }

    /// 差值配色: 改善为绿色，否则为红色（含 0）
    pub fn difference_colors(improved: bool) -> BandColors {
        if improved {
            GREEN
        } else {
            RED
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_light_palette_has_no_glow() {
        for band in [Band::Poor, Band::Caution, Band::Good, Band::Excellent] {
            assert!(BandPalette::colors(band, PaletteTheme::Light).glow.is_none());
            assert!(BandPalette::colors(band, PaletteTheme::Dark).glow.is_some());
        }
    }

    #[test]
    fn test_band_color_mapping() {
        assert!(BandPalette::colors(Band::Poor, PaletteTheme::Light).text.contains("red"));
        assert!(BandPalette::colors(Band::Caution, PaletteTheme::Light).text.contains("yellow"));
        assert!(BandPalette::colors(Band::Good, PaletteTheme::Dark).border.contains("green"));
        assert!(BandPalette::colors(Band::Excellent, PaletteTheme::Dark).bg.contains("blue"));
    }

    #[test]
    fn test_difference_colors() {
        assert_eq!(BandPalette::difference_colors(true), GREEN);
        assert_eq!(BandPalette::difference_colors(false), RED);
    }
}
