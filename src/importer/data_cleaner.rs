// ==========================================
// 银行业绩看板 - 数据清洗器实现
// ==========================================
// 职责: NULL 标准化 / 容错数值解析
// 文本原样保留（类别名、细分名不做 trim），只有数值解析前 trim
// 数值问题从不中断导入: 无法解析一律按 0
// ==========================================

use crate::importer::dataset_importer_trait::DataCleaner as DataCleanerTrait;

pub struct DataCleaner;

impl DataCleanerTrait for DataCleaner {
    fn normalize_null(&self, value: Option<&str>) -> Option<String> {
        value.filter(|v| !v.is_empty()).map(str::to_string)
    }

    fn parse_number(&self, value: Option<&str>) -> f64 {
        value.map(parse_number).unwrap_or(0.0)
    }
}

/// 容错数值解析（取最长合法数值前缀，失败或非有限值返回 0）
pub fn parse_number(raw: &str) -> f64 {
    let text = raw.trim();
    let end = numeric_prefix_len(text.as_bytes());
    if end == 0 {
        return 0.0;
    }

    match text[..end].parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

/// 计算数值前缀长度: [+-]? digits? (. digits?)? ([eE] [+-]? digits)?
///
/// 尾数至少需要一位数字，否则返回 0
fn numeric_prefix_len(bytes: &[u8]) -> usize {
    let mut pos = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        pos += 1;
    }

    let int_start = pos;
    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        pos += 1;
    }
    let mut mantissa_digits = pos - int_start;

    if pos < bytes.len() && bytes[pos] == b'.' {
        let frac_start = pos + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        let frac_digits = frac_end - frac_start;
        if mantissa_digits + frac_digits > 0 {
            pos = frac_end;
            mantissa_digits += frac_digits;
        }
    }

    if mantissa_digits == 0 {
        return 0;
    }

    // 指数部分不完整时忽略（"1e" → 1）
    if pos < bytes.len() && matches!(bytes[pos], b'e' | b'E') {
        let mut exp_pos = pos + 1;
        if exp_pos < bytes.len() && matches!(bytes[exp_pos], b'+' | b'-') {
            exp_pos += 1;
        }
        let exp_digits_start = exp_pos;
        while exp_pos < bytes.len() && bytes[exp_pos].is_ascii_digit() {
            exp_pos += 1;
        }
        if exp_pos > exp_digits_start {
            pos = exp_pos;
        }
    }

    pos
}
