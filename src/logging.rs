// ==========================================
// 日志系统初始化
// ==========================================
// 使用 tracing 和 tracing-subscriber
// RUST_LOG 优先；未设置时按入口使用默认级别
// ==========================================

use tracing_subscriber::{fmt, EnvFilter};

fn env_filter_or(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// 初始化日志系统（桌面应用入口，默认 info）
///
/// # 环境变量
/// - RUST_LOG: 例如 RUST_LOG=debug 或 RUST_LOG=banking_dashboard::importer=trace
///
/// # 示例
/// ```no_run
/// use banking_dashboard::logging;
/// logging::init();
/// ```
pub fn init() {
    fmt()
        .with_env_filter(env_filter_or("info"))
        .with_target(true)
        .with_line_number(true)
        .init();
}

/// 命令行工具（manage_data）: 默认 warn，输出到 stderr，不干扰标准输出
pub fn init_cli() {
    let _ = fmt()
        .with_env_filter(env_filter_or("warn"))
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// 测试环境: debug 级别，写入测试输出；可重复调用
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
