// ==========================================
// 银行业绩看板 - Tauri 主入口
// ==========================================
// 技术栈: Tauri + Rust + SQLite/JSON
// ==========================================

// 禁止控制台窗口 (Windows)
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

#[cfg(feature = "tauri-app")]
fn main() {
    use banking_dashboard::app::tauri_commands::*;
    use banking_dashboard::app::{get_default_db_path, AppState};

    // 初始化日志系统
    banking_dashboard::logging::init();

    tracing::info!("==================================================");
    tracing::info!("{}", banking_dashboard::APP_NAME);
    tracing::info!("系统版本: {}", banking_dashboard::VERSION);
    tracing::info!("==================================================");

    // 获取数据库路径
    let db_path = get_default_db_path();
    tracing::info!("使用数据库: {}", db_path);

    // 创建AppState
    let app_state = match AppState::new(db_path) {
        Ok(state) => state,
        Err(e) => {
            tracing::error!("AppState初始化失败: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("启动Tauri应用...");

    let result = tauri::Builder::default()
        .manage(app_state)
        .invoke_handler(tauri::generate_handler![
            // ==========================================
            // 看板相关命令 (5个)
            // ==========================================
            fetch_dataset,
            save_dataset,
            get_overview,
            get_category_detail,
            get_looping_details,

            // ==========================================
            // 导入/导出相关命令 (3个)
            // ==========================================
            upload_dataset,
            download_template,
            export_dataset,

            // ==========================================
            // 配置管理相关命令 (3个)
            // ==========================================
            get_config_snapshot,
            update_config,
            get_locale,
        ])
        .run(tauri::generate_context!());

    if let Err(e) = result {
        tracing::error!("启动Tauri应用失败: {}", e);
        std::process::exit(1);
    }

    tracing::info!("Tauri应用已退出");
}

#[cfg(not(feature = "tauri-app"))]
fn main() {
    println!("==================================================");
    println!("{}", banking_dashboard::APP_NAME);
    println!("系统版本: {}", banking_dashboard::VERSION);
    println!("==================================================");
    println!();
    println!("此可执行文件需要启用 tauri-app 特性");
    println!("使用: cargo run --features tauri-app");
    println!();
    println!("数据维护请使用命令行工具:");
    println!("cargo run --bin manage_data -- <backup|restore|view|reset>");
}
