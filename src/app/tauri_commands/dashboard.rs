use crate::api::SaveDatasetRequest;
use crate::app::state::AppState;
use crate::config::palette::PaletteTheme;

use super::common::{emit_frontend_event, map_api_error};

// ==========================================
// 看板相关命令
// ==========================================

/// 读取当前数据集
#[tauri::command(rename_all = "snake_case")]
pub async fn fetch_dataset(state: tauri::State<'_, AppState>) -> Result<String, String> {
    let result = state.dashboard_api.fetch_dataset().map_err(map_api_error)?;

    serde_json::to_string(&result).map_err(|e| format!("序列化失败: {}", e))
}

/// 整体替换数据集（手工编辑保存）
#[tauri::command(rename_all = "snake_case")]
pub async fn save_dataset(
    app: tauri::AppHandle,
    state: tauri::State<'_, AppState>,
    request: SaveDatasetRequest,
) -> Result<String, String> {
    let result = state
        .dashboard_api
        .save_dataset(request)
        .map_err(map_api_error)?;

    emit_frontend_event(
        &app,
        "dataset_changed",
        serde_json::json!({ "last_updated": result.last_updated, "source": "save" }),
    );
    serde_json::to_string(&result).map_err(|e| format!("序列化失败: {}", e))
}

/// 总览卡片
#[tauri::command(rename_all = "snake_case")]
pub async fn get_overview(state: tauri::State<'_, AppState>) -> Result<String, String> {
    let result = state.dashboard_api.get_overview().map_err(map_api_error)?;

    serde_json::to_string(&result).map_err(|e| format!("序列化失败: {}", e))
}

/// 类别详情
#[tauri::command(rename_all = "snake_case")]
pub async fn get_category_detail(
    state: tauri::State<'_, AppState>,
    category: String,
    theme: Option<PaletteTheme>,
) -> Result<String, String> {
    let result = state
        .dashboard_api
        .get_category_detail_with_theme(&category, theme.unwrap_or_default())
        .map_err(map_api_error)?;

    serde_json::to_string(&result).map_err(|e| format!("序列化失败: {}", e))
}

/// 轮播大屏全部类别详情
#[tauri::command(rename_all = "snake_case")]
pub async fn get_looping_details(state: tauri::State<'_, AppState>) -> Result<String, String> {
    let result = state
        .dashboard_api
        .get_looping_details()
        .map_err(map_api_error)?;

    serde_json::to_string(&result).map_err(|e| format!("序列化失败: {}", e))
}
