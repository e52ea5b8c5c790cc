use crate::app::state::AppState;
use crate::config::config_keys;
use crate::i18n;

// ==========================================
// 配置管理相关命令
// ==========================================

/// 获取配置快照
#[tauri::command(rename_all = "snake_case")]
pub async fn get_config_snapshot(state: tauri::State<'_, AppState>) -> Result<String, String> {
    state
        .config_manager
        .get_config_snapshot()
        .map_err(|e| format!("读取配置失败: {}", e))
}

/// 更新配置（极性/存储相关配置在下次启动时生效）
#[tauri::command(rename_all = "snake_case")]
pub async fn update_config(
    state: tauri::State<'_, AppState>,
    key: String,
    value: String,
) -> Result<String, String> {
    state
        .config_manager
        .set_global_config_value(&key, &value)
        .map_err(|e| format!("更新配置失败: {}", e))?;

    if key == config_keys::DISPLAY_LOCALE {
        i18n::set_locale(value.trim());
    }

    serde_json::to_string(&serde_json::json!({ "success": true, "key": key }))
        .map_err(|e| format!("序列化失败: {}", e))
}

/// 当前界面语言
#[tauri::command(rename_all = "snake_case")]
pub async fn get_locale() -> Result<String, String> {
    Ok(i18n::current_locale())
}
