use crate::api::{ExportFormat, FileDownload};
use crate::app::state::AppState;

use super::common::{emit_frontend_event, map_api_error};

// ==========================================
// 导入/导出相关命令
// ==========================================

/// 上传表格（本地文件路径）并整体替换数据集
#[tauri::command(rename_all = "snake_case")]
pub async fn upload_dataset(
    app: tauri::AppHandle,
    state: tauri::State<'_, AppState>,
    file_path: String,
) -> Result<String, String> {
    tracing::info!("[upload_dataset] 收到请求: file_path={}", file_path);

    let result = state
        .import_api
        .upload_file(&file_path)
        .await
        .map_err(map_api_error)?;

    tracing::info!(
        "[upload_dataset] 导入成功: batch_id={}, categories={}",
        result.import_batch_id,
        result.data.len()
    );

    emit_frontend_event(
        &app,
        "dataset_changed",
        serde_json::json!({ "last_updated": result.last_updated, "source": "upload" }),
    );
    serde_json::to_string(&result).map_err(|e| format!("序列化失败: {}", e))
}

/// 下载上传模板（写入用户选择的目录）
#[tauri::command(rename_all = "snake_case")]
pub async fn download_template(
    state: tauri::State<'_, AppState>,
    save_dir: String,
) -> Result<String, String> {
    let download = state.import_api.download_template().map_err(map_api_error)?;
    write_download(&save_dir, download).await
}

/// 导出当前数据集（默认 xlsx）
#[tauri::command(rename_all = "snake_case")]
pub async fn export_dataset(
    state: tauri::State<'_, AppState>,
    save_dir: String,
    format: Option<ExportFormat>,
) -> Result<String, String> {
    let download = state
        .import_api
        .export_dataset(format.unwrap_or_default())
        .map_err(map_api_error)?;
    write_download(&save_dir, download).await
}

async fn write_download(save_dir: &str, download: FileDownload) -> Result<String, String> {
    let path = std::path::Path::new(save_dir).join(&download.file_name);
    tokio::fs::write(&path, &download.bytes)
        .await
        .map_err(|e| format!("文件写入失败: {}", e))?;

    tracing::info!("文件已保存: {}", path.display());
    serde_json::to_string(&serde_json::json!({
        "file_path": path.to_string_lossy(),
        "content_type": download.content_type,
        "size": download.bytes.len(),
    }))
    .map_err(|e| format!("序列化失败: {}", e))
}
