// ==========================================
// 导入 API 端到端测试
// ==========================================
// 模拟前端调用后端的完整流程: 上传 → 看板 → 导出
// ==========================================


use banking_dashboard::api::{ApiError, ExportFormat};
use banking_dashboard::importer::{DatasetCodec, ExcelParser, RowReader};
use banking_dashboard::logging;
use test_helpers::{create_test_state, csv_bytes, sample_upload_csv};

/// 测试上传 API 完整流程
#[tokio::test]
async fn test_upload_full_flow() {
    logging::init_test();
    let (_temp_dir, state) = create_test_state().expect("创建 AppState 失败");
    let before = state.dashboard_api.fetch_dataset().unwrap();

    let response = state
        .import_api
        .upload_dataset("metrics.csv", &sample_upload_csv())
        .await
        .expect("上传失败");

    assert!(response.success);
    assert!(response.last_updated >= before.last_updated);
    assert_eq!(response.skipped_rows, 1);
    assert_eq!(response.validation_gaps.len(), 1);
    assert_eq!(response.validation_gaps[0].category, "Kredit");

    // 整体替换: 旧类别不再存在
    let dataset = state.dashboard_api.fetch_dataset().unwrap();
    assert_eq!(dataset.len(), 2);
    assert!(dataset.get("SML").is_none());
    assert_eq!(dataset.get("Pinjaman").unwrap().segments.len(), 2);
    assert_eq!(dataset.last_updated, response.last_updated);

    // 看板读到新数据
    let npl = state.dashboard_api.get_category_detail("NPL").unwrap();
    assert_eq!(npl.achievement, 78.95);
    assert!(npl.differences.iter().all(|d| d.improved));
}

/// 本地文件路径上传
#[tokio::test]
async fn test_upload_from_file_path() {
    let (temp_dir, state) = create_test_state().expect("创建 AppState 失败");

    let path = temp_dir.path().join("metrics.csv");
    std::fs::write(&path, sample_upload_csv()).unwrap();

    let response = state
        .import_api
        .upload_file(path.to_str().unwrap())
        .await
        .expect("上传失败");
    assert_eq!(response.data.len(), 2);
}

/// 上传失败时原数据保持不变
#[tokio::test]
async fn test_failed_upload_keeps_existing_data() {
    let (_temp_dir, state) = create_test_state().expect("创建 AppState 失败");
    let before = state.dashboard_api.fetch_dataset().unwrap();

    let result = state
        .import_api
        .upload_dataset("metrics.xlsx", b"PK\x03\x04 truncated")
        .await;
    assert!(matches!(result, Err(ApiError::UploadFailed(_))));

    let result = state.import_api.upload_dataset("metrics.pdf", b"%PDF-1.4").await;
    assert!(matches!(result, Err(ApiError::UploadFailed(_))));

    assert_eq!(state.dashboard_api.fetch_dataset().unwrap(), before);
}

/// 只有表头的文件得到空数据集
#[tokio::test]
async fn test_header_only_upload_yields_empty_dataset() {
    let (_temp_dir, state) = create_test_state().expect("创建 AppState 失败");

    let response = state
        .import_api
        .upload_dataset("empty.csv", &csv_bytes(&[]))
        .await
        .expect("上传失败");
    assert!(response.data.is_empty());
    assert!(state.dashboard_api.get_overview().unwrap().is_empty());
}

/// 导出结果可被重新上传
#[tokio::test]
async fn test_export_then_reupload() {
    let (_temp_dir, state) = create_test_state().expect("创建 AppState 失败");
    let before = state.dashboard_api.fetch_dataset().unwrap();

    let download = state.import_api.export_dataset(ExportFormat::Xlsx).unwrap();
    assert!(download.file_name.starts_with("banking-data-"));
    assert!(download.file_name.ends_with(".xlsx"));

    let records = ExcelParser.read_rows(&download.bytes).unwrap();
    let outcome = DatasetCodec::default().decode(&records);
    assert_eq!(outcome.dataset.data, before.data);

    let response = state
        .import_api
        .upload_dataset(&download.file_name, &download.bytes)
        .await
        .expect("重新上传失败");
    assert_eq!(response.data.data, before.data);
}

/// 模板包含每类别 1 汇总 + 3 细分
#[test]
fn test_template_download() {
    let (_temp_dir, state) = create_test_state().expect("创建 AppState 失败");

    let download = state.import_api.download_template().unwrap();
    assert_eq!(download.file_name, "banking-metrics-template.xlsx");

    let records = ExcelParser.read_rows(&download.bytes).unwrap();
    assert_eq!(records.len(), 20);

    let outcome = DatasetCodec::default().decode(&records);
    assert_eq!(outcome.dataset.len(), 5);
    assert!(outcome
        .dataset
        .categories()
        .all(|(_, metrics)| metrics.segments.len() == 3));
}
