// ==========================================
// DashboardApi 集成测试
// ==========================================
// 测试目标: 默认数据集上的总览卡片、类别详情、轮播详情
// ==========================================


use banking_dashboard::api::{ApiError, SaveDatasetRequest};
use banking_dashboard::domain::types::{Band, Polarity};
use banking_dashboard::engine::Period;
use test_helpers::create_test_state;

#[test]
fn test_overview_matches_default_dataset() {
    let (_temp_dir, state) = create_test_state().expect("创建 AppState 失败");

    let cards = state.dashboard_api.get_overview().unwrap();
    assert_eq!(cards.len(), 5);

    let pinjaman = cards.iter().find(|c| c.category == "Pinjaman").unwrap();
    assert_eq!(pinjaman.achievement, 90.0);
    assert_eq!(pinjaman.band, Band::Poor);
    assert_eq!(pinjaman.progress_pct, 90.0);

    let sml = cards.iter().find(|c| c.category == "SML").unwrap();
    assert_eq!(sml.achievement, 117.65);
    assert_eq!(sml.band, Band::Excellent);
    assert_eq!(sml.progress_pct, 100.0);
}

#[test]
fn test_inverse_category_detail() {
    let (_temp_dir, state) = create_test_state().expect("创建 AppState 失败");

    let sml = state.dashboard_api.get_category_detail("SML").unwrap();
    assert_eq!(sml.polarity, Polarity::Inverse);

    let dtd = sml
        .differences
        .iter()
        .find(|d| d.period == Period::DayToDay)
        .unwrap();
    assert_eq!(dtd.delta, -100_000.0);
    assert!(dtd.improved);
    assert_eq!(dtd.formatted, "-100,000");

    // 细分沿用类别极性: Micro 3.0M / 3.5M ⇒ 116.67
    let micro = sml.segments.iter().find(|s| s.name == "Micro").unwrap();
    assert_eq!(micro.achievement, 116.67);
}

#[test]
fn test_normal_category_detail() {
    let (_temp_dir, state) = create_test_state().expect("创建 AppState 失败");

    let pinjaman = state.dashboard_api.get_category_detail("Pinjaman").unwrap();
    assert_eq!(pinjaman.polarity, Polarity::Normal);

    let formatted: Vec<&str> = pinjaman
        .differences
        .iter()
        .map(|d| d.formatted.as_str())
        .collect();
    assert_eq!(formatted, vec!["+500,000", "+3,500,000", "+6,100,000"]);
    assert!(pinjaman.differences.iter().all(|d| d.improved));
}

#[test]
fn test_unknown_category_is_not_found() {
    let (_temp_dir, state) = create_test_state().expect("创建 AppState 失败");

    let result = state.dashboard_api.get_category_detail("Biaya");
    assert!(matches!(result, Err(ApiError::CategoryNotFound(_))));
}

#[test]
fn test_save_replaces_dataset_wholesale() {
    let (_temp_dir, state) = create_test_state().expect("创建 AppState 失败");

    let mut data = state.dashboard_api.fetch_dataset().unwrap().data;
    data.shift_remove("Recovery");

    let response = state
        .dashboard_api
        .save_dataset(SaveDatasetRequest {
            data: Some(data),
            last_updated: None,
        })
        .unwrap();
    assert!(response.success);

    let dataset = state.dashboard_api.fetch_dataset().unwrap();
    assert_eq!(dataset.len(), 4);
    assert_eq!(dataset.last_updated, response.last_updated);
    assert_eq!(state.dashboard_api.get_looping_details().unwrap().len(), 4);
}
