// ==========================================
// StatusClassifier 集成测试
// ==========================================
// 测试目标: 内置演示数据端到端分级
// 覆盖范围: 库存三级/考勤三态/统一状态映射/预算哨兵/多语言标签
// ==========================================

use chrono::NaiveDate;
use site_status::engine::SummaryEngine;
use site_status::{
    AttendanceTier, Budget, BudgetStatus, ClassifierConfig, ColorTier, ExpenseStatus,
    IncidentSeverity, IncidentStatus, InspectionStatus, ProjectStatus, StatusClassifier,
    StockTier,
};

// ==========================================
// 测试辅助函数
// ==========================================

fn classifier_with_locale(locale: &str) -> StatusClassifier {
    let config = ClassifierConfig::default()
        .with_locale(locale)
        .expect("locale should be supported");
    StatusClassifier::new(config)
}

fn check_time(h: u32, m: u32) -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 15)
        .unwrap()
        .and_hms_opt(h, m, 0)
        .unwrap()
}

fn create_test_budget(allocated: f64, spent: f64, status: BudgetStatus) -> Budget {
    Budget {
        id: "B-TEST".to_string(),
        category: "Equipment".to_string(),
        allocated,
        spent,
        status: status.into(),
    }
}

// ==========================================
// 库存等级
// ==========================================

#[test]
fn test_stock_tier_boundaries() {
    let classifier = StatusClassifier::default();

    // quantity <= min → LOW
    let c = classifier.classify_stock_level(100.0, 100.0);
    assert_eq!(c.tier, StockTier::Low);
    assert_eq!(c.color, ColorTier::Error);
    assert_eq!(c.label, "Low Stock");

    // min < quantity <= 1.5 * min → MEDIUM
    let c = classifier.classify_stock_level(150.0, 100.0);
    assert_eq!(c.tier, StockTier::Medium);
    assert_eq!(c.color, ColorTier::Warning);
    assert_eq!(c.label, "Medium Stock");

    // quantity > 1.5 * min → GOOD
    let c = classifier.classify_stock_level(151.0, 100.0);
    assert_eq!(c.tier, StockTier::Good);
    assert_eq!(c.color, ColorTier::Success);
    assert_eq!(c.label, "Good Stock");
}

#[test]
fn test_zero_minimum_stock() {
    let classifier = StatusClassifier::default();
    assert_eq!(classifier.classify_stock_level(0.0, 0.0).tier, StockTier::Low);
    assert_eq!(classifier.classify_stock_level(1.0, 0.0).tier, StockTier::Good);
}

#[test]
fn test_custom_medium_factor() {
    let config = ClassifierConfig {
        medium_stock_factor: 2.0,
        ..ClassifierConfig::default()
    };
    config.validate().unwrap();
    let classifier = StatusClassifier::new(config);

    assert_eq!(classifier.classify_stock_level(200.0, 100.0).tier, StockTier::Medium);
    assert_eq!(classifier.classify_stock_level(201.0, 100.0).tier, StockTier::Good);
}

#[test]
fn test_builtin_materials_are_good_stock() {
    let classifier = StatusClassifier::default();
    let set = site_status::fixtures::builtin();

    let rows = classifier.classify_materials(&set.materials);
    assert_eq!(rows.len(), 3);
    for row in &rows {
        assert_eq!(row.classification.tier, StockTier::Good, "{}", row.record.name);
        assert_eq!(row.classification.color, ColorTier::Success);
        assert!(row.classification.reason.starts_with("STOCK_GOOD"));
    }
}

// ==========================================
// 考勤状态
// ==========================================

#[test]
fn test_attendance_states() {
    let classifier = StatusClassifier::default();

    let absent = classifier.classify_attendance_state(false, None);
    assert_eq!(absent.tier, AttendanceTier::Absent);
    assert_eq!(absent.color, ColorTier::Error);
    assert_eq!(absent.label, "Absent");

    let active = classifier.classify_attendance_state(true, None);
    assert_eq!(active.tier, AttendanceTier::Active);
    assert_eq!(active.color, ColorTier::Success);
    assert_eq!(active.label, "Present");

    let completed = classifier.classify_attendance_state(true, Some(check_time(17, 30)));
    assert_eq!(completed.tier, AttendanceTier::Completed);
    assert_eq!(completed.color, ColorTier::Info);
    assert_eq!(completed.label, "Completed");
}

#[test]
fn test_absent_wins_over_stale_check_out() {
    let classifier = StatusClassifier::default();
    let c = classifier.classify_attendance_state(false, Some(check_time(17, 30)));
    assert_eq!(c.tier, AttendanceTier::Absent);
}

#[test]
fn test_builtin_workers() {
    let classifier = StatusClassifier::default();
    let set = site_status::fixtures::builtin();

    let tiers: Vec<AttendanceTier> = classifier
        .classify_workers(&set.workers)
        .iter()
        .map(|row| row.classification.tier)
        .collect();
    assert_eq!(
        tiers,
        vec![AttendanceTier::Active, AttendanceTier::Absent, AttendanceTier::Active]
    );
}

#[test]
fn test_worker_checked_out_is_completed() {
    let classifier = StatusClassifier::default();
    let mut set = site_status::fixtures::builtin();
    set.workers[0].check_out = Some(check_time(17, 0));

    let c = classifier.classify_worker(&set.workers[0]);
    assert_eq!(c.tier, AttendanceTier::Completed);
    assert_eq!(set.workers[0].hours_worked(), Some(9.0));
}

// ==========================================
// 统一状态映射
// ==========================================

#[test]
fn test_shared_status_table() {
    let classifier = StatusClassifier::default();

    assert_eq!(classifier.classify_status(InspectionStatus::Passed).color, ColorTier::Success);
    assert_eq!(classifier.classify_status(InspectionStatus::Failed).color, ColorTier::Error);
    assert_eq!(classifier.classify_status(InspectionStatus::Pending).color, ColorTier::Warning);

    assert_eq!(classifier.classify_status(IncidentSeverity::Low).color, ColorTier::Info);
    assert_eq!(classifier.classify_status(IncidentSeverity::Medium).color, ColorTier::Warning);
    assert_eq!(classifier.classify_status(IncidentSeverity::High).color, ColorTier::Error);

    assert_eq!(classifier.classify_status(IncidentStatus::Open).color, ColorTier::Warning);
    assert_eq!(
        classifier.classify_status(IncidentStatus::Investigating).color,
        ColorTier::Warning
    );
    assert_eq!(classifier.classify_status(IncidentStatus::Resolved).color, ColorTier::Success);

    assert_eq!(classifier.classify_status(BudgetStatus::Under).color, ColorTier::Success);
    assert_eq!(classifier.classify_status(BudgetStatus::Over).color, ColorTier::Error);
    assert_eq!(classifier.classify_status(BudgetStatus::OnTrack).color, ColorTier::Warning);

    assert_eq!(classifier.classify_status(ExpenseStatus::Approved).color, ColorTier::Success);
    assert_eq!(classifier.classify_status(ExpenseStatus::Rejected).color, ColorTier::Error);
    assert_eq!(classifier.classify_status(ExpenseStatus::Pending).color, ColorTier::Warning);

    assert_eq!(classifier.classify_status(ProjectStatus::Active).color, ColorTier::Success);
    assert_eq!(classifier.classify_status(ProjectStatus::OnHold).color, ColorTier::Warning);
}

#[test]
fn test_pending_shared_across_domains() {
    let classifier = StatusClassifier::default();
    let inspection = classifier.classify_status(InspectionStatus::Pending);
    let expense = classifier.classify_status(ExpenseStatus::Pending);
    assert_eq!(inspection.color, expense.color);
    assert_eq!(inspection.label, expense.label);
    assert_eq!(inspection.label, "PENDING");
}

#[test]
fn test_raw_status_is_case_insensitive() {
    let classifier = StatusClassifier::default();

    let c = classifier.classify_raw_status("  Investigating ");
    assert_eq!(c.tier, "investigating");
    assert_eq!(c.color, ColorTier::Warning);
    assert_eq!(c.label, "INVESTIGATING");

    let c = classifier.classify_raw_status("ON-TRACK");
    assert_eq!(c.color, ColorTier::Warning);
}

#[test]
fn test_unknown_raw_status_is_neutral() {
    let classifier = StatusClassifier::default();
    let c = classifier.classify_raw_status("escalated");
    assert_eq!(c.color, ColorTier::Neutral);
    assert_eq!(c.label, "ESCALATED");
    assert!(c.reason.starts_with("STATUS_UNRECOGNIZED"));

    let c = classifier.classify_raw_status("");
    assert_eq!(c.color, ColorTier::Neutral);
}

#[test]
fn test_on_track_color_configurable() {
    let config = ClassifierConfig {
        on_track_color: ColorTier::Success,
        ..ClassifierConfig::default()
    };
    let classifier = StatusClassifier::new(config);
    assert_eq!(classifier.classify_status(BudgetStatus::OnTrack).color, ColorTier::Success);

    // 其它映射不受影响
    assert_eq!(classifier.classify_status(BudgetStatus::Over).color, ColorTier::Error);
}

#[test]
fn test_builtin_incidents_badges() {
    let classifier = StatusClassifier::default();
    let set = site_status::fixtures::builtin();
    let rows = classifier.classify_incidents(&set.incidents);

    assert_eq!(rows[0].classification.severity.color, ColorTier::Error);
    assert_eq!(rows[0].classification.status.color, ColorTier::Warning);
    assert_eq!(rows[1].classification.severity.color, ColorTier::Warning);
    assert_eq!(rows[1].classification.status.color, ColorTier::Warning);
    assert_eq!(rows[1].classification.status.label, "OPEN");
}

// ==========================================
// 预算进度
// ==========================================

#[test]
fn test_builtin_budget_progress() {
    let classifier = StatusClassifier::default();
    let set = site_status::fixtures::builtin();
    let rows = classifier.classify_budgets(&set.budgets);

    let materials = &rows[0].classification;
    assert_eq!(materials.progress.ratio, 0.75);
    assert_eq!(materials.progress.color, ColorTier::Warning);
    assert_eq!(materials.remaining, 250_000.0);

    let labor = &rows[1].classification;
    assert_eq!(labor.progress.ratio, 0.9);
    assert_eq!(labor.progress.color, ColorTier::Error);
    assert_eq!(labor.status.label, "OVER");

    let equipment = &rows[2].classification;
    assert_eq!(equipment.progress.ratio, 0.5);
    assert_eq!(equipment.progress.color, ColorTier::Success);
}

#[test]
fn test_zero_allocation_uses_sentinel() {
    let classifier = StatusClassifier::default();
    let view = classifier.classify_budget(&create_test_budget(0.0, 0.0, BudgetStatus::Under));

    assert_eq!(view.progress.ratio, 0.0);
    assert_eq!(view.progress.display_ratio, 0.0);
    assert_eq!(view.progress.color, ColorTier::Neutral);
    assert!(view.progress.degenerate);
    assert!(view.progress.ratio.is_finite());

    // 零预算但有支出: 仍为哨兵, remaining 为负
    let view = classifier.classify_budget(&create_test_budget(0.0, 1_000.0, BudgetStatus::Over));
    assert!(view.progress.degenerate);
    assert_eq!(view.remaining, -1_000.0);
}

#[test]
fn test_overspent_ratio_not_clamped() {
    let classifier = StatusClassifier::default();
    let view =
        classifier.classify_budget(&create_test_budget(100_000.0, 150_000.0, BudgetStatus::Over));
    assert_eq!(view.progress.ratio, 1.5);
    assert_eq!(view.progress.display_ratio, 1.0);
    assert!(!view.progress.degenerate);
}

// ==========================================
// 多语言标签
// ==========================================

#[test]
fn test_zh_cn_labels() {
    let classifier = classifier_with_locale("zh-CN");

    assert_eq!(classifier.classify_stock_level(10.0, 100.0).label, "库存不足");
    assert_eq!(classifier.classify_attendance_state(true, None).label, "在岗");
    assert_eq!(classifier.classify_status(BudgetStatus::OnTrack).label, "正常推进");

    // 颜色与语言无关
    assert_eq!(
        classifier.classify_status(BudgetStatus::OnTrack).color,
        StatusClassifier::default().classify_status(BudgetStatus::OnTrack).color
    );
}

#[test]
fn test_unsupported_locale_rejected() {
    let err = ClassifierConfig::default().with_locale("fr").unwrap_err();
    assert!(err.to_string().contains("fr"));
}

// ==========================================
// 整组分级 + 概览
// ==========================================

#[test]
fn test_full_board_and_summary() {
    site_status::logging::init_test();
    let classifier = StatusClassifier::default();
    let set = site_status::fixtures::builtin();

    let board = classifier.classify_fixture_set(&set);
    assert_eq!(board.materials.len(), set.materials.len());
    assert_eq!(board.workers.len(), set.workers.len());
    assert_eq!(board.inspections.len(), set.inspections.len());
    assert_eq!(board.incidents.len(), set.incidents.len());
    assert_eq!(board.budgets.len(), set.budgets.len());
    assert_eq!(board.expenses.len(), set.expenses.len());
    assert_eq!(board.projects.len(), set.projects.len());

    let summary = SummaryEngine::new().summarize(&classifier, &set);
    assert_eq!(summary.active_projects, 2);
    assert_eq!(summary.workers_on_site, 2);
    assert_eq!(summary.budget_ratio, 0.75);
}

#[test]
fn test_board_serializes_to_json() {
    let classifier = StatusClassifier::default();
    let set = site_status::fixtures::builtin();
    let board = classifier.classify_fixture_set(&set);

    let value = serde_json::to_value(&board).unwrap();
    assert_eq!(value["materials"][0]["classification"]["tier"], "GOOD");
    assert_eq!(value["materials"][0]["classification"]["color"], "SUCCESS");
    assert_eq!(value["budgets"][0]["record"]["status"], "on-track");
    assert_eq!(value["budgets"][0]["classification"]["progress"]["color"], "WARNING");
    assert_eq!(value["incidents"][0]["record"]["type"], "Fall Hazard");
}
