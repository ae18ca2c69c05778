// ==========================================
// 工地状态分级库 - 工地概览引擎
// ==========================================
// 职责: 首页计数卡片（在建项目/待办/在岗工人/安全事故）
// 输入: FixtureSet + StatusClassifier
// 输出: SiteSummary
// ==========================================

use crate::domain::types::{
    AttendanceTier, ExpenseStatus, InspectionStatus, ProjectStatus, StockTier,
};
use crate::engine::budget::ratio_or_none;
use crate::engine::classifier::StatusClassifier;
use crate::fixtures::FixtureSet;
use serde::Serialize;
use tracing::instrument;

/// 工地概览
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiteSummary {
    pub active_projects: usize,       // 进行中的项目
    pub pending_tasks: usize,         // 待检查 + 待审批 + 未解决事故
    pub workers_on_site: usize,       // 在岗（已签到未签退）工人
    pub unresolved_incidents: usize,  // 未解决安全事故
    pub low_stock_materials: usize,   // 库存不足材料
    pub total_allocated: f64,         // 预算总额
    pub total_spent: f64,             // 已支出总额
    pub budget_ratio: f64,            // 总支出比例（预算总额为零时为 0）
}

// ==========================================
// SummaryEngine
// ==========================================
#[derive(Debug, Clone, Copy, Default)]
pub struct SummaryEngine;

impl SummaryEngine {
    pub fn new() -> Self {
        Self
    }

    /// 汇总工地概览
    #[instrument(skip(self, classifier, set), fields(records = set.len()))]
    pub fn summarize(&self, classifier: &StatusClassifier, set: &FixtureSet) -> SiteSummary {
        let active_projects = set
            .projects
            .iter()
            .filter(|p| p.status == ProjectStatus::Active)
            .count();

        let workers_on_site = set
            .workers
            .iter()
            .filter(|w| classifier.classify_worker(w).tier == AttendanceTier::Active)
            .count();

        let unresolved_incidents = set.incidents.iter().filter(|i| i.is_unresolved()).count();

        let pending_inspections = set
            .inspections
            .iter()
            .filter(|i| i.status == InspectionStatus::Pending)
            .count();
        let pending_expenses = set
            .expenses
            .iter()
            .filter(|e| e.status == ExpenseStatus::Pending)
            .count();

        let low_stock_materials = set
            .materials
            .iter()
            .filter(|m| classifier.classify_material(m).tier == StockTier::Low)
            .count();

        let total_allocated: f64 = set.budgets.iter().map(|b| b.allocated).sum();
        let total_spent: f64 = set.budgets.iter().map(|b| b.spent).sum();

        let summary = SiteSummary {
            active_projects,
            pending_tasks: pending_inspections + pending_expenses + unresolved_incidents,
            workers_on_site,
            unresolved_incidents,
            low_stock_materials,
            total_allocated,
            total_spent,
            budget_ratio: ratio_or_none(total_spent, total_allocated).unwrap_or(0.0),
        };

        tracing::debug!(?summary, "工地概览已生成");
        summary
    }
}
