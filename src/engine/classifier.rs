// ==========================================
// 工地状态分级库 - 状态分级器 (StatusClassifier)
// ==========================================
// 职责: 记录 → (等级, 标签, 颜色, 原因)
// 输入: 领域记录 + 分级配置
// 输出: Classification,供展示层直接渲染
// 红线: 纯函数,无状态,不读写 UI 状态; 所有结果必须带 reason
// ==========================================

use crate::config::ClassifierConfig;
use crate::domain::finance::{Budget, Expense};
use crate::domain::labor::WorkerAttendance;
use crate::domain::material::MaterialStock;
use crate::domain::project::Project;
use crate::domain::safety::{SafetyIncident, SafetyInspection};
use crate::domain::types::{
    AttendanceTier, BudgetStatus, ColorTier, ExpenseStatus, IncidentSeverity, IncidentStatus,
    InspectionStatus, ProjectStatus, StatusToken, StatusValue, StockTier,
};
use crate::engine::attendance::AttendanceEngine;
use crate::engine::budget::{BudgetProgress, BudgetProgressEngine};
use crate::engine::status_color::StatusColorTable;
use crate::engine::stock::StockLevelEngine;
use crate::fixtures::FixtureSet;
use crate::i18n;
use chrono::NaiveDateTime;
use serde::Serialize;
use tracing::instrument;

// ==========================================
// 输出结构
// ==========================================

/// 单项分级结果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Classification<T> {
    pub tier: T,          // 等级
    pub label: String,    // 展示标签（按配置语言）
    pub color: ColorTier, // 颜色等级
    pub reason: String,   // 判定原因（可解释性）
}

/// 列表渲染行: 记录 + 分级结果
#[derive(Debug, Clone, Serialize)]
pub struct ClassifiedRow<'a, R, C> {
    pub record: &'a R,
    pub classification: C,
}

/// 安全事故的两个徽标
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IncidentBadges {
    pub severity: Classification<StatusValue<IncidentSeverity>>,
    pub status: Classification<StatusValue<IncidentStatus>>,
}

/// 预算卡片
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetView {
    pub status: Classification<StatusValue<BudgetStatus>>,
    pub progress: BudgetProgress,
    pub remaining: f64, // allocated - spent,未取整
}

/// 项目卡片
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectView {
    pub status: Classification<StatusValue<ProjectStatus>>,
    pub progress_ratio: f64, // progress / 100,截断到 [0, 1]
}

/// 整组 fixture 的分级结果
#[derive(Debug, Clone, Serialize)]
pub struct StatusBoard<'a> {
    pub materials: Vec<ClassifiedRow<'a, MaterialStock, Classification<StockTier>>>,
    pub workers: Vec<ClassifiedRow<'a, WorkerAttendance, Classification<AttendanceTier>>>,
    pub inspections:
        Vec<ClassifiedRow<'a, SafetyInspection, Classification<StatusValue<InspectionStatus>>>>,
    pub incidents: Vec<ClassifiedRow<'a, SafetyIncident, IncidentBadges>>,
    pub budgets: Vec<ClassifiedRow<'a, Budget, BudgetView>>,
    pub expenses: Vec<ClassifiedRow<'a, Expense, Classification<StatusValue<ExpenseStatus>>>>,
    pub projects: Vec<ClassifiedRow<'a, Project, ProjectView>>,
}

fn rows<'a, R, C>(records: &'a [R], f: impl Fn(&R) -> C) -> Vec<ClassifiedRow<'a, R, C>> {
    records
        .iter()
        .map(|record| ClassifiedRow {
            classification: f(record),
            record,
        })
        .collect()
}

// ==========================================
// StatusClassifier
// ==========================================
#[derive(Debug, Clone)]
pub struct StatusClassifier {
    config: ClassifierConfig,
    stock: StockLevelEngine,
    attendance: AttendanceEngine,
    colors: StatusColorTable,
    budget: BudgetProgressEngine,
}

impl Default for StatusClassifier {
    fn default() -> Self {
        Self::new(ClassifierConfig::default())
    }
}

impl StatusClassifier {
    /// 按配置创建分级器（配置应已通过 validate）
    pub fn new(config: ClassifierConfig) -> Self {
        Self {
            stock: StockLevelEngine::with_factor(config.medium_stock_factor),
            attendance: AttendanceEngine::new(),
            colors: StatusColorTable::new(config.on_track_color),
            budget: BudgetProgressEngine::new(),
            config,
        }
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    pub fn color_table(&self) -> &StatusColorTable {
        &self.colors
    }

    fn label(&self, key: &str) -> String {
        i18n::t_in(&self.config.locale, key)
    }

    // ==========================================
    // 库存
    // ==========================================

    /// 按数量判定库存等级
    pub fn classify_stock_level(
        &self,
        quantity: f64,
        min_quantity: f64,
    ) -> Classification<StockTier> {
        let (tier, reason) = self.stock.evaluate(quantity, min_quantity);
        Classification {
            tier,
            label: self.label(tier.label_key()),
            color: StockLevelEngine::color_for(tier),
            reason,
        }
    }

    pub fn classify_material(&self, material: &MaterialStock) -> Classification<StockTier> {
        self.classify_stock_level(material.quantity, material.min_quantity)
    }

    // ==========================================
    // 考勤
    // ==========================================

    /// 按出勤标志与签退时间判定考勤状态
    pub fn classify_attendance_state(
        &self,
        present: bool,
        check_out: Option<NaiveDateTime>,
    ) -> Classification<AttendanceTier> {
        let tier = self.attendance.classify(present, check_out);
        Classification {
            tier,
            label: self.label(tier.label_key()),
            color: AttendanceEngine::color_for(tier),
            reason: format!("ATTENDANCE_{}: present={}", tier, present),
        }
    }

    pub fn classify_worker(&self, worker: &WorkerAttendance) -> Classification<AttendanceTier> {
        let (tier, reason) = self.attendance.evaluate(worker);
        Classification {
            tier,
            label: self.label(tier.label_key()),
            color: AttendanceEngine::color_for(tier),
            reason,
        }
    }

    // ==========================================
    // 状态/严重度（统一映射表）
    // ==========================================

    /// 类型化状态分级
    pub fn classify_status<T: StatusToken + Copy>(&self, value: T) -> Classification<T> {
        let token = value.as_token();
        match self.colors.entry(token) {
            Some(entry) => Classification {
                tier: value,
                label: self.label(entry.label_key),
                color: entry.color,
                reason: format!("STATUS_TABLE: {} -> {}", token, entry.color),
            },
            None => Classification {
                tier: value,
                label: token.to_uppercase(),
                color: ColorTier::Neutral,
                reason: format!("STATUS_UNRECOGNIZED: {} -> NEUTRAL", token),
            },
        }
    }

    /// 记录中的状态取值分级
    ///
    /// 未识别取值 → NEUTRAL,标签为原值大写,不影响同批其它记录
    pub fn classify_status_value<T: StatusToken + Copy>(
        &self,
        value: &StatusValue<T>,
    ) -> Classification<StatusValue<T>> {
        match value {
            StatusValue::Known(known) => {
                let c = self.classify_status(*known);
                Classification {
                    tier: StatusValue::Known(c.tier),
                    label: c.label,
                    color: c.color,
                    reason: c.reason,
                }
            }
            StatusValue::Unrecognized(raw) => Classification {
                tier: value.clone(),
                label: value.to_string(),
                color: self.colors.color_of_value(value),
                reason: format!("STATUS_UNRECOGNIZED: {:?} -> NEUTRAL", raw),
            },
        }
    }

    /// 原始字符串状态分级
    ///
    /// tier 为规范化后的令牌; 未识别取值 → NEUTRAL,标签为原值大写
    pub fn classify_raw_status(&self, raw: &str) -> Classification<String> {
        let token = StatusColorTable::normalize(raw);
        match self.colors.entry(&token) {
            Some(entry) => Classification {
                label: self.label(entry.label_key),
                color: entry.color,
                reason: format!("STATUS_TABLE: {} -> {}", token, entry.color),
                tier: token,
            },
            None => {
                tracing::debug!(value = raw, "未识别的状态取值,降级为 NEUTRAL");
                Classification {
                    label: raw.trim().to_uppercase(),
                    color: ColorTier::Neutral,
                    reason: format!("STATUS_UNRECOGNIZED: {:?} -> NEUTRAL", raw),
                    tier: token,
                }
            }
        }
    }

    pub fn classify_inspection(
        &self,
        inspection: &SafetyInspection,
    ) -> Classification<StatusValue<InspectionStatus>> {
        self.classify_status_value(&inspection.status)
    }

    pub fn classify_incident(&self, incident: &SafetyIncident) -> IncidentBadges {
        IncidentBadges {
            severity: self.classify_status_value(&incident.severity),
            status: self.classify_status_value(&incident.status),
        }
    }

    pub fn classify_expense(&self, expense: &Expense) -> Classification<StatusValue<ExpenseStatus>> {
        self.classify_status_value(&expense.status)
    }

    // ==========================================
    // 预算
    // ==========================================

    /// 预算进度（allocated = 0 → 哨兵）
    pub fn budget_progress(&self, allocated: f64, spent: f64, status: BudgetStatus) -> BudgetProgress {
        self.budget
            .progress(allocated, spent, self.colors.color_of(&status))
    }

    pub fn classify_budget(&self, budget: &Budget) -> BudgetView {
        BudgetView {
            status: self.classify_status_value(&budget.status),
            progress: self.budget.progress(
                budget.allocated,
                budget.spent,
                self.colors.color_of_value(&budget.status),
            ),
            remaining: budget.remaining(),
        }
    }

    // ==========================================
    // 项目
    // ==========================================

    pub fn classify_project(&self, project: &Project) -> ProjectView {
        let progress_ratio = if project.progress.is_finite() {
            (project.progress / 100.0).clamp(0.0, 1.0)
        } else {
            0.0
        };
        ProjectView {
            status: self.classify_status_value(&project.status),
            progress_ratio,
        }
    }

    // ==========================================
    // 批量分级（列表渲染）
    // ==========================================

    #[instrument(skip(self, materials), fields(count = materials.len()))]
    pub fn classify_materials<'a>(
        &self,
        materials: &'a [MaterialStock],
    ) -> Vec<ClassifiedRow<'a, MaterialStock, Classification<StockTier>>> {
        rows(materials, |m| self.classify_material(m))
    }

    #[instrument(skip(self, workers), fields(count = workers.len()))]
    pub fn classify_workers<'a>(
        &self,
        workers: &'a [WorkerAttendance],
    ) -> Vec<ClassifiedRow<'a, WorkerAttendance, Classification<AttendanceTier>>> {
        rows(workers, |w| self.classify_worker(w))
    }

    #[instrument(skip(self, inspections), fields(count = inspections.len()))]
    pub fn classify_inspections<'a>(
        &self,
        inspections: &'a [SafetyInspection],
    ) -> Vec<ClassifiedRow<'a, SafetyInspection, Classification<StatusValue<InspectionStatus>>>> {
        rows(inspections, |i| self.classify_inspection(i))
    }

    #[instrument(skip(self, incidents), fields(count = incidents.len()))]
    pub fn classify_incidents<'a>(
        &self,
        incidents: &'a [SafetyIncident],
    ) -> Vec<ClassifiedRow<'a, SafetyIncident, IncidentBadges>> {
        rows(incidents, |i| self.classify_incident(i))
    }

    #[instrument(skip(self, budgets), fields(count = budgets.len()))]
    pub fn classify_budgets<'a>(
        &self,
        budgets: &'a [Budget],
    ) -> Vec<ClassifiedRow<'a, Budget, BudgetView>> {
        rows(budgets, |b| self.classify_budget(b))
    }

    #[instrument(skip(self, expenses), fields(count = expenses.len()))]
    pub fn classify_expenses<'a>(
        &self,
        expenses: &'a [Expense],
    ) -> Vec<ClassifiedRow<'a, Expense, Classification<StatusValue<ExpenseStatus>>>> {
        rows(expenses, |e| self.classify_expense(e))
    }

    #[instrument(skip(self, projects), fields(count = projects.len()))]
    pub fn classify_projects<'a>(
        &self,
        projects: &'a [Project],
    ) -> Vec<ClassifiedRow<'a, Project, ProjectView>> {
        rows(projects, |p| self.classify_project(p))
    }

    /// 整组 fixture 分级
    #[instrument(skip(self, set), fields(records = set.len()))]
    pub fn classify_fixture_set<'a>(&self, set: &'a FixtureSet) -> StatusBoard<'a> {
        StatusBoard {
            materials: self.classify_materials(&set.materials),
            workers: self.classify_workers(&set.workers),
            inspections: self.classify_inspections(&set.inspections),
            incidents: self.classify_incidents(&set.incidents),
            budgets: self.classify_budgets(&set.budgets),
            expenses: self.classify_expenses(&set.expenses),
            projects: self.classify_projects(&set.projects),
        }
    }
}
