// ==========================================
// 工地状态分级库 - Fixture 数据
// ==========================================
// 职责: 内置演示数据 + JSON fixture 加载与校验
// 红线: 预算 remaining 不入库; 原始记录携带时按 allocated - spent 校验
// ==========================================

use crate::domain::finance::{Budget, Expense};
use crate::domain::labor::WorkerAttendance;
use crate::domain::material::MaterialStock;
use crate::domain::project::Project;
use crate::domain::safety::{SafetyIncident, SafetyInspection};
use crate::domain::types::{
    BudgetStatus, ExpenseStatus, IncidentSeverity, IncidentStatus, InspectionStatus,
    ProjectStatus, StatusValue,
};
use crate::error::{AppError, AppResult};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// remaining 校验容差（货币最小单位以下）
pub const REMAINING_TOLERANCE: f64 = 0.005;

// ==========================================
// FixtureSet - 一组已校验的记录
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FixtureSet {
    pub materials: Vec<MaterialStock>,
    pub workers: Vec<WorkerAttendance>,
    pub inspections: Vec<SafetyInspection>,
    pub incidents: Vec<SafetyIncident>,
    pub budgets: Vec<Budget>,
    pub expenses: Vec<Expense>,
    pub projects: Vec<Project>,
}

// ==========================================
// RawBudgetRecord - 预算导入中间结构
// ==========================================
// 用途: 兼容携带 remaining 字段的数据源
#[derive(Debug, Clone, Deserialize)]
pub struct RawBudgetRecord {
    pub id: String,
    pub category: String,
    pub allocated: f64,
    pub spent: f64,
    #[serde(default)]
    pub remaining: Option<f64>,
    pub status: StatusValue<BudgetStatus>,
}

impl TryFrom<RawBudgetRecord> for Budget {
    type Error = AppError;

    fn try_from(raw: RawBudgetRecord) -> AppResult<Self> {
        if raw.allocated < 0.0 || raw.spent < 0.0 {
            return Err(AppError::invalid_record(
                "Budget",
                &raw.id,
                format!("allocated={} spent={} must be >= 0", raw.allocated, raw.spent),
            ));
        }

        let expected = raw.allocated - raw.spent;
        if let Some(remaining) = raw.remaining {
            if (remaining - expected).abs() > REMAINING_TOLERANCE {
                return Err(AppError::RemainingMismatch {
                    id: raw.id,
                    remaining,
                    expected,
                });
            }
        }

        Ok(Budget {
            id: raw.id,
            category: raw.category,
            allocated: raw.allocated,
            spent: raw.spent,
            status: raw.status,
        })
    }
}

// ==========================================
// RawFixtureSet - JSON 文件结构
// ==========================================
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawFixtureSet {
    pub materials: Vec<MaterialStock>,
    pub workers: Vec<WorkerAttendance>,
    pub inspections: Vec<SafetyInspection>,
    pub incidents: Vec<SafetyIncident>,
    pub budgets: Vec<RawBudgetRecord>,
    pub expenses: Vec<Expense>,
    pub projects: Vec<Project>,
}

impl RawFixtureSet {
    /// 校验并转换为 FixtureSet
    pub fn into_validated(self) -> AppResult<FixtureSet> {
        let budgets = self
            .budgets
            .into_iter()
            .map(Budget::try_from)
            .collect::<AppResult<Vec<_>>>()?;

        let set = FixtureSet {
            materials: self.materials,
            workers: self.workers,
            inspections: self.inspections,
            incidents: self.incidents,
            budgets,
            expenses: self.expenses,
            projects: self.projects,
        };
        set.validate()?;
        Ok(set)
    }
}

impl FixtureSet {
    /// 记录总数
    pub fn len(&self) -> usize {
        self.materials.len()
            + self.workers.len()
            + self.inspections.len()
            + self.incidents.len()
            + self.budgets.len()
            + self.expenses.len()
            + self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 校验记录约束
    ///
    /// 未通过的安全检查缺少整改措施只记录告警,不拒绝
    pub fn validate(&self) -> AppResult<()> {
        for m in &self.materials {
            if !(m.quantity >= 0.0) || !(m.min_quantity >= 0.0) {
                return Err(AppError::invalid_record(
                    "MaterialStock",
                    &m.id,
                    format!(
                        "quantity={} min_quantity={} must be >= 0",
                        m.quantity, m.min_quantity
                    ),
                ));
            }
        }

        for w in &self.workers {
            if !(w.salary > 0.0) {
                return Err(AppError::invalid_record(
                    "WorkerAttendance",
                    &w.id,
                    format!("salary={} must be > 0", w.salary),
                ));
            }
            if w.check_out.is_some() && (!w.present || w.check_in.is_none()) {
                tracing::warn!(
                    worker_id = %w.id,
                    "check_out 仅在 present=true 且已签到时有意义"
                );
            }
        }

        for i in &self.inspections {
            if i.missing_corrective_actions() {
                tracing::warn!(inspection_id = %i.id, "未通过的安全检查缺少整改措施");
            }
        }

        for b in &self.budgets {
            if b.allocated < 0.0 || b.spent < 0.0 {
                return Err(AppError::invalid_record(
                    "Budget",
                    &b.id,
                    format!("allocated={} spent={} must be >= 0", b.allocated, b.spent),
                ));
            }
        }

        for e in &self.expenses {
            if !(e.amount > 0.0) {
                return Err(AppError::invalid_record(
                    "Expense",
                    &e.id,
                    format!("amount={} must be > 0", e.amount),
                ));
            }
            if e.status == ExpenseStatus::Pending && e.approved_by.is_some() {
                return Err(AppError::invalid_record(
                    "Expense",
                    &e.id,
                    "approved_by must be empty while pending",
                ));
            }
        }

        for p in &self.projects {
            if !(0.0..=100.0).contains(&p.progress) {
                return Err(AppError::invalid_record(
                    "Project",
                    &p.id,
                    format!("progress={} must be within 0..=100", p.progress),
                ));
            }
        }

        Ok(())
    }
}

/// 从 JSON 字符串解析 fixture
pub fn from_json_str(raw: &str, source: &str) -> AppResult<FixtureSet> {
    let parsed: RawFixtureSet =
        serde_json::from_str(raw).map_err(|source_err| AppError::FixtureParse {
            path: source.to_string(),
            source: source_err,
        })?;
    parsed.into_validated()
}

/// 从 JSON 文件加载 fixture
pub fn load_json(path: &Path) -> AppResult<FixtureSet> {
    let path_str = path.display().to_string();
    let raw = std::fs::read_to_string(path).map_err(|source| AppError::FixtureRead {
        path: path_str.clone(),
        source,
    })?;

    let set = from_json_str(&raw, &path_str)?;
    tracing::info!(path = %path_str, records = set.len(), "fixture 已加载");
    Ok(set)
}

// ==========================================
// 内置演示数据
// ==========================================

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn datetime(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    date(y, m, d).and_hms_opt(h, min, 0).unwrap_or_default()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// 内置 fixture（与移动端演示数据一致）
pub fn builtin() -> FixtureSet {
    FixtureSet {
        materials: vec![
            MaterialStock {
                id: "1".to_string(),
                name: "Cement".to_string(),
                category: "Construction".to_string(),
                quantity: 500.0,
                unit: "bags".to_string(),
                min_quantity: 100.0,
                supplier: "ABC Suppliers".to_string(),
                last_ordered: date(2024, 3, 1),
            },
            MaterialStock {
                id: "2".to_string(),
                name: "Steel Bars".to_string(),
                category: "Construction".to_string(),
                quantity: 2000.0,
                unit: "kg".to_string(),
                min_quantity: 500.0,
                supplier: "XYZ Steel".to_string(),
                last_ordered: date(2024, 3, 5),
            },
            MaterialStock {
                id: "3".to_string(),
                name: "Bricks".to_string(),
                category: "Construction".to_string(),
                quantity: 10000.0,
                unit: "pieces".to_string(),
                min_quantity: 2000.0,
                supplier: "Local Brick Factory".to_string(),
                last_ordered: date(2024, 3, 10),
            },
        ],
        workers: vec![
            WorkerAttendance {
                id: "1".to_string(),
                name: "Rajesh Kumar".to_string(),
                role: "Mason".to_string(),
                skills: strings(&["Brick Laying", "Plastering"]).into_iter().collect(),
                present: true,
                check_in: Some(datetime(2024, 3, 15, 8, 0)),
                check_out: None,
                contact: "+91 9876543210".to_string(),
                salary: 15000.0,
                joining_date: date(2024, 1, 1),
            },
            WorkerAttendance {
                id: "2".to_string(),
                name: "Suresh Patel".to_string(),
                role: "Carpenter".to_string(),
                skills: strings(&["Woodwork", "Furniture"]).into_iter().collect(),
                present: false,
                check_in: None,
                check_out: None,
                contact: "+91 9876543211".to_string(),
                salary: 18000.0,
                joining_date: date(2024, 1, 15),
            },
            WorkerAttendance {
                id: "3".to_string(),
                name: "Amit Singh".to_string(),
                role: "Electrician".to_string(),
                skills: strings(&["Wiring", "Installation"]).into_iter().collect(),
                present: true,
                check_in: Some(datetime(2024, 3, 15, 7, 45)),
                check_out: None,
                contact: "+91 9876543212".to_string(),
                salary: 20000.0,
                joining_date: date(2024, 2, 1),
            },
        ],
        inspections: vec![
            SafetyInspection {
                id: "1".to_string(),
                date: date(2024, 3, 15),
                inspector: "John Doe".to_string(),
                location: "Site A - Building 1".to_string(),
                status: InspectionStatus::Passed.into(),
                findings: strings(&["All safety equipment in place", "Proper signage displayed"]),
                corrective_actions: None,
            },
            SafetyInspection {
                id: "2".to_string(),
                date: date(2024, 3, 14),
                inspector: "Jane Smith".to_string(),
                location: "Site B - Foundation".to_string(),
                status: InspectionStatus::Failed.into(),
                findings: strings(&["Missing safety harnesses", "Inadequate lighting"]),
                corrective_actions: Some(strings(&[
                    "Provide additional safety equipment",
                    "Install temporary lighting",
                ])),
            },
            SafetyInspection {
                id: "3".to_string(),
                date: date(2024, 3, 13),
                inspector: "Mike Johnson".to_string(),
                location: "Site C - Roof".to_string(),
                status: InspectionStatus::Pending.into(),
                findings: strings(&["Scheduled for inspection"]),
                corrective_actions: None,
            },
        ],
        incidents: vec![
            SafetyIncident {
                id: "1".to_string(),
                date: date(2024, 3, 15),
                incident_type: "Fall Hazard".to_string(),
                location: "Site A - Scaffolding".to_string(),
                severity: IncidentSeverity::High.into(),
                status: IncidentStatus::Investigating.into(),
                description: "Unstable scaffolding structure identified".to_string(),
                reported_by: "Rajesh Kumar".to_string(),
            },
            SafetyIncident {
                id: "2".to_string(),
                date: date(2024, 3, 14),
                incident_type: "Electrical".to_string(),
                location: "Site B - Generator Room".to_string(),
                severity: IncidentSeverity::Medium.into(),
                status: IncidentStatus::Open.into(),
                description: "Exposed wiring found".to_string(),
                reported_by: "Amit Singh".to_string(),
            },
        ],
        budgets: vec![
            Budget {
                id: "1".to_string(),
                category: "Materials".to_string(),
                allocated: 1_000_000.0,
                spent: 750_000.0,
                status: BudgetStatus::OnTrack.into(),
            },
            Budget {
                id: "2".to_string(),
                category: "Labor".to_string(),
                allocated: 500_000.0,
                spent: 450_000.0,
                status: BudgetStatus::Over.into(),
            },
            Budget {
                id: "3".to_string(),
                category: "Equipment".to_string(),
                allocated: 300_000.0,
                spent: 150_000.0,
                status: BudgetStatus::Under.into(),
            },
        ],
        expenses: vec![
            Expense {
                id: "1".to_string(),
                date: date(2024, 3, 15),
                category: "Materials".to_string(),
                amount: 50_000.0,
                description: "Cement purchase for Site A".to_string(),
                status: ExpenseStatus::Approved.into(),
                approved_by: Some("John Doe".to_string()),
            },
            Expense {
                id: "2".to_string(),
                date: date(2024, 3, 14),
                category: "Labor".to_string(),
                amount: 25_000.0,
                description: "Worker overtime payment".to_string(),
                status: ExpenseStatus::Pending.into(),
                approved_by: None,
            },
            Expense {
                id: "3".to_string(),
                date: date(2024, 3, 13),
                category: "Equipment".to_string(),
                amount: 15_000.0,
                description: "Generator maintenance".to_string(),
                status: ExpenseStatus::Rejected.into(),
                approved_by: Some("Jane Smith".to_string()),
            },
        ],
        projects: vec![
            Project {
                id: "1".to_string(),
                name: "Residential Complex A".to_string(),
                location: "Mumbai, Maharashtra".to_string(),
                status: ProjectStatus::Active.into(),
                progress: 65.0,
                start_date: date(2024, 1, 1),
                end_date: date(2024, 12, 31),
            },
            Project {
                id: "2".to_string(),
                name: "Commercial Tower B".to_string(),
                location: "Delhi, NCR".to_string(),
                status: ProjectStatus::Active.into(),
                progress: 35.0,
                start_date: date(2024, 2, 15),
                end_date: date(2025, 6, 30),
            },
            Project {
                id: "3".to_string(),
                name: "Hospital Extension".to_string(),
                location: "Bangalore, Karnataka".to_string(),
                status: ProjectStatus::OnHold.into(),
                progress: 20.0,
                start_date: date(2024, 3, 1),
                end_date: date(2025, 3, 31),
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_is_valid() {
        let set = builtin();
        assert!(set.validate().is_ok());
        assert_eq!(set.materials.len(), 3);
        assert_eq!(set.workers.len(), 3);
        assert_eq!(set.inspections.len(), 3);
        assert_eq!(set.incidents.len(), 2);
        assert_eq!(set.budgets.len(), 3);
        assert_eq!(set.expenses.len(), 3);
        assert_eq!(set.projects.len(), 3);
        assert_eq!(set.len(), 20);
    }

    #[test]
    fn test_parse_budget_with_consistent_remaining() {
        let json = r#"{
            "budgets": [
                { "id": "1", "category": "Materials", "allocated": 1000000,
                  "spent": 750000, "remaining": 250000, "status": "on-track" }
            ]
        }"#;
        let set = from_json_str(json, "inline").unwrap();
        assert_eq!(set.budgets.len(), 1);
        assert_eq!(set.budgets[0].remaining(), 250_000.0);
        assert_eq!(set.budgets[0].status, BudgetStatus::OnTrack);
        assert!(set.materials.is_empty());
    }

    #[test]
    fn test_remaining_mismatch_rejected() {
        let json = r#"{
            "budgets": [
                { "id": "9", "category": "Labor", "allocated": 500,
                  "spent": 450, "remaining": 100, "status": "over" }
            ]
        }"#;
        let err = from_json_str(json, "inline").unwrap_err();
        assert!(matches!(err, AppError::RemainingMismatch { ref id, .. } if id == "9"));
    }

    #[test]
    fn test_pending_expense_with_approver_rejected() {
        let json = r#"{
            "expenses": [
                { "id": "4", "date": "2024-03-12", "category": "Labor", "amount": 10,
                  "description": "x", "status": "pending", "approved_by": "John Doe" }
            ]
        }"#;
        let err = from_json_str(json, "inline").unwrap_err();
        assert!(matches!(err, AppError::InvalidRecord { entity: "Expense", .. }));
    }

    #[test]
    fn test_negative_quantity_rejected() {
        let mut set = builtin();
        set.materials[0].quantity = -1.0;
        let err = set.validate().unwrap_err();
        assert!(matches!(err, AppError::InvalidRecord { entity: "MaterialStock", .. }));
    }

    #[test]
    fn test_unknown_status_value_is_kept() {
        let json = r#"{
            "inspections": [
                { "id": "1", "date": "2024-03-15", "inspector": "A", "location": "B",
                  "status": "scheduled", "findings": [] },
                { "id": "2", "date": "2024-03-15", "inspector": "A", "location": "C",
                  "status": "Passed", "findings": [] }
            ]
        }"#;
        let set = from_json_str(json, "inline").unwrap();
        assert_eq!(set.inspections.len(), 2);
        assert_eq!(
            set.inspections[0].status,
            StatusValue::<InspectionStatus>::Unrecognized("scheduled".to_string())
        );
        assert_eq!(set.inspections[1].status, InspectionStatus::Passed);
    }

    #[test]
    fn test_load_json_from_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"{ "projects": [
            { "id": "P1", "name": "Depot", "location": "Pune", "status": "active",
              "progress": 10, "start_date": "2024-01-01", "end_date": "2024-06-30" }
        ] }"#)
            .unwrap();

        let set = load_json(file.path()).unwrap();
        assert_eq!(set.len(), 1);
        assert_eq!(set.projects[0].status, ProjectStatus::Active);
    }

    #[test]
    fn test_worker_json_with_check_times() {
        let json = r#"{
            "workers": [
                { "id": "7", "name": "A", "role": "Mason", "skills": ["Tiling"],
                  "present": true, "check_in": "2024-03-15T08:00:00",
                  "check_out": "2024-03-15T17:00:00", "contact": "-",
                  "salary": 12000, "joining_date": "2024-01-01" }
            ]
        }"#;
        let set = from_json_str(json, "inline").unwrap();
        assert_eq!(set.workers[0].hours_worked(), Some(9.0));
    }
}
