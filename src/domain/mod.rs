// ==========================================
// 工地状态分级库 - 领域模型层
// ==========================================
// 职责: 定义各业务域记录与分级枚举
// 红线: 记录均为不可变值对象,不含分级逻辑
// ==========================================

pub mod finance;
pub mod labor;
pub mod material;
pub mod project;
pub mod safety;
pub mod types;

// 重导出核心类型
pub use finance::{Budget, Expense};
pub use labor::WorkerAttendance;
pub use material::MaterialStock;
pub use project::Project;
pub use safety::{SafetyIncident, SafetyInspection};
pub use types::{
    AttendanceTier, BudgetStatus, ColorTier, ExpenseStatus, IncidentSeverity, IncidentStatus,
    InspectionStatus, ProjectStatus, StatusToken, StatusValue, StockTier,
};
