// ==========================================
// 工地状态分级库 - 核心库
// ==========================================
// 职责: 材料库存/工人考勤/安全/财务/项目状态分级
// 系统定位: 展示层的纯函数协作者,不取数、不落库、不改状态
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "en");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 记录与类型
pub mod domain;

// 引擎层 - 分级策略
pub mod engine;

// 配置层
pub mod config;

// Fixture 数据
pub mod fixtures;

// 金额格式化
pub mod format;

// 错误类型
pub mod error;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{
    AttendanceTier, BudgetStatus, ColorTier, ExpenseStatus, IncidentSeverity, IncidentStatus,
    InspectionStatus, ProjectStatus, StatusToken, StatusValue, StockTier,
};

// 领域记录
pub use domain::{
    Budget, Expense, MaterialStock, Project, SafetyIncident, SafetyInspection, WorkerAttendance,
};

// 引擎
pub use engine::{
    AttendanceEngine, BudgetProgress, BudgetProgressEngine, Classification, ListFilter,
    SiteSummary, StatusClassifier, StatusColorTable, StockLevelEngine, SummaryEngine,
};

pub use config::ClassifierConfig;
pub use error::{AppError, AppResult};
pub use fixtures::FixtureSet;

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "site-status";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
