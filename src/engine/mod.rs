// ==========================================
// 工地状态分级库 - 引擎层
// ==========================================
// 职责: 实现分级策略,每个策略一个无状态引擎
// 红线: 引擎不读写 UI 状态, 所有判定必须输出 reason
// ==========================================

pub mod attendance;
pub mod budget;
pub mod classifier;
pub mod filter;
pub mod status_color;
pub mod stock;
pub mod summary;

// 重导出核心引擎
pub use attendance::AttendanceEngine;
pub use budget::{BudgetProgress, BudgetProgressEngine};
pub use classifier::{
    BudgetView, Classification, ClassifiedRow, IncidentBadges, ProjectView, StatusBoard,
    StatusClassifier,
};
pub use filter::{ListFilter, Searchable};
pub use status_color::{StatusColorTable, StatusEntry};
pub use stock::StockLevelEngine;
pub use summary::{SiteSummary, SummaryEngine};
