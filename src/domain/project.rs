// ==========================================
// 工地状态分级库 - 项目领域模型
// ==========================================

use crate::domain::types::{ProjectStatus, StatusValue};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// Project - 在建项目
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub location: String,
    pub status: StatusValue<ProjectStatus>,
    pub progress: f64,          // 进度百分比 (0-100)
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}
