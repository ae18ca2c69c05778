// ==========================================
// 工地状态分级库 - 安全领域模型
// ==========================================
// 安全检查 + 安全事故
// ==========================================

use crate::domain::types::{IncidentSeverity, IncidentStatus, InspectionStatus, StatusValue};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// SafetyInspection - 安全检查
// ==========================================
// 约定: status=failed 时应附带整改措施
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SafetyInspection {
    pub id: String,
    pub date: NaiveDate,
    pub inspector: String,
    pub location: String,
    pub status: StatusValue<InspectionStatus>,
    #[serde(default)]
    pub findings: Vec<String>,                      // 检查发现 (有序)
    #[serde(default)]
    pub corrective_actions: Option<Vec<String>>,    // 整改措施 (有序)
}

impl SafetyInspection {
    /// 未通过但缺少整改措施
    pub fn missing_corrective_actions(&self) -> bool {
        self.status == InspectionStatus::Failed
            && self
                .corrective_actions
                .as_ref()
                .map_or(true, |actions| actions.is_empty())
    }
}

// ==========================================
// SafetyIncident - 安全事故
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SafetyIncident {
    pub id: String,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub incident_type: String,      // 事故类型
    pub location: String,
    pub severity: StatusValue<IncidentSeverity>,
    pub status: StatusValue<IncidentStatus>,
    pub description: String,
    pub reported_by: String,
}

impl SafetyIncident {
    /// 未解决（未识别的处理状态同样计入）
    pub fn is_unresolved(&self) -> bool {
        self.status != IncidentStatus::Resolved
    }
}
