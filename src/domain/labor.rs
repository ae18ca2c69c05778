// ==========================================
// 工地状态分级库 - 工人考勤领域模型
// ==========================================
// 红线: check_out 仅在 present=true 且 check_in 已记录时有意义
// ==========================================

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

// ==========================================
// WorkerAttendance - 工人与当日考勤
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkerAttendance {
    pub id: String,
    pub name: String,
    pub role: String,                       // 工种 (Mason/Carpenter/Electrician...)
    #[serde(default)]
    pub skills: BTreeSet<String>,           // 技能集合
    pub present: bool,                      // 当日是否出勤
    #[serde(default)]
    pub check_in: Option<NaiveDateTime>,    // 签到时间
    #[serde(default)]
    pub check_out: Option<NaiveDateTime>,   // 签退时间
    pub contact: String,
    pub salary: f64,                        // 月薪 (> 0)
    pub joining_date: NaiveDate,
}

impl WorkerAttendance {
    /// 当日工作时长 (小时)
    ///
    /// 未签到或未签退时返回 None
    pub fn hours_worked(&self) -> Option<f64> {
        match (self.check_in, self.check_out) {
            (Some(start), Some(end)) if self.present && end >= start => {
                Some((end - start).num_minutes() as f64 / 60.0)
            }
            _ => None,
        }
    }
}
