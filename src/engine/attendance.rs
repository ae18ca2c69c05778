// ==========================================
// 工地状态分级库 - 考勤状态判定引擎
// ==========================================
// 职责: present + check_out → ABSENT / ACTIVE / COMPLETED
// ==========================================

use crate::domain::labor::WorkerAttendance;
use crate::domain::types::{AttendanceTier, ColorTier};
use chrono::NaiveDateTime;

// ==========================================
// AttendanceEngine - 考勤状态判定
// ==========================================
#[derive(Debug, Clone, Copy, Default)]
pub struct AttendanceEngine;

impl AttendanceEngine {
    pub fn new() -> Self {
        Self
    }

    /// 判定考勤状态
    ///
    /// 规则:
    /// 1) present=false → ABSENT（忽略签退时间）
    /// 2) present=true 且已签退 → COMPLETED
    /// 3) 其他 → ACTIVE
    pub fn classify(&self, present: bool, check_out: Option<NaiveDateTime>) -> AttendanceTier {
        if !present {
            return AttendanceTier::Absent;
        }
        match check_out {
            Some(_) => AttendanceTier::Completed,
            None => AttendanceTier::Active,
        }
    }

    /// 判定单个工人的考勤状态并给出原因
    pub fn evaluate(&self, worker: &WorkerAttendance) -> (AttendanceTier, String) {
        let tier = self.classify(worker.present, worker.check_out);
        let reason = match tier {
            AttendanceTier::Absent => "ATTENDANCE_ABSENT: present=false".to_string(),
            AttendanceTier::Completed => format!(
                "ATTENDANCE_COMPLETED: check_out={}",
                worker
                    .check_out
                    .map(|t| t.to_string())
                    .unwrap_or_default()
            ),
            AttendanceTier::Active => match worker.check_in {
                Some(check_in) => format!("ATTENDANCE_ACTIVE: check_in={}", check_in),
                None => "ATTENDANCE_ACTIVE: present=true, no check_out".to_string(),
            },
        };
        (tier, reason)
    }

    /// 考勤状态对应的颜色
    ///
    /// COMPLETED 使用 INFO（与主色同值）
    pub fn color_for(tier: AttendanceTier) -> ColorTier {
        match tier {
            AttendanceTier::Absent => ColorTier::Error,
            AttendanceTier::Active => ColorTier::Success,
            AttendanceTier::Completed => ColorTier::Info,
        }
    }
}
