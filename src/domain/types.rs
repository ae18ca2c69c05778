// ==========================================
// 工地状态分级库 - 领域类型定义
// ==========================================
// 分级结果 (Tier) 与各业务域的状态/严重度枚举
// 红线: 分级是封闭枚举,不是评分
// ==========================================

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

// ==========================================
// 状态令牌 (Status Token)
// ==========================================
// 所有状态/严重度枚举都以小写令牌进入统一颜色映射表
pub trait StatusToken: Sized {
    /// 令牌文本 (与 fixture 数据中的取值一致)
    fn as_token(&self) -> &'static str;

    /// 从已规范化的令牌解析; 不属于本枚举时返回 None
    fn from_token(token: &str) -> Option<Self>;
}

/// 规范化原始取值（去空白、转小写）
pub fn normalize_token(raw: &str) -> String {
    raw.trim().to_lowercase()
}

// ==========================================
// 库存等级 (Stock Tier)
// ==========================================
// 顺序: Low < Medium < Good
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StockTier {
    Low,    // 库存不足
    Medium, // 库存一般
    Good,   // 库存充足
}

impl fmt::Display for StockTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StockTier::Low => write!(f, "LOW"),
            StockTier::Medium => write!(f, "MEDIUM"),
            StockTier::Good => write!(f, "GOOD"),
        }
    }
}

impl StockTier {
    /// 标签的 i18n 键
    pub fn label_key(&self) -> &'static str {
        match self {
            StockTier::Low => "stock.low",
            StockTier::Medium => "stock.medium",
            StockTier::Good => "stock.good",
        }
    }
}

// ==========================================
// 考勤状态 (Attendance Tier)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AttendanceTier {
    Absent,    // 缺勤
    Active,    // 在岗(已签到未签退)
    Completed, // 已签退
}

impl fmt::Display for AttendanceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttendanceTier::Absent => write!(f, "ABSENT"),
            AttendanceTier::Active => write!(f, "ACTIVE"),
            AttendanceTier::Completed => write!(f, "COMPLETED"),
        }
    }
}

impl AttendanceTier {
    pub fn label_key(&self) -> &'static str {
        match self {
            AttendanceTier::Absent => "attendance.absent",
            AttendanceTier::Active => "attendance.active",
            AttendanceTier::Completed => "attendance.completed",
        }
    }
}

// ==========================================
// 颜色等级 (Color Tier)
// ==========================================
// 展示层据此选择颜色; Neutral 为未识别值的兜底
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ColorTier {
    Success,
    Error,
    Warning,
    Info,
    Neutral,
}

impl fmt::Display for ColorTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_token().to_uppercase())
    }
}

impl ColorTier {
    /// 展示层使用的颜色令牌
    pub fn as_token(&self) -> &'static str {
        match self {
            ColorTier::Success => "success",
            ColorTier::Error => "error",
            ColorTier::Warning => "warning",
            ColorTier::Info => "info",
            ColorTier::Neutral => "neutral",
        }
    }

    /// 从字符串解析颜色等级 (配置文件使用)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "SUCCESS" => Some(ColorTier::Success),
            "ERROR" => Some(ColorTier::Error),
            "WARNING" => Some(ColorTier::Warning),
            "INFO" => Some(ColorTier::Info),
            "NEUTRAL" => Some(ColorTier::Neutral),
            _ => None,
        }
    }
}

// ==========================================
// 安全检查状态 (Inspection Status)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InspectionStatus {
    Passed,  // 通过
    Failed,  // 未通过
    Pending, // 待检查
}

impl StatusToken for InspectionStatus {
    fn as_token(&self) -> &'static str {
        match self {
            InspectionStatus::Passed => "passed",
            InspectionStatus::Failed => "failed",
            InspectionStatus::Pending => "pending",
        }
    }

    fn from_token(token: &str) -> Option<Self> {
        match token {
            "passed" => Some(InspectionStatus::Passed),
            "failed" => Some(InspectionStatus::Failed),
            "pending" => Some(InspectionStatus::Pending),
            _ => None,
        }
    }
}

// ==========================================
// 安全事故严重度 (Incident Severity)
// ==========================================
// 顺序: Low < Medium < High
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IncidentSeverity {
    Low,
    Medium,
    High,
}

impl StatusToken for IncidentSeverity {
    fn as_token(&self) -> &'static str {
        match self {
            IncidentSeverity::Low => "low",
            IncidentSeverity::Medium => "medium",
            IncidentSeverity::High => "high",
        }
    }

    fn from_token(token: &str) -> Option<Self> {
        match token {
            "low" => Some(IncidentSeverity::Low),
            "medium" => Some(IncidentSeverity::Medium),
            "high" => Some(IncidentSeverity::High),
            _ => None,
        }
    }
}

// ==========================================
// 安全事故处理状态 (Incident Status)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IncidentStatus {
    Open,          // 未处理
    Investigating, // 调查中
    Resolved,      // 已解决
}

impl StatusToken for IncidentStatus {
    fn as_token(&self) -> &'static str {
        match self {
            IncidentStatus::Open => "open",
            IncidentStatus::Investigating => "investigating",
            IncidentStatus::Resolved => "resolved",
        }
    }

    fn from_token(token: &str) -> Option<Self> {
        match token {
            "open" => Some(IncidentStatus::Open),
            "investigating" => Some(IncidentStatus::Investigating),
            "resolved" => Some(IncidentStatus::Resolved),
            _ => None,
        }
    }
}

// ==========================================
// 预算状态 (Budget Status)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BudgetStatus {
    Under,   // 未超支
    Over,    // 超支
    OnTrack, // 正常推进
}

impl StatusToken for BudgetStatus {
    fn as_token(&self) -> &'static str {
        match self {
            BudgetStatus::Under => "under",
            BudgetStatus::Over => "over",
            BudgetStatus::OnTrack => "on-track",
        }
    }

    fn from_token(token: &str) -> Option<Self> {
        match token {
            "under" => Some(BudgetStatus::Under),
            "over" => Some(BudgetStatus::Over),
            "on-track" => Some(BudgetStatus::OnTrack),
            _ => None,
        }
    }
}

// ==========================================
// 费用审批状态 (Expense Status)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseStatus {
    Pending,  // 待审批
    Approved, // 已批准
    Rejected, // 已驳回
}

impl StatusToken for ExpenseStatus {
    fn as_token(&self) -> &'static str {
        match self {
            ExpenseStatus::Pending => "pending",
            ExpenseStatus::Approved => "approved",
            ExpenseStatus::Rejected => "rejected",
        }
    }

    fn from_token(token: &str) -> Option<Self> {
        match token {
            "pending" => Some(ExpenseStatus::Pending),
            "approved" => Some(ExpenseStatus::Approved),
            "rejected" => Some(ExpenseStatus::Rejected),
            _ => None,
        }
    }
}

// ==========================================
// 项目状态 (Project Status)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    Active,    // 进行中
    Completed, // 已完成
    OnHold,    // 暂停
}

impl StatusToken for ProjectStatus {
    fn as_token(&self) -> &'static str {
        match self {
            ProjectStatus::Active => "active",
            ProjectStatus::Completed => "completed",
            ProjectStatus::OnHold => "on-hold",
        }
    }

    fn from_token(token: &str) -> Option<Self> {
        match token {
            "active" => Some(ProjectStatus::Active),
            "completed" => Some(ProjectStatus::Completed),
            "on-hold" => Some(ProjectStatus::OnHold),
            _ => None,
        }
    }
}

macro_rules! impl_token_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(f, "{}", self.as_token().to_uppercase())
                }
            }
        )*
    };
}

impl_token_display!(
    InspectionStatus,
    IncidentSeverity,
    IncidentStatus,
    BudgetStatus,
    ExpenseStatus,
    ProjectStatus,
);

// ==========================================
// 记录中的状态取值 (Status Value)
// ==========================================
// 数据源中的状态是开放字符串: 可识别的取值落到枚举,
// 其余原样保留,由分级器降级为 NEUTRAL,不拒绝整条记录
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StatusValue<T> {
    Known(T),
    Unrecognized(String),
}

impl<T: StatusToken> StatusValue<T> {
    /// 解析原始取值（不区分大小写、忽略首尾空白）
    pub fn parse(raw: &str) -> Self {
        match T::from_token(&normalize_token(raw)) {
            Some(value) => StatusValue::Known(value),
            None => StatusValue::Unrecognized(raw.to_string()),
        }
    }

    /// 令牌文本; 未识别时为原值
    pub fn token(&self) -> &str {
        match self {
            StatusValue::Known(value) => value.as_token(),
            StatusValue::Unrecognized(raw) => raw,
        }
    }
}

impl<T: Copy> StatusValue<T> {
    pub fn known(&self) -> Option<T> {
        match self {
            StatusValue::Known(value) => Some(*value),
            StatusValue::Unrecognized(_) => None,
        }
    }
}

impl<T> From<T> for StatusValue<T> {
    fn from(value: T) -> Self {
        StatusValue::Known(value)
    }
}

impl<T: PartialEq> PartialEq<T> for StatusValue<T> {
    fn eq(&self, other: &T) -> bool {
        matches!(self, StatusValue::Known(value) if value == other)
    }
}

impl<T: StatusToken> fmt::Display for StatusValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token().trim().to_uppercase())
    }
}

impl<T: StatusToken> Serialize for StatusValue<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.token())
    }
}

impl<'de, T: StatusToken> Deserialize<'de> for StatusValue<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(StatusValue::parse(&raw))
    }
}
