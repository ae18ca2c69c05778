// ==========================================
// 工地状态分级库 - 财务领域模型
// ==========================================
// 预算 + 费用
// 红线: remaining 由 allocated - spent 派生,不单独存储
// ==========================================

use crate::domain::types::{BudgetStatus, ExpenseStatus, StatusValue};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// Budget - 预算科目
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    pub id: String,
    pub category: String,
    pub allocated: f64,         // 预算额 (>= 0)
    pub spent: f64,             // 已支出 (>= 0)
    pub status: StatusValue<BudgetStatus>,
}

impl Budget {
    /// 剩余预算 (可为负,表示超支)
    pub fn remaining(&self) -> f64 {
        self.allocated - self.spent
    }
}

// ==========================================
// Expense - 费用单
// ==========================================
// 约定: approved_by 仅在非 pending 状态下存在
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: String,
    pub date: NaiveDate,
    pub category: String,
    pub amount: f64,            // 金额 (> 0)
    pub description: String,
    pub status: StatusValue<ExpenseStatus>,
    #[serde(default)]
    pub approved_by: Option<String>,
}
