// ==========================================
// 工地状态分级库 - 预算进度引擎
// ==========================================
// 职责: spent / allocated → 进度比例
// 红线: allocated = 0 不得产生 NaN/Infinity,以哨兵值 (ratio=0, NEUTRAL) 替代
// ==========================================

use crate::domain::types::ColorTier;
use serde::{Deserialize, Serialize};

/// 预算进度
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BudgetProgress {
    pub ratio: f64,         // spent / allocated,未截断（可 > 1）
    pub display_ratio: f64, // 截断到 [0, 1],供进度条使用
    pub color: ColorTier,   // 进度条颜色
    pub degenerate: bool,   // 是否命中哨兵（allocated 非正或比例非有限）
}

impl BudgetProgress {
    /// 哨兵值
    pub fn sentinel() -> Self {
        Self {
            ratio: 0.0,
            display_ratio: 0.0,
            color: ColorTier::Neutral,
            degenerate: true,
        }
    }
}

// ==========================================
// BudgetProgressEngine
// ==========================================
#[derive(Debug, Clone, Copy, Default)]
pub struct BudgetProgressEngine;

impl BudgetProgressEngine {
    pub fn new() -> Self {
        Self
    }

    /// 计算预算进度
    ///
    /// # 参数
    /// - allocated: 预算额
    /// - spent: 已支出
    /// - status_color: 预算状态对应的颜色（来自统一映射表）
    ///
    /// # 规则
    /// - allocated > 0: ratio = spent / allocated（不取整）, 颜色沿用 status_color
    /// - allocated <= 0 或比例非有限: 哨兵 (ratio=0, NEUTRAL)
    pub fn progress(&self, allocated: f64, spent: f64, status_color: ColorTier) -> BudgetProgress {
        let ratio = ratio_or_none(spent, allocated);
        match ratio {
            Some(ratio) => BudgetProgress {
                ratio,
                display_ratio: ratio.clamp(0.0, 1.0),
                color: status_color,
                degenerate: false,
            },
            None => {
                tracing::debug!(allocated, spent, "预算额为零或比例非有限,使用哨兵进度");
                BudgetProgress::sentinel()
            }
        }
    }
}

/// numerator / denominator; 分母非正或结果非有限时返回 None
pub fn ratio_or_none(numerator: f64, denominator: f64) -> Option<f64> {
    if !(denominator > 0.0) {
        return None;
    }
    let ratio = numerator / denominator;
    ratio.is_finite().then_some(ratio)
}
