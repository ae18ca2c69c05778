// ==========================================
// 工地状态分级库 - 材料库存领域模型
// ==========================================
// 用途: 材料清单的库存分级输入
// 红线: quantity 与 min_quantity 使用同一计量单位
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// MaterialStock - 材料库存
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialStock {
    pub id: String,               // 材料ID
    pub name: String,             // 材料名称
    pub category: String,         // 类别 (Construction/Electrical/Plumbing...)
    pub quantity: f64,            // 当前库存 (>= 0)
    pub unit: String,             // 计量单位
    pub min_quantity: f64,        // 最低库存 (>= 0)
    pub supplier: String,         // 供应商
    pub last_ordered: NaiveDate,  // 最近订货日期
}

impl MaterialStock {
    /// 库存相对最低库存的覆盖倍数
    ///
    /// min_quantity 为 0 时返回 None
    pub fn coverage_ratio(&self) -> Option<f64> {
        if self.min_quantity <= 0.0 {
            return None;
        }
        Some(self.quantity / self.min_quantity)
    }
}
