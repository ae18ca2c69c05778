// ==========================================
// 工地状态分级库 - 库存等级判定引擎
// ==========================================
// 职责: quantity + min_quantity → LOW / MEDIUM / GOOD
// 红线: 全函数,任何输入都落入唯一等级
// ==========================================

use crate::config::DEFAULT_MEDIUM_STOCK_FACTOR;
use crate::domain::types::{ColorTier, StockTier};

// ==========================================
// StockLevelEngine - 库存等级判定
// ==========================================
#[derive(Debug, Clone, Copy)]
pub struct StockLevelEngine {
    medium_factor: f64, // 中档上界倍数
}

impl Default for StockLevelEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl StockLevelEngine {
    /// 使用默认倍数 1.5 创建引擎
    pub fn new() -> Self {
        Self::with_factor(DEFAULT_MEDIUM_STOCK_FACTOR)
    }

    /// 使用指定倍数创建引擎（倍数由配置层校验）
    pub fn with_factor(medium_factor: f64) -> Self {
        Self { medium_factor }
    }

    pub fn medium_factor(&self) -> f64 {
        self.medium_factor
    }

    /// 判定库存等级
    ///
    /// 规则（顺序执行，命中即返回）:
    /// 1) quantity <= min_quantity → LOW
    /// 2) quantity <= min_quantity × factor → MEDIUM
    /// 3) 其他 → GOOD
    ///
    /// 边界: min_quantity = 0 时仅 quantity = 0 判为 LOW,其余均为 GOOD
    pub fn classify(&self, quantity: f64, min_quantity: f64) -> StockTier {
        if quantity <= min_quantity {
            StockTier::Low
        } else if quantity <= min_quantity * self.medium_factor {
            StockTier::Medium
        } else {
            StockTier::Good
        }
    }

    /// 判定库存等级并给出原因
    pub fn evaluate(&self, quantity: f64, min_quantity: f64) -> (StockTier, String) {
        let tier = self.classify(quantity, min_quantity);
        let reason = match tier {
            StockTier::Low => format!(
                "STOCK_LOW: quantity={} <= min_quantity={}",
                quantity, min_quantity
            ),
            StockTier::Medium => format!(
                "STOCK_MEDIUM: min_quantity={} < quantity={} <= {}",
                min_quantity,
                quantity,
                min_quantity * self.medium_factor
            ),
            StockTier::Good => format!(
                "STOCK_GOOD: quantity={} > {}",
                quantity,
                min_quantity * self.medium_factor
            ),
        };
        (tier, reason)
    }

    /// 库存等级对应的颜色
    pub fn color_for(tier: StockTier) -> ColorTier {
        match tier {
            StockTier::Low => ColorTier::Error,
            StockTier::Medium => ColorTier::Warning,
            StockTier::Good => ColorTier::Success,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_to_min_is_low() {
        let engine = StockLevelEngine::new();
        assert_eq!(engine.classify(100.0, 100.0), StockTier::Low);
        assert_eq!(engine.classify(20.0, 100.0), StockTier::Low);
    }

    #[test]
    fn test_medium_band_upper_bound_inclusive() {
        let engine = StockLevelEngine::new();
        assert_eq!(engine.classify(149.0, 100.0), StockTier::Medium);
        assert_eq!(engine.classify(150.0, 100.0), StockTier::Medium);
        assert_eq!(engine.classify(151.0, 100.0), StockTier::Good);
    }

    #[test]
    fn test_zero_min_quantity() {
        let engine = StockLevelEngine::new();
        assert_eq!(engine.classify(0.0, 0.0), StockTier::Low);
        assert_eq!(engine.classify(0.5, 0.0), StockTier::Good);
        assert_eq!(engine.classify(10.0, 0.0), StockTier::Good);
    }

    #[test]
    fn test_partition_over_grid() {
        // LOW iff q <= m; GOOD iff q > 1.5m; MEDIUM otherwise
        let engine = StockLevelEngine::new();
        for m in [0.0, 1.0, 7.0, 100.0, 2000.0] {
            for step in 0..=40 {
                let q = m * (step as f64) / 10.0 + (step % 3) as f64;
                let tier = engine.classify(q, m);
                assert_eq!(tier == StockTier::Low, q <= m, "q={} m={}", q, m);
                assert_eq!(tier == StockTier::Good, q > m * 1.5, "q={} m={}", q, m);
            }
        }
    }

    #[test]
    fn test_custom_factor() {
        let engine = StockLevelEngine::with_factor(2.0);
        assert_eq!(engine.classify(180.0, 100.0), StockTier::Medium);
        assert_eq!(engine.classify(201.0, 100.0), StockTier::Good);
    }

    #[test]
    fn test_evaluate_reason() {
        let engine = StockLevelEngine::new();
        let (tier, reason) = engine.evaluate(100.0, 100.0);
        assert_eq!(tier, StockTier::Low);
        assert!(reason.starts_with("STOCK_LOW"));

        let (tier, reason) = engine.evaluate(500.0, 100.0);
        assert_eq!(tier, StockTier::Good);
        assert!(reason.contains("STOCK_GOOD"));
    }

    #[test]
    fn test_colors() {
        assert_eq!(StockLevelEngine::color_for(StockTier::Low), ColorTier::Error);
        assert_eq!(StockLevelEngine::color_for(StockTier::Medium), ColorTier::Warning);
        assert_eq!(StockLevelEngine::color_for(StockTier::Good), ColorTier::Success);
    }
}
