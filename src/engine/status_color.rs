// ==========================================
// 工地状态分级库 - 状态颜色映射表
// ==========================================
// 职责: 所有业务域的状态/严重度取值 → 颜色等级
// 红线: 映射是全函数; 未识别的取值降级为 NEUTRAL,不报错
// ==========================================
// 声明取值:
//   SUCCESS ← passed, resolved, approved, under, active
//   ERROR   ← failed, high, rejected, over
//   WARNING ← pending, investigating, open, medium, on-hold
//   INFO    ← low, completed
//   on-track → 由配置决定（默认 WARNING）
// ==========================================

use crate::domain::types::{normalize_token, ColorTier, StatusToken, StatusValue};
use std::collections::HashMap;

/// 单个声明取值的映射结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusEntry {
    pub color: ColorTier,
    pub label_key: &'static str, // i18n 键
}

// ==========================================
// StatusColorTable - 统一映射表
// ==========================================
#[derive(Debug, Clone)]
pub struct StatusColorTable {
    entries: HashMap<&'static str, StatusEntry>,
}

impl Default for StatusColorTable {
    fn default() -> Self {
        Self::new(ColorTier::Warning)
    }
}

impl StatusColorTable {
    /// 构建映射表
    ///
    /// # 参数
    /// - on_track_color: 预算 on-track 状态的颜色
    pub fn new(on_track_color: ColorTier) -> Self {
        let declared: [(&'static str, ColorTier, &'static str); 17] = [
            // 安全检查
            ("passed", ColorTier::Success, "status.passed"),
            ("failed", ColorTier::Error, "status.failed"),
            ("pending", ColorTier::Warning, "status.pending"),
            // 事故严重度
            ("low", ColorTier::Info, "status.low"),
            ("medium", ColorTier::Warning, "status.medium"),
            ("high", ColorTier::Error, "status.high"),
            // 事故处理状态
            ("open", ColorTier::Warning, "status.open"),
            ("investigating", ColorTier::Warning, "status.investigating"),
            ("resolved", ColorTier::Success, "status.resolved"),
            // 预算
            ("under", ColorTier::Success, "status.under"),
            ("over", ColorTier::Error, "status.over"),
            ("on-track", on_track_color, "status.on-track"),
            // 费用 (pending 与安全检查共用)
            ("approved", ColorTier::Success, "status.approved"),
            ("rejected", ColorTier::Error, "status.rejected"),
            // 项目
            ("active", ColorTier::Success, "project.active"),
            ("completed", ColorTier::Info, "project.completed"),
            ("on-hold", ColorTier::Warning, "project.on-hold"),
        ];

        let entries = declared
            .into_iter()
            .map(|(token, color, label_key)| (token, StatusEntry { color, label_key }))
            .collect();

        Self { entries }
    }

    /// 规范化原始取值（去空白、转小写）
    pub fn normalize(raw: &str) -> String {
        normalize_token(raw)
    }

    /// 查询声明取值; 未声明返回 None
    pub fn entry(&self, raw: &str) -> Option<StatusEntry> {
        self.entries.get(Self::normalize(raw).as_str()).copied()
    }

    /// 原始取值 → 颜色等级（未识别 → NEUTRAL）
    pub fn lookup(&self, raw: &str) -> ColorTier {
        match self.entry(raw) {
            Some(entry) => entry.color,
            None => {
                tracing::debug!(value = raw, "未识别的状态取值,降级为 NEUTRAL");
                ColorTier::Neutral
            }
        }
    }

    /// 类型化状态 → 颜色等级
    pub fn color_of<T: StatusToken>(&self, value: &T) -> ColorTier {
        self.lookup(value.as_token())
    }

    /// 记录中的状态取值 → 颜色等级
    ///
    /// 未识别取值直接 NEUTRAL,不跨业务域借用其它枚举的同名令牌
    pub fn color_of_value<T: StatusToken>(&self, value: &StatusValue<T>) -> ColorTier {
        match value {
            StatusValue::Known(known) => self.color_of(known),
            StatusValue::Unrecognized(raw) => {
                tracing::debug!(value = %raw, "未识别的状态取值,降级为 NEUTRAL");
                ColorTier::Neutral
            }
        }
    }

    /// 是否为声明取值
    pub fn is_declared(&self, raw: &str) -> bool {
        self.entry(raw).is_some()
    }

    /// 全部声明取值（按字母序）
    pub fn declared_tokens(&self) -> Vec<&'static str> {
        let mut tokens: Vec<&'static str> = self.entries.keys().copied().collect();
        tokens.sort_unstable();
        tokens
    }
}
