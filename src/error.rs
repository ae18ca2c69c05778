// ==========================================
// 工地状态分级库 - 统一错误类型
// ==========================================
// 工具: thiserror 派生宏
// 范围: 配置加载 / fixture 加载与校验
// 红线: 分级函数本身是全函数,不返回错误
// ==========================================

use thiserror::Error;

/// 应用错误类型
#[derive(Error, Debug)]
pub enum AppError {
    // ===== 配置相关错误 =====
    #[error("配置文件读取失败: {path}: {source}")]
    ConfigRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("配置文件解析失败: {path}: {source}")]
    ConfigParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("配置项无效: {key}={value} ({reason})")]
    InvalidConfig {
        key: String,
        value: String,
        reason: String,
    },

    #[error("不支持的语言: {0}")]
    UnsupportedLocale(String),

    // ===== Fixture 相关错误 =====
    #[error("Fixture 文件读取失败: {path}: {source}")]
    FixtureRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Fixture 文件解析失败: {path}: {source}")]
    FixtureParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Fixture 记录无效: {entity}(id={id}) {reason}")]
    InvalidRecord {
        entity: &'static str,
        id: String,
        reason: String,
    },

    #[error("预算剩余额不一致: budget(id={id}) remaining={remaining}, allocated-spent={expected}")]
    RemainingMismatch {
        id: String,
        remaining: f64,
        expected: f64,
    },
}

impl AppError {
    /// 构造记录校验错误
    pub fn invalid_record(entity: &'static str, id: &str, reason: impl Into<String>) -> Self {
        AppError::InvalidRecord {
            entity,
            id: id.to_string(),
            reason: reason.into(),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_record_message() {
        let err = AppError::invalid_record("MaterialStock", "7", "quantity < 0");
        let msg = err.to_string();
        assert!(msg.contains("MaterialStock"));
        assert!(msg.contains("id=7"));
        assert!(msg.contains("quantity < 0"));
    }

    #[test]
    fn test_remaining_mismatch_message() {
        let err = AppError::RemainingMismatch {
            id: "1".to_string(),
            remaining: 10.0,
            expected: 20.0,
        };
        assert!(err.to_string().contains("remaining=10"));
    }
}
