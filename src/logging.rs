// ==========================================
// 日志系统初始化
// ==========================================
// tracing-subscriber 输出到 stderr, stdout 留给分级结果
// RUST_LOG 控制级别（默认 info）
// ==========================================

use tracing_subscriber::{fmt, EnvFilter};

/// 日志输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text, // 人读
    Json, // 日志采集
}

impl LogFormat {
    /// 由命令行开关选择格式
    pub fn from_flag(json: bool) -> Self {
        if json {
            LogFormat::Json
        } else {
            LogFormat::Text
        }
    }
}

fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// 初始化日志系统
///
/// # 环境变量
/// - RUST_LOG: 例如 RUST_LOG=site_status=debug
///
/// 重复初始化时静默忽略
///
/// # 示例
/// ```no_run
/// use site_status::logging::{self, LogFormat};
/// logging::init(LogFormat::Text);
/// ```
pub fn init(format: LogFormat) {
    let builder = fmt()
        .with_env_filter(env_filter("info"))
        .with_writer(std::io::stderr);

    let _ = match format {
        LogFormat::Text => builder
            .with_target(true)
            .with_line_number(true)
            .try_init(),
        LogFormat::Json => builder.json().with_current_span(true).try_init(),
    };
}

/// 测试用日志（debug 级别,输出走测试捕获）
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(env_filter("debug"))
        .with_test_writer()
        .try_init();
}
