// ==========================================
// 工地状态分级库 - 配置层
// ==========================================
// 职责: 分级策略参数加载与校验
// ==========================================

pub mod classifier_config;

// 重导出核心配置
pub use classifier_config::{
    config_keys, default_config_path, ClassifierConfig, CONFIG_PATH_ENV,
    DEFAULT_MEDIUM_STOCK_FACTOR,
};
