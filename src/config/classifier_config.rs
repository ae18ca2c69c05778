// ==========================================
// 工地状态分级库 - 分级配置
// ==========================================
// 职责: 分级阈值、歧义状态映射、标签语言
// 存储: JSON 文件 (可选),缺省使用内置默认值
// ==========================================

use crate::domain::types::ColorTier;
use crate::error::{AppError, AppResult};
use crate::i18n;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 配置文件路径环境变量
pub const CONFIG_PATH_ENV: &str = "SITE_STATUS_CONFIG";

/// 默认中档库存倍数 (min_quantity × 1.5)
pub const DEFAULT_MEDIUM_STOCK_FACTOR: f64 = 1.5;

// ==========================================
// 配置键
// ==========================================
pub mod config_keys {
    pub const MEDIUM_STOCK_FACTOR: &str = "medium_stock_factor";
    pub const ON_TRACK_COLOR: &str = "on_track_color";
    pub const LOCALE: &str = "locale";
}

// ==========================================
// ClassifierConfig - 分级配置
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// 库存中档上界倍数: min < quantity <= min × factor 为 MEDIUM
    pub medium_stock_factor: f64,

    /// 预算 on-track 状态的颜色
    ///
    /// 源数据对 on-track 的着色不一致,这里固定为单一取值（默认 WARNING）
    pub on_track_color: ColorTier,

    /// 标签语言（"en" / "zh-CN"）
    pub locale: String,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            medium_stock_factor: DEFAULT_MEDIUM_STOCK_FACTOR,
            on_track_color: ColorTier::Warning,
            locale: "en".to_string(),
        }
    }
}

impl ClassifierConfig {
    /// 校验配置项
    pub fn validate(&self) -> AppResult<()> {
        if !self.medium_stock_factor.is_finite() || self.medium_stock_factor < 1.0 {
            return Err(AppError::InvalidConfig {
                key: config_keys::MEDIUM_STOCK_FACTOR.to_string(),
                value: self.medium_stock_factor.to_string(),
                reason: "must be a finite number >= 1.0".to_string(),
            });
        }

        if !i18n::is_supported_locale(&self.locale) {
            return Err(AppError::UnsupportedLocale(self.locale.clone()));
        }

        Ok(())
    }

    /// 切换标签语言
    pub fn with_locale(mut self, locale: &str) -> AppResult<Self> {
        if !i18n::is_supported_locale(locale) {
            return Err(AppError::UnsupportedLocale(locale.to_string()));
        }
        self.locale = locale.to_string();
        Ok(self)
    }

    /// 按配置键覆盖单项（命令行 --set key=value）
    ///
    /// 覆盖后重新校验; 未知键报 InvalidConfig
    pub fn with_override(mut self, key: &str, value: &str) -> AppResult<Self> {
        let invalid = |reason: &str| AppError::InvalidConfig {
            key: key.to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
        };

        match key.trim() {
            config_keys::MEDIUM_STOCK_FACTOR => {
                self.medium_stock_factor = value
                    .trim()
                    .parse::<f64>()
                    .map_err(|_| invalid("must be a number"))?;
            }
            config_keys::ON_TRACK_COLOR => {
                self.on_track_color = ColorTier::from_str(value)
                    .ok_or_else(|| invalid("must be one of SUCCESS/ERROR/WARNING/INFO/NEUTRAL"))?;
            }
            config_keys::LOCALE => return self.with_locale(value.trim()),
            _ => return Err(invalid("unknown config key")),
        }

        self.validate()?;
        tracing::debug!(key, value, "配置项已覆盖");
        Ok(self)
    }

    /// 从 JSON 文件加载配置
    ///
    /// 文件中缺省的字段取默认值
    pub fn load_from_path(path: &Path) -> AppResult<Self> {
        let path_str = path.display().to_string();
        let raw = std::fs::read_to_string(path).map_err(|source| AppError::ConfigRead {
            path: path_str.clone(),
            source,
        })?;

        let config: ClassifierConfig =
            serde_json::from_str(&raw).map_err(|source| AppError::ConfigParse {
                path: path_str.clone(),
                source,
            })?;
        config.validate()?;

        tracing::debug!(path = %path_str, ?config, "分级配置已加载");
        Ok(config)
    }

    /// 按优先级解析配置
    ///
    /// 1) 显式路径
    /// 2) 环境变量 SITE_STATUS_CONFIG
    /// 3) 用户配置目录下的 site-status/config.json（存在时）
    /// 4) 默认值
    pub fn resolve(explicit: Option<&Path>) -> AppResult<Self> {
        let env_path = std::env::var(CONFIG_PATH_ENV).ok();
        Self::resolve_from(explicit, env_path.as_deref(), default_config_path())
    }

    /// resolve 的可测试版本（不读取进程环境）
    pub fn resolve_from(
        explicit: Option<&Path>,
        env_path: Option<&str>,
        default_path: Option<PathBuf>,
    ) -> AppResult<Self> {
        if let Some(path) = explicit {
            return Self::load_from_path(path);
        }

        if let Some(path) = env_path.map(str::trim).filter(|p| !p.is_empty()) {
            return Self::load_from_path(Path::new(path));
        }

        if let Some(path) = default_path.filter(|p| p.is_file()) {
            return Self::load_from_path(&path);
        }

        tracing::debug!("未找到分级配置文件,使用默认配置");
        Ok(Self::default())
    }
}

/// 默认配置文件路径
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("site-status").join("config.json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_config() {
        let config = ClassifierConfig::default();
        assert_eq!(config.medium_stock_factor, 1.5);
        assert_eq!(config.on_track_color, ColorTier::Warning);
        assert_eq!(config.locale, "en");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_partial_file_fills_defaults() {
        let file = write_config(r#"{ "on_track_color": "SUCCESS" }"#);
        let config = ClassifierConfig::load_from_path(file.path()).unwrap();

        assert_eq!(config.on_track_color, ColorTier::Success);
        assert_eq!(config.medium_stock_factor, 1.5);
        assert_eq!(config.locale, "en");
    }

    #[test]
    fn test_factor_below_one_rejected() {
        let file = write_config(r#"{ "medium_stock_factor": 0.8 }"#);
        let err = ClassifierConfig::load_from_path(file.path()).unwrap_err();
        assert!(matches!(err, AppError::InvalidConfig { ref key, .. } if key == "medium_stock_factor"));
    }

    #[test]
    fn test_unknown_locale_rejected() {
        let file = write_config(r#"{ "locale": "fr" }"#);
        let err = ClassifierConfig::load_from_path(file.path()).unwrap_err();
        assert!(matches!(err, AppError::UnsupportedLocale(_)));

        assert!(ClassifierConfig::default().with_locale("fr").is_err());
        assert_eq!(
            ClassifierConfig::default().with_locale("zh-CN").unwrap().locale,
            "zh-CN"
        );
    }

    #[test]
    fn test_override_by_key() {
        let config = ClassifierConfig::default()
            .with_override(config_keys::ON_TRACK_COLOR, "success")
            .unwrap()
            .with_override(config_keys::MEDIUM_STOCK_FACTOR, " 2.5 ")
            .unwrap()
            .with_override(config_keys::LOCALE, "zh-CN")
            .unwrap();

        assert_eq!(config.on_track_color, ColorTier::Success);
        assert_eq!(config.medium_stock_factor, 2.5);
        assert_eq!(config.locale, "zh-CN");
    }

    #[test]
    fn test_override_rejects_bad_values() {
        let err = ClassifierConfig::default()
            .with_override(config_keys::ON_TRACK_COLOR, "purple")
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidConfig { ref key, .. } if key == "on_track_color"));

        let err = ClassifierConfig::default()
            .with_override(config_keys::MEDIUM_STOCK_FACTOR, "0.5")
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidConfig { .. }));

        let err = ClassifierConfig::default()
            .with_override("color_scheme", "dark")
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidConfig { ref reason, .. } if reason == "unknown config key"));

        let err = ClassifierConfig::default()
            .with_override(config_keys::LOCALE, "fr")
            .unwrap_err();
        assert!(matches!(err, AppError::UnsupportedLocale(_)));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let file = write_config("{ not json");
        let err = ClassifierConfig::load_from_path(file.path()).unwrap_err();
        assert!(matches!(err, AppError::ConfigParse { .. }));
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let err = ClassifierConfig::load_from_path(Path::new("/nonexistent/site-status.json"))
            .unwrap_err();
        assert!(matches!(err, AppError::ConfigRead { .. }));
    }

    #[test]
    fn test_resolve_priority() {
        let explicit = write_config(r#"{ "locale": "zh-CN" }"#);
        let env = write_config(r#"{ "medium_stock_factor": 2.0 }"#);
        let env_path = env.path().to_str().unwrap().to_string();

        // 显式路径优先
        let config =
            ClassifierConfig::resolve_from(Some(explicit.path()), Some(&env_path), None).unwrap();
        assert_eq!(config.locale, "zh-CN");
        assert_eq!(config.medium_stock_factor, 1.5);

        // 其次环境变量
        let config = ClassifierConfig::resolve_from(None, Some(&env_path), None).unwrap();
        assert_eq!(config.medium_stock_factor, 2.0);

        // 默认路径不存在时退回默认值
        let config = ClassifierConfig::resolve_from(
            None,
            Some("  "),
            Some(PathBuf::from("/nonexistent/config.json")),
        )
        .unwrap();
        assert_eq!(config, ClassifierConfig::default());
    }
}
