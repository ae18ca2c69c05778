// ==========================================
// 国际化 (i18n) 模块
// ==========================================
// 使用 rust-i18n 库
// 支持英文（默认）和中文
// ==========================================
// 注意: rust_i18n::i18n! 宏已在 lib.rs 中初始化
// ==========================================

/// 内置的语言包
pub const SUPPORTED_LOCALES: &[&str] = &["en", "zh-CN"];

/// 是否为内置语言
pub fn is_supported_locale(locale: &str) -> bool {
    SUPPORTED_LOCALES.contains(&locale)
}

/// 获取当前语言
pub fn current_locale() -> String {
    rust_i18n::locale().to_string()
}

/// 设置语言
///
/// # 参数
/// - locale: 语言代码（"en" 或 "zh-CN"）
pub fn set_locale(locale: &str) {
    rust_i18n::set_locale(locale);
}

/// 翻译消息（无参数,使用全局语言）
///
/// # 示例
/// ```no_run
/// use site_status::i18n::t;
/// let label = t("summary.active_projects");
/// ```
pub fn t(key: &str) -> String {
    rust_i18n::t!(key).to_string()
}

/// 按指定语言翻译
///
/// 分级器使用此函数,标签不受全局语言切换影响
pub fn t_in(locale: &str, key: &str) -> String {
    rust_i18n::t!(key, locale = locale).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // rust-i18n 的 locale 为全局状态，且 Rust 测试默认并行执行；
    // 为避免测试互相干扰，这里对 i18n 相关测试串行化。
    static LOCALE_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_global_locale_drives_summary_labels() {
        let _guard = LOCALE_TEST_LOCK.lock().unwrap();
        set_locale("zh-CN");
        assert_eq!(current_locale(), "zh-CN");
        assert_eq!(t("summary.workers_on_site"), "在岗工人");

        set_locale("en");
        assert_eq!(current_locale(), "en");
        assert_eq!(t("summary.workers_on_site"), "Workers On Site");
    }

    #[test]
    fn test_translate_with_explicit_locale() {
        // 不依赖全局语言,无需加锁
        assert_eq!(t_in("en", "stock.low"), "Low Stock");
        assert_eq!(t_in("zh-CN", "stock.low"), "库存不足");
        assert_eq!(t_in("en", "status.on-track"), "ON-TRACK");
    }

    #[test]
    fn test_supported_locales() {
        assert!(is_supported_locale("en"));
        assert!(is_supported_locale("zh-CN"));
        assert!(!is_supported_locale("fr"));
    }
}
