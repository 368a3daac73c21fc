//! Build-time configuration of the dashboard.
//!
//! Values come from `option_env!` so a deployment can bake its own API URL
//! into the wasm bundle (`API_BASE_URL=https://... trunk build --release`).

use once_cell::sync::Lazy;

pub const DEFAULT_API_BASE_URL: &str = "https://squadra-back.onrender.com";
pub const DEFAULT_SEARCH_DEBOUNCE_MS: u32 = 500;
pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const PAGE_SIZE_OPTIONS: [u32; 4] = [10, 25, 50, 100];
/// Page sizes of the stock screens, which allow much longer pages.
pub const EXTENDED_PAGE_SIZE_OPTIONS: [u32; 7] = [10, 25, 50, 100, 250, 500, 1000];
/// Page sizes of the imported files history.
pub const IMPORT_PAGE_SIZE_OPTIONS: [u32; 3] = [10, 25, 50];

/// localStorage key holding the bearer token.
pub const TOKEN_STORAGE_KEY: &str = "auth_token";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub search_debounce_ms: u32,
    pub default_page_size: u32,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("API_BASE_URL"),
            option_env!("SEARCH_DEBOUNCE_MS"),
            option_env!("DEFAULT_PAGE_SIZE"),
        )
    }

    fn from_values(base: Option<&str>, debounce: Option<&str>, page_size: Option<&str>) -> Self {
        Self {
            api_base_url: normalize_base_url(base.unwrap_or(DEFAULT_API_BASE_URL)),
            search_debounce_ms: debounce
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(DEFAULT_SEARCH_DEBOUNCE_MS),
            default_page_size: page_size
                .and_then(|v| v.trim().parse().ok())
                .filter(|v| PAGE_SIZE_OPTIONS.contains(v))
                .unwrap_or(DEFAULT_PAGE_SIZE),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_values(None, None, None)
    }
}

pub static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::from_env);

pub fn config() -> &'static AppConfig {
    &CONFIG
}

fn normalize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_BASE_URL.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(cfg.search_debounce_ms, 500);
        assert_eq!(cfg.default_page_size, 10);
    }

    #[test]
    fn test_overrides_and_fallbacks() {
        let cfg = AppConfig::from_values(Some("http://localhost:8000/"), Some("250"), Some("7"));
        assert_eq!(cfg.api_base_url, "http://localhost:8000");
        assert_eq!(cfg.search_debounce_ms, 250);
        // 7 is not a selectable page size
        assert_eq!(cfg.default_page_size, DEFAULT_PAGE_SIZE);

        let cfg = AppConfig::from_values(Some("  "), Some("abc"), Some("25"));
        assert_eq!(cfg.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(cfg.search_debounce_ms, DEFAULT_SEARCH_DEBOUNCE_MS);
        assert_eq!(cfg.default_page_size, 25);
    }

    #[test]
    fn test_base_url_drops_trailing_slashes() {
        let cfg = AppConfig::from_values(Some("https://api.example.com//"), None, None);
        assert_eq!(cfg.api_base_url, "https://api.example.com");
    }
}
