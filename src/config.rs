//! Shop Configuration
//!
//! Fixed settings for the storefront. The host page may override the API base
//! with `<meta name="plant-shop-api-base" content="...">`.

use wasm_bindgen::JsCast;

pub const DEFAULT_API_BASE: &str = "https://openapi.programming-hero.com/api";
pub const DEFAULT_CURRENCY_SYMBOL: &str = "৳";
pub const DEFAULT_DESCRIPTION_PREVIEW_CHARS: usize = 100;

const API_BASE_META: &str = "plant-shop-api-base";

#[derive(Debug, Clone, PartialEq)]
pub struct ShopConfig {
    /// Remote origin + path prefix, without trailing slash
    pub base_url: String,
    pub currency_symbol: String,
    /// Card descriptions are cut to this many characters
    pub description_preview_chars: usize,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE.to_string(),
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            description_preview_chars: DEFAULT_DESCRIPTION_PREVIEW_CHARS,
        }
    }
}

impl ShopConfig {
    /// Replace the API base, ignoring blank values
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        let trimmed = base_url.trim().trim_end_matches('/');
        if !trimmed.is_empty() {
            self.base_url = trimmed.to_string();
        }
        self
    }

    /// Defaults, with the API base taken from the page's meta tag when present
    pub fn from_document() -> Self {
        let config = Self::default();
        match read_meta(API_BASE_META) {
            Some(base) => {
                web_sys::console::log_1(&format!("[Config] API base overridden: {}", base).into());
                config.with_base_url(&base)
            }
            None => config,
        }
    }
}

fn read_meta(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let element = document
        .query_selector(&format!("meta[name=\"{}\"]", name))
        .ok()
        .flatten()?;
    let meta = element.dyn_into::<web_sys::HtmlMetaElement>().ok()?;
    Some(meta.content())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ShopConfig::default();
        assert_eq!(config.base_url, "https://openapi.programming-hero.com/api");
        assert_eq!(config.currency_symbol, "৳");
        assert_eq!(config.description_preview_chars, 100);
    }

    #[test]
    fn test_with_base_url_strips_trailing_slash() {
        let config = ShopConfig::default().with_base_url(" http://localhost:8080/api/ ");
        assert_eq!(config.base_url, "http://localhost:8080/api");
    }

    #[test]
    fn test_with_blank_base_url_keeps_default() {
        let config = ShopConfig::default().with_base_url("   ");
        assert_eq!(config.base_url, DEFAULT_API_BASE);
    }
}
