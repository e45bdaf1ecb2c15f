//! Catalog API Client
//!
//! Browser `fetch` bindings to the remote plant catalog, organized by
//! resource.

mod catalog;

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::de::DeserializeOwned;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::config::ShopConfig;
use crate::error::CatalogError;

pub use catalog::*;

/// Characters escaped inside a single path segment
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Join the API base and one endpoint segment
pub fn endpoint_url(base_url: &str, endpoint: &str) -> String {
    let segment = endpoint.trim_matches('/');
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        utf8_percent_encode(segment, SEGMENT)
    )
}

/// GET `{base}/{endpoint}` and decode the JSON body.
///
/// Failures are logged and turned into `None`; callers treat that as
/// "no data" and leave the UI as it is.
pub async fn fetch_resource<T: DeserializeOwned>(config: &ShopConfig, endpoint: &str) -> Option<T> {
    let url = endpoint_url(&config.base_url, endpoint);
    match fetch_json(&url).await {
        Ok(value) => Some(value),
        Err(e) => {
            web_sys::console::error_1(&format!("[Catalog] {}", e).into());
            None
        }
    }
}

async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, CatalogError> {
    let window = web_sys::window().ok_or(CatalogError::NoWindow)?;

    let value = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| CatalogError::Network { url: url.to_string(), message: js_message(&e) })?;
    let response: web_sys::Response = value
        .dyn_into()
        .map_err(|e| CatalogError::Network { url: url.to_string(), message: js_message(&e) })?;

    if !response.ok() {
        return Err(CatalogError::Status { url: url.to_string(), status: response.status() });
    }

    let promise = response
        .json()
        .map_err(|e| CatalogError::Body { url: url.to_string(), message: js_message(&e) })?;
    let body = JsFuture::from(promise)
        .await
        .map_err(|e| CatalogError::Body { url: url.to_string(), message: js_message(&e) })?;

    serde_wasm_bindgen::from_value(body)
        .map_err(|e| CatalogError::Decode { url: url.to_string(), message: e.to_string() })
}

fn js_message(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
