use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();

const DEFAULT_API_BASE_URL: &str = "http://localhost:5001/api";

fn window() -> Option<web_sys::Window> {
    web_sys::window()
}

fn get_from_env_js() -> Option<String> {
    // Expect optional global object: window.__ULTRALEARNING_ENV = { API_BASE_URL: "..." }
    let w = window()?;
    let any = js_sys::Reflect::get(&w, &"__ULTRALEARNING_ENV".into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(any);
    let val = js_sys::Reflect::get(&obj, &"API_BASE_URL".into())
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
        .or_else(|| js_sys::Reflect::get(&obj, &"api_base_url".into()).ok());
    val.and_then(|v| v.as_string())
}

fn get_from_window_config() -> Option<String> {
    // Expect optional global object: window.__ULTRALEARNING_CONFIG = { api_base_url: "..." }
    let w = window()?;
    let any = js_sys::Reflect::get(&w, &"__ULTRALEARNING_CONFIG".into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(any);
    let val = js_sys::Reflect::get(&obj, &"api_base_url".into())
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
        .or_else(|| js_sys::Reflect::get(&obj, &"API_BASE_URL".into()).ok());
    val.and_then(|v| v.as_string())
}

fn snapshot_from_globals() -> Option<String> {
    if let Some(env_url) = get_from_env_js() {
        return Some(env_url);
    }
    get_from_window_config()
}

fn cache_base_url(value: &str) -> String {
    let value = value.trim_end_matches('/').to_string();
    let _ = API_BASE_URL.set(value.clone());
    value
}

fn write_window_config(cfg: &RuntimeConfig) {
    if cfg.api_base_url.is_none() {
        return;
    }
    let w = match window() {
        Some(win) => win,
        None => return,
    };
    let obj = js_sys::Object::new();
    if let Some(url) = &cfg.api_base_url {
        let _ = js_sys::Reflect::set(
            &obj,
            &"api_base_url".into(),
            &wasm_bindgen::JsValue::from_str(url),
        );
    }
    let _ = js_sys::Reflect::set(&w, &"__ULTRALEARNING_CONFIG".into(), &obj);
}

async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    let resp = reqwest::get("./config.json").await.ok()?;
    if !resp.status().is_success() {
        return None;
    }
    resp.json::<RuntimeConfig>().await.ok()
}

pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    if let Some(existing) = snapshot_from_globals() {
        return cache_base_url(&existing);
    }
    if let Some(cfg) = fetch_runtime_config().await {
        write_window_config(&cfg);
        if let Some(url) = cfg.api_base_url {
            return cache_base_url(&url);
        }
    }
    cache_base_url(DEFAULT_API_BASE_URL)
}

/// WebSocket endpoint for the chat push channel, derived from the API base
/// URL: scheme swapped to ws(s), the `/api` suffix replaced by `/ws`.
pub fn ws_url_from(api_base_url: &str) -> String {
    let origin = api_base_url.trim_end_matches('/').trim_end_matches("/api");
    let swapped = if let Some(rest) = origin.strip_prefix("https://") {
        format!("wss://{rest}")
    } else if let Some(rest) = origin.strip_prefix("http://") {
        format!("ws://{rest}")
    } else {
        format!("ws://{origin}")
    };
    format!("{swapped}/ws")
}

pub async fn await_ws_url() -> String {
    ws_url_from(&await_api_base_url().await)
}

pub async fn init() {
    let _ = await_api_base_url().await;
}

#[cfg(test)]
mod tests {
    use super::ws_url_from;

    #[test]
    fn ws_url_swaps_scheme_and_api_suffix() {
        assert_eq!(
            ws_url_from("http://localhost:5001/api"),
            "ws://localhost:5001/ws"
        );
        assert_eq!(
            ws_url_from("https://learn.example.com/api"),
            "wss://learn.example.com/ws"
        );
    }

    #[test]
    fn ws_url_tolerates_trailing_slash_and_bare_origin() {
        assert_eq!(
            ws_url_from("http://localhost:5001/api/"),
            "ws://localhost:5001/ws"
        );
        assert_eq!(ws_url_from("localhost:5001"), "ws://localhost:5001/ws");
    }
}
