//! ページからの接続設定読み込み
//!
//! `<meta name="autograde-api-base" content="https://...">` があればそのURLを使う

use autograde_common::ClientConfig;
use gloo::console;

const API_BASE_META: &str = "autograde-api-base";

/// ページ設定からクライアント設定を作る
pub fn client_config() -> ClientConfig {
    resolve_client_config(meta_content(API_BASE_META).as_deref())
}

/// metaタグの値からクライアント設定を決める
///
/// 値がない・不正な場合は既定値
pub fn resolve_client_config(api_base: Option<&str>) -> ClientConfig {
    match api_base {
        Some(url) if !url.trim().is_empty() => ClientConfig::new(url).unwrap_or_else(|err| {
            console::warn!(format!("{}: {}", API_BASE_META, err));
            ClientConfig::default()
        }),
        _ => ClientConfig::default(),
    }
}

fn meta_content(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let selector = format!("meta[name=\"{}\"]", name);
    let meta = document.query_selector(&selector).ok()??;
    meta.get_attribute("content")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_without_meta() {
        assert_eq!(resolve_client_config(None), ClientConfig::default());
        assert_eq!(resolve_client_config(Some("  ")), ClientConfig::default());
    }

    #[test]
    fn test_resolve_with_meta() {
        let config = resolve_client_config(Some("https://grading.example.com/"));
        assert_eq!(
            config.analyze_url(),
            "https://grading.example.com/analyze-vehicle/"
        );
    }
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn wasm_client_config_reads_meta_tag() {
        let document = web_sys::window().unwrap().document().unwrap();
        let meta = document.create_element("meta").unwrap();
        meta.set_attribute("name", API_BASE_META).unwrap();
        meta.set_attribute("content", "http://127.0.0.1:9000").unwrap();
        document.head().unwrap().append_child(&meta).unwrap();

        assert_eq!(client_config().api_base_url(), "http://127.0.0.1:9000");

        meta.remove();
    }
}
