//! 車両損傷解析API連携
//!
//! `POST {base}/analyze-vehicle/` に画像をmultipartで送信し、レスポンスをパースする

use autograde_common::{
    parse_analysis_response, AnalysisResponse, ClientConfig, Error, Result, FILE_FIELD,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, Request, RequestInit, RequestMode, Response};

/// 画像を送信して解析結果を取得
///
/// HTTPステータスが2xx以外なら `Error::Http` を返す
pub async fn analyze_image(config: &ClientConfig, file: &File) -> Result<AnalysisResponse> {
    let form = FormData::new().map_err(js_error)?;
    form.append_with_blob(FILE_FIELD, file).map_err(js_error)?;

    // Content-Typeはboundary付きでブラウザが設定する
    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&form);

    let request = Request::new_with_str_and_init(&config.analyze_url(), &opts).map_err(js_error)?;

    let window = web_sys::window().ok_or_else(|| Error::Network("window is not available".into()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?;
    let resp: Response = resp_value.dyn_into().map_err(js_error)?;

    if !resp.ok() {
        return Err(Error::Http { status: resp.status() });
    }

    let text = JsFuture::from(resp.text().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    let body = text
        .as_string()
        .ok_or_else(|| Error::Network("response body is not text".into()))?;

    parse_analysis_response(&body)
}

fn js_error(value: JsValue) -> Error {
    let detail = value.as_string().unwrap_or_else(|| format!("{:?}", value));
    Error::Network(detail)
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn wasm_js_error_keeps_message() {
        let err = js_error(JsValue::from_str("Failed to fetch"));
        assert_eq!(err.to_string(), "Network error: Failed to fetch");
    }

    #[wasm_bindgen_test]
    async fn wasm_unreachable_server_is_network_error() {
        let config = ClientConfig::new("http://127.0.0.1:9").unwrap();
        let parts = web_sys::js_sys::Array::of1(&JsValue::from_str("fake image bytes"));
        let file = File::new_with_str_sequence(&parts, "car.jpg").unwrap();

        let result = analyze_image(&config, &file).await;
        assert!(matches!(result, Err(Error::Network(_))));
    }
}
