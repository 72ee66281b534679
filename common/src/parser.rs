//! APIレスポンスパーサー
//!
//! ブラウザ側はレスポンスをテキストで受け取り、ここでパースする。
//! CLIとWASMで同じパース規則を使うため共通化している。

use crate::error::Result;
use crate::types::{AnalysisResponse, HealthStatus};

/// `/analyze-vehicle/` のレスポンス本文をパース
///
/// # Examples
/// ```
/// use autograde_common::parse_analysis_response;
///
/// let body = r#"{"results":{"annotated_image_url":"/out/1.png"},"detections":[]}"#;
/// let response = parse_analysis_response(body).unwrap();
/// assert!(response.detections.is_empty());
/// ```
pub fn parse_analysis_response(body: &str) -> Result<AnalysisResponse> {
    let response = serde_json::from_str(strip_bom(body).trim())?;
    Ok(response)
}

/// `/health` のレスポンス本文をパース
pub fn parse_health_response(body: &str) -> Result<HealthStatus> {
    let status = serde_json::from_str(strip_bom(body).trim())?;
    Ok(status)
}

fn strip_bom(body: &str) -> &str {
    body.strip_prefix('\u{feff}').unwrap_or(body)
}
