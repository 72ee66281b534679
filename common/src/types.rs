//! 解析APIのレスポンス型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - Detection: 検出された損傷1件
//! - AnalysisResponse: `/analyze-vehicle/` のレスポンス全体
//! - HealthStatus: `/health` のレスポンス

use serde::{Deserialize, Serialize};

/// 検出された損傷領域
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    /// 損傷カテゴリ（scratch, dent など）
    pub label: String,

    /// 信頼度 0.0〜1.0
    pub confidence: f64,

    /// バウンディングボックス (x1, y1, x2, y2)
    pub bbox: [f64; 4],
}

/// 画像URL（サーバー相対パス）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisLinks {
    pub annotated_image_url: String,

    #[serde(default)]
    pub original_image_url: Option<String>,
}

/// 検出結果の集計
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DamageSummary {
    pub total_damage_found: usize,
    pub damage_types: Vec<String>,
}

/// 解析レスポンス
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    pub results: AnalysisLinks,

    pub detections: Vec<Detection>,

    #[serde(default)]
    pub success: bool,

    #[serde(default)]
    pub request_id: String,

    #[serde(default)]
    pub timestamp: String,

    #[serde(default)]
    pub summary: DamageSummary,
}

impl AnalysisResponse {
    /// 検出された損傷カテゴリ（出現順・重複なし）
    ///
    /// サーバーがsummaryを返さない場合もdetectionsから求める
    pub fn damage_types(&self) -> Vec<String> {
        let mut types: Vec<String> = Vec::new();
        for detection in &self.detections {
            if !types.contains(&detection.label) {
                types.push(detection.label.clone());
            }
        }
        types
    }
}

/// ヘルスチェックレスポンス
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthStatus {
    pub status: String,
    pub timestamp: String,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_response_deserialize_full() {
        let json = r#"{
            "success": true,
            "request_id": "0d6c",
            "timestamp": "2025-06-01T10:00:00",
            "detections": [
                {"label": "dent", "confidence": 0.91, "bbox": [10.0, 20.0, 30.0, 40.0]},
                {"label": "scratch", "confidence": 0.42, "bbox": [1.0, 2.0, 3.0, 4.0]}
            ],
            "summary": {"total_damage_found": 2, "damage_types": ["dent", "scratch"]},
            "results": {
                "annotated_image_url": "/results/result_0d6c.jpg",
                "original_image_url": "/uploads/upload_0d6c.jpg"
            }
        }"#;

        let response: AnalysisResponse = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert!(response.success);
        assert_eq!(response.detections.len(), 2);
        assert_eq!(response.detections[0].label, "dent");
        assert_eq!(response.summary.total_damage_found, 2);
        assert_eq!(
            response.results.original_image_url.as_deref(),
            Some("/uploads/upload_0d6c.jpg")
        );
    }

    #[test]
    fn test_analysis_response_deserialize_minimal() {
        // results と detections のみで受け付ける
        let json = r#"{"results":{"annotated_image_url":"/out/1.png"},"detections":[]}"#;

        let response: AnalysisResponse = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(response.results.annotated_image_url, "/out/1.png");
        assert!(response.detections.is_empty());
        assert!(!response.success);
        assert_eq!(response.summary, DamageSummary::default());
    }

    #[test]
    fn test_detection_requires_four_coordinates() {
        let json = r#"{"label":"dent","confidence":0.5,"bbox":[1.0,2.0,3.0]}"#;
        assert!(serde_json::from_str::<Detection>(json).is_err());
    }

    #[test]
    fn test_damage_types_unique_in_order() {
        let detection = |label: &str| Detection {
            label: label.to_string(),
            confidence: 0.5,
            bbox: [0.0; 4],
        };
        let response = AnalysisResponse {
            results: AnalysisLinks::default(),
            detections: vec![detection("scratch"), detection("dent"), detection("scratch")],
            success: true,
            request_id: String::new(),
            timestamp: String::new(),
            summary: DamageSummary::default(),
        };

        assert_eq!(response.damage_types(), vec!["scratch", "dent"]);
    }

    #[test]
    fn test_health_status() {
        let status: HealthStatus =
            serde_json::from_str(r#"{"status":"healthy","timestamp":"2025-06-01T10:00:00"}"#)
                .expect("デシリアライズ失敗");
        assert!(status.is_healthy());
        assert!(!HealthStatus::default().is_healthy());
    }
}
