//! 解析結果のターミナル表示

use autograde_common::{AnalysisResponse, ResultView};

/// 結果をテキストに整形
pub fn render_report(view: &ResultView, response: &AnalysisResponse) -> String {
    let mut lines = Vec::new();

    lines.push(format!("Original:  {}", view.original_image_src));
    lines.push(format!("Annotated: {}", view.annotated_image_src));
    if !response.request_id.is_empty() {
        lines.push(format!("Request:   {}", response.request_id));
    }
    lines.push(String::new());

    lines.push(format!("Damage ({}):", response.detections.len()));
    for line in view.damage_list.lines() {
        lines.push(format!("  - {}", line));
    }

    if !view.damage_types.is_empty() {
        lines.push(String::new());
        lines.push(format!("Types: {}", view.damage_types.join(", ")));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use autograde_common::{parse_analysis_response, ClientConfig};

    #[test]
    fn test_render_report_with_detections() {
        let response = parse_analysis_response(
            r#"{"request_id":"abc","results":{"annotated_image_url":"/out/1.png"},"detections":[{"label":"scratch","confidence":0.873,"bbox":[1.05,2.02,3.3,4.456]}]}"#,
        )
        .unwrap();
        let view = ResultView::build(&ClientConfig::default(), &response, "car.jpg");

        let report = render_report(&view, &response);

        assert!(report.contains("Original:  car.jpg"));
        assert!(report.contains("Annotated: http://localhost:8000/out/1.png"));
        assert!(report.contains("Request:   abc"));
        assert!(report.contains("Damage (1):"));
        assert!(report.contains("  - scratch  Confidence: 87.3%  Location: [1.1, 2.0, 3.3, 4.5]"));
        assert!(report.contains("Types: scratch"));
    }

    #[test]
    fn test_render_report_without_detections() {
        let response = parse_analysis_response(
            r#"{"results":{"annotated_image_url":"/out/2.png"},"detections":[]}"#,
        )
        .unwrap();
        let view = ResultView::build(&ClientConfig::default(), &response, "car.jpg");

        let report = render_report(&view, &response);

        assert!(report.contains("  - No damage detected"));
        assert!(!report.contains("Types:"));
        assert!(!report.contains("Request:"));
    }
}
