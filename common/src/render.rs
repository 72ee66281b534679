//! 解析結果の表示用整形
//!
//! DOMやターミナルに依存しない表示データを作る。
//! 数値の丸めはブラウザの `Number.prototype.toFixed` と同じ結果になるようにしている。

use crate::config::ClientConfig;
use crate::types::{AnalysisResponse, Detection};

/// 検出なしの場合に表示する文言
pub const NO_DAMAGE_MESSAGE: &str = "No damage detected";

/// 小数点以下 `digits` 桁に丸めて文字列化
///
/// 丁度中間の値は0から遠い方へ丸める（`format!` は偶数丸めになるため補正する）
pub fn to_fixed(value: f64, digits: usize) -> String {
    let scale = 10f64.powi(digits as i32);
    let half = 0.5f64.copysign(value);
    let midpoint = (value * scale).trunc() + half;

    // mul_addは丸め誤差なしで判定できる
    if value.mul_add(scale, -midpoint) == 0.0 {
        return format!("{:.*}", digits, (midpoint + half) / scale);
    }

    format!("{:.*}", digits, value)
}

/// 信頼度表示 `Confidence: 87.3%`
pub fn format_confidence(confidence: f64) -> String {
    format!("Confidence: {}%", to_fixed(confidence * 100.0, 1))
}

/// 位置表示 `Location: [1.1, 2.0, 3.3, 4.5]`
pub fn format_bbox(bbox: &[f64; 4]) -> String {
    let coords = bbox
        .iter()
        .map(|c| to_fixed(*c, 1))
        .collect::<Vec<_>>()
        .join(", ");
    format!("Location: [{}]", coords)
}

/// 損傷リストの1行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DamageRow {
    pub label: String,
    pub confidence: String,
    pub location: String,
}

impl From<&Detection> for DamageRow {
    fn from(detection: &Detection) -> Self {
        Self {
            label: detection.label.clone(),
            confidence: format_confidence(detection.confidence),
            location: format_bbox(&detection.bbox),
        }
    }
}

/// 損傷リスト
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DamageList {
    /// 検出なし（プレースホルダ1行のみ表示）
    Empty,
    Rows(Vec<DamageRow>),
}

impl DamageList {
    pub fn from_detections(detections: &[Detection]) -> Self {
        if detections.is_empty() {
            DamageList::Empty
        } else {
            DamageList::Rows(detections.iter().map(DamageRow::from).collect())
        }
    }

    /// 表示される行数（プレースホルダを含む）
    pub fn entry_count(&self) -> usize {
        match self {
            DamageList::Empty => 1,
            DamageList::Rows(rows) => rows.len(),
        }
    }

    /// テキスト表示用の行
    pub fn lines(&self) -> Vec<String> {
        match self {
            DamageList::Empty => vec![NO_DAMAGE_MESSAGE.to_string()],
            DamageList::Rows(rows) => rows
                .iter()
                .map(|row| format!("{}  {}  {}", row.label, row.confidence, row.location))
                .collect(),
        }
    }
}

/// 結果セクションに表示する内容一式
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultView {
    /// 元画像の表示元（ブラウザではObject URL、CLIではファイルパス）
    pub original_image_src: String,
    pub annotated_image_src: String,
    pub damage_list: DamageList,
    pub damage_types: Vec<String>,
}

impl ResultView {
    pub fn build(
        config: &ClientConfig,
        response: &AnalysisResponse,
        original_image_src: impl Into<String>,
    ) -> Self {
        Self {
            original_image_src: original_image_src.into(),
            annotated_image_src: config.asset_url(&response.results.annotated_image_url),
            damage_list: DamageList::from_detections(&response.detections),
            damage_types: response.damage_types(),
        }
    }
}
