//! 解析APIの接続設定

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// 既定の解析APIベースURL
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

const ANALYZE_PATH: &str = "/analyze-vehicle/";
const HEALTH_PATH: &str = "/health";

/// 解析APIクライアント設定
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    api_base_url: String,
}

impl ClientConfig {
    /// ベースURLを検証して設定を作成
    ///
    /// 末尾の `/` は取り除く（パス連結時に二重スラッシュにならないように）
    pub fn new(api_base_url: impl AsRef<str>) -> Result<Self> {
        let trimmed = api_base_url.as_ref().trim().trim_end_matches('/');

        if trimmed.is_empty() {
            return Err(Error::Config("API base URL is empty".into()));
        }
        if !is_absolute_url(trimmed) {
            return Err(Error::Config(format!(
                "API base URL must start with http:// or https://: {}",
                trimmed
            )));
        }

        Ok(Self {
            api_base_url: trimmed.to_string(),
        })
    }

    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    /// 画像解析エンドポイント
    pub fn analyze_url(&self) -> String {
        format!("{}{}", self.api_base_url, ANALYZE_PATH)
    }

    /// ヘルスチェックエンドポイント
    pub fn health_url(&self) -> String {
        format!("{}{}", self.api_base_url, HEALTH_PATH)
    }

    /// サーバー相対パスを絶対URLに変換
    ///
    /// 既に絶対URLならそのまま返す
    pub fn asset_url(&self, path: &str) -> String {
        if is_absolute_url(path) {
            path.to_string()
        } else if path.starts_with('/') {
            format!("{}{}", self.api_base_url, path)
        } else {
            format!("{}/{}", self.api_base_url, path)
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

fn is_absolute_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.api_base_url(), "http://localhost:8000");
        assert_eq!(config.analyze_url(), "http://localhost:8000/analyze-vehicle/");
        assert_eq!(config.health_url(), "http://localhost:8000/health");
    }

    #[test]
    fn test_new_trims_trailing_slash() {
        let config = ClientConfig::new("https://api.example.com/v1/").expect("設定作成失敗");
        assert_eq!(config.analyze_url(), "https://api.example.com/v1/analyze-vehicle/");
    }

    #[test]
    fn test_new_rejects_invalid_urls() {
        assert!(matches!(ClientConfig::new(""), Err(Error::Config(_))));
        assert!(matches!(ClientConfig::new("  / "), Err(Error::Config(_))));
        assert!(matches!(ClientConfig::new("localhost:8000"), Err(Error::Config(_))));
    }

    #[test]
    fn test_asset_url() {
        let config = ClientConfig::default();
        assert_eq!(
            config.asset_url("/results/result_1.jpg"),
            "http://localhost:8000/results/result_1.jpg"
        );
        assert_eq!(
            config.asset_url("results/result_1.jpg"),
            "http://localhost:8000/results/result_1.jpg"
        );
        assert_eq!(
            config.asset_url("https://cdn.example.com/a.jpg"),
            "https://cdn.example.com/a.jpg"
        );
    }

    #[test]
    fn test_config_serde() {
        let config = ClientConfig::new("http://10.0.0.2:8000").expect("設定作成失敗");
        let json = serde_json::to_string(&config).expect("シリアライズ失敗");
        assert_eq!(json, r#"{"api_base_url":"http://10.0.0.2:8000"}"#);
    }
}
