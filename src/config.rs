use crate::error::{AutoGradeError, Result};
use autograde_common::ClientConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 解析APIのURLを上書きする環境変数
pub const API_URL_ENV: &str = "AUTOGRADE_API_URL";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_base_url: Option<String>,
    pub timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: None,
            timeout_seconds: 120,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// 読めない・壊れた設定ファイルは既定値として扱う
    pub fn load_lenient() -> Self {
        match Self::config_path() {
            Ok(path) => Self::load_lenient_from(&path),
            Err(err) => {
                log::warn!("{}", err);
                Self::default()
            }
        }
    }

    pub fn load_lenient_from(path: &Path) -> Self {
        Self::load_from(path).unwrap_or_else(|err| {
            log::warn!("設定ファイルを読み込めません ({}): {}", path.display(), err);
            Self::default()
        })
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| AutoGradeError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("autograde").join("config.json"))
    }

    /// URLを検証してから保存する
    pub fn set_api_url(&mut self, url: &str) -> Result<()> {
        let client = ClientConfig::new(url)?;
        self.api_base_url = Some(client.api_base_url().to_string());
        self.save()
    }

    /// 接続先を決定（引数 > 環境変数 > 設定ファイル > 既定値）
    pub fn client_config(&self, flag: Option<&str>) -> Result<ClientConfig> {
        let env = std::env::var(API_URL_ENV).ok();
        resolve_client_config(flag, env.as_deref(), self.api_base_url.as_deref())
    }
}

pub fn resolve_client_config(
    flag: Option<&str>,
    env: Option<&str>,
    file: Option<&str>,
) -> Result<ClientConfig> {
    let chosen = [flag, env, file]
        .into_iter()
        .flatten()
        .find(|url| !url.trim().is_empty());

    match chosen {
        Some(url) => Ok(ClientConfig::new(url)?),
        None => Ok(ClientConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_resolve_priority() {
        let config = resolve_client_config(
            Some("http://flag:1"),
            Some("http://env:2"),
            Some("http://file:3"),
        )
        .unwrap();
        assert_eq!(config.api_base_url(), "http://flag:1");

        let config = resolve_client_config(None, Some("http://env:2"), Some("http://file:3")).unwrap();
        assert_eq!(config.api_base_url(), "http://env:2");

        let config = resolve_client_config(None, Some(""), Some("http://file:3")).unwrap();
        assert_eq!(config.api_base_url(), "http://file:3");

        let config = resolve_client_config(None, None, None).unwrap();
        assert_eq!(config.api_base_url(), "http://localhost:8000");
    }

    #[test]
    fn test_resolve_invalid_url() {
        let err = resolve_client_config(Some("ftp://example.com"), None, None).unwrap_err();
        assert!(matches!(err, AutoGradeError::Config(_)));
        assert!(err.to_string().contains("ftp://example.com"));
    }

    #[test]
    fn test_load_missing_file_returns_default() {
        let dir = tempdir().expect("Failed to create temp dir");
        let config = Config::load_from(&dir.path().join("none.json")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("nested").join("config.json");
        let config = Config {
            api_base_url: Some("http://192.168.0.10:8000".into()),
            timeout_seconds: 30,
        };

        config.save_to(&path).unwrap();
        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_lenient_corrupt_file() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(Config::load_from(&path).is_err());
        assert_eq!(Config::load_lenient_from(&path), Config::default());
    }

    #[test]
    fn test_load_partial_file() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"api_base_url":"http://x:1"}"#).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.api_base_url.as_deref(), Some("http://x:1"));
        assert_eq!(loaded.timeout_seconds, 120);
    }
}
