//! 解析APIクライアント
//!
//! ブラウザ版と同じエンドポイント・同じパーサーを使う

use crate::upload::ImageUpload;
use autograde_common::{
    parse_analysis_response, parse_health_response, AnalysisResponse, ClientConfig, Error,
    HealthStatus, Result, FILE_FIELD,
};
use reqwest::multipart::{Form, Part};
use std::path::Path;
use std::time::Duration;

pub struct AnalyzerClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl AnalyzerClient {
    pub fn new(config: ClientConfig, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(network_error)?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// 画像をmultipartで送信し、解析結果を取得
    pub async fn analyze(&self, upload: &ImageUpload) -> Result<AnalysisResponse> {
        let part = Part::bytes(upload.bytes.clone())
            .file_name(upload.file.name.clone())
            .mime_str(&upload.file.content_type)
            .map_err(network_error)?;
        let form = Form::new().part(FILE_FIELD, part);

        let url = self.config.analyze_url();
        log::debug!("POST {} ({} bytes)", url, upload.file.size);

        let response = self
            .http
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(network_error)?;

        let body = read_success_body(response).await?;
        parse_analysis_response(&body)
    }

    /// サーバーの稼働確認
    pub async fn health(&self) -> Result<HealthStatus> {
        let response = self
            .http
            .get(self.config.health_url())
            .send()
            .await
            .map_err(network_error)?;

        let body = read_success_body(response).await?;
        parse_health_response(&body)
    }

    /// 注釈付き画像などサーバー上の画像を保存
    pub async fn download_asset(&self, path: &str, dest: &Path) -> Result<u64> {
        let url = self.config.asset_url(path);
        log::debug!("GET {}", url);

        let response = self.http.get(&url).send().await.map_err(network_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Http { status: status.as_u16() });
        }

        let bytes = response.bytes().await.map_err(network_error)?;
        tokio::fs::write(dest, &bytes).await?;
        Ok(bytes.len() as u64)
    }
}

async fn read_success_body(response: reqwest::Response) -> Result<String> {
    let status = response.status();
    if !status.is_success() {
        log::debug!("server responded with {}", status);
        return Err(Error::Http { status: status.as_u16() });
    }

    response.text().await.map_err(network_error)
}

fn network_error(err: reqwest::Error) -> Error {
    Error::Network(err.to_string())
}
