//! サブコマンドの実行

use crate::cli::{Cli, Commands};
use crate::client::AnalyzerClient;
use crate::config::Config;
use crate::error::{AutoGradeError, Result};
use crate::{report, upload};
use autograde_common::ResultView;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

pub async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Analyze { image, json, save_annotated } => {
            // 画像でなければ送信しない
            let upload = upload::load_image(&image)?;

            let config = Config::load()?;
            let client = AnalyzerClient::new(
                config.client_config(cli.api_url.as_deref())?,
                Duration::from_secs(config.timeout_seconds),
            )?;

            let spinner = spinner("Analyzing image...");
            let outcome = client.analyze(&upload).await;
            spinner.finish_and_clear();

            let response = outcome.map_err(|err| {
                log::error!("Error: {}", err);
                AutoGradeError::from(err)
            })?;

            if json {
                println!("{}", serde_json::to_string_pretty(&response)?);
            } else {
                let view = ResultView::build(client.config(), &response, image.display().to_string());
                println!("{}", report::render_report(&view, &response));
            }

            if let Some(dest) = save_annotated {
                let size = client
                    .download_asset(&response.results.annotated_image_url, &dest)
                    .await?;
                println!("✔ 注釈付き画像を保存: {} ({} bytes)", dest.display(), size);
            }
        }

        Commands::Health => {
            let config = Config::load()?;
            let client = AnalyzerClient::new(
                config.client_config(cli.api_url.as_deref())?,
                Duration::from_secs(config.timeout_seconds),
            )?;

            let status = client.health().await.map_err(|err| {
                log::error!("Error: {}", err);
                AutoGradeError::ServerUnhealthy(client.config().api_base_url().to_string())
            })?;

            if !status.is_healthy() {
                return Err(AutoGradeError::ServerUnhealthy(format!(
                    "{} (status: {})",
                    client.config().api_base_url(),
                    status.status
                )));
            }
            println!("✔ {} は稼働中です ({})", client.config().api_base_url(), status.timestamp);
        }

        Commands::Config { set_api_url, show } => {
            // 壊れた設定ファイルでも上書きで直せるようにする
            let mut config = Config::load_lenient();

            if let Some(url) = set_api_url {
                config.set_api_url(&url)?;
                println!("✔ 解析APIのURLを設定しました");
            }

            if show {
                let resolved = config.client_config(cli.api_url.as_deref())?;
                println!("設定:");
                println!("  APIベースURL: {}", resolved.api_base_url());
                println!(
                    "  設定ファイル: {}",
                    config.api_base_url.as_deref().unwrap_or("未設定")
                );
                println!("  タイムアウト: {}秒", config.timeout_seconds);
            }
        }
    }

    Ok(())
}

fn spinner(message: &'static str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
