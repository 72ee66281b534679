use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "autograde")]
#[command(about = "車両損傷AI解析クライアント", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// 解析APIのベースURL（例: http://localhost:8000）
    #[arg(long, global = true)]
    pub api_url: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 画像を送信して損傷を解析
    Analyze {
        /// 画像ファイルのパス
        #[arg(required = true)]
        image: PathBuf,

        /// レスポンスJSONをそのまま出力
        #[arg(long)]
        json: bool,

        /// 注釈付き画像の保存先
        #[arg(short, long)]
        save_annotated: Option<PathBuf>,
    },

    /// 解析サーバーの稼働確認
    Health,

    /// 設定の表示・変更
    Config {
        /// 既定の解析APIベースURLを設定
        #[arg(long)]
        set_api_url: Option<String>,

        /// 現在の設定を表示
        #[arg(long)]
        show: bool,
    },
}
