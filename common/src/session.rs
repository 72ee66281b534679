//! アップロード〜解析〜表示の1サイクルを管理するセッション
//!
//! ファイル選択ごとに `RequestToken` を発行し、最後に発行したトークンの
//! 完了だけが表示を更新できる。古いリクエストの完了は捨てる。

use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::render::ResultView;
use crate::types::AnalysisResponse;
use crate::upload::{validate_image, SelectedFile};
use crate::view_state::{ViewState, Visibility};

/// リクエスト識別子（発行順に単調増加）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// 完了通知の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// 表示を更新した。置き換えられた元画像の参照があれば返す（解放は呼び出し側）
    Applied { superseded_src: Option<String> },
    /// 最新のリクエストではないため無視した
    Stale,
}

/// 解析セッション
#[derive(Debug, Clone, Default)]
pub struct AnalyzerSession {
    config: ClientConfig,
    state: ViewState,
    next_id: u64,
    in_flight: Option<RequestToken>,
    original_src: Option<String>,
}

impl AnalyzerSession {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn visibility(&self) -> Visibility {
        Visibility::of(&self.state)
    }

    /// 指定トークンが現在待機中の最新リクエストか
    pub fn is_current(&self, token: RequestToken) -> bool {
        self.in_flight == Some(token)
    }

    /// ファイル選択を受け付ける
    ///
    /// 画像でなければエラー表示に切り替えて `Err` を返す（送信しない）。
    /// 画像ならローディング表示に切り替え、送信用のトークンを返す。
    /// どちらの場合も、それまで待機中だったリクエストは古いものとして扱う。
    pub fn begin(&mut self, file: &SelectedFile) -> Result<RequestToken> {
        self.in_flight = None;

        if let Err(err) = validate_image(file) {
            self.state = ViewState::ShowingError(err.user_message().to_string());
            return Err(err);
        }

        self.next_id = self.next_id.wrapping_add(1);
        let token = RequestToken(self.next_id);
        self.in_flight = Some(token);
        self.state = ViewState::Loading;
        Ok(token)
    }

    /// 解析成功を反映する
    pub fn complete_success(
        &mut self,
        token: RequestToken,
        response: &AnalysisResponse,
        original_src: impl Into<String>,
    ) -> Completion {
        if !self.finish(token) {
            return Completion::Stale;
        }

        let view = ResultView::build(&self.config, response, original_src);
        let superseded_src = self
            .original_src
            .replace(view.original_image_src.clone())
            .filter(|prev| *prev != view.original_image_src);
        self.state = ViewState::ShowingResults(view);

        Completion::Applied { superseded_src }
    }

    /// 解析失敗を反映する
    pub fn complete_failure(&mut self, token: RequestToken, error: &Error) -> Completion {
        if !self.finish(token) {
            return Completion::Stale;
        }

        self.state = ViewState::ShowingError(error.user_message().to_string());
        Completion::Applied {
            superseded_src: None,
        }
    }

    /// 待機中トークンを消費する（同じトークンで二度完了させない）
    fn finish(&mut self, token: RequestToken) -> bool {
        if self.is_current(token) {
            self.in_flight = None;
            true
        } else {
            false
        }
    }
}
