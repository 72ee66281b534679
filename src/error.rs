use thiserror::Error;

#[derive(Error, Debug)]
pub enum AutoGradeError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("{}", .0.user_message())]
    Analysis(autograde_common::Error),

    #[error("サーバーが応答していません: {0}")]
    ServerUnhealthy(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

impl AutoGradeError {
    /// 送信前の入力検証で弾かれたか
    pub fn is_validation(&self) -> bool {
        matches!(self, AutoGradeError::Analysis(err) if err.is_validation())
    }
}

/// 設定・ファイル保存の失敗は解析失敗の定型文にせず、そのまま伝える
impl From<autograde_common::Error> for AutoGradeError {
    fn from(err: autograde_common::Error) -> Self {
        match err {
            autograde_common::Error::Config(message) => AutoGradeError::Config(message),
            autograde_common::Error::Io(io) => AutoGradeError::Io(io),
            other => AutoGradeError::Analysis(other),
        }
    }
}

pub type Result<T> = std::result::Result<T, AutoGradeError>;
