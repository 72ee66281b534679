//! エラー型定義

use thiserror::Error;

/// ファイル種別が不正な場合にユーザーへ表示するメッセージ
pub const INVALID_FILE_MESSAGE: &str = "Please select an image file";

/// 解析リクエスト失敗時にユーザーへ表示するメッセージ
pub const REQUEST_FAILED_MESSAGE: &str =
    "Failed to analyze image. Please make sure the API server is running.";

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("not an image file: {0}")]
    NotAnImage(String),

    #[error("HTTP error! status: {status}")]
    Http { status: u16 },

    #[error("Network error: {0}")]
    Network(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl Error {
    /// 入力検証エラーかどうか（ネットワーク呼び出し前に弾かれたもの）
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::NotAnImage(_))
    }

    /// バナーに表示する文言
    ///
    /// 詳細はコンソールにのみ出力し、ユーザーには固定文言を返す
    pub fn user_message(&self) -> &'static str {
        if self.is_validation() {
            INVALID_FILE_MESSAGE
        } else {
            REQUEST_FAILED_MESSAGE
        }
    }
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_http() {
        let error = Error::Http { status: 503 };
        assert_eq!(format!("{}", error), "HTTP error! status: 503");
    }

    #[test]
    fn test_error_display_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let error = Error::Json(json_error);
        assert!(format!("{}", error).contains("JSON error"));
    }

    #[test]
    fn test_error_from_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let error: Error = io_error.into();
        assert!(matches!(error, Error::Io(_)));
    }

    #[test]
    fn test_user_message_validation() {
        let error = Error::NotAnImage("text/plain".to_string());
        assert!(error.is_validation());
        assert_eq!(error.user_message(), "Please select an image file");
    }

    #[test]
    fn test_user_message_request_failures_are_generic() {
        let errors = vec![
            Error::Http { status: 500 },
            Error::Network("connection refused".to_string()),
            Error::Json(serde_json::from_str::<serde_json::Value>("{").unwrap_err()),
        ];

        for error in errors {
            assert!(!error.is_validation());
            assert_eq!(error.user_message(), REQUEST_FAILED_MESSAGE);
        }
    }
}
