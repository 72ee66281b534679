//! 元画像プレビュー用のObject URL管理

use gloo::console;
use web_sys::{File, Url};

/// 選択ファイルのObject URLを作る
pub fn create_preview_url(file: &File) -> Option<String> {
    match Url::create_object_url_with_blob(file) {
        Ok(url) => Some(url),
        Err(err) => {
            console::warn!("createObjectURL failed:", err);
            None
        }
    }
}

/// 表示から外れたObject URLを解放する
pub fn revoke_preview_url(url: &str) {
    if is_object_url(url) {
        let _ = Url::revoke_object_url(url);
    }
}

fn is_object_url(url: &str) -> bool {
    url.starts_with("blob:")
}
