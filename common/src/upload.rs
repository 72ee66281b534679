//! アップロード対象ファイルの検証

use crate::error::{Error, Result};

/// multipartのファイルフィールド名
pub const FILE_FIELD: &str = "file";

const IMAGE_TYPE_PREFIX: &str = "image/";

/// 選択されたファイル
///
/// ブラウザのFileやCLIのパスから、検証に必要な情報だけを取り出したもの
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub content_type: String,
    pub size: u64,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, content_type: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            content_type: content_type.into(),
            size,
        }
    }

    pub fn is_image(&self) -> bool {
        is_image_type(&self.content_type)
    }
}

/// MIMEタイプが画像かどうか
pub fn is_image_type(content_type: &str) -> bool {
    content_type.starts_with(IMAGE_TYPE_PREFIX)
}

/// 画像以外は送信前に弾く
pub fn validate_image(file: &SelectedFile) -> Result<()> {
    if file.is_image() {
        Ok(())
    } else {
        Err(Error::NotAnImage(file.content_type.clone()))
    }
}
