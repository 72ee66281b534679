use crate::error::{AutoGradeError, Result};
use autograde_common::{validate_image, SelectedFile};
use image::ImageFormat;
use std::path::Path;

const UNKNOWN_CONTENT_TYPE: &str = "application/octet-stream";

/// 送信する画像
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file: SelectedFile,
    pub bytes: Vec<u8>,
}

/// 拡張子からMIMEタイプを判定
pub fn content_type_for(path: &Path) -> &'static str {
    ImageFormat::from_path(path)
        .map(|format| format.to_mime_type())
        .unwrap_or(UNKNOWN_CONTENT_TYPE)
}

/// 画像ファイルを検証して読み込む
///
/// 画像でなければ読み込む前にエラーを返す
pub fn load_image(path: &Path) -> Result<ImageUpload> {
    if !path.is_file() {
        return Err(AutoGradeError::FileNotFound(path.display().to_string()));
    }

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    let size = std::fs::metadata(path)?.len();
    let file = SelectedFile::new(name, content_type_for(path), size);

    validate_image(&file)?;

    let bytes = std::fs::read(path)?;
    Ok(ImageUpload { file, bytes })
}
