//! 解析API呼び出し

mod analyze;

pub use analyze::analyze_image;
