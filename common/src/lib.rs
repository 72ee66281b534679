//! AutoGrade Common Library
//!
//! CLIとWeb(WASM)で共有される型とビューロジック

pub mod types;
pub mod error;
pub mod config;
pub mod parser;
pub mod upload;
pub mod render;
pub mod view_state;
pub mod session;

pub use types::{AnalysisResponse, AnalysisLinks, DamageSummary, Detection, HealthStatus};
pub use error::{Error, Result, INVALID_FILE_MESSAGE, REQUEST_FAILED_MESSAGE};
pub use config::{ClientConfig, DEFAULT_API_BASE_URL};
pub use parser::{parse_analysis_response, parse_health_response};
pub use upload::{SelectedFile, validate_image, is_image_type, FILE_FIELD};
pub use render::{DamageList, DamageRow, ResultView, format_confidence, format_bbox, to_fixed, NO_DAMAGE_MESSAGE};
pub use view_state::{ViewState, Visibility, display};
pub use session::{AnalyzerSession, Completion, RequestToken};
