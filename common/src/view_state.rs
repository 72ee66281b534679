//! ウィジェットの表示状態
//!
//! 表示/非表示の切り替えを状態値から求める純粋関数にしておくことで、
//! DOMなしで表示ロジックをテストできる。

use crate::render::ResultView;

/// ウィジェットの状態
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ViewState {
    #[default]
    Idle,
    Loading,
    ShowingResults(ResultView),
    ShowingError(String),
}

impl ViewState {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            ViewState::ShowingError(message) => Some(message),
            _ => None,
        }
    }

    pub fn result_view(&self) -> Option<&ResultView> {
        match self {
            ViewState::ShowingResults(view) => Some(view),
            _ => None,
        }
    }
}

/// 各要素の表示有無
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Visibility {
    pub loading: bool,
    pub error: bool,
    pub results: bool,
}

impl Visibility {
    pub fn of(state: &ViewState) -> Self {
        match state {
            ViewState::Idle => Self::default(),
            ViewState::Loading => Self {
                loading: true,
                ..Self::default()
            },
            ViewState::ShowingResults(_) => Self {
                results: true,
                ..Self::default()
            },
            ViewState::ShowingError(_) => Self {
                error: true,
                ..Self::default()
            },
        }
    }
}

/// CSSの `display` 値
pub fn display(visible: bool) -> &'static str {
    if visible {
        "block"
    } else {
        "none"
    }
}
