//! ローディング表示とエラーバナー

use autograde_common::display;
use leptos::prelude::*;

#[component]
pub fn Loading(visible: Signal<bool>) -> impl IntoView {
    view! {
        <div id="loading" class="loading" style=move || format!("display: {}", display(visible.get()))>
            <div class="spinner"></div>
            <p>"Analyzing image..."</p>
        </div>
    }
}

#[component]
pub fn ErrorBanner(message: Signal<Option<String>>) -> impl IntoView {
    view! {
        <div
            id="error"
            class="error"
            style=move || format!("display: {}", display(message.with(|m| m.is_some())))
        >
            <p>{move || message.get().unwrap_or_default()}</p>
        </div>
    }
}
