//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"AutoGrade AI"</h1>
            <p class="subtitle">"Vehicle damage analysis"</p>
        </header>
    }
}
