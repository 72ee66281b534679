//! メインアプリケーションコンポーネント

use autograde_common::{AnalyzerSession, Completion, SelectedFile, ViewState};
use gloo::console;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::File;

use crate::api;
use crate::components::{
    header::Header,
    results_section::ResultsSection,
    status::{ErrorBanner, Loading},
    upload_area::UploadArea,
};
use crate::config;
use crate::preview;

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let session = RwSignal::new(AnalyzerSession::new(config::client_config()));
    let state = Memo::new(move |_| session.with(|s| s.state().clone()));

    let on_file_selected = move |file: File| {
        let selected = SelectedFile::new(file.name(), file.type_(), file.size() as u64);

        let mut begun = None;
        session.update(|s| begun = Some(s.begin(&selected)));
        let token = match begun {
            Some(Ok(token)) => token,
            Some(Err(err)) => {
                console::warn!(format!("{}: {}", selected.name, err));
                return;
            }
            None => return,
        };

        let config = session.with_untracked(|s| s.config().clone());
        spawn_local(async move {
            let completion = match api::analyze_image(&config, &file).await {
                Ok(response) => {
                    // 古いリクエストならObject URLを作らない
                    if session.with_untracked(|s| s.is_current(token)) {
                        let src = preview::create_preview_url(&file).unwrap_or_default();
                        let mut completion = Completion::Stale;
                        session.update(|s| completion = s.complete_success(token, &response, src));
                        completion
                    } else {
                        Completion::Stale
                    }
                }
                Err(err) if session.with_untracked(|s| s.is_current(token)) => {
                    console::error!("Error:", err.to_string());
                    let mut completion = Completion::Stale;
                    session.update(|s| completion = s.complete_failure(token, &err));
                    completion
                }
                // 古いリクエストの失敗は下でdebugとして記録する
                Err(_) => Completion::Stale,
            };

            match completion {
                Completion::Applied {
                    superseded_src: Some(src),
                } => preview::revoke_preview_url(&src),
                Completion::Applied { .. } => {}
                Completion::Stale => {
                    console::debug!(format!("request #{} superseded; result dropped", token.id()));
                }
            }
        });
    };

    let loading = Signal::derive(move || state.with(ViewState::is_loading));
    let error_message =
        Signal::derive(move || state.with(|s| s.error_message().map(str::to_string)));
    let result_view = Signal::derive(move || state.with(|s| s.result_view().cloned()));

    view! {
        <div class="container">
            <Header />

            <UploadArea on_file_selected=on_file_selected />

            <Loading visible=loading />

            <ErrorBanner message=error_message />

            <ResultsSection view_model=result_view />
        </div>
    }
}
