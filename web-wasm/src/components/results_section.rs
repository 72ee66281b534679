//! 解析結果セクション

use autograde_common::{display, DamageList, DamageRow, ResultView, NO_DAMAGE_MESSAGE};
use leptos::prelude::*;

#[component]
pub fn ResultsSection(view_model: Signal<Option<ResultView>>) -> impl IntoView {
    let original_src = move || view_model.with(|v| v.as_ref().map(|v| v.original_image_src.clone()));
    let annotated_src = move || view_model.with(|v| v.as_ref().map(|v| v.annotated_image_src.clone()));
    let damage_list = move || view_model.with(|v| v.as_ref().map(|v| v.damage_list.clone()));

    view! {
        <section
            id="resultsSection"
            class="results"
            style=move || format!("display: {}", display(view_model.with(|v| v.is_some())))
        >
            <div class="image-comparison">
                <figure>
                    <figcaption>"Original"</figcaption>
                    <img id="originalImage" src=original_src alt="Original vehicle image" />
                </figure>
                <figure>
                    <figcaption>"Detected damage"</figcaption>
                    <img id="annotatedImage" src=annotated_src alt="Annotated vehicle image" />
                </figure>
            </div>
            <h3>"Damage details"</h3>
            <div id="damageList" class="damage-list">
                {move || match damage_list() {
                    Some(DamageList::Rows(rows)) => rows
                        .into_iter()
                        .map(|row| view! { <DamageItem row=row /> })
                        .collect_view()
                        .into_any(),
                    Some(DamageList::Empty) => view! {
                        <div class="damage-item">{NO_DAMAGE_MESSAGE}</div>
                    }
                    .into_any(),
                    None => ().into_any(),
                }}
            </div>
        </section>
    }
}

#[component]
fn DamageItem(row: DamageRow) -> impl IntoView {
    view! {
        <div class="damage-item">
            <div class="damage-type">{row.label}</div>
            <div class="damage-confidence">{row.confidence}</div>
            <div class="damage-bbox">{row.location}</div>
        </div>
    }
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use gloo::timers::future::TimeoutFuture;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::HtmlElement;

    wasm_bindgen_test_configure!(run_in_browser);

    fn container() -> HtmlElement {
        let document = web_sys::window().unwrap().document().unwrap();
        let parent: HtmlElement = document.create_element("div").unwrap().dyn_into().unwrap();
        document.body().unwrap().append_child(&parent).unwrap();
        parent
    }

    fn result_view(damage_list: DamageList) -> ResultView {
        ResultView {
            original_image_src: "blob:http://localhost/1".to_string(),
            annotated_image_src: "http://localhost:8000/out/1.png".to_string(),
            damage_list,
            damage_types: vec![],
        }
    }

    fn row(label: &str) -> DamageRow {
        DamageRow {
            label: label.to_string(),
            confidence: "Confidence: 87.3%".to_string(),
            location: "Location: [1.1, 2.0, 3.3, 4.5]".to_string(),
        }
    }

    #[wasm_bindgen_test]
    async fn wasm_renders_one_item_per_detection() {
        let parent = container();
        let view_model = result_view(DamageList::Rows(vec![row("scratch"), row("dent")]));
        let _handle = leptos::mount::mount_to(parent.clone(), move || {
            view! { <ResultsSection view_model=Signal::derive(move || Some(view_model.clone())) /> }
        });
        TimeoutFuture::new(0).await;

        let items = parent.query_selector_all("#damageList .damage-item").unwrap();
        assert_eq!(items.length(), 2);

        let first_type = parent.query_selector("#damageList .damage-type").unwrap().unwrap();
        assert_eq!(first_type.text_content().as_deref(), Some("scratch"));
        let confidence = parent.query_selector(".damage-confidence").unwrap().unwrap();
        assert_eq!(confidence.text_content().as_deref(), Some("Confidence: 87.3%"));
        let bbox = parent.query_selector(".damage-bbox").unwrap().unwrap();
        assert_eq!(bbox.text_content().as_deref(), Some("Location: [1.1, 2.0, 3.3, 4.5]"));

        let annotated = parent.query_selector("#annotatedImage").unwrap().unwrap();
        assert_eq!(
            annotated.get_attribute("src").as_deref(),
            Some("http://localhost:8000/out/1.png")
        );
        assert!(parent.query_selector("#originalImage").unwrap().is_some());

        let section = parent.query_selector("#resultsSection").unwrap().unwrap();
        assert!(section.get_attribute("style").unwrap_or_default().contains("display: block"));

        parent.remove();
    }

    #[wasm_bindgen_test]
    async fn wasm_renders_placeholder_without_detections() {
        let parent = container();
        let view_model = result_view(DamageList::Empty);
        let _handle = leptos::mount::mount_to(parent.clone(), move || {
            view! { <ResultsSection view_model=Signal::derive(move || Some(view_model.clone())) /> }
        });
        TimeoutFuture::new(0).await;

        let items = parent.query_selector_all("#damageList .damage-item").unwrap();
        assert_eq!(items.length(), 1);
        let item = parent.query_selector("#damageList .damage-item").unwrap().unwrap();
        assert_eq!(item.text_content().as_deref(), Some("No damage detected"));

        parent.remove();
    }

    #[wasm_bindgen_test]
    async fn wasm_hidden_without_results() {
        let parent = container();
        let _handle = leptos::mount::mount_to(parent.clone(), || {
            view! { <ResultsSection view_model=Signal::derive(|| None::<ResultView>) /> }
        });
        TimeoutFuture::new(0).await;

        let section = parent.query_selector("#resultsSection").unwrap().unwrap();
        assert!(section.get_attribute("style").unwrap_or_default().contains("display: none"));
        assert_eq!(parent.query_selector_all(".damage-item").unwrap().length(), 0);

        parent.remove();
    }
}
