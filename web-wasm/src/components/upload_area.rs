//! アップロードエリアコンポーネント
//!
//! クリック・「browse」リンク・ドラッグ&ドロップ・ファイル選択の
//! いずれも `on_file_selected` に1ファイルだけ渡す

use leptos::html::Input;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, Event, File, FileList, HtmlInputElement, MouseEvent};

#[component]
pub fn UploadArea<F>(on_file_selected: F) -> impl IntoView
where
    F: Fn(File) + Clone + Send + Sync + 'static,
{
    let (is_dragover, set_is_dragover) = signal(false);
    let file_input: NodeRef<Input> = NodeRef::new();

    let open_picker = move || {
        if let Some(input) = file_input.get() {
            input.click();
        }
    };

    let on_click = move |_: MouseEvent| open_picker();

    // リンクのクリックがアップロードエリアに伝播すると2回開いてしまう
    let on_browse_click = move |ev: MouseEvent| {
        ev.stop_propagation();
        open_picker();
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(true);
    };

    let on_dragleave = move |_: DragEvent| {
        set_is_dragover.set(false);
    };

    let on_drop = {
        let on_file_selected = on_file_selected.clone();
        move |ev: DragEvent| {
            ev.prevent_default();
            set_is_dragover.set(false);

            let file = ev
                .data_transfer()
                .and_then(|dt| dt.files())
                .and_then(|files| first_file(&files));
            if let Some(file) = file {
                on_file_selected(file);
            }
        }
    };

    let on_change = move |ev: Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
        else {
            return;
        };

        let file = input.files().and_then(|files| first_file(&files));
        // 同じファイルを続けて選んでもchangeが発火するように戻す
        input.set_value("");

        if let Some(file) = file {
            on_file_selected(file);
        }
    };

    view! {
        <div
            id="uploadBox"
            class="upload-box"
            class:dragover=move || is_dragover.get()
            on:click=on_click
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:drop=on_drop
        >
            <div class="upload-icon">"🚗"</div>
            <p>
                "Drag & drop a vehicle photo here or "
                <span class="browse-link" on:click=on_browse_click>"browse"</span>
            </p>
            <p class="text-muted">"Supported formats: JPEG, PNG, WebP"</p>
            <input
                id="fileInput"
                type="file"
                accept="image/*"
                style="display: none"
                node_ref=file_input
                on:change=on_change
            />
        </div>
    }
}

fn first_file(files: &FileList) -> Option<File> {
    if files.length() > 0 {
        files.get(0)
    } else {
        None
    }
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use gloo::timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;
    use web_sys::{DragEventInit, HtmlElement};

    wasm_bindgen_test_configure!(run_in_browser);

    fn drag_event(kind: &str) -> DragEvent {
        let init = DragEventInit::new();
        init.set_bubbles(true);
        init.set_cancelable(true);
        DragEvent::new_with_event_init_dict(kind, &init).unwrap()
    }

    #[wasm_bindgen_test]
    async fn wasm_dragover_toggles_class() {
        let document = web_sys::window().unwrap().document().unwrap();
        let parent: HtmlElement = document.create_element("div").unwrap().dyn_into().unwrap();
        document.body().unwrap().append_child(&parent).unwrap();

        let _handle = leptos::mount::mount_to(parent.clone(), || {
            view! { <UploadArea on_file_selected=|_: File| {} /> }
        });
        TimeoutFuture::new(0).await;

        let upload_box = parent.query_selector("#uploadBox").unwrap().unwrap();
        assert!(parent.query_selector("#fileInput").unwrap().is_some());
        assert!(parent.query_selector("#uploadBox .browse-link").unwrap().is_some());
        assert!(!upload_box.class_list().contains("dragover"));

        let over = drag_event("dragover");
        upload_box.dispatch_event(&over).unwrap();
        TimeoutFuture::new(0).await;
        assert!(over.default_prevented());
        assert!(upload_box.class_list().contains("dragover"));

        upload_box.dispatch_event(&drag_event("dragleave")).unwrap();
        TimeoutFuture::new(0).await;
        assert!(!upload_box.class_list().contains("dragover"));

        let drop = drag_event("drop");
        upload_box.dispatch_event(&drop).unwrap();
        assert!(drop.default_prevented());

        parent.remove();
    }
}
