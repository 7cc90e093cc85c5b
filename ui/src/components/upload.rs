//! PDF upload: drop zone with progress, and the modal that hosts it.

use crate::components::{ErrorBanner, Modal};
use crate::download::read_file;
use crate::state::AppState;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, File, HtmlInputElement};

/// Drop or pick a single PDF. `on_uploaded` receives the new document id.
#[component]
pub fn UploadDropzone(on_uploaded: Callback<String>) -> impl IntoView {
    let state = expect_context::<AppState>();
    let dragging = RwSignal::new(false);
    let read_error = RwSignal::new(Option::<String>::None);

    let uploading = move || state.documents.with(|d| d.uploading);
    let progress = move || state.documents.with(|d| d.upload_progress);

    let start = move |file: File| {
        let documents = state.documents_store();
        read_error.set(None);
        documents.clear_error();
        state.run(async move {
            match read_file(&file).await {
                Ok(upload) => {
                    if let Some(detail) = documents.upload_document(upload).await {
                        on_uploaded.run(detail.id);
                    }
                }
                Err(e) => {
                    tracing::error!("{}", e);
                    read_error.set(Some(e));
                }
            }
        });
    };

    let on_change = move |ev: web_sys::Event| {
        let file = ev
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));
        if let Some(file) = file {
            start(file);
        }
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        dragging.set(false);
        let file = ev
            .data_transfer()
            .and_then(|dt| dt.files())
            .and_then(|files| files.get(0));
        if let Some(file) = file {
            start(file);
        }
    };

    let error = Signal::derive(move || {
        read_error
            .get()
            .or_else(|| state.documents.with(|d| d.error.clone()))
    });

    view! {
        <ErrorBanner
            error=error
            on_dismiss=move || {
                read_error.set(None);
                state.documents_store().clear_error();
            }
        />
        <label
            class=move || format!(
                "block border-2 border-dashed rounded-xl p-10 text-center cursor-pointer transition-colors {}",
                if dragging.get() { "border-blue-500 bg-blue-50" } else { "border-slate-300 hover:border-blue-400" }
            )
            on:dragover=move |ev: DragEvent| {
                ev.prevent_default();
                dragging.set(true);
            }
            on:dragleave=move |_| dragging.set(false)
            on:drop=on_drop
        >
            <input
                type="file"
                accept="application/pdf,.pdf"
                class="hidden"
                prop:disabled=uploading
                on:change=on_change
            />
            <Show
                when=uploading
                fallback=|| view! {
                    <div class="text-4xl mb-2">"\u{1f4c4}"</div>
                    <p class="font-medium text-slate-700">"Drop a PDF here or click to browse"</p>
                    <p class="text-xs text-slate-500 mt-1">"PDF only, up to 25MB"</p>
                }
            >
                <p class="font-medium text-slate-700 mb-3">"Analyzing document..."</p>
                <div class="h-2 bg-slate-200 rounded-full overflow-hidden">
                    <div
                        class="h-full bg-blue-600 transition-all"
                        style=move || format!("width: {}%", progress())
                    ></div>
                </div>
                <p class="text-xs text-slate-500 mt-2">{move || format!("{}%", progress())}</p>
            </Show>
        </label>
    }
}

/// Upload dialog; navigates to the analysis once the upload succeeds.
#[component]
pub fn UploadModal(open: RwSignal<bool>) -> impl IntoView {
    let navigate = StoredValue::new_local(use_navigate());
    let on_uploaded = Callback::new(move |id: String| {
        open.set(false);
        navigate.with_value(|nav| nav(&format!("/documents/{}", id), Default::default()));
    });

    view! {
        <Show when=move || open.get()>
            <Modal title="Upload a contract" on_close=move || open.set(false)>
                <UploadDropzone on_uploaded=on_uploaded />
            </Modal>
        </Show>
    }
}
