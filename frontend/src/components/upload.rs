//! File upload component with drag & drop and paste support.
//!
//! Files can come from the file picker, a drop on the zone, or Ctrl+V
//! anywhere on the page. All three feed the same upload dispatcher.

use leptos::*;
use web_sys::{DragEvent, Event, File, HtmlInputElement};

use crate::components::Hero;
use crate::config::{api_url, upload_endpoint};
use crate::services::{dispatch_upload, files_from_drop, files_from_input, files_from_paste, BrowserTransport};
use crate::state::UiState;

#[component]
pub fn UploadSection(
    /// Uploader state
    state: RwSignal<UiState>,
    /// Something is displayed below (shrinks the section)
    has_results: Signal<bool>,
) -> impl IntoView {
    let (drag_active, set_drag_active) = create_signal(false);
    let file_input = create_node_ref::<html::Input>();

    let start_upload = move |files: Vec<File>| {
        if files.is_empty() {
            return;
        }
        spawn_local(async move {
            let url = upload_endpoint(api_url());
            dispatch_upload(&BrowserTransport, &state, &url, files).await;
        });
    };

    // Ctrl+V anywhere on the page
    let paste_handle = window_event_listener(ev::paste, move |ev| {
        start_upload(files_from_paste(&ev));
    });
    on_cleanup(move || paste_handle.remove());

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        start_upload(files_from_input(&input));
        // Allow picking the same files again
        input.set_value("");
    };

    let on_drag_over = move |ev: DragEvent| {
        ev.prevent_default();
        set_drag_active.set(true);
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_drag_active.set(false);
        start_upload(files_from_drop(&ev));
    };

    let open_picker = move |_| {
        if let Some(input) = file_input.get() {
            input.click();
        }
    };

    view! {
        <div class=move || if has_results.get() { "upload-section has-results" } else { "upload-section" }>
            <Hero/>

            <div
                class=move || if drag_active.get() { "dropzone active" } else { "dropzone" }
                on:click=open_picker
                on:dragenter=on_drag_over
                on:dragover=on_drag_over
                on:dragleave=move |_| set_drag_active.set(false)
                on:drop=on_drop
            >
                <input
                    type="file"
                    multiple=true
                    style="display:none"
                    node_ref=file_input
                    on:click=|ev| ev.stop_propagation()
                    on:change=on_file_change
                />
                <p>
                    {move || if drag_active.get() {
                        "Drop the files here..."
                    } else {
                        "Drag 'n' drop files here, or click to select files"
                    }}
                </p>
            </div>

            <p class="paste-instruction">"Or paste files using Ctrl+V"</p>
        </div>
    }
}
