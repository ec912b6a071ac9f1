//! Results block: status line, error message, copy button and file list.

use leptos::*;

use crate::services::{copy_all, highlight, language_for, BrowserClipboard, BrowserDelay};
use crate::state::UiState;
use crate::types::UploadResult;

#[component]
pub fn ResultsSection(
    /// Uploader state
    state: RwSignal<UiState>,
) -> impl IntoView {
    // Only re-render the file list when the results themselves change,
    // not on every copy-button transition.
    let results = create_memo(move |_| state.with(|s| s.results.clone()));

    let on_copy = move |_| {
        spawn_local(async move {
            copy_all(&BrowserClipboard, &BrowserDelay, &state).await;
        });
    };

    view! {
        <Show
            when=move || state.with(UiState::has_activity)
            fallback=|| view! { }
        >
            <div class="results-block">
                <Show
                    when=move || state.with(|s| s.loading)
                    fallback=|| view! { }
                >
                    <p class="loading">"Processing files..."</p>
                </Show>

                {move || state.with(|s| s.error_message.clone()).map(|message| view! {
                    <p class="error-message">{message}</p>
                })}

                <Show
                    when=move || results.with(|r| !r.is_empty())
                    fallback=|| view! { }
                >
                    <div class="results-header">
                        <h2>"Extracted Content"</h2>
                        <button
                            class=move || state.with(|s| s.copy_state.css_class())
                            disabled=move || !state.with(UiState::can_copy)
                            on:click=on_copy
                        >
                            {move || state.with(|s| s.copy_state.label())}
                        </button>
                    </div>
                    <div class="file-list">
                        {move || results.get().into_iter().map(|result| view! {
                            <FileItem result=result/>
                        }).collect_view()}
                    </div>
                </Show>
            </div>
        </Show>
    }
}

/// One extracted file.
#[component]
pub fn FileItem(result: UploadResult) -> impl IntoView {
    let body = if result.is_error_file {
        view! {
            <p class="binary-file-notice">
                <strong>"Error processing file:"</strong>
                <br/>
                {result.content.clone()}
            </p>
        }
        .into_view()
    } else if result.content.is_empty() {
        view! {
            <p class="empty-file-notice">"This text file is empty or has no displayable content."</p>
        }
        .into_view()
    } else {
        view! { <CodeBlock filename=result.filename.clone() content=result.content.clone()/> }.into_view()
    };

    view! {
        <div class="file-item">
            <h3 class="file-name">{result.filename}</h3>
            {body}
        </div>
    }
}

/// Highlighted, line-numbered source view.
#[component]
fn CodeBlock(filename: String, content: String) -> impl IntoView {
    let code = create_node_ref::<html::Code>();

    // Highlight once the element is attached to the document
    code.on_load(move |element| {
        request_animation_frame(move || highlight(&element));
    });

    view! {
        <pre class="line-numbers code-block">
            <code class=format!("language-{}", language_for(&filename)) node_ref=code>
                {content}
            </code>
        </pre>
    }
}
