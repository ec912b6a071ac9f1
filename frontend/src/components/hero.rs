//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <h1>"Text Extractor"</h1>
        <p class="app-description">
            "Easily extract text from multiple files. Drag & drop or select your files, "
            "and get the content displayed in a convenient, readable format."
        </p>
    }
}
