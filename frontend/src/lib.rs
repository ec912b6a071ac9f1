//! Text Extractor - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend that uploads files to an extraction backend and
//! shows the extracted text with syntax highlighting and a "copy all" action.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                      (owns RwSignal<UiState>)   │
//! │  ├── UploadSection (hero, drop zone, picker, paste)         │
//! │  └── ResultsSection (status, error, copy button, files)     │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ScrollToTop                                                 │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - Backend URL and UI constants
//! - [`types`] - Results, wire format, clipboard and error types
//! - [`state`] - UI state container and its transitions
//! - [`components`] - UI components
//! - [`services`] - Upload, response normalization, clipboard, highlighting

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod state;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Results
    UploadResult,
    // API
    FileEntry, UploadResponse, ReplyBody, ServerReply,
    // Clipboard
    CopyState, ClipboardAvailability,
    // Errors
    TransportError, ClipboardError,
};

// State
pub use state::{StateStore, UiState};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// Install the panic hook and console logger, then mount [`App`].
pub fn start() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 Text Extractor - Starting Leptos App (backend: {})", api_url());

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Text Extractor"/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    let state = create_rw_signal(UiState::default());
    let has_results = Signal::derive(move || state.with(UiState::has_activity));

    // Once something has been shown the layout stays top-aligned
    let (aligned_top, set_aligned_top) = create_signal(false);
    create_effect(move |_| {
        if has_results.get() {
            set_aligned_top.set(true);
        }
    });

    view! {
        <div class=move || if aligned_top.get() { "App has-results-active" } else { "App" }>
            <div class="container">
                <UploadSection state=state has_results=has_results/>
                <ResultsSection state=state/>
            </div>
            <ScrollToTop/>
        </div>
    }
}
