//! UI state container and its transitions.
//!
//! Every mutation of the uploader's state goes through one of the methods on
//! [`UiState`]. Components hold it in a Leptos `RwSignal`; async drivers reach
//! it through [`StateStore`] so they can run against a plain `RefCell` too.

use std::cell::RefCell;

use leptos::{RwSignal, SignalUpdate};

use crate::services::normalizer::NormalizedUpload;
use crate::types::{ClipboardAvailability, ClipboardError, CopyState, UploadResult};

pub const CLIPBOARD_UNAVAILABLE: &str = "Clipboard API (navigator.clipboard) is not available.";
pub const NOTHING_TO_COPY: &str = "No text content from successfully processed files to copy.";

/// Handle identifying one dispatched upload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestId(u64);

/// Everything the uploader renders from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    /// Per-file results, in server order
    pub results: Vec<UploadResult>,
    /// Request-level or clipboard error shown above the results
    pub error_message: Option<String>,
    /// An upload is in flight
    pub loading: bool,
    /// Copy button state
    pub copy_state: CopyState,
    generation: u64,
}

impl UiState {
    // =========================================================================
    // Upload
    // =========================================================================

    /// Enter `loading` for a new request, superseding any earlier one.
    pub fn begin_upload(&mut self) -> RequestId {
        self.generation += 1;
        self.loading = true;
        self.results.clear();
        self.error_message = None;
        RequestId(self.generation)
    }

    /// Apply the normalized outcome of `request` and leave `loading`.
    ///
    /// Returns `false` (leaving the state untouched) when a newer upload has
    /// started since `request` was dispatched.
    pub fn finish_upload(&mut self, request: RequestId, outcome: NormalizedUpload) -> bool {
        if request.0 != self.generation {
            return false;
        }
        self.results = outcome.results;
        self.error_message = outcome.error_message;
        self.loading = false;
        true
    }

    /// Something has been shown since the page loaded (drives the layout switch).
    pub fn has_activity(&self) -> bool {
        self.loading || self.error_message.is_some() || !self.results.is_empty()
    }

    // =========================================================================
    // Copy to clipboard
    // =========================================================================

    /// Text copied by "Copy All Content": every non-error, non-empty result.
    pub fn copy_payload(&self) -> String {
        self.results
            .iter()
            .filter(|r| r.is_copyable())
            .map(|r| format!("{}\n\n{}", r.filename, r.content))
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Copy button is clickable.
    pub fn can_copy(&self) -> bool {
        self.copy_state != CopyState::Copying && !self.results.iter().all(|r| r.is_error_file)
    }

    /// Start a copy. Returns the text to write, or `None` when nothing should
    /// be written (already copying, no clipboard, nothing eligible).
    pub fn begin_copy(&mut self, clipboard: ClipboardAvailability) -> Option<String> {
        if self.copy_state == CopyState::Copying {
            return None;
        }

        if let ClipboardAvailability::Unavailable { secure_context } = clipboard {
            let context = if secure_context {
                " Context is secure, but API still unavailable."
            } else {
                " Context is NOT secure (requires HTTPS or localhost)."
            };
            self.error_message = Some(format!("{}{}", CLIPBOARD_UNAVAILABLE, context));
            return None;
        }

        self.copy_state = CopyState::Copying;

        let payload = self.copy_payload();
        if payload.is_empty() {
            self.error_message = Some(NOTHING_TO_COPY.to_string());
            self.copy_state = CopyState::Idle;
            return None;
        }

        Some(payload)
    }

    pub fn copy_succeeded(&mut self) {
        self.copy_state = CopyState::Success;
    }

    pub fn copy_failed(&mut self, error: &ClipboardError) {
        self.error_message = Some(format!("Failed to copy content to clipboard. Error: {}", error));
        self.copy_state = CopyState::Idle;
    }

    /// Feedback timer fired.
    pub fn copy_feedback_elapsed(&mut self) {
        if self.copy_state == CopyState::Success {
            self.copy_state = CopyState::Idle;
        }
    }

    /// State already holding `results`, as left by a finished upload.
    #[cfg(test)]
    pub(crate) fn with_results(results: Vec<UploadResult>) -> Self {
        Self {
            results,
            ..Self::default()
        }
    }
}

/// Shared, mutable access to a [`UiState`].
pub trait StateStore {
    /// Run `f` against the state. `None` if the state is gone (component unmounted).
    fn modify<R>(&self, f: impl FnOnce(&mut UiState) -> R) -> Option<R>;
}

impl StateStore for RwSignal<UiState> {
    fn modify<R>(&self, f: impl FnOnce(&mut UiState) -> R) -> Option<R> {
        self.try_update(f)
    }
}

impl StateStore for RefCell<UiState> {
    fn modify<R>(&self, f: impl FnOnce(&mut UiState) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}
