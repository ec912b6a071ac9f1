//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **Result Types** - Per-file extraction results shown in the UI
//! - **API Types** - Upload endpoint wire format and raw replies
//! - **Clipboard Types** - Copy button state and clipboard capability
//! - **Error Types** - Transport and clipboard failures

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

// =============================================================================
// Result Types
// =============================================================================

/// Extracted content of a single uploaded file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadResult {
    /// Original file name
    pub filename: String,
    /// Extracted text, or the backend's sentinel message for error files
    pub content: String,
    /// True when `content` is a sentinel error rather than real text
    pub is_error_file: bool,
}

impl UploadResult {
    /// Whether this result contributes to the "copy all" payload.
    pub fn is_copyable(&self) -> bool {
        !self.is_error_file && !self.content.is_empty()
    }
}

// =============================================================================
// API Types
// =============================================================================

/// One entry of the upload endpoint's `files` array.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    pub filename: String,
    pub content: String,
}

/// Successful payload of `POST /api/upload`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UploadResponse {
    pub files: Vec<FileEntry>,
}

/// Decoded body of an HTTP reply.
#[derive(Clone, Debug, PartialEq)]
pub enum ReplyBody {
    /// No body at all
    Empty,
    /// Body that parsed as JSON
    Json(Value),
    /// Anything else, kept verbatim
    Text(String),
}

impl ReplyBody {
    /// Decode raw response text, preferring JSON.
    pub fn parse(text: String) -> Self {
        if text.is_empty() {
            return ReplyBody::Empty;
        }
        match serde_json::from_str::<Value>(&text) {
            Ok(value) => ReplyBody::Json(value),
            Err(_) => ReplyBody::Text(text),
        }
    }

    /// The body as a plain string, if it is one (raw text or a JSON string).
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ReplyBody::Text(text) => Some(text.as_str()),
            ReplyBody::Json(Value::String(text)) => Some(text.as_str()),
            _ => None,
        }
    }

    /// The body as JSON, if it parsed.
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            ReplyBody::Json(value) => Some(value),
            _ => None,
        }
    }
}

/// Any HTTP reply from the backend, whatever its status.
#[derive(Clone, Debug, PartialEq)]
pub struct ServerReply {
    pub status: u16,
    pub status_text: String,
    pub body: ReplyBody,
}

impl ServerReply {
    /// 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

// =============================================================================
// Clipboard Types
// =============================================================================

/// State of the "copy all" button.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CopyState {
    #[default]
    Idle,
    Copying,
    Success,
}

impl CopyState {
    /// Button label.
    pub fn label(&self) -> &'static str {
        match self {
            CopyState::Idle => "Copy All Content",
            CopyState::Copying => "Copying...",
            CopyState::Success => "✓ Copied!",
        }
    }

    /// CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            CopyState::Idle => "idle",
            CopyState::Copying => "copying",
            CopyState::Success => "success",
        }
    }
}

/// Whether the Clipboard API can be used from this page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClipboardAvailability {
    Available,
    /// API missing; `secure_context` tells whether HTTPS/localhost is the culprit.
    Unavailable { secure_context: bool },
}

// =============================================================================
// Error Types
// =============================================================================

/// Upload transport failures, i.e. no usable HTTP reply.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The request was sent but nothing came back (network down, CORS, ...).
    #[error("no response from server: {0}")]
    NoResponse(String),

    /// The request could not be built.
    #[error("{0}")]
    Setup(String),
}

/// Clipboard write failure, as reported by the browser.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{name} - {message}")]
pub struct ClipboardError {
    /// JS error name (`NotAllowedError`, ...)
    pub name: String,
    /// JS error message
    pub message: String,
}
