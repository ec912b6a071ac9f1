//! Application configuration.
//!
//! The backend base URL is baked in at build time from the
//! `TEXT_EXTRACTOR_API_URL` environment variable (e.g. `TEXT_EXTRACTOR_API_URL=https://api.example.org trunk build`).
//! Everything else is a compile-time constant.

/// Backend base URL used when `TEXT_EXTRACTOR_API_URL` is not set.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Path of the upload endpoint, relative to the base URL.
pub const UPLOAD_PATH: &str = "/api/upload";

/// Multipart field name repeated once per uploaded file.
pub const UPLOAD_FIELD: &str = "files";

/// How long the "Copied!" feedback stays visible (in milliseconds).
pub const COPY_FEEDBACK_MS: u32 = 2_000;

/// Plain-text error bodies longer than this are replaced by a generic message.
pub const MAX_INLINE_ERROR_CHARS: usize = 300;

/// Scroll offset (in pixels) after which the "scroll to top" panel shows up.
pub const SCROLL_PANEL_THRESHOLD_PX: f64 = 300.0;

/// Backend base URL.
pub fn api_url() -> &'static str {
    option_env!("TEXT_EXTRACTOR_API_URL").unwrap_or(DEFAULT_API_URL)
}

/// Full upload endpoint for a base URL.
pub fn upload_endpoint(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), UPLOAD_PATH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_endpoint() {
        assert_eq!(upload_endpoint("http://localhost:8000"), "http://localhost:8000/api/upload");
        assert_eq!(upload_endpoint("https://api.example.org/"), "https://api.example.org/api/upload");
    }

    #[test]
    fn test_api_url_not_empty() {
        assert!(!api_url().is_empty());
    }
}
