//! Turns the raw outcome of an upload into what the UI shows.
//!
//! The backend reports per-file failures inside an otherwise successful reply
//! by putting a fixed sentinel message in place of the file content. Request
//! level failures (HTTP errors, network problems) become a single message.

use serde_json::Value;

use crate::config::MAX_INLINE_ERROR_CHARS;
use crate::types::{FileEntry, ReplyBody, ServerReply, TransportError, UploadResponse, UploadResult};

/// Sentinel content for files the backend refused because of their size.
pub const TOO_LARGE_SENTINEL: &str = "File is too large to process.";

/// Sentinel prefix for files that are not valid UTF-8 text.
pub const INVALID_UTF8_SENTINEL: &str = "File is not a valid UTF-8 encoded text file.";

pub const ALL_FILES_FAILED: &str = "None of the submitted files could be processed as text \
    (encoding, size, etc.). See the details for each file.";
pub const EMPTY_FILE_LIST: &str = "The server returned an empty file list. \
    An unknown error may have occurred while processing on the server.";
pub const UNEXPECTED_SHAPE: &str = "Received an unexpected response format from the server.";
pub const PAYLOAD_TOO_LARGE: &str = "One or more files are too large. The server limits the \
    total size of uploaded data. Please try smaller files or fewer files at a time.";
pub const CONNECTION_FAILED: &str = "Cannot connect to the server. Check your network connection \
    or make sure the server is running. This may also be a CORS problem on the server side.";
pub const UNEXPECTED_ERROR: &str =
    "An unexpected error occurred while uploading files. Please try again.";

const VALIDATION_PREFIX: &str = "Validation error: ";

/// What one upload leaves behind in the UI.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NormalizedUpload {
    pub results: Vec<UploadResult>,
    pub error_message: Option<String>,
}

impl NormalizedUpload {
    fn failure(message: impl Into<String>) -> Self {
        Self {
            results: Vec::new(),
            error_message: Some(message.into()),
        }
    }
}

/// True when `content` is one of the backend's per-file error sentinels.
pub fn is_sentinel(content: &str) -> bool {
    content == TOO_LARGE_SENTINEL || content.starts_with(INVALID_UTF8_SENTINEL)
}

/// Classify one backend entry.
pub fn classify_file(entry: FileEntry) -> UploadResult {
    let is_error_file = is_sentinel(&entry.content);
    UploadResult {
        filename: entry.filename,
        content: entry.content,
        is_error_file,
    }
}

/// Normalize the outcome of a request that carried `submitted` files.
pub fn normalize(outcome: &Result<ServerReply, TransportError>, submitted: usize) -> NormalizedUpload {
    match outcome {
        Ok(reply) if reply.is_success() => normalize_success(reply, submitted),
        Ok(reply) => NormalizedUpload::failure(describe_http_error(reply)),
        Err(TransportError::NoResponse(_)) => NormalizedUpload::failure(CONNECTION_FAILED),
        Err(TransportError::Setup(message)) if !message.is_empty() => {
            NormalizedUpload::failure(format!("Application error: {}", message))
        }
        Err(TransportError::Setup(_)) => NormalizedUpload::failure(UNEXPECTED_ERROR),
    }
}

fn normalize_success(reply: &ServerReply, submitted: usize) -> NormalizedUpload {
    let Some(response) = parse_upload_response(&reply.body) else {
        log::error!("Unexpected response format from server: {:?}", reply.body);
        return NormalizedUpload::failure(UNEXPECTED_SHAPE);
    };

    let results: Vec<UploadResult> = response.files.into_iter().map(classify_file).collect();

    let error_message = if !results.is_empty() && results.iter().all(|r| r.is_error_file) {
        Some(ALL_FILES_FAILED.to_string())
    } else if results.is_empty() && submitted > 0 {
        Some(EMPTY_FILE_LIST.to_string())
    } else {
        None
    };

    NormalizedUpload { results, error_message }
}

/// `{ "files": [ {filename, content}, ... ] }`, or `None` for anything else.
fn parse_upload_response(body: &ReplyBody) -> Option<UploadResponse> {
    let value = body.as_json()?;
    serde_json::from_value(value.clone()).ok()
}

/// Human-readable message for a non-2xx reply.
pub fn describe_http_error(reply: &ServerReply) -> String {
    if reply.status == 413 {
        return PAYLOAD_TOO_LARGE.to_string();
    }

    if body_is_blank(reply) {
        return server_error(reply, "An unknown error occurred on the server.");
    }

    let detail = reply.body.as_json().and_then(|body| body.get("detail"));

    if let Some(detail) = detail.and_then(Value::as_str) {
        return detail.to_string();
    }

    if let Some(message) = detail.and_then(Value::as_array).and_then(|items| validation_message(items)) {
        return message;
    }

    if let Some(text) = reply.body.as_str() {
        if looks_like_html(text) || text.chars().count() > MAX_INLINE_ERROR_CHARS {
            return server_error(reply, "An error occurred on the server.");
        }
        return text.to_string();
    }

    server_error(reply, "The request could not be processed due to a server problem.")
}

/// `"Validation error: loc: msg; loc: msg"` for validation-error arrays.
fn validation_message(items: &[Value]) -> Option<String> {
    let first_msg = items.first()?.get("msg")?.as_str()?;
    if first_msg.is_empty() {
        return None;
    }

    let parts: Vec<String> = items
        .iter()
        .map(|item| {
            let msg = item.get("msg").and_then(Value::as_str).unwrap_or_default();
            let path = item
                .get("loc")
                .and_then(Value::as_array)
                .map(|loc| {
                    loc.iter()
                        .filter(|segment| !segment.is_null() && segment.as_str() != Some("body"))
                        .map(segment_text)
                        .collect::<Vec<_>>()
                        .join(" -> ")
                })
                .unwrap_or_default();

            if path.is_empty() {
                msg.to_string()
            } else {
                format!("{}: {}", path, msg)
            }
        })
        .collect();

    Some(format!("{}{}", VALIDATION_PREFIX, parts.join("; ")))
}

fn segment_text(segment: &Value) -> String {
    match segment {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn body_is_blank(reply: &ServerReply) -> bool {
    match &reply.body {
        ReplyBody::Empty => true,
        ReplyBody::Json(Value::Null) => true,
        body => body.as_str().is_some_and(str::is_empty),
    }
}

fn looks_like_html(text: &str) -> bool {
    let head = text.trim_start().to_lowercase();
    head.starts_with("<html") || head.starts_with("<!doctype html")
}

fn server_error(reply: &ServerReply, fallback: &str) -> String {
    let status_text = if reply.status_text.is_empty() {
        fallback
    } else {
        reply.status_text.as_str()
    };
    format!("Server error {}: {}", reply.status, status_text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn reply(status: u16, status_text: &str, body: ReplyBody) -> Result<ServerReply, TransportError> {
        Ok(ServerReply {
            status,
            status_text: status_text.to_string(),
            body,
        })
    }

    fn ok_json(body: Value) -> Result<ServerReply, TransportError> {
        reply(200, "OK", ReplyBody::Json(body))
    }

    fn error_message(outcome: Result<ServerReply, TransportError>) -> String {
        let normalized = normalize(&outcome, 1);
        assert!(normalized.results.is_empty());
        normalized.error_message.unwrap()
    }

    #[test]
    fn test_sentinel_detection() {
        assert!(is_sentinel("File is too large to process."));
        assert!(is_sentinel(
            "File is not a valid UTF-8 encoded text file.                            Will add this functionality later."
        ));
        assert!(!is_sentinel("File is too large to process. Really."));
        assert!(!is_sentinel(""));
        assert!(!is_sentinel("fn main() {}"));
    }

    #[test]
    fn test_all_text_files() {
        let outcome = ok_json(json!({
            "files": [
                {"filename": "a.py", "content": "print(1)"},
                {"filename": "b.rs", "content": "fn main() {}"},
                {"filename": "c.md", "content": "# Title"}
            ]
        }));

        let normalized = normalize(&outcome, 3);
        assert_eq!(normalized.results.len(), 3);
        assert_eq!(normalized.error_message, None);
        assert!(normalized.results.iter().all(|r| !r.is_error_file));
        assert_eq!(normalized.results[1].filename, "b.rs");
    }

    #[test]
    fn test_empty_text_is_not_an_error() {
        let outcome = ok_json(json!({"files": [{"filename": "empty.txt", "content": ""}]}));

        let normalized = normalize(&outcome, 1);
        assert_eq!(normalized.error_message, None);
        assert!(!normalized.results[0].is_error_file);
    }

    #[test]
    fn test_mixed_files_keep_order() {
        let outcome = ok_json(json!({
            "files": [
                {"filename": "ok.txt", "content": "hello"},
                {"filename": "big.log", "content": TOO_LARGE_SENTINEL}
            ]
        }));

        let normalized = normalize(&outcome, 2);
        assert_eq!(normalized.error_message, None);
        assert!(!normalized.results[0].is_error_file);
        assert!(normalized.results[1].is_error_file);
    }

    #[test]
    fn test_all_files_errored_keeps_results() {
        let outcome = ok_json(json!({
            "files": [
                {"filename": "big.log", "content": TOO_LARGE_SENTINEL},
                {"filename": "image.png", "content": format!("{} Will add this functionality later.", INVALID_UTF8_SENTINEL)}
            ]
        }));

        let normalized = normalize(&outcome, 2);
        assert_eq!(normalized.results.len(), 2);
        assert_eq!(normalized.error_message.as_deref(), Some(ALL_FILES_FAILED));
    }

    #[test]
    fn test_empty_file_list() {
        let outcome = ok_json(json!({"files": []}));

        let normalized = normalize(&outcome, 2);
        assert!(normalized.results.is_empty());
        assert_eq!(normalized.error_message.as_deref(), Some(EMPTY_FILE_LIST));
    }

    #[test]
    fn test_malformed_success_payload() {
        assert_eq!(error_message(ok_json(json!({"result": []}))), UNEXPECTED_SHAPE);
        assert_eq!(error_message(ok_json(json!({"files": "nope"}))), UNEXPECTED_SHAPE);
        assert_eq!(error_message(ok_json(json!({"files": [{"filename": "a"}]}))), UNEXPECTED_SHAPE);
        assert_eq!(error_message(reply(200, "OK", ReplyBody::Text("done".into()))), UNEXPECTED_SHAPE);
        assert_eq!(error_message(reply(200, "OK", ReplyBody::Empty)), UNEXPECTED_SHAPE);
    }

    #[test]
    fn test_success_payload_extra_fields_ignored() {
        let outcome = ok_json(json!({
            "files": [{"filename": "a.txt", "content": "hi", "size": 2}],
            "elapsed_ms": 12
        }));

        let normalized = normalize(&outcome, 1);
        assert_eq!(normalized.error_message, None);
        assert_eq!(normalized.results[0].content, "hi");
    }

    #[test]
    fn test_success_payload_with_non_string_content_is_malformed() {
        assert_eq!(
            error_message(ok_json(json!({"files": [{"filename": "a.txt", "content": 42}]}))),
            UNEXPECTED_SHAPE
        );
        assert_eq!(
            error_message(ok_json(json!({"files": [{"filename": null, "content": "x"}]}))),
            UNEXPECTED_SHAPE
        );
    }

    #[test]
    fn test_validation_detail_skips_null_segments() {
        let outcome = reply(
            422,
            "Unprocessable Entity",
            ReplyBody::Json(json!({"detail": [{"loc": [null, "body", "x"], "msg": "required"}]})),
        );
        assert_eq!(error_message(outcome), "Validation error: x: required");
    }

    #[test]
    fn test_413_ignores_body() {
        let outcome = reply(413, "Payload Too Large", ReplyBody::Json(json!({"detail": "custom"})));
        assert_eq!(error_message(outcome), PAYLOAD_TOO_LARGE);

        let outcome = reply(413, "", ReplyBody::Text("<html>nginx</html>".into()));
        assert_eq!(error_message(outcome), PAYLOAD_TOO_LARGE);
    }

    #[test]
    fn test_string_detail() {
        let outcome = reply(
            400,
            "Bad Request",
            ReplyBody::Json(json!({"detail": "File notes.txt is not a valid text file."})),
        );
        assert_eq!(error_message(outcome), "File notes.txt is not a valid text file.");
    }

    #[test]
    fn test_validation_detail() {
        let outcome = reply(
            422,
            "Unprocessable Entity",
            ReplyBody::Json(json!({"detail": [{"loc": ["body", "x"], "msg": "required"}]})),
        );
        assert_eq!(error_message(outcome), "Validation error: x: required");
    }

    #[test]
    fn test_validation_detail_multiple_items() {
        let outcome = reply(
            422,
            "Unprocessable Entity",
            ReplyBody::Json(json!({"detail": [
                {"loc": ["body", "files", 0], "msg": "field required", "type": "missing"},
                {"loc": ["body"], "msg": "invalid multipart"},
                {"msg": "no location"}
            ]})),
        );
        assert_eq!(
            error_message(outcome),
            "Validation error: files -> 0: field required; invalid multipart; no location"
        );
    }

    #[test]
    fn test_detail_array_without_msg_is_generic() {
        let outcome = reply(422, "Unprocessable Entity", ReplyBody::Json(json!({"detail": [{"loc": ["x"]}]})));
        assert_eq!(error_message(outcome), "Server error 422: Unprocessable Entity");

        let outcome = reply(422, "Unprocessable Entity", ReplyBody::Json(json!({"detail": []})));
        assert_eq!(error_message(outcome), "Server error 422: Unprocessable Entity");
    }

    #[test]
    fn test_plain_string_body() {
        let outcome = reply(400, "Bad Request", ReplyBody::Json(json!("File a.txt is too large to process.")));
        assert_eq!(error_message(outcome), "File a.txt is too large to process.");

        let outcome = reply(502, "Bad Gateway", ReplyBody::Text("upstream unavailable".into()));
        assert_eq!(error_message(outcome), "upstream unavailable");
    }

    #[test]
    fn test_html_or_long_body_is_replaced() {
        let outcome = reply(502, "Bad Gateway", ReplyBody::Text("  <HTML><body>bad</body></HTML>".into()));
        assert_eq!(error_message(outcome), "Server error 502: Bad Gateway");

        let outcome = reply(500, "", ReplyBody::Text("<!DOCTYPE html><html></html>".into()));
        assert_eq!(error_message(outcome), "Server error 500: An error occurred on the server.");

        let outcome = reply(500, "Internal Server Error", ReplyBody::Text("x".repeat(301)));
        assert_eq!(error_message(outcome), "Server error 500: Internal Server Error");

        let outcome = reply(500, "Internal Server Error", ReplyBody::Text("x".repeat(300)));
        assert_eq!(error_message(outcome), "x".repeat(300));
    }

    #[test]
    fn test_other_shapes_are_generic() {
        let outcome = reply(500, "Internal Server Error", ReplyBody::Json(json!({"code": 500, "err": "boom"})));
        assert_eq!(error_message(outcome), "Server error 500: Internal Server Error");

        let outcome = reply(500, "", ReplyBody::Json(json!({"code": 500})));
        assert_eq!(
            error_message(outcome),
            "Server error 500: The request could not be processed due to a server problem."
        );

        let outcome = reply(503, "", ReplyBody::Empty);
        assert_eq!(error_message(outcome), "Server error 503: An unknown error occurred on the server.");
    }

    #[test]
    fn test_transport_failures() {
        assert_eq!(
            error_message(Err(TransportError::NoResponse("TypeError: Failed to fetch".into()))),
            CONNECTION_FAILED
        );
        assert_eq!(
            error_message(Err(TransportError::Setup("Failed to create FormData".into()))),
            "Application error: Failed to create FormData"
        );
        assert_eq!(error_message(Err(TransportError::Setup(String::new()))), UNEXPECTED_ERROR);
    }
}
