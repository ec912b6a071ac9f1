//! Multipart upload of the selected files to the extraction backend.

use gloo_net::http::Request;
use wasm_bindgen::JsValue;
use web_sys::{File, FormData};

use crate::config::UPLOAD_FIELD;
use crate::services::normalizer::normalize;
use crate::state::StateStore;
use crate::types::{ReplyBody, ServerReply, TransportError};

/// Sends a batch of files to the upload endpoint.
///
/// Any HTTP reply, including 4xx/5xx, is `Ok`; `Err` means no reply at all.
#[allow(async_fn_in_trait)]
pub trait UploadTransport {
    type File;

    async fn post_files(&self, url: &str, files: Vec<Self::File>) -> Result<ServerReply, TransportError>;
}

/// Browser transport: `FormData` + `fetch` through gloo-net.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

impl UploadTransport for BrowserTransport {
    type File = File;

    async fn post_files(&self, url: &str, files: Vec<File>) -> Result<ServerReply, TransportError> {
        let form_data = FormData::new()
            .map_err(|e| TransportError::Setup(format!("Failed to create FormData: {}", js_error_text(&e))))?;

        for file in &files {
            form_data
                .append_with_blob_and_filename(UPLOAD_FIELD, file, &file.name())
                .map_err(|e| TransportError::Setup(format!("Failed to append file: {}", js_error_text(&e))))?;
        }

        // No explicit Content-Type: the browser adds the multipart boundary.
        let request = Request::post(url)
            .body(form_data)
            .map_err(|e| TransportError::Setup(format!("Failed to build request: {}", e)))?;

        let response = request
            .send()
            .await
            .map_err(|e| TransportError::NoResponse(e.to_string()))?;

        let status = response.status();
        let status_text = response.status_text();
        let body = match response.text().await {
            Ok(text) => ReplyBody::parse(text),
            Err(e) => {
                log::warn!("Failed to read response body: {}", e);
                ReplyBody::Empty
            }
        };

        Ok(ServerReply { status, status_text, body })
    }
}

/// Upload `files` and store the normalized outcome.
///
/// An empty batch does nothing. Only the most recently dispatched upload may
/// write its outcome; earlier ones resolving late are dropped.
pub async fn dispatch_upload<T, S>(transport: &T, store: &S, url: &str, files: Vec<T::File>)
where
    T: UploadTransport,
    S: StateStore,
{
    if files.is_empty() {
        return;
    }

    let Some(request) = store.modify(|s| s.begin_upload()) else {
        return;
    };

    let submitted = files.len();
    log::info!("📤 Uploading {} file(s) to {}", submitted, url);

    let outcome = transport.post_files(url, files).await;
    if let Err(e) = &outcome {
        log::error!("Upload failed: {}", e);
    }

    let normalized = normalize(&outcome, submitted);
    log::info!(
        "📥 Upload finished: {} result(s), error: {:?}",
        normalized.results.len(),
        normalized.error_message
    );

    if store.modify(|s| s.finish_upload(request, normalized)) != Some(true) {
        log::warn!("Discarding response of a superseded upload");
    }
}

/// Best-effort text of a thrown JS value.
pub(crate) fn js_error_text(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
