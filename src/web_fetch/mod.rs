//! Web page fetching with content-type-aware formatting
//!
//! Issues a single HTTP GET with a per-call client, then renders the body
//! according to its declared content type: JSON is pretty-printed, HTML
//! goes through the text extractor, anything else is passed through raw.
//!
//! The internal pipeline is a normal `Result` flow; [`fetch_url`] is the
//! one place where every failure is normalized into a user-visible string.
//! The calling agent only understands text, so no error crosses this
//! boundary as a fault.

mod errors;
pub mod types;

pub use errors::FetchError;
pub use types::{DEFAULT_TIMEOUT_SECS, FetchRequest, MAX_BODY_BYTES};

use reqwest::header::CONTENT_TYPE;
use tracing::{debug, warn};

use crate::page_extractor::extract_text;
use types::DESKTOP_USER_AGENT;

/// Fetch a URL and return its content as readable text.
///
/// Never fails from the caller's perspective: every error condition is
/// captured in the returned string.
pub async fn fetch_url(request: &FetchRequest) -> String {
    debug!("fetching {} (timeout {:?})", request.url, request.timeout);

    match execute(request).await {
        Ok(text) => format!("Content from {}:\n\n{text}", request.url),
        Err(err) => {
            warn!("fetch of {} failed: {err}", request.url);
            render_failure(&err, &request.url)
        }
    }
}

/// Run the request and render the body; errors stay structured here
async fn execute(request: &FetchRequest) -> Result<String, FetchError> {
    // One client per call, dropped on every exit path. Redirect
    // following is reqwest's default policy (10 hops).
    let client = reqwest::Client::builder()
        .user_agent(DESKTOP_USER_AGENT)
        .timeout(request.timeout)
        .build()
        .map_err(FetchError::from_transport)?;

    let mut response = client
        .get(&request.url)
        .send()
        .await
        .map_err(FetchError::from_transport)?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()));
    }

    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("")
        .to_string();

    // Stream the body so the size cap applies before the whole payload
    // is buffered.
    let mut body = Vec::new();
    while let Some(chunk) = response.chunk().await.map_err(FetchError::from_transport)? {
        body.extend_from_slice(&chunk);
        if body.len() > MAX_BODY_BYTES {
            return Err(FetchError::BodyTooLarge {
                limit: MAX_BODY_BYTES,
            });
        }
    }

    let body = String::from_utf8_lossy(&body);
    Ok(render_body(&content_type, &body))
}

/// Render a response body according to its declared content type.
///
/// Matching is a case-insensitive substring check. A JSON body that fails
/// to parse silently degrades to the raw text; that fallback is not an
/// error condition.
pub fn render_body(content_type: &str, body: &str) -> String {
    let content_type = content_type.to_ascii_lowercase();

    if content_type.contains("application/json") {
        match serde_json::from_str::<serde_json::Value>(body) {
            Ok(value) => {
                serde_json::to_string_pretty(&value).unwrap_or_else(|_| body.to_string())
            }
            Err(_) => body.to_string(),
        }
    } else if content_type.contains("text/html") {
        extract_text(body)
    } else {
        body.to_string()
    }
}

/// The single result-to-string normalization step at the tool boundary
fn render_failure(err: &FetchError, url: &str) -> String {
    match err {
        FetchError::Timeout => format!("Timeout fetching URL: {url}"),
        FetchError::Status(code) => format!("HTTP error {code} for URL: {url}"),
        FetchError::BodyTooLarge { limit } => {
            format!("Fetch error: response body exceeded {limit} bytes for URL: {url}")
        }
        FetchError::Network(err) => format!("Fetch error: {err}"),
    }
}
