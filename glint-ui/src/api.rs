//! Summary data service over browser fetch.
//!
//! Two operations: regenerate a summary server-side, and persist user edits.
//! Transport framing is the backend's concern; this client only shapes JSON
//! bodies and converts fetch failures into [`ApiError`] values the UI can
//! surface.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("server returned {status} for {url}")]
    Status { status: u16, url: String },
    #[error("malformed response body: {0}")]
    Body(String),
}

/// Summary payload returned by the regenerate endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub summary: String,
}

#[derive(Serialize)]
struct UpdateBody<'a> {
    summary: &'a str,
}

/// Client for the summary endpoints of the knowledge-base backend.
#[derive(Debug, Clone)]
pub struct SummaryClient {
    base_url: String,
}

impl SummaryClient {
    /// `base_url` without a trailing slash; empty for same-origin requests.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Trigger server-side recomputation of the summary for `source_id` and
    /// return the new text.
    pub async fn regenerate(&self, source_id: &str) -> Result<Summary, ApiError> {
        let url = format!(
            "{}/api/sources/{}/summary/regenerate",
            self.base_url, source_id
        );
        let body = self.request("POST", &url, None).await?;
        serde_json::from_str(&body).map_err(|e| ApiError::Body(e.to_string()))
    }

    /// Persist user-edited summary text for `source_id`.
    pub async fn update(&self, source_id: &str, summary: &str) -> Result<(), ApiError> {
        let url = format!("{}/api/sources/{}/summary", self.base_url, source_id);
        let body =
            serde_json::to_string(&UpdateBody { summary }).map_err(|e| ApiError::Body(e.to_string()))?;
        self.request("PUT", &url, Some(body)).await?;
        Ok(())
    }

    async fn request(
        &self,
        method: &str,
        url: &str,
        body: Option<String>,
    ) -> Result<String, ApiError> {
        let opts = RequestInit::new();
        opts.set_method(method);
        if let Some(body) = &body {
            opts.set_body(&JsValue::from_str(body));
        }

        let request = Request::new_with_str_and_init(url, &opts)
            .map_err(|e| ApiError::Network(js_text(e)))?;
        if body.is_some() {
            request
                .headers()
                .set("Content-Type", "application/json")
                .map_err(|e| ApiError::Network(js_text(e)))?;
        }

        let window = web_sys::window().ok_or_else(|| ApiError::Network("no window".into()))?;
        let response = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| ApiError::Network(js_text(e)))?;
        let response: Response = response
            .dyn_into()
            .map_err(|_| ApiError::Network("fetch resolved to a non-Response".into()))?;

        if !response.ok() {
            return Err(ApiError::Status {
                status: response.status(),
                url: url.to_string(),
            });
        }

        let text = JsFuture::from(response.text().map_err(|e| ApiError::Body(js_text(e)))?)
            .await
            .map_err(|e| ApiError::Body(js_text(e)))?;
        Ok(text.as_string().unwrap_or_default())
    }
}

fn js_text(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}
