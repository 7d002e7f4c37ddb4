//! REST API helpers for the academy administration endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every operation returns `Result<_, ApiError>` so callers can surface a
//! localized notice, preferring the server's own `message` when the response
//! body carries one. Nothing here retries.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{Academy, RawFile, ScoreboardPage, ScoreboardPayload};

/// Fixed page size for scoreboard listings.
pub const PER_PAGE: u64 = 10;

/// Error produced by the REST helpers.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never reached the server or the connection dropped.
    #[error("request failed: {0}")]
    Transport(String),
    /// The server answered with a non-2xx status.
    #[error("server returned status {status}")]
    Status {
        status: u16,
        /// Server-supplied `message` field, when the body carried one.
        message: Option<String>,
    },
    /// The response body could not be decoded.
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Server-supplied error message, when the response carried one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { message, .. } => message.as_deref(),
            ApiError::Transport(_) | ApiError::Decode(_) => None,
        }
    }

    /// Server message when present, otherwise the given fallback text.
    pub fn message_or(&self, fallback: &str) -> String {
        self.server_message().map_or_else(|| fallback.to_owned(), str::to_owned)
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn scoreboard_index_endpoint(academy_id: &str, search: &str, page: u64) -> String {
    format!(
        "/api/scoreboard?academyId={}&currentPage={page}&search={}&perPage={PER_PAGE}",
        urlencoding::encode(academy_id),
        urlencoding::encode(search),
    )
}

#[cfg(any(test, feature = "hydrate"))]
fn scoreboard_entry_endpoint(scoreboard_id: &str) -> String {
    format!("/api/scoreboard/{scoreboard_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn academy_endpoint(academy_id: &str) -> String {
    format!("/api/academy/{academy_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn create_scoreboard_body(academy_id: &str, payload: &ScoreboardPayload) -> serde_json::Value {
    serde_json::json!({
        "description": payload.description,
        "serialNumber": payload.serial_number,
        "staticToken": payload.static_token,
        "academyId": academy_id,
    })
}

#[cfg(any(test, feature = "hydrate"))]
fn update_scoreboard_body(payload: &ScoreboardPayload) -> serde_json::Value {
    serde_json::json!({
        "description": payload.description,
        "serialNumber": payload.serial_number,
        "staticToken": payload.static_token,
    })
}

#[cfg(any(test, feature = "hydrate"))]
fn extract_server_message(body: &str) -> Option<String> {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        message: Option<String>,
    }
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|body| body.message)
        .filter(|message| !message.is_empty())
}

#[cfg(feature = "hydrate")]
async fn status_error(resp: gloo_net::http::Response) -> ApiError {
    let status = resp.status();
    let message = match resp.text().await {
        Ok(body) => extract_server_message(&body),
        Err(_) => None,
    };
    ApiError::Status { status, message }
}

/// Fetch one page of an academy's scoreboards via `GET /api/scoreboard`.
///
/// # Errors
///
/// Returns an error if the request fails, the server responds with a non-2xx
/// status, or the body cannot be decoded.
pub async fn list_scoreboards(academy_id: &str, search: &str, page: u64) -> Result<ScoreboardPage, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = scoreboard_index_endpoint(academy_id, search, page);
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(status_error(resp).await);
        }
        resp.json::<ScoreboardPage>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (academy_id, search, page);
        Err(ApiError::Transport("not available on server".to_owned()))
    }
}

/// Register a new scoreboard via `POST /api/scoreboard/`.
///
/// The academy id is merged into the body alongside the editable fields.
///
/// # Errors
///
/// Returns an error if the request fails or the server responds with a
/// non-2xx status.
pub async fn create_scoreboard(academy_id: &str, payload: &ScoreboardPayload) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = create_scoreboard_body(academy_id, payload);
        let resp = gloo_net::http::Request::post("/api/scoreboard/")
            .json(&body)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(status_error(resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (academy_id, payload);
        Err(ApiError::Transport("not available on server".to_owned()))
    }
}

/// Update an existing scoreboard via `PUT /api/scoreboard/{id}`.
///
/// # Errors
///
/// Returns an error if the request fails or the server responds with a
/// non-2xx status.
pub async fn update_scoreboard(scoreboard_id: &str, payload: &ScoreboardPayload) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = scoreboard_entry_endpoint(scoreboard_id);
        let resp = gloo_net::http::Request::put(&url)
            .json(&update_scoreboard_body(payload))
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(status_error(resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (scoreboard_id, payload);
        Err(ApiError::Transport("not available on server".to_owned()))
    }
}

/// Soft-disable a scoreboard via `DELETE /api/scoreboard/{id}`.
///
/// The server deactivates the record; the client treats it as gone from the
/// next refreshed page.
///
/// # Errors
///
/// Returns an error if the request fails or the server responds with a
/// non-2xx status.
pub async fn disable_scoreboard(scoreboard_id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = scoreboard_entry_endpoint(scoreboard_id);
        let resp = gloo_net::http::Request::delete(&url)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(status_error(resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = scoreboard_id;
        Err(ApiError::Transport("not available on server".to_owned()))
    }
}

/// Fetch an academy profile via `GET /api/academy/{id}`.
///
/// # Errors
///
/// Returns an error if the request fails, the server responds with a non-2xx
/// status, or the body cannot be decoded.
pub async fn fetch_academy(academy_id: &str) -> Result<Academy, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = academy_endpoint(academy_id);
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(status_error(resp).await);
        }
        resp.json::<Academy>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = academy_id;
        Err(ApiError::Transport("not available on server".to_owned()))
    }
}

/// Update an academy profile via `PUT /api/academy/{id}`.
///
/// Sends multipart form data with the `name` field and, when a new logo was
/// chosen, the `logo` file under its original filename.
///
/// # Errors
///
/// Returns an error if the form cannot be built, the request fails, or the
/// server responds with a non-2xx status.
pub async fn update_academy(academy_id: &str, name: &str, logo: Option<&RawFile>) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let form =
            web_sys::FormData::new().map_err(|_| ApiError::Transport("form construction failed".to_owned()))?;
        form.append_with_str("name", name)
            .map_err(|_| ApiError::Transport("form construction failed".to_owned()))?;
        if let Some(file) = logo {
            form.append_with_blob_and_filename("logo", file, &file.name())
                .map_err(|_| ApiError::Transport("form construction failed".to_owned()))?;
        }
        let url = academy_endpoint(academy_id);
        let resp = gloo_net::http::Request::put(&url)
            .body(form)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(status_error(resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (academy_id, name, logo);
        Err(ApiError::Transport("not available on server".to_owned()))
    }
}
