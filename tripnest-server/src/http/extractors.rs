//! Custom Axum extractors
//!
//! Malformed ids and bodies are server errors on these routes. Handlers
//! take `Result<SpotIdPath, SpotRejection>` (or `Result<SpotBody, _>`) and
//! map the rejection with the route's own 500 message.

use axum::extract::{FromRequest, FromRequestParts, Json, Path, Request};
use axum::http::request::Parts;
use axum::response::{IntoResponse, Response};

use super::error::ApiError;
use crate::models::{Document, SpotId};

/// Why an id or body could not be extracted
#[derive(Debug)]
pub struct SpotRejection {
    detail: String,
}

impl SpotRejection {
    fn new(cause: impl std::fmt::Display) -> Self {
        Self {
            detail: cause.to_string(),
        }
    }

    /// Internal error carrying the route's message.
    pub fn into_api_error(self, message: &'static str) -> ApiError {
        ApiError::internal(message, self.detail)
    }
}

impl std::fmt::Display for SpotRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.detail)
    }
}

impl IntoResponse for SpotRejection {
    fn into_response(self) -> Response {
        self.into_api_error("Invalid tourist spot request").into_response()
    }
}

/// Extract and parse a spot id from path
pub struct SpotIdPath(pub SpotId);

impl<S> FromRequestParts<S> for SpotIdPath
where
    S: Send + Sync,
{
    type Rejection = SpotRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(SpotRejection::new)?;

        let id = raw.parse::<SpotId>().map_err(SpotRejection::new)?;
        Ok(Self(id))
    }
}

/// Extract a JSON object body
pub struct SpotBody(pub Document);

impl<S> FromRequest<S> for SpotBody
where
    S: Send + Sync,
{
    type Rejection = SpotRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(doc) = Json::<Document>::from_request(req, state)
            .await
            .map_err(|e| SpotRejection::new(e.body_text()))?;

        Ok(Self(doc))
    }
}
