//! Owner lookup endpoint

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::{OwnerEmail, TouristSpot};

const EMAIL_REQUIRED: ApiError = ApiError::BadRequest {
    message: "Email parameter is required",
};

/// GET /my-list/{email} - spots whose `email` equals the trimmed parameter
async fn list_by_email(
    State(state): State<Arc<AppState>>,
    Path(raw): Path<String>,
) -> Result<Json<Vec<TouristSpot>>, ApiError> {
    let email = OwnerEmail::new(&raw).map_err(|_| EMAIL_REQUIRED)?;
    tracing::debug!(%email, "listing tourist spots by owner");

    let spots = state
        .store
        .find_by_email(&email)
        .await
        .map_err(|e| ApiError::internal("Error fetching user list", e))?;

    if spots.is_empty() {
        return Err(ApiError::NotFound {
            message: "No tourist spots found for this email",
        });
    }

    Ok(Json(spots))
}

/// GET /my-list - no email segment at all
async fn missing_email() -> ApiError {
    EMAIL_REQUIRED
}

/// My-list routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/my-list", get(missing_email))
        .route("/my-list/", get(missing_email))
        .route("/my-list/{email}", get(list_by_email))
}
