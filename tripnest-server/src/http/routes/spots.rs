//! Tourist spot CRUD endpoints
//!
//! Each handler makes exactly one store call. Zero matched/modified/deleted
//! counts become 404s here, not in the store.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::http::error::ApiError;
use crate::http::extractors::{SpotBody, SpotIdPath, SpotRejection};
use crate::http::server::AppState;
use crate::models::{DeleteAck, InsertAck, TouristSpot, UpdateAck};

const NOT_FOUND: &str = "Tourist spot not found";
const NOT_FOUND_OR_UNCHANGED: &str = "Tourist spot not found or no changes made";

const FETCH_ONE_FAILED: &str = "Error fetching tourist spot";
const ADD_FAILED: &str = "Error adding tourist spot";
const UPDATE_FAILED: &str = "Error updating tourist spot";
const DELETE_FAILED: &str = "Error deleting tourist spot";

/// GET /tourist-spot - list every spot
async fn list_spots(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<TouristSpot>>, ApiError> {
    let spots = state
        .store
        .find_all()
        .await
        .map_err(|e| ApiError::internal("Error fetching tourist spots", e))?;

    Ok(Json(spots))
}

/// GET /tourist-spot/{id} - get a single spot
async fn get_spot(
    State(state): State<Arc<AppState>>,
    id: Result<SpotIdPath, SpotRejection>,
) -> Result<Json<TouristSpot>, ApiError> {
    let SpotIdPath(id) = id.map_err(|e| e.into_api_error(FETCH_ONE_FAILED))?;

    state
        .store
        .find_by_id(id)
        .await
        .map_err(|e| ApiError::internal(FETCH_ONE_FAILED, e))?
        .map(Json)
        .ok_or(ApiError::NotFound { message: NOT_FOUND })
}

/// POST /tourist-spot - create a spot from an arbitrary object
async fn create_spot(
    State(state): State<Arc<AppState>>,
    body: Result<SpotBody, SpotRejection>,
) -> Result<(StatusCode, Json<InsertAck>), ApiError> {
    let SpotBody(doc) = body.map_err(|e| e.into_api_error(ADD_FAILED))?;

    let ack = state
        .store
        .insert(doc)
        .await
        .map_err(|e| ApiError::internal(ADD_FAILED, e))?;

    tracing::info!(id = %ack.inserted_id, "tourist spot created");
    Ok((StatusCode::CREATED, Json(ack)))
}

/// PUT /tourist-spot/{id} - partial merge of the body into the spot
async fn update_spot(
    State(state): State<Arc<AppState>>,
    id: Result<SpotIdPath, SpotRejection>,
    body: Result<SpotBody, SpotRejection>,
) -> Result<Json<UpdateAck>, ApiError> {
    let SpotIdPath(id) = id.map_err(|e| e.into_api_error(UPDATE_FAILED))?;
    let SpotBody(patch) = body.map_err(|e| e.into_api_error(UPDATE_FAILED))?;

    let ack = state
        .store
        .update(id, patch)
        .await
        .map_err(|e| ApiError::internal(UPDATE_FAILED, e))?;

    // A no-op update is indistinguishable from a missing id
    if ack.modified_count == 0 {
        return Err(ApiError::NotFound {
            message: NOT_FOUND_OR_UNCHANGED,
        });
    }

    Ok(Json(ack))
}

/// DELETE /tourist-spot/{id} - remove a spot
async fn delete_spot(
    State(state): State<Arc<AppState>>,
    id: Result<SpotIdPath, SpotRejection>,
) -> Result<Json<DeleteAck>, ApiError> {
    let SpotIdPath(id) = id.map_err(|e| e.into_api_error(DELETE_FAILED))?;

    let ack = state
        .store
        .delete(id)
        .await
        .map_err(|e| ApiError::internal(DELETE_FAILED, e))?;

    if ack.deleted_count == 0 {
        return Err(ApiError::NotFound { message: NOT_FOUND });
    }

    tracing::info!(%id, "tourist spot deleted");
    Ok(Json(ack))
}

/// Tourist spot routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/tourist-spot", get(list_spots).post(create_spot))
        .route(
            "/tourist-spot/{id}",
            get(get_spot).put(update_spot).delete(delete_spot),
        )
}
