//! Axum server setup
//!
//! Server skeleton with:
//! - Permissive CORS (browser clients call the API cross-origin)
//! - Tracing middleware
//! - Graceful shutdown on SIGTERM/Ctrl+C

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::routes;
use crate::config::ServerConfig;
use crate::store::SpotStore;

/// Shared application state
pub struct AppState {
    pub store: Arc<dyn SpotStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn SpotStore>) -> Self {
        Self { store }
    }
}

/// Build the application router with all routes
pub fn build_router(store: Arc<dyn SpotStore>) -> Router {
    let middleware = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    Router::new()
        .merge(routes::welcome::router())
        .merge(routes::health::router())
        .merge(routes::spots::router())
        .merge(routes::my_list::router())
        .layer(middleware)
        .with_state(Arc::new(AppState::new(store)))
}

/// Run the HTTP server until a shutdown signal arrives.
///
/// The store handle is owned by the caller, which releases it after this
/// returns.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool(&store_config).await?;
/// let store = Arc::new(PgSpotStore::new(pool.clone()));
/// run_server(store, ServerConfig::default()).await?;
/// pool.close().await;
/// ```
pub async fn run_server(store: Arc<dyn SpotStore>, config: ServerConfig) -> Result<(), ServerError> {
    let app = build_router(store);

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Server running on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting shutdown");
        }
    }
}

/// Server error type
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use axum::response::Response;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::models::{DeleteAck, Document, InsertAck, OwnerEmail, SpotId, TouristSpot, UpdateAck};
    use crate::store::{MemorySpotStore, StoreError, StoreResult};

    /// Store whose every call fails, as if the database were unreachable
    struct UnreachableStore;

    fn pool_timeout() -> StoreError {
        StoreError::Sqlx(sqlx::Error::PoolTimedOut)
    }

    #[async_trait]
    impl SpotStore for UnreachableStore {
        async fn ping(&self) -> StoreResult<()> {
            Err(pool_timeout())
        }
        async fn find_all(&self) -> StoreResult<Vec<TouristSpot>> {
            Err(pool_timeout())
        }
        async fn find_by_id(&self, _: SpotId) -> StoreResult<Option<TouristSpot>> {
            Err(pool_timeout())
        }
        async fn find_by_email(&self, _: &OwnerEmail) -> StoreResult<Vec<TouristSpot>> {
            Err(pool_timeout())
        }
        async fn insert(&self, _: Document) -> StoreResult<InsertAck> {
            Err(pool_timeout())
        }
        async fn update(&self, _: SpotId, _: Document) -> StoreResult<UpdateAck> {
            Err(pool_timeout())
        }
        async fn delete(&self, _: SpotId) -> StoreResult<DeleteAck> {
            Err(pool_timeout())
        }
    }

    fn memory_app() -> Router {
        build_router(Arc::new(MemorySpotStore::new()))
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn with_json(method: &str, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn delete(uri: &str) -> Request<Body> {
        Request::builder()
            .method("DELETE")
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn create(app: &Router, body: Value) -> String {
        let response = app
            .clone()
            .oneshot(with_json("POST", "/tourist-spot", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let ack = body_json(response).await;
        ack["insertedId"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn welcome_is_plain_text() {
        let response = memory_app().oneshot(get("/")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"Welcome to the REST API!");
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let response = memory_app().oneshot(get("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["store"], json!("reachable"));

        let app = build_router(Arc::new(UnreachableStore));
        let response = app.oneshot(get("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body_json(response).await["store"], json!("unreachable"));
    }

    #[tokio::test]
    async fn spot_lifecycle() {
        let app = memory_app();
        let id = create(&app, json!({ "name": "Beach", "email": "a@x.com" })).await;

        let response = app
            .clone()
            .oneshot(get(&format!("/tourist-spot/{id}")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({ "_id": id, "name": "Beach", "email": "a@x.com" })
        );

        let response = app
            .clone()
            .oneshot(with_json("PUT", &format!("/tourist-spot/{id}"), json!({ "name": "Bay" })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let ack = body_json(response).await;
        assert_eq!(ack["matchedCount"], json!(1));
        assert_eq!(ack["modifiedCount"], json!(1));

        let response = app.clone().oneshot(get("/my-list/a@x.com")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!([{ "_id": id, "name": "Bay", "email": "a@x.com" }])
        );

        let response = app
            .clone()
            .oneshot(delete(&format!("/tourist-spot/{id}")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["deletedCount"], json!(1));

        let response = app
            .clone()
            .oneshot(get(&format!("/tourist-spot/{id}")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await,
            json!({ "message": "Tourist spot not found" })
        );

        let response = app
            .clone()
            .oneshot(delete(&format!("/tourist-spot/{id}")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn list_returns_all_spots() {
        let app = memory_app();
        let response = app.clone().oneshot(get("/tourist-spot")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!([]));

        create(&app, json!({ "name": "A" })).await;
        create(&app, json!({ "name": "B" })).await;

        let response = app.oneshot(get("/tourist-spot")).await.unwrap();
        let spots = body_json(response).await;
        assert_eq!(spots.as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn update_unknown_or_unchanged_is_404() {
        let app = memory_app();
        let missing = SpotId::new();

        let response = app
            .clone()
            .oneshot(with_json("PUT", &format!("/tourist-spot/{missing}"), json!({ "name": "X" })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await,
            json!({ "message": "Tourist spot not found or no changes made" })
        );

        let id = create(&app, json!({ "name": "Same" })).await;
        let response = app
            .oneshot(with_json("PUT", &format!("/tourist-spot/{id}"), json!({ "name": "Same" })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn update_cannot_change_id() {
        let app = memory_app();
        let id = create(&app, json!({ "name": "Beach" })).await;
        let other = SpotId::new().to_string();

        let response = app
            .clone()
            .oneshot(with_json(
                "PUT",
                &format!("/tourist-spot/{id}"),
                json!({ "_id": other, "name": "Bay" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .oneshot(get(&format!("/tourist-spot/{id}")))
            .await
            .unwrap();
        assert_eq!(body_json(response).await["_id"], json!(id));
    }

    #[tokio::test]
    async fn malformed_id_uses_route_message() {
        let app = memory_app();
        let cases = [
            (get("/tourist-spot/not-a-uuid"), "Error fetching tourist spot"),
            (delete("/tourist-spot/not-a-uuid"), "Error deleting tourist spot"),
            (
                with_json("PUT", "/tourist-spot/not-a-uuid", json!({ "name": "X" })),
                "Error updating tourist spot",
            ),
        ];

        for (request, message) in cases {
            let response = app.clone().oneshot(request).await.unwrap();
            assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(body_json(response).await, json!({ "error": message }));
        }
    }

    #[tokio::test]
    async fn padded_id_is_malformed() {
        let app = memory_app();
        let id = create(&app, json!({ "name": "Beach" })).await;

        let response = app
            .oneshot(get(&format!("/tourist-spot/%20{id}")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "Error fetching tourist spot" })
        );
    }

    #[tokio::test]
    async fn malformed_body_uses_route_message() {
        let app = memory_app();
        let array_body = |method: &str, uri: &str| {
            Request::builder()
                .method(method)
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from("[1, 2, 3]"))
                .unwrap()
        };

        let response = app
            .clone()
            .oneshot(array_body("POST", "/tourist-spot"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "Error adding tourist spot" })
        );

        let id = create(&app, json!({ "name": "Beach" })).await;
        let response = app
            .clone()
            .oneshot(array_body("PUT", &format!("/tourist-spot/{id}")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "Error updating tourist spot" })
        );

        let response = app.oneshot(get("/tourist-spot")).await.unwrap();
        let spots = body_json(response).await;
        assert_eq!(spots, json!([{ "_id": id, "name": "Beach" }]));
    }

    #[tokio::test]
    async fn my_list_trims_and_matches_exactly() {
        let app = memory_app();
        create(&app, json!({ "name": "Mine", "email": "a@x.com" })).await;
        create(&app, json!({ "name": "Shouty", "email": "A@X.COM" })).await;
        create(&app, json!({ "name": "Theirs", "email": "b@x.com" })).await;

        let response = app
            .clone()
            .oneshot(get("/my-list/%20a@x.com%20"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let spots = body_json(response).await;
        let spots = spots.as_array().unwrap();
        assert_eq!(spots.len(), 1);
        assert_eq!(spots[0]["name"], json!("Mine"));

        let response = app.oneshot(get("/my-list/nobody@x.com")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await,
            json!({ "message": "No tourist spots found for this email" })
        );
    }

    #[tokio::test]
    async fn blank_email_never_reaches_store() {
        // Any store call would turn into a 500
        let app = build_router(Arc::new(UnreachableStore));

        for uri in ["/my-list/%20%20", "/my-list/", "/my-list"] {
            let response = app.clone().oneshot(get(uri)).await.unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");
            assert_eq!(
                body_json(response).await,
                json!({ "message": "Email parameter is required" })
            );
        }
    }

    #[tokio::test]
    async fn store_failures_are_500() {
        let app = build_router(Arc::new(UnreachableStore));
        let id = SpotId::new();

        let cases = [
            (get("/tourist-spot"), "Error fetching tourist spots"),
            (get(&format!("/tourist-spot/{id}")), "Error fetching tourist spot"),
            (
                with_json("POST", "/tourist-spot", json!({ "name": "A" })),
                "Error adding tourist spot",
            ),
            (
                with_json("PUT", &format!("/tourist-spot/{id}"), json!({ "name": "A" })),
                "Error updating tourist spot",
            ),
            (delete(&format!("/tourist-spot/{id}")), "Error deleting tourist spot"),
            (get("/my-list/a@x.com"), "Error fetching user list"),
        ];

        for (request, message) in cases {
            let response = app.clone().oneshot(request).await.unwrap();
            assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(body_json(response).await, json!({ "error": message }));
        }
    }
}
