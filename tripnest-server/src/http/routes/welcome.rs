//! Root endpoint

use axum::{routing::get, Router};

/// Plain-text greeting served at `/`
pub const WELCOME_TEXT: &str = "Welcome to the REST API!";

/// GET /
async fn welcome() -> &'static str {
    WELCOME_TEXT
}

/// Welcome routes
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/", get(welcome))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn welcome_text() {
        assert_eq!(welcome().await, "Welcome to the REST API!");
    }
}
