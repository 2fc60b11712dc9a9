//! API routes module

pub mod health;
pub mod users;

use axum::Router;
use axum_helpers::server::{create_router, health_router};

use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Prefix every API route is nested under
pub const API_PREFIX: &str = "/api/v1";

/// Routes nested under [`API_PREFIX`]
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .nest("/users", users::router(state))
        .merge(health::router(state.clone()))
}

/// The full application: API routes, OpenAPI document and `/health`
pub fn app(state: &AppState) -> Router {
    create_router::<ApiDoc>(API_PREFIX, routes(state))
        .merge(health_router(state.config.app))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use crate::config::Config;
    use axum::{body::Body, http::Request, http::StatusCode};
    use http_body_util::BodyExt;
    use serde_json::Value;
    use tower::ServiceExt;

    // Nothing listens on port 1, so every ping fails fast.
    const UNREACHABLE_URL: &str = "mongodb://127.0.0.1:1/?serverSelectionTimeoutMS=200";

    async fn unreachable_state() -> AppState {
        let cli = Cli {
            port: 5000,
            db: "hotel_test".to_string(),
            host: "127.0.0.1".to_string(),
        };
        let config = temp_env::with_vars_unset(["MONGODB_URL", "MONGO_URL"], || {
            Config::load(cli).unwrap()
        });

        let mongo_client = mongodb::Client::with_uri_str(UNREACHABLE_URL).await.unwrap();
        let db = mongo_client.database(config.mongodb.database());

        AppState {
            config,
            mongo_client,
            db,
        }
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_reports_binary() {
        let app = app(&unreachable_state().await);

        let response = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["name"], "hotel_api");
    }

    #[tokio::test]
    async fn test_ready_is_503_without_mongodb() {
        let app = app(&unreachable_state().await);

        let response = app
            .oneshot(Request::get("/api/v1/ready").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let body = json_body(response).await;
        let error = body["error"].as_str().unwrap();
        assert!(error.starts_with("mongodb unreachable"));
        assert!(body.get("mongodb").is_none());
    }

    #[tokio::test]
    async fn test_openapi_lists_user_routes() {
        let app = app(&unreachable_state().await);

        let response = app
            .oneshot(
                Request::get("/api-docs/openapi.json")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let doc = json_body(response).await;
        let paths = doc["paths"].as_object().unwrap();
        assert!(paths.contains_key("/api/v1/users"));
        assert!(paths.contains_key("/api/v1/users/{id}"));
    }

    #[tokio::test]
    async fn test_unknown_route_is_json_404() {
        let app = app(&unreachable_state().await);

        let response = app
            .oneshot(Request::get("/api/v2/users").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(json_body(response).await["error"], "not found");
    }
}
