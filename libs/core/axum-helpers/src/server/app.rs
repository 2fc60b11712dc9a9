use super::shutdown::shutdown_signal;
use crate::errors::handlers::not_found;
use crate::http::security::security_headers;
use axum::{Json, Router, middleware, routing::get};
use core_config::server::ServerConfig;
use std::future::Future;
use std::io;
use std::time::Duration;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info};
use utoipa::OpenApi;

/// Path the generated OpenAPI document is served from.
pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

async fn openapi_document<T: OpenApi>() -> Json<utoipa::openapi::OpenApi> {
    Json(T::openapi())
}

/// Creates a configured Axum router with common middleware and documentation.
///
/// This function sets up:
/// - The OpenAPI document of `T` at [`OPENAPI_PATH`]
/// - API routes nested under `api_prefix` (e.g. `/api/v1`)
/// - Request tracing and security headers
/// - A JSON 404 fallback
///
/// Domain routers apply their own state before being passed in.
///
/// # Example
/// ```ignore
/// let api_routes = Router::new().nest("/users", users_router);
/// let router = create_router::<ApiDoc>("/api/v1", api_routes);
/// ```
pub fn create_router<T>(api_prefix: &str, apis: Router) -> Router
where
    T: OpenApi + 'static,
{
    Router::new()
        .route(OPENAPI_PATH, get(openapi_document::<T>))
        .nest(api_prefix, apis)
        .fallback(not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(middleware::from_fn(security_headers))
}

/// Serves `router` until SIGINT/SIGTERM, then runs `cleanup`.
///
/// In-flight requests are drained before `cleanup` starts; `cleanup` itself
/// is abandoned if it takes longer than `shutdown_timeout`.
///
/// # Errors
/// Returns an error if the listener fails to bind or the server fails while
/// serving.
pub async fn create_production_app<F>(
    router: Router,
    server_config: &ServerConfig,
    shutdown_timeout: Duration,
    cleanup: F,
) -> io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;
    info!("Server starting on {}", listener.local_addr()?);

    let serve_result = axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .inspect_err(|e| {
            tracing::error!("Server encountered an error: {:?}", e);
        });

    info!("Starting cleanup tasks (timeout: {:?})", shutdown_timeout);
    match tokio::time::timeout(shutdown_timeout, cleanup).await {
        Ok(()) => info!("Cleanup completed successfully"),
        Err(_) => {
            tracing::warn!(
                "Cleanup exceeded timeout of {:?}, forcing shutdown",
                shutdown_timeout
            );
        }
    }

    serve_result
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, http::StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    #[derive(OpenApi)]
    #[openapi(info(title = "Test API"))]
    struct TestDoc;

    fn app() -> Router {
        let api = Router::new().route("/ping", get(|| async { "pong" }));
        create_router::<TestDoc>("/api/v1", api)
    }

    #[tokio::test]
    async fn test_routes_are_nested_under_prefix() {
        let response = app()
            .oneshot(Request::get("/api/v1/ping").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get("x-content-type-options").unwrap(),
            "nosniff"
        );
    }

    #[tokio::test]
    async fn test_unknown_route_is_json_404() {
        let response = app()
            .oneshot(Request::get("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], br#"{"error":"not found"}"#);
    }

    #[tokio::test]
    async fn test_openapi_document_is_served() {
        let response = app()
            .oneshot(Request::get(OPENAPI_PATH).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let doc: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(doc["info"]["title"], "Test API");
    }
}
