//! # Axum Helpers
//!
//! Shared building blocks for the Axum HTTP services in this workspace.
//!
//! ## Modules
//!
//! - **[`server`]**: Router assembly, health endpoint, graceful shutdown
//! - **[`http`]**: HTTP middleware (security headers)
//! - **[`errors`]**: Process-wide error type rendered as `{"error": ...}` JSON
//! - **[`extractors`]**: Custom extractors (validated JSON)
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum::Router;
//! use axum_helpers::server::{create_production_app, create_router};
//! use core_config::server::ServerConfig;
//! use utoipa::OpenApi;
//!
//! #[derive(OpenApi)]
//! #[openapi(paths())]
//! struct ApiDoc;
//!
//! let router = create_router::<ApiDoc>("/api/v1", Router::new());
//! create_production_app(router, &ServerConfig::default(), Duration::from_secs(30), async {}).await?;
//! ```

pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

pub use errors::{AppError, ErrorCode, ErrorResponse};
pub use extractors::ValidatedJson;
pub use http::security_headers;
pub use server::{create_production_app, create_router, health_router, shutdown_signal};
