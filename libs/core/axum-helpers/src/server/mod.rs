//! Server infrastructure module.
//!
//! - Router assembly with OpenAPI document, tracing and security headers
//! - `/health` liveness endpoint
//! - Graceful shutdown with bounded cleanup
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::server::{create_production_app, create_router, health_router};
//! use core_config::app_info;
//!
//! let router = create_router::<ApiDoc>("/api/v1", api_routes)
//!     .merge(health_router(app_info!()));
//!
//! create_production_app(router, &server_config, Duration::from_secs(30), async {}).await?;
//! ```

pub mod app;
pub mod health;
pub mod shutdown;

pub use app::{create_production_app, create_router};
pub use health::{HealthResponse, health_router};
pub use shutdown::shutdown_signal;
