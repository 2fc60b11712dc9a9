//! Users API routes
//!
//! Wires the users domain to MongoDB.

use axum::Router;
use domain_users::{MongoUserStore, UserService, handlers};

use crate::state::AppState;

/// Create users router
pub fn router(state: &AppState) -> Router {
    let store = MongoUserStore::new(state.db.clone());
    let service = UserService::new(store);

    handlers::router(service)
}
