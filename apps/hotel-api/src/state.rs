//! Shared application state passed to the app-level handlers.

use mongodb::{Client, Database};

/// Cloned per handler; every field is a cheap handle.
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    /// Shares one connection pool across clones
    pub mongo_client: Client,
    pub db: Database,
}
