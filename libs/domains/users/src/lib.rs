//! Users Domain
//!
//! CRUD over user records stored in MongoDB, with bcrypt password hashing
//! and field validation.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Validation, password hashing
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │    Store    │  ← Data access (trait + MongoDB / in-memory implementations)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_users::{handlers, mongodb::MongoUserStore, service::UserService};
//! use mongodb::Client;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::with_uri_str("mongodb://localhost:27017").await?;
//! let store = MongoUserStore::new(client.database("hotel"));
//! let service = UserService::new(store);
//!
//! let router = handlers::router(service);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod password;
pub mod repository;
pub mod service;

pub use error::{UserError, UserResult};
pub use handlers::ApiDoc;
pub use models::{CreateUserParams, UpdateUserParams, User, UserFilter, UserResponse};
pub use mongodb::MongoUserStore;
pub use repository::{InMemoryUserStore, UserStore};
pub use service::UserService;
