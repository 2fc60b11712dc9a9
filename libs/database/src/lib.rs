//! Database library providing MongoDB connection management.
//!
//! # Features
//!
//! - `mongodb` (default) - MongoDB connector, configuration and health ping
//! - `config` - `core_config::FromEnv` support for [`mongodb::MongoConfig`]
//!
//! # Example
//!
//! ```ignore
//! use database::mongodb::{MongoConfig, connect_from_config};
//!
//! let config = MongoConfig::new("mongodb://localhost:27017").database_name("hotel");
//! let client = connect_from_config(&config).await?;
//! let db = client.database(config.database());
//! ```

#[cfg(feature = "mongodb")]
pub mod mongodb;
