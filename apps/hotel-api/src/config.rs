use core_config::{AppInfo, ConfigError, FromEnv, app_info, server::ServerConfig};

// Import MongoDB config from the database library
use database::mongodb::MongoConfig;

// Re-export Environment for use in other modules
pub use core_config::Environment;

use crate::cli::Cli;

/// Application configuration: environment first, then CLI flags on top
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub mongodb: MongoConfig,
    pub server: ServerConfig,
    pub environment: Environment,
}

impl Config {
    pub fn load(cli: Cli) -> Result<Self, ConfigError> {
        let app = app_info!();
        let environment = Environment::from_env();

        let mongodb = MongoConfig::from_env()?.database_name(cli.db);
        let mongodb = match mongodb.app_name {
            Some(_) => mongodb,
            None => mongodb.with_app_name(app.name),
        };

        Ok(Self {
            app,
            mongodb,
            server: ServerConfig::new(cli.host, cli.port),
            environment,
        })
    }
}
