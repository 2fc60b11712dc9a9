use clap::Parser;
use core_config::server::DEFAULT_PORT;

/// Command-line flags. The MongoDB connection string comes from
/// `MONGODB_URL` rather than a flag.
#[derive(Parser, Debug, Clone)]
#[command(name = "hotel-api", version)]
#[command(about = "REST API for managing hotel users, backed by MongoDB")]
pub struct Cli {
    /// Port the HTTP server listens on
    #[arg(long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// MongoDB database holding the users collection
    #[arg(long, default_value = "hotel")]
    pub db: String,

    /// Interface to bind
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,
}
