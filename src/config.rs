//! Application configuration loaded from environment variables.

use serde::Deserialize;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // === Storage ===
    /// MongoDB connection URI (mongodb:// or mongodb+srv://).
    pub mongodb_uri: String,

    /// Database holding the todo collection.
    #[serde(default = "default_database")]
    pub mongodb_database: String,

    /// Collection name for todo documents.
    #[serde(default = "default_collection")]
    pub mongodb_collection: String,

    // === Server ===
    /// HTTP listen port.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Deployment environment ("development" or "production").
    #[serde(default = "default_env")]
    pub env: String,

    /// Directory of static assets served in production.
    #[serde(default = "default_static_dir")]
    pub static_dir: String,

    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub rust_log: String,
}

fn default_database() -> String {
    "todo_db".to_string()
}

fn default_collection() -> String {
    "todos".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_env() -> String {
    "development".to_string()
}

fn default_static_dir() -> String {
    "./client/dist".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from environment, reading .env first outside
    /// of production.
    pub fn load() -> Result<Self, envy::Error> {
        let env = std::env::var("ENV").unwrap_or_default();
        if env != "production" {
            dotenvy::dotenv().ok();
        }
        envy::from_env()
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> Result<(), String> {
        if self.mongodb_uri.is_empty() {
            return Err("MONGODB_URI is required".to_string());
        }

        if !self.mongodb_uri.starts_with("mongodb://")
            && !self.mongodb_uri.starts_with("mongodb+srv://")
        {
            return Err("MONGODB_URI must start with mongodb:// or mongodb+srv://".to_string());
        }

        Ok(())
    }

    /// Check if running in production (enables static asset serving).
    pub fn is_production(&self) -> bool {
        self.env == "production"
    }
}
