//! Configuration management.
//!
//! All settings come from environment variables (a `.env` file is loaded
//! at startup when present). The store URL and credential are required;
//! everything else has a development default.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Application settings
    pub app: AppConfig,
    /// Remote data store settings
    pub store: StoreConfig,
    /// CORS configuration
    pub cors: CorsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server host to bind to
    pub host: String,
    /// Server port to bind to
    pub port: u16,
    /// Directory of static frontend assets served at `/`
    pub static_dir: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Base URL of the hosted data store
    pub url: String,
    /// Service credential sent with every store request
    pub key: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Comma-separated list of allowed origins, or `*`
    pub allowed_origins: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, String> {
        Ok(Config {
            app: AppConfig {
                host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: std::env::var("PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(3000),
                static_dir: std::env::var("STATIC_DIR").unwrap_or_else(|_| "public".to_string()),
            },
            store: StoreConfig {
                url: std::env::var("SUPABASE_URL")
                    .map_err(|_| "SUPABASE_URL must be set".to_string())?,
                key: std::env::var("SUPABASE_KEY")
                    .map_err(|_| "SUPABASE_KEY must be set".to_string())?,
            },
            cors: CorsConfig {
                allowed_origins: std::env::var("CORS_ALLOWED_ORIGINS")
                    .unwrap_or_else(|_| "*".to_string()),
            },
        })
    }
}
