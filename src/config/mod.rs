//! Configuration module for the atelier backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Shared admin login email (admin routes are disabled without it)
    pub admin_email: Option<String>,
    /// Shared admin login password
    pub admin_password: Option<String>,
    /// Path to SQLite database file
    pub db_path: PathBuf,
    /// Directory for uploaded portfolio images
    pub media_path: PathBuf,
    /// Directory holding markdown content (guest spots, global info)
    pub content_path: PathBuf,
    /// Base URL used when building public media URLs
    pub public_base_url: String,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let admin_email = env::var("ATELIER_ADMIN_EMAIL").ok();
        let admin_password = env::var("ATELIER_ADMIN_PASSWORD").ok();

        let db_path = env::var("ATELIER_DB_PATH")
            .unwrap_or_else(|_| "./data/atelier.sqlite".to_string())
            .into();

        let media_path = env::var("ATELIER_MEDIA_PATH")
            .unwrap_or_else(|_| "./data/media".to_string())
            .into();

        let content_path = env::var("ATELIER_CONTENT_PATH")
            .unwrap_or_else(|_| "./content".to_string())
            .into();

        let public_base_url = env::var("ATELIER_PUBLIC_BASE_URL")
            .unwrap_or_else(|_| "http://127.0.0.1:8080".to_string());

        let bind_addr = env::var("ATELIER_BIND_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8080".to_string())
            .parse()
            .expect("Invalid ATELIER_BIND_ADDR format");

        let log_level = env::var("ATELIER_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Self {
            admin_email,
            admin_password,
            db_path,
            media_path,
            content_path,
            public_base_url,
            bind_addr,
            log_level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        // Clear any existing env vars
        env::remove_var("ATELIER_ADMIN_EMAIL");
        env::remove_var("ATELIER_ADMIN_PASSWORD");
        env::remove_var("ATELIER_DB_PATH");
        env::remove_var("ATELIER_MEDIA_PATH");
        env::remove_var("ATELIER_CONTENT_PATH");
        env::remove_var("ATELIER_PUBLIC_BASE_URL");
        env::remove_var("ATELIER_BIND_ADDR");
        env::remove_var("ATELIER_LOG_LEVEL");

        let config = Config::from_env();

        assert!(config.admin_email.is_none());
        assert!(config.admin_password.is_none());
        assert_eq!(config.db_path, PathBuf::from("./data/atelier.sqlite"));
        assert_eq!(config.media_path, PathBuf::from("./data/media"));
        assert_eq!(config.content_path, PathBuf::from("./content"));
        assert_eq!(config.public_base_url, "http://127.0.0.1:8080");
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:8080");
        assert_eq!(config.log_level, "info");
    }
}
