// src/config.rs

use dotenvy::dotenv;
use std::env;

/// Maximum number of rows returned by the results endpoint.
pub const RESULTS_PAGE_SIZE: i64 = 20;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub rust_log: String,
}

impl Config {
    /// Reads configuration from the environment. The connection string is
    /// assembled from the individual DB_* variables the deployment sets.
    pub fn from_env() -> Self {
        dotenv().ok();

        let db_host = env::var("DB_HOST").expect("DB_HOST must be set");
        let db_user = env::var("DB_USER").expect("DB_USER must be set");
        let db_pass = env::var("DB_PASS").expect("DB_PASS must be set");
        let db_name = env::var("DB_NAME").expect("DB_NAME must be set");

        let database_url = format!("postgres://{}:{}@{}/{}", db_user, db_pass, db_host, db_name);

        let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        Self {
            database_url,
            rust_log,
        }
    }
}
