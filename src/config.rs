use dotenvy::dotenv;
use once_cell::sync::Lazy;
use std::env;

use crate::query::DEFAULT_SEARCH_URL;

pub static CONFIG: Lazy<Config> = Lazy::new(|| {
    dotenv().ok(); // Load .env file if present
    Config {
        search_url: get_env_or_default("VIEWHARVEST_SEARCH_URL", DEFAULT_SEARCH_URL),
        bind_addr: get_env_or_default("VIEWHARVEST_BIND_ADDR", "127.0.0.1:3000"),
        static_dir: get_env_or_default("VIEWHARVEST_STATIC_DIR", "static"),
    }
});

#[derive(Debug, Clone)]
pub struct Config {
    /// Search endpoint the query builder appends its parameters to.
    pub search_url: String,
    pub bind_addr: String,
    pub static_dir: String,
}

fn get_env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
