use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;
use crate::error::{AppError, Result};

const DEFAULT_HN_BASE_URL: &str = "https://hacker-news.firebaseio.com";

#[derive(Clone)]
pub struct Config {
    pub server_addr: SocketAddr,
    pub hn_base_url: String,
    pub cache_ttl: Duration,
}

impl Config {
    pub fn load() -> Result<Self> {
        // Load environment variables from .env file if it exists
        dotenv::dotenv().ok();

        // Load server configuration with defaults
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT").unwrap_or_else(|_| "3000".to_string());
        let port = port.parse::<u16>().map_err(|e| AppError::ConfigError(format!("Invalid port: {}", e)))?;
        let ip = IpAddr::from_str(&host).map_err(|e| AppError::ConfigError(format!("Invalid host address: {}", e)))?;

        let server_addr = SocketAddr::new(ip, port);

        let hn_base_url = env::var("HN_API_BASE_URL").unwrap_or_else(|_| DEFAULT_HN_BASE_URL.to_string());

        // Item cache TTL; zero would make every lookup a miss, reject it outright
        let ttl_secs = env::var("CACHE_TTL_SECS").unwrap_or_else(|_| "60".to_string());
        let ttl_secs = ttl_secs.parse::<u64>().map_err(|e| AppError::ConfigError(format!("Invalid cache TTL: {}", e)))?;
        if ttl_secs == 0 {
            return Err(AppError::ConfigError("Cache TTL must be a positive number of seconds".to_string()));
        }

        Ok(Config {
            server_addr,
            hn_base_url,
            cache_ttl: Duration::from_secs(ttl_secs),
        })
    }
}
