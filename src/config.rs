use std::env;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;
use crate::error::{AppError, Result};

#[derive(Clone)]
pub struct Config {
    pub server_addr: SocketAddr,
    /// `None` when AI_API_KEY is unset or empty. The server still starts;
    /// only `/analyze` is affected.
    pub ai_api_key: Option<String>,
    pub ai_model: String,
    pub database_path: PathBuf,
    pub schema_path: PathBuf,
}

impl Config {
    pub fn load() -> Result<Self> {
        // Load environment variables from .env file if it exists
        dotenv::dotenv().ok();

        let ai_api_key = env::var("AI_API_KEY").ok().filter(|key| !key.is_empty());
        let ai_model = env::var("AI_MODEL").unwrap_or_else(|_| "gemini-pro".to_string());

        // Load server configuration with defaults
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT").unwrap_or_else(|_| "9000".to_string());
        let port = port.parse::<u16>().map_err(|e| AppError::ConfigError(format!("Invalid port: {}", e)))?;
        let ip = IpAddr::from_str(&host).map_err(|e| AppError::ConfigError(format!("Invalid host address: {}", e)))?;

        let server_addr = SocketAddr::new(ip, port);

        let database_path = env::var("DATABASE_PATH")
            .unwrap_or_else(|_| "project_database.db".to_string())
            .into();
        let schema_path = env::var("SCHEMA_PATH")
            .unwrap_or_else(|_| "schema.sql".to_string())
            .into();

        Ok(Config {
            server_addr,
            ai_api_key,
            ai_model,
            database_path,
            schema_path,
        })
    }
}
