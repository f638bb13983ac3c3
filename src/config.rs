//! Configuration management for trackchart.
//!
//! Values come from environment variables, optionally seeded from a `.env`
//! file in the local data directory:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Built-in defaults

use std::{env, path::PathBuf};

pub const DEFAULT_CATALOG_API_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_SEARCH_API_URL: &str = "https://api.spotify.com/v1/search";
pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:8080";
pub const DEFAULT_SEARCH_LIMIT: u32 = 10;

/// Loads environment variables from a `.env` file in the local data directory.
///
/// The file lives at:
/// - Linux: `~/.local/share/trackchart/.env`
/// - macOS: `~/Library/Application Support/trackchart/.env`
/// - Windows: `%LOCALAPPDATA%/trackchart/.env`
///
/// The directory is created when missing. A missing `.env` file is fine,
/// every setting has a default.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or an existing `.env`
/// file cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    let path = env_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

pub fn env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("trackchart/.env");
    path
}

/// Base URL of the catalog service serving `/artist/{id}` and
/// `/artist/{id}/audio-features`.
pub fn catalog_api_url() -> String {
    env::var("CATALOG_API_URL").unwrap_or_else(|_| DEFAULT_CATALOG_API_URL.to_string())
}

/// Artist search endpoint used for autocomplete.
pub fn search_api_url() -> String {
    env::var("SEARCH_API_URL").unwrap_or_else(|_| DEFAULT_SEARCH_API_URL.to_string())
}

/// Maximum number of search candidates requested. Unparsable values fall
/// back to the default.
pub fn search_limit() -> u32 {
    env::var("SEARCH_LIMIT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_SEARCH_LIMIT)
}

/// Address the local HTTP server binds to.
pub fn server_addr() -> String {
    env::var("SERVER_ADDRESS").unwrap_or_else(|_| DEFAULT_SERVER_ADDRESS.to_string())
}
