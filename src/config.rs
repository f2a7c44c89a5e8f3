use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::error::{CatalogError, Result};

/// Runtime settings, read from the environment (a `.env` file is loaded by
/// `main` before this runs). Every variable has a development default.
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite database file.
    pub database_path: PathBuf,
    /// Root directory holding candidate seed images.
    pub assets_dir: PathBuf,
    /// Root directory where attached media is stored and served from.
    pub media_dir: PathBuf,
    /// Address the read API binds to.
    pub bind_addr: SocketAddr,
}

impl Config {
    pub fn load() -> Result<Self> {
        let bind = env::var("CATALOG_BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8000".to_string());
        let bind_addr = bind
            .parse()
            .map_err(|e| CatalogError::Config(format!("invalid CATALOG_BIND_ADDR '{bind}': {e}")))?;

        Ok(Self {
            database_path: env_path("CATALOG_DB", "catalog.db"),
            assets_dir: env_path("CATALOG_ASSETS_DIR", "seed_assets"),
            media_dir: env_path("CATALOG_MEDIA_DIR", "media"),
            bind_addr,
        })
    }
}

fn env_path(key: &str, default: &str) -> PathBuf {
    env::var(key).map(PathBuf::from).unwrap_or_else(|_| PathBuf::from(default))
}
