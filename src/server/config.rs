use std::path::PathBuf;

use crate::server::error::{config::ConfigError, AppError};

const API_BASE: &str = "https://fdnd.directus.app/items";
const PUBLIC_DIR: &str = "public";

/// Port used when `PORT` is unset or empty.
pub const DEFAULT_PORT: u16 = 8000;

pub struct Config {
    pub port: u16,

    /// Base URL of the collection API, without a trailing slash.
    pub api_base: String,
    /// Directory served as static assets ahead of all routes.
    pub public_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self::with_port(std::env::var("PORT").ok().as_deref())?)
    }

    /// Builds the configuration from a raw `PORT` value.
    fn with_port(port: Option<&str>) -> Result<Self, ConfigError> {
        let port = match port.map(str::trim) {
            None | Some("") => DEFAULT_PORT,
            Some(value) => value
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(value.to_string()))?,
        };

        Ok(Self {
            port,
            api_base: API_BASE.to_string(),
            public_dir: PathBuf::from(PUBLIC_DIR),
        })
    }
}
