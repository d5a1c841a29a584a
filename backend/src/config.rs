//! Runtime settings read from the environment once at startup.
//!
//! | Variable        | Default                         |
//! |-----------------|---------------------------------|
//! | `PORT`          | `3001`                          |
//! | `HOST`          | `127.0.0.1`                     |
//! | `DATABASE_PATH` | `<backend>/data/dogbreeds.sqlite` |
//! | `PUBLIC_DIR`    | `<backend>/public`              |
//! | `OPEN_BROWSER`  | off                             |
//!
//! `<backend>` is the backend crate directory, so the defaults do not depend on
//! the directory the server is started from.

use log::warn;
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3001;
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_DATABASE_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/dogbreeds.sqlite");
pub const DEFAULT_PUBLIC_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/public");

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub database_path: PathBuf,
    pub public_dir: PathBuf,
    pub open_browser: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            database_path: PathBuf::from(DEFAULT_DATABASE_PATH),
            public_dir: PathBuf::from(DEFAULT_PUBLIC_DIR),
            open_browser: false,
        }
    }
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves settings through `lookup`, falling back to defaults for unset
    /// or unparsable values.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Settings::default();

        if let Some(host) = lookup("HOST").filter(|h| !h.trim().is_empty()) {
            settings.host = host;
        }

        if let Some(raw) = lookup("PORT") {
            match raw.trim().parse::<u16>() {
                Ok(port) => settings.port = port,
                Err(_) => warn!("Ignoring invalid PORT value {:?}, using {}", raw, DEFAULT_PORT),
            }
        }

        if let Some(path) = lookup("DATABASE_PATH").filter(|p| !p.trim().is_empty()) {
            settings.database_path = PathBuf::from(path);
        }

        if let Some(dir) = lookup("PUBLIC_DIR").filter(|d| !d.trim().is_empty()) {
            settings.public_dir = PathBuf::from(dir);
        }

        settings.open_browser = lookup("OPEN_BROWSER")
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        settings
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}
