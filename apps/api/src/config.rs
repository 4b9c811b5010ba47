use std::path::PathBuf;

use anyhow::{Context, Result};

const DEFAULT_PORT: u16 = 8080;
/// Bundled catalogs, found regardless of the working directory.
const DEFAULT_DATA_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data");
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Every variable has a default; only malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub skills_catalog_path: PathBuf,
    pub certs_catalog_path: PathBuf,
    pub max_upload_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        let data_dir = PathBuf::from(DEFAULT_DATA_DIR);
        Config {
            port: DEFAULT_PORT,
            rust_log: "info".to_string(),
            skills_catalog_path: data_dir.join("skills_database.json"),
            certs_catalog_path: data_dir.join("certs_database.json"),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let data_dir = PathBuf::from(env_or("DATA_DIR", DEFAULT_DATA_DIR));

        Ok(Config {
            port: match std::env::var("PORT") {
                Ok(v) => v.parse::<u16>().context("PORT must be a valid port number")?,
                Err(_) => DEFAULT_PORT,
            },
            rust_log: env_or("RUST_LOG", "info"),
            skills_catalog_path: std::env::var("SKILLS_CATALOG_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| data_dir.join("skills_database.json")),
            certs_catalog_path: std::env::var("CERTS_CATALOG_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| data_dir.join("certs_database.json")),
            max_upload_bytes: match std::env::var("MAX_UPLOAD_BYTES") {
                Ok(v) => v
                    .parse::<usize>()
                    .context("MAX_UPLOAD_BYTES must be a byte count")?,
                Err(_) => DEFAULT_MAX_UPLOAD_BYTES,
            },
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::catalog::Catalogs;

    #[test]
    fn test_defaults_point_at_bundled_data() {
        let config = Config::default();
        assert_eq!(config.port, 8080);
        assert!(config.skills_catalog_path.is_absolute());
        assert!(config.skills_catalog_path.is_file());
        assert!(config.certs_catalog_path.is_file());
        assert_eq!(config.max_upload_bytes, 10 * 1024 * 1024);
    }

    #[test]
    fn test_default_paths_load_both_catalogs() {
        let config = Config::default();
        let catalogs = Catalogs::load(&config.skills_catalog_path, &config.certs_catalog_path);
        assert!(catalogs.skills.loaded().is_ok());
        assert!(catalogs.certifications.loaded().is_ok());
    }
}
