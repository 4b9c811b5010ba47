//! Reference Catalogs: read-only tables loaded once at startup.
//!
//! Skills and certifications come from JSON data files; company tiers and the
//! keyword tables are compiled in. A catalog whose file cannot be loaded is
//! marked unavailable and replaced by an empty fallback, so scoring degrades to
//! default tiers instead of taking the process down.

pub mod certifications;
pub mod companies;
pub mod keywords;
pub mod skills;

use std::path::Path;

use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{error, info};

pub use certifications::{CertMatch, CertTier, CertificationsCatalog};
pub use companies::{identify_company, CompanyMatch, CompanyTier};
pub use skills::{SkillInfo, SkillsCatalog};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// A catalog that either loaded, or failed and carries an empty stand-in.
#[derive(Debug, Clone)]
pub enum CatalogSlot<T> {
    Loaded(T),
    Unavailable { reason: String, fallback: T },
}

impl<T: Default> CatalogSlot<T> {
    /// Wraps a load result, logging the outcome under `name`.
    pub fn from_load(name: &str, result: Result<T, CatalogError>) -> Self {
        match result {
            Ok(catalog) => {
                info!("{name} catalog loaded");
                CatalogSlot::Loaded(catalog)
            }
            Err(e) => {
                error!("{name} catalog unavailable, scoring will use default tiers: {e}");
                CatalogSlot::Unavailable {
                    reason: format!("{name} catalog is unavailable"),
                    fallback: T::default(),
                }
            }
        }
    }
}

impl<T> CatalogSlot<T> {
    /// The catalog to score against. Empty when the load failed.
    pub fn catalog(&self) -> &T {
        match self {
            CatalogSlot::Loaded(c) => c,
            CatalogSlot::Unavailable { fallback, .. } => fallback,
        }
    }

    /// The loaded catalog, or the reason it is missing.
    pub fn loaded(&self) -> Result<&T, &str> {
        match self {
            CatalogSlot::Loaded(c) => Ok(c),
            CatalogSlot::Unavailable { reason, .. } => Err(reason),
        }
    }
}

/// Every file-backed catalog the scorers need. Shared read-only via `Arc`.
#[derive(Debug, Clone)]
pub struct Catalogs {
    pub skills: CatalogSlot<SkillsCatalog>,
    pub certifications: CatalogSlot<CertificationsCatalog>,
}

impl Catalogs {
    /// Loads both catalogs from disk. Never fails; see `CatalogSlot`.
    pub fn load(skills_path: &Path, certs_path: &Path) -> Self {
        Catalogs {
            skills: CatalogSlot::from_load("skills", read_json(skills_path)),
            certifications: CatalogSlot::from_load("certifications", read_json(certs_path)),
        }
    }

    pub fn from_parts(skills: SkillsCatalog, certifications: CertificationsCatalog) -> Self {
        Catalogs {
            skills: CatalogSlot::Loaded(skills),
            certifications: CatalogSlot::Loaded(certifications),
        }
    }

    pub fn skills(&self) -> &SkillsCatalog {
        self.skills.catalog()
    }

    pub fn certifications(&self) -> &CertificationsCatalog {
        self.certifications.catalog()
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, CatalogError> {
    let display = path.display().to_string();
    let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: display.clone(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| CatalogError::Parse {
        path: display,
        source,
    })
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_degrades_to_unavailable() {
        let catalogs = Catalogs::load(
            Path::new("/nonexistent/skills.json"),
            Path::new("/nonexistent/certs.json"),
        );
        assert!(catalogs.skills.loaded().is_err());
        assert!(catalogs.certifications.loaded().is_err());
        assert_eq!(catalogs.skills().category_count(), 0);
    }

    #[test]
    fn test_bundled_files_load() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("data");
        let catalogs = Catalogs::load(
            &dir.join("skills_database.json"),
            &dir.join("certs_database.json"),
        );
        assert!(catalogs.skills.loaded().is_ok());
        assert!(catalogs.certifications.loaded().is_ok());
    }

    #[test]
    fn test_parse_error_is_reported() {
        let err = serde_json::from_str::<SkillsCatalog>("{not json")
            .map_err(|source| CatalogError::Parse {
                path: "inline".to_string(),
                source,
            })
            .unwrap_err();
        assert!(err.to_string().contains("inline"));
    }
}
