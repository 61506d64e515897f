//! Catalog supply
//!
//! The recommendation engine works over a static, in-memory catalog. This
//! module defines the container and a pluggable supplier abstraction: the
//! bundled catalog compiled into the binary, or a JSON file on disk.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::collections::HashSet;

use crate::{
    config::Config,
    error::{AppError, AppResult},
    models::{Service, Show},
};

pub mod bundled;
pub mod file;

pub use bundled::BundledCatalog;
pub use file::FileCatalog;

/// Services and shows available to the engine
#[derive(Debug, Clone)]
pub struct Catalog {
    pub services: Vec<Service>,
    pub shows: Vec<Show>,
    pub loaded_at: DateTime<Utc>,
}

/// On-disk catalog shape
#[derive(Debug, Deserialize)]
struct CatalogFile {
    services: Vec<Service>,
    #[serde(default)]
    shows: Vec<Show>,
}

impl Catalog {
    /// Builds a catalog, keeping the first record for any repeated id
    ///
    /// Shows referencing services missing from the catalog are kept as-is;
    /// those references simply never match a bundle.
    pub fn new(services: Vec<Service>, shows: Vec<Show>) -> Self {
        let services = dedupe_by_id(services, |s| &s.id, "service");
        let shows = dedupe_by_id(shows, |s| &s.id, "show");

        let known: HashSet<&str> = services.iter().map(|s| s.id.as_str()).collect();
        for show in &shows {
            for service_id in show.services.iter().filter(|id| !known.contains(id.as_str())) {
                tracing::warn!(
                    show_id = %show.id,
                    service_id = %service_id,
                    "Show references a service missing from the catalog"
                );
            }
        }

        Self {
            services,
            shows,
            loaded_at: Utc::now(),
        }
    }

    /// Parses a catalog from its JSON representation
    pub fn from_json(json: &str) -> AppResult<Self> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Ok(Self::new(file.services, file.shows))
    }

    /// The catalog compiled into the binary
    pub fn bundled() -> AppResult<Self> {
        Self::from_json(bundled::CATALOG_JSON)
    }

    pub fn service(&self, id: &str) -> Option<&Service> {
        self.services.iter().find(|s| s.id == id)
    }

    pub fn show(&self, id: &str) -> Option<&Show> {
        self.shows.iter().find(|s| s.id == id)
    }
}

fn dedupe_by_id<T>(items: Vec<T>, id: impl Fn(&T) -> &String, kind: &'static str) -> Vec<T> {
    let mut seen = HashSet::new();
    let mut kept = Vec::with_capacity(items.len());

    for item in items {
        if seen.insert(id(&item).clone()) {
            kept.push(item);
        } else {
            tracing::warn!(kind, id = %id(&item), "Dropping duplicate catalog entry");
        }
    }

    kept
}

/// Trait for catalog suppliers
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Loads the full catalog
    async fn load(&self) -> AppResult<Catalog>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}

/// Picks the file provider when `catalog_path` is set, the bundled one otherwise
pub fn provider_from_config(config: &Config) -> Box<dyn CatalogProvider> {
    match &config.catalog_path {
        Some(path) => Box::new(FileCatalog::new(path.clone())),
        None => Box::new(BundledCatalog),
    }
}

/// Loads and validates a catalog from `provider`
///
/// A catalog without services cannot produce any bundle and is rejected.
pub async fn load_catalog(provider: &dyn CatalogProvider) -> AppResult<Catalog> {
    let catalog = provider.load().await?;

    if catalog.services.is_empty() {
        return Err(AppError::Catalog(format!(
            "{} catalog contains no streaming services",
            provider.name()
        )));
    }

    tracing::info!(
        provider = provider.name(),
        services = catalog.services.len(),
        shows = catalog.shows.len(),
        "Catalog loaded"
    );

    Ok(catalog)
}
