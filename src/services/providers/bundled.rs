use crate::{error::AppResult, services::providers::Catalog};

use super::CatalogProvider;

/// Major North American streaming services and a sample of their titles
pub(crate) const CATALOG_JSON: &str = include_str!("../../../data/catalog.json");

/// Catalog compiled into the binary
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledCatalog;

#[async_trait::async_trait]
impl CatalogProvider for BundledCatalog {
    async fn load(&self) -> AppResult<Catalog> {
        Catalog::bundled()
    }

    fn name(&self) -> &'static str {
        "bundled"
    }
}
