use std::path::PathBuf;

use tracing::instrument;

use crate::{error::AppResult, services::providers::Catalog};

use super::CatalogProvider;

/// Catalog read from a JSON file
#[derive(Debug, Clone)]
pub struct FileCatalog {
    path: PathBuf,
}

impl FileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait::async_trait]
impl CatalogProvider for FileCatalog {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn load(&self) -> AppResult<Catalog> {
        let json = tokio::fs::read_to_string(&self.path).await?;
        tracing::debug!(bytes = json.len(), "Read catalog file");
        Catalog::from_json(&json)
    }

    fn name(&self) -> &'static str {
        "file"
    }
}
