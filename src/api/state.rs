use std::sync::Arc;

use crate::{
    error::AppResult,
    services::{Catalog, Recommender},
};

/// Shared application state
///
/// The catalog is immutable after load, so handlers share it without locking.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub recommender: Arc<Recommender>,
}

impl AppState {
    pub fn new(catalog: Catalog, recommender: Recommender) -> Self {
        Self {
            catalog: Arc::new(catalog),
            recommender: Arc::new(recommender),
        }
    }

    /// State over the bundled catalog with default ranking settings
    pub fn bundled() -> AppResult<Self> {
        Ok(Self::new(Catalog::bundled()?, Recommender::default()))
    }
}
