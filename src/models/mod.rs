use serde::{Deserialize, Serialize};

mod show;
mod streaming_service;
mod user_preferences;

pub use show::{ContentType, Show};
pub use streaming_service::Service;
pub use user_preferences::{OptimizationPolicy, Preferences, Selection, SubscriptionType};

/// A scored service bundle for a viewer's selection
///
/// `covered_shows` and `uncovered_shows` partition the resolved selection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recommendation {
    pub services: Vec<Service>,
    pub total_monthly_cost: f64,
    /// Present only when yearly billing was requested
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_yearly_cost: Option<f64>,
    pub covered_shows: Vec<Show>,
    pub uncovered_shows: Vec<Show>,
    /// Estimated monthly savings versus subscribing to every needed service
    pub savings: f64,
    pub reasoning: String,
    /// Optimization score in [0, 100]
    pub score: f64,
}

impl Recommendation {
    /// Service ids in bundle order
    pub fn service_ids(&self) -> Vec<&str> {
        self.services.iter().map(|s| s.id.as_str()).collect()
    }

    /// Fraction of the selection this bundle covers
    pub fn coverage(&self) -> f64 {
        let total = self.covered_shows.len() + self.uncovered_shows.len();
        if total == 0 {
            return 0.0;
        }
        self.covered_shows.len() as f64 / total as f64
    }

    pub fn is_complete(&self) -> bool {
        self.uncovered_shows.is_empty()
    }
}

/// Catalog browsing filters; every supplied field must match
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct SearchFilters {
    pub genre: Option<String>,
    pub year: Option<i32>,
    #[serde(rename = "type")]
    pub content_type: Option<ContentType>,
    pub service: Option<String>,
}

/// Request body for the recommendations endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct RecommendationRequest {
    pub selected_shows: Selection,
    #[serde(default)]
    pub preferences: Preferences,
}
