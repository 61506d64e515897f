pub mod combinations;
pub mod providers;
pub mod recommendations;
pub mod scoring;
pub mod title_search;

pub use combinations::{Bundle, BundleGenerator};
pub use providers::{load_catalog, provider_from_config, Catalog, CatalogProvider};
pub use recommendations::{recommend, Recommender};
pub use scoring::{CoverageScorer, ScoringWeights};
