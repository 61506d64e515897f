use std::collections::HashSet;

use crate::{
    config::Config,
    models::{Preferences, Recommendation, Service, Show},
    services::{
        combinations::{Bundle, BundleGenerator},
        scoring::{round_cents, CoverageScorer, ScoringWeights},
    },
};

/// Assumed monthly price of each service a viewer would otherwise buy
pub const AVERAGE_SERVICE_COST: f64 = 12.0;

/// Number of recommendations returned by default
pub const DEFAULT_LIMIT: usize = 5;

/// Ranks service bundles for a viewer's selection
#[derive(Debug, Clone)]
pub struct Recommender {
    generator: BundleGenerator,
    scorer: CoverageScorer,
    limit: usize,
}

impl Default for Recommender {
    fn default() -> Self {
        Self::new(BundleGenerator::default(), ScoringWeights::default(), DEFAULT_LIMIT)
    }
}

impl Recommender {
    pub fn new(generator: BundleGenerator, weights: ScoringWeights, limit: usize) -> Self {
        Self {
            generator,
            scorer: CoverageScorer::new(weights),
            limit,
        }
    }

    /// Builds a recommender from the popular allowlist and limit in `config`
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            BundleGenerator::new(config.popular_services.iter().cloned()),
            ScoringWeights::default(),
            config.max_recommendations,
        )
    }

    /// Recommends the best bundles for the selected show ids
    ///
    /// Returns an empty list when nothing in `selection` resolves against
    /// `shows`, or when no bundle fits within `prefs.max_budget`. Ties keep
    /// generation order.
    pub fn recommend(
        &self,
        selection: &[String],
        services: &[Service],
        shows: &[Show],
        prefs: &Preferences,
    ) -> Vec<Recommendation> {
        let selected = resolve_selection(selection, shows);
        if selected.is_empty() {
            tracing::debug!(requested = selection.len(), "No selected shows resolved");
            return Vec::new();
        }

        let bundles = self.generator.generate(services);
        let candidates = bundles.len();

        let mut recommendations: Vec<Recommendation> = bundles
            .iter()
            .map(|bundle| self.scorer.score(bundle, &selected, prefs))
            .filter(|rec| prefs.max_budget.map_or(true, |budget| rec.total_monthly_cost <= budget))
            .collect();

        let within_budget = recommendations.len();

        recommendations.sort_by(|a, b| b.score.total_cmp(&a.score));
        recommendations.truncate(self.limit);

        tracing::debug!(
            selected = selected.len(),
            candidates,
            within_budget,
            returned = recommendations.len(),
            top_score = recommendations.first().map(|r| r.score),
            "Ranked bundles"
        );

        recommendations
    }
}

/// Recommends bundles using the default allowlist, weights and limit
pub fn recommend(
    selection: &[String],
    services: &[Service],
    shows: &[Show],
    prefs: &Preferences,
) -> Vec<Recommendation> {
    Recommender::default().recommend(selection, services, shows, prefs)
}

/// Selected shows in catalog order, first record per id
fn resolve_selection<'a>(selection: &[String], shows: &'a [Show]) -> Vec<&'a Show> {
    let wanted: HashSet<&str> = selection.iter().map(String::as_str).collect();
    let mut seen = HashSet::new();

    shows
        .iter()
        .filter(|show| wanted.contains(show.id.as_str()) && seen.insert(show.id.as_str()))
        .collect()
}

/// Rough monthly savings of `bundle` against buying every service the
/// selection touches at `AVERAGE_SERVICE_COST` each
///
/// Single-service bundles always report zero.
pub fn estimate_savings(bundle: &Bundle<'_>, selection: &[&Show]) -> f64 {
    if bundle.len() <= 1 {
        return 0.0;
    }

    let distinct: HashSet<&str> = selection
        .iter()
        .flat_map(|show| show.services.iter().map(String::as_str))
        .collect();

    let separate = distinct.len() as f64 * AVERAGE_SERVICE_COST;
    round_cents((separate - round_cents(bundle.monthly_cost())).max(0.0))
}
