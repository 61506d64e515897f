//! Coverage scoring for candidate bundles.
//!
//! A bundle covers a show when at least one of its services carries it.
//! The score blends coverage, cost-efficiency (coverage percentage per
//! currency unit), bundle size and budget headroom according to the
//! viewer's [`OptimizationPolicy`], capped at 100.

use crate::{
    models::{OptimizationPolicy, Preferences, Recommendation, Show, SubscriptionType},
    services::{combinations::Bundle, combinations::MAX_BUNDLE_SIZE, recommendations},
};

/// Largest bundle that earns the value policy's compact completion bonus
pub const COMPACT_BUNDLE_SIZE: usize = 2;

/// Upper bound of every score
pub const MAX_SCORE: f64 = 100.0;

/// Weights of the additive score terms
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringWeights {
    /// Multiplier on coverage percentage (value policy)
    pub value_coverage: f64,
    /// Size bonus for a single-service bundle (value policy)
    pub value_size_bonus: f64,
    /// Size bonus lost per additional service (value policy)
    pub value_size_step: f64,
    pub value_efficiency: f64,
    pub value_efficiency_cap: f64,
    /// Full coverage with at most `COMPACT_BUNDLE_SIZE` services
    pub value_compact_completion: f64,
    pub value_completion: f64,
    pub value_oversize_penalty: f64,
    pub balanced_coverage: f64,
    pub balanced_efficiency: f64,
    pub balanced_efficiency_cap: f64,
    pub balanced_completion: f64,
    pub balanced_oversize_penalty: f64,
    /// Awarded when cost stays within `budget_headroom` of the ceiling
    pub budget_bonus: f64,
    pub budget_headroom: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            value_coverage: 0.6,
            value_size_bonus: 25.0,
            value_size_step: 8.0,
            value_efficiency: 5.0,
            value_efficiency_cap: 15.0,
            value_compact_completion: 25.0,
            value_completion: 15.0,
            value_oversize_penalty: 20.0,
            balanced_coverage: 0.5,
            balanced_efficiency: 10.0,
            balanced_efficiency_cap: 30.0,
            balanced_completion: 20.0,
            balanced_oversize_penalty: 10.0,
            budget_bonus: 5.0,
            budget_headroom: 0.8,
        }
    }
}

/// Scores one bundle against a resolved selection
#[derive(Debug, Clone, Default)]
pub struct CoverageScorer {
    weights: ScoringWeights,
}

impl CoverageScorer {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    /// Builds the recommendation for `bundle`
    ///
    /// `selection` must be non-empty; the ranker rejects empty selections
    /// before any bundle is scored.
    pub fn score(&self, bundle: &Bundle<'_>, selection: &[&Show], prefs: &Preferences) -> Recommendation {
        let (covered, uncovered): (Vec<&Show>, Vec<&Show>) = selection
            .iter()
            .copied()
            .partition(|show| show.services.iter().any(|id| bundle.contains(id)));

        let cost = round_cents(bundle.monthly_cost());
        let yearly_cost = match prefs.subscription_type {
            SubscriptionType::Yearly => Some(round_cents(bundle.yearly_cost())),
            SubscriptionType::Monthly => None,
        };

        let coverage_pct = covered.len() as f64 / selection.len() as f64 * 100.0;
        let efficiency = if cost > 0.0 { coverage_pct / cost } else { 0.0 };
        let complete = uncovered.is_empty();
        let size = bundle.len();

        let w = &self.weights;
        let mut raw = match prefs.policy() {
            OptimizationPolicy::Value => {
                let size_bonus = (w.value_size_bonus - (size as f64 - 1.0) * w.value_size_step).max(0.0);
                let completion = match (complete, size <= COMPACT_BUNDLE_SIZE) {
                    (true, true) => w.value_compact_completion,
                    (true, false) => w.value_completion,
                    (false, _) => 0.0,
                };
                let oversize = if size > MAX_BUNDLE_SIZE { w.value_oversize_penalty } else { 0.0 };

                coverage_pct * w.value_coverage
                    + size_bonus
                    + (efficiency * w.value_efficiency).min(w.value_efficiency_cap)
                    + completion
                    - oversize
            }
            OptimizationPolicy::Balanced => {
                let completion = if complete { w.balanced_completion } else { 0.0 };
                let oversize = if size > MAX_BUNDLE_SIZE { w.balanced_oversize_penalty } else { 0.0 };

                coverage_pct * w.balanced_coverage
                    + (efficiency * w.balanced_efficiency).min(w.balanced_efficiency_cap)
                    + completion
                    - oversize
            }
        };

        if let Some(budget) = prefs.max_budget {
            if cost <= budget * w.budget_headroom {
                raw += w.budget_bonus;
            }
        }

        let savings = recommendations::estimate_savings(bundle, selection);
        let reasoning = explain(bundle, &covered, &uncovered, selection.len(), cost, savings, prefs.policy());

        Recommendation {
            services: bundle.services().iter().map(|s| (*s).clone()).collect(),
            total_monthly_cost: cost,
            total_yearly_cost: yearly_cost,
            covered_shows: covered.into_iter().cloned().collect(),
            uncovered_shows: uncovered.into_iter().cloned().collect(),
            savings,
            reasoning,
            score: round_cents(raw.min(MAX_SCORE)),
        }
    }
}

/// Rounds to two decimal places
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn explain(
    bundle: &Bundle<'_>,
    covered: &[&Show],
    uncovered: &[&Show],
    selected: usize,
    cost: f64,
    savings: f64,
    policy: OptimizationPolicy,
) -> String {
    let mut text = format!(
        "{} covers {} of {} selected shows for ${:.2}/month.",
        bundle.label(),
        covered.len(),
        selected,
        cost
    );

    if uncovered.is_empty() {
        if policy == OptimizationPolicy::Value && bundle.len() <= COMPACT_BUNDLE_SIZE {
            text.push_str(" Complete coverage with minimal subscriptions.");
        } else {
            text.push_str(" Complete coverage of your watchlist.");
        }
    } else {
        let missed: Vec<&str> = uncovered.iter().map(|s| s.title.as_str()).collect();
        text.push_str(&format!(" Missing: {}.", missed.join(", ")));
    }

    if savings > 0.0 {
        text.push_str(&format!(
            " Estimated savings of ${:.2}/month versus subscribing to every service separately.",
            savings
        ));
    }

    if bundle.len() == 1 {
        text.push_str(" A single subscription keeps things simple.");
    } else {
        text.push_str(" Combining services gives broader content access.");
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ContentType, Service};

    fn netflix() -> Service {
        Service::new("netflix", "Netflix", 15.49).with_yearly_price(185.88)
    }

    fn hulu() -> Service {
        Service::new("hulu", "Hulu", 7.99)
    }

    fn show_x() -> Show {
        Show::new("show-x", "Show X", 2020, ContentType::Series).available_on(["netflix"])
    }

    fn show_y() -> Show {
        Show::new("show-y", "Show Y", 2021, ContentType::Movie).available_on(["hulu"])
    }

    fn score(services: &[&Service], shows: &[Show], prefs: &Preferences) -> Recommendation {
        let bundle = Bundle::of(services.to_vec());
        let selection: Vec<&Show> = shows.iter().collect();
        CoverageScorer::default().score(&bundle, &selection, prefs)
    }

    #[test]
    fn test_partition_covers_every_selected_show_once() {
        let (n, h) = (netflix(), hulu());
        let shows = vec![show_x(), show_y()];
        let rec = score(&[&n], &shows, &Preferences::default());

        assert_eq!(rec.covered_shows, vec![show_x()]);
        assert_eq!(rec.uncovered_shows, vec![show_y()]);

        let rec = score(&[&n, &h], &shows, &Preferences::default());
        assert_eq!(rec.covered_shows.len(), 2);
        assert!(rec.uncovered_shows.is_empty());
    }

    #[test]
    fn test_value_policy_pair_with_full_coverage_is_capped() {
        let (n, h) = (netflix(), hulu());
        let rec = score(&[&n, &h], &[show_x(), show_y()], &Preferences::default());

        // 60 + 17 + 15 + 25
        assert_eq!(rec.score, 100.0);
        assert_eq!(rec.total_monthly_cost, 23.48);
        assert!(rec.total_yearly_cost.is_none());
    }

    #[test]
    fn test_value_policy_partial_coverage() {
        let n = netflix();
        let rec = score(&[&n], &[show_x(), show_y()], &Preferences::default());

        // 50% * 0.6 + 25 size bonus + capped efficiency 15
        assert_eq!(rec.score, 70.0);
    }

    #[test]
    fn test_value_policy_uncapped_efficiency() {
        let pricey = Service::new("netflix", "Netflix", 50.0);
        let shows = vec![
            show_x(),
            show_y(),
            Show::new("show-z", "Show Z", 2019, ContentType::Series).available_on(["hulu"]),
            Show::new("show-w", "Show W", 2018, ContentType::Movie),
        ];
        let rec = score(&[&pricey], &shows, &Preferences::default());

        // 25% * 0.6 + 25 + (25 / 50) * 5
        assert_eq!(rec.score, 42.5);
    }

    #[test]
    fn test_balanced_policy() {
        let (n, h) = (netflix(), hulu());
        let prefs = Preferences::default().balanced();

        let rec = score(&[&n], &[show_x(), show_y()], &prefs);
        // 50 * 0.5 + min(3.23 * 10, 30)
        assert_eq!(rec.score, 55.0);

        let rec = score(&[&n, &h], &[show_x(), show_y()], &prefs);
        assert_eq!(rec.score, 100.0);
    }

    #[test]
    fn test_budget_bonus_within_headroom() {
        let n = netflix();
        let shows = [show_x(), show_y()];

        let rec = score(&[&n], &shows, &Preferences::default().with_budget(20.0));
        assert_eq!(rec.score, 75.0);

        // 15.49 > 0.8 * 19
        let rec = score(&[&n], &shows, &Preferences::default().with_budget(19.0));
        assert_eq!(rec.score, 70.0);
    }

    #[test]
    fn test_zero_cost_bundle_has_no_efficiency_term() {
        let free = Service::new("netflix", "Free Netflix", 0.0);
        let rec = score(&[&free], &[show_x(), show_y()], &Preferences::default());

        assert_eq!(rec.total_monthly_cost, 0.0);
        assert_eq!(rec.score, 55.0);
        assert!(rec.score.is_finite());
    }

    #[test]
    fn test_oversized_bundle_penalty() {
        let services: Vec<Service> = (0..4)
            .map(|i| Service::new(format!("svc-{}", i), format!("Service {}", i), 10.0))
            .collect();
        let refs: Vec<&Service> = services.iter().collect();
        let show = Show::new("show-a", "Show A", 2020, ContentType::Series).available_on(["svc-0"]);

        let rec = score(&refs, &[show], &Preferences::default());
        // 60 + 1 + min(2.5 * 5, 15) + 15 - 20
        assert_eq!(rec.score, 68.5);
    }

    #[test]
    fn test_unavailable_show_is_never_covered() {
        let (n, h) = (netflix(), hulu());
        let nowhere = Show::new("lost", "Lost Media", 1970, ContentType::Movie);
        let rec = score(&[&n, &h], &[show_x(), nowhere.clone()], &Preferences::default());

        assert_eq!(rec.uncovered_shows, vec![nowhere]);
    }

    #[test]
    fn test_show_on_unknown_service_is_never_covered() {
        let (n, h) = (netflix(), hulu());
        let gem = Show::new("gem", "Hidden Gem", 2015, ContentType::Movie).available_on(["tubi"]);
        let rec = score(&[&n, &h], &[show_x(), gem.clone()], &Preferences::default());

        assert_eq!(rec.covered_shows, vec![show_x()]);
        assert_eq!(rec.uncovered_shows, vec![gem]);
        assert!(rec.reasoning.contains("Missing: Hidden Gem."));
    }

    #[test]
    fn test_yearly_totals_only_when_requested() {
        let (n, h) = (netflix(), hulu());
        let rec = score(&[&n, &h], &[show_x()], &Preferences::default().yearly());

        // 185.88 + 7.99 * 12
        assert_eq!(rec.total_yearly_cost, Some(281.76));
    }

    #[test]
    fn test_reasoning_for_compact_complete_bundle() {
        let (n, h) = (netflix(), hulu());
        let rec = score(&[&n, &h], &[show_x(), show_y()], &Preferences::default());

        assert!(rec.reasoning.starts_with("Netflix + Hulu covers 2 of 2 selected shows for $23.48/month."));
        assert!(rec.reasoning.contains("Complete coverage with minimal subscriptions"));
        assert!(rec.reasoning.contains("Estimated savings of $0.52/month"));
        assert!(rec.reasoning.contains("Combining services"));
    }

    #[test]
    fn test_reasoning_lists_missed_titles() {
        let n = netflix();
        let rec = score(&[&n], &[show_x(), show_y()], &Preferences::default());

        assert!(rec.reasoning.contains("Missing: Show Y."));
        assert!(!rec.reasoning.contains("Complete coverage"));
        assert!(!rec.reasoning.contains("savings"));
        assert!(rec.reasoning.contains("single subscription"));
    }

    #[test]
    fn test_reasoning_balanced_complete_has_no_compact_qualifier() {
        let (n, h) = (netflix(), hulu());
        let prefs = Preferences::default().balanced();
        let rec = score(&[&n, &h], &[show_x(), show_y()], &prefs);

        assert!(rec.reasoning.contains("Complete coverage of your watchlist."));
    }

    #[test]
    fn test_round_cents() {
        assert_eq!(round_cents(15.49 + 7.99), 23.48);
        assert_eq!(round_cents(70.004), 70.0);
    }
}
