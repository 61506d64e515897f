use std::collections::HashSet;

use crate::{config::default_popular_services, models::Service};

/// Largest bundle the generator produces
pub const MAX_BUNDLE_SIZE: usize = 3;

/// A candidate set of one to three distinct services
#[derive(Debug, Clone, PartialEq)]
pub struct Bundle<'a> {
    services: Vec<&'a Service>,
}

impl<'a> Bundle<'a> {
    pub(crate) fn of(services: Vec<&'a Service>) -> Self {
        Self { services }
    }

    pub fn services(&self) -> &[&'a Service] {
        &self.services
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    /// Checks if any service in the bundle has the given id
    pub fn contains(&self, service_id: &str) -> bool {
        self.services.iter().any(|s| s.id == service_id)
    }

    /// Sum of monthly prices
    pub fn monthly_cost(&self) -> f64 {
        self.services.iter().map(|s| s.monthly_price).sum()
    }

    /// Sum of yearly prices, each falling back to twelve months
    pub fn yearly_cost(&self) -> f64 {
        self.services.iter().map(|s| s.effective_yearly_price()).sum()
    }

    /// Display names joined with " + "
    pub fn label(&self) -> String {
        self.services
            .iter()
            .map(|s| s.name.as_str())
            .collect::<Vec<_>>()
            .join(" + ")
    }
}

/// Enumerates candidate bundles from a service catalog
///
/// Produces every single service, every unordered pair, and every
/// unordered triple drawn only from the popular allowlist. Larger
/// bundles are never generated.
#[derive(Debug, Clone)]
pub struct BundleGenerator {
    popular: HashSet<String>,
}

impl Default for BundleGenerator {
    fn default() -> Self {
        Self::new(default_popular_services())
    }
}

impl BundleGenerator {
    /// Creates a generator whose triples are restricted to `popular` ids
    pub fn new<I, S>(popular: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            popular: popular.into_iter().map(Into::into).collect(),
        }
    }

    /// Checks if a service may appear in a three-service bundle
    pub fn is_popular(&self, service_id: &str) -> bool {
        self.popular.contains(service_id)
    }

    /// Generates bundles in a fixed order: singles, pairs, then triples
    ///
    /// Pairs and triples follow catalog order, so repeated calls over the
    /// same catalog yield identical sequences.
    pub fn generate<'a>(&self, services: &'a [Service]) -> Vec<Bundle<'a>> {
        let popular: Vec<&Service> = services
            .iter()
            .filter(|s| self.is_popular(&s.id))
            .collect();

        let n = services.len();
        let k = popular.len();
        let mut bundles = Vec::with_capacity(n + pairs(n) + triples(k));

        for service in services {
            bundles.push(Bundle::of(vec![service]));
        }

        for (i, first) in services.iter().enumerate() {
            for second in &services[i + 1..] {
                bundles.push(Bundle::of(vec![first, second]));
            }
        }

        for (i, first) in popular.iter().enumerate() {
            for (j, second) in popular.iter().enumerate().skip(i + 1) {
                for third in &popular[j + 1..] {
                    bundles.push(Bundle::of(vec![*first, *second, *third]));
                }
            }
        }

        tracing::debug!(
            services = n,
            popular = k,
            bundles = bundles.len(),
            "Generated candidate bundles"
        );

        bundles
    }
}

fn pairs(n: usize) -> usize {
    n * n.saturating_sub(1) / 2
}

fn triples(k: usize) -> usize {
    k * k.saturating_sub(1) * k.saturating_sub(2) / 6
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<Service> {
        vec![
            Service::new("netflix", "Netflix", 15.49),
            Service::new("disney-plus", "Disney+", 13.99),
            Service::new("hbo-max", "Max (HBO Max)", 15.99),
            Service::new("amazon-prime", "Amazon Prime Video", 8.99),
            Service::new("hulu", "Hulu", 7.99),
            Service::new("apple-tv-plus", "Apple TV+", 6.99),
            Service::new("peacock", "Peacock", 5.99),
        ]
    }

    #[test]
    fn test_bundle_counts() {
        let services = catalog();
        let bundles = BundleGenerator::default().generate(&services);

        let singles = bundles.iter().filter(|b| b.len() == 1).count();
        let doubles = bundles.iter().filter(|b| b.len() == 2).count();
        let triples = bundles.iter().filter(|b| b.len() == 3).count();

        assert_eq!(singles, 7);
        assert_eq!(doubles, 21); // C(7,2)
        assert_eq!(triples, 10); // C(5,3) over the popular five
        assert_eq!(bundles.len(), 38);
    }

    #[test]
    fn test_triples_only_use_popular_services() {
        let services = catalog();
        let generator = BundleGenerator::default();
        let bundles = generator.generate(&services);

        for bundle in bundles.iter().filter(|b| b.len() == 3) {
            assert!(bundle.services().iter().all(|s| generator.is_popular(&s.id)));
        }
        assert!(bundles.iter().all(|b| (1..=MAX_BUNDLE_SIZE).contains(&b.len())));
    }

    #[test]
    fn test_bundles_have_distinct_members() {
        let services = catalog();
        for bundle in BundleGenerator::default().generate(&services) {
            let ids: HashSet<&str> = bundle.services().iter().map(|s| s.id.as_str()).collect();
            assert_eq!(ids.len(), bundle.len());
        }
    }

    #[test]
    fn test_generation_order() {
        let services = catalog();
        let bundles = BundleGenerator::default().generate(&services);

        assert_eq!(bundles[0].label(), "Netflix");
        assert_eq!(bundles[7].label(), "Netflix + Disney+");
        assert_eq!(bundles[28].label(), "Netflix + Disney+ + Max (HBO Max)");
    }

    #[test]
    fn test_custom_allowlist() {
        let services = catalog();
        let generator = BundleGenerator::new(["hulu", "apple-tv-plus", "peacock"]);
        let bundles = generator.generate(&services);

        let triples: Vec<&Bundle<'_>> = bundles.iter().filter(|b| b.len() == 3).collect();
        assert_eq!(triples.len(), 1);
        assert_eq!(triples[0].label(), "Hulu + Apple TV+ + Peacock");
    }

    #[test]
    fn test_small_catalogs() {
        assert!(BundleGenerator::default().generate(&[]).is_empty());

        let services = vec![Service::new("netflix", "Netflix", 15.49)];
        let bundles = BundleGenerator::default().generate(&services);
        assert_eq!(bundles.len(), 1);
    }

    #[test]
    fn test_bundle_costs() {
        let services = vec![
            Service::new("netflix", "Netflix", 15.49).with_yearly_price(185.88),
            Service::new("hulu", "Hulu", 10.0),
        ];
        let bundles = BundleGenerator::default().generate(&services);
        let pair = &bundles[2];

        assert!(pair.contains("netflix") && pair.contains("hulu"));
        assert!((pair.monthly_cost() - 25.49).abs() < 1e-9);
        assert!((pair.yearly_cost() - 305.88).abs() < 1e-9);
    }
}
