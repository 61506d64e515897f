use serde::{Deserialize, Serialize};

/// Billing cycle the viewer is shopping for
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionType {
    #[default]
    Monthly,
    Yearly,
}

/// Scoring policy applied to candidate bundles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptimizationPolicy {
    /// Favors fewer services that still cover the watchlist
    Value,
    /// Weighs coverage and cost-efficiency evenly
    Balanced,
}

/// Viewer preferences for a recommendation request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Preferences {
    /// Prioritize fewer services with maximum coverage
    #[serde(default = "default_optimize_for_value")]
    pub optimize_for_value: bool,
    /// Monthly cost ceiling; unconstrained when absent
    #[serde(default)]
    pub max_budget: Option<f64>,
    #[serde(default)]
    pub subscription_type: SubscriptionType,
}

fn default_optimize_for_value() -> bool {
    true
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            optimize_for_value: default_optimize_for_value(),
            max_budget: None,
            subscription_type: SubscriptionType::Monthly,
        }
    }
}

impl Preferences {
    /// Policy selected by `optimize_for_value`
    pub fn policy(&self) -> OptimizationPolicy {
        if self.optimize_for_value {
            OptimizationPolicy::Value
        } else {
            OptimizationPolicy::Balanced
        }
    }

    pub fn with_budget(mut self, max_budget: f64) -> Self {
        self.max_budget = Some(max_budget);
        self
    }

    pub fn balanced(mut self) -> Self {
        self.optimize_for_value = false;
        self
    }

    pub fn yearly(mut self) -> Self {
        self.subscription_type = SubscriptionType::Yearly;
        self
    }
}

/// Show ids chosen by the viewer
///
/// Each id appears at most once; insertion order is kept for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct Selection {
    show_ids: Vec<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a show; returns false if it was already selected
    pub fn add(&mut self, show_id: impl Into<String>) -> bool {
        let show_id = show_id.into();
        if self.contains(&show_id) {
            return false;
        }
        self.show_ids.push(show_id);
        true
    }

    /// Removes a show; returns false if it was not selected
    pub fn remove(&mut self, show_id: &str) -> bool {
        let before = self.show_ids.len();
        self.show_ids.retain(|id| id != show_id);
        self.show_ids.len() != before
    }

    /// Adds the show if absent, removes it otherwise
    pub fn toggle(&mut self, show_id: &str) {
        if !self.remove(show_id) {
            self.show_ids.push(show_id.to_string());
        }
    }

    pub fn contains(&self, show_id: &str) -> bool {
        self.show_ids.iter().any(|id| id == show_id)
    }

    pub fn ids(&self) -> &[String] {
        &self.show_ids
    }

    pub fn len(&self) -> usize {
        self.show_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.show_ids.is_empty()
    }

    pub fn clear(&mut self) {
        self.show_ids.clear();
    }
}

impl From<Vec<String>> for Selection {
    fn from(show_ids: Vec<String>) -> Self {
        let mut selection = Selection::new();
        for id in show_ids {
            selection.add(id);
        }
        selection
    }
}

impl From<Selection> for Vec<String> {
    fn from(selection: Selection) -> Self {
        selection.show_ids
    }
}

impl FromIterator<String> for Selection {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        Selection::from(iter.into_iter().collect::<Vec<_>>())
    }
}
