use serde::{Deserialize, Serialize};

/// Months billed per year when a service has no yearly plan.
const MONTHS_PER_YEAR: f64 = 12.0;

/// Represents a subscription streaming service with its pricing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Service {
    /// Stable identifier (e.g., "netflix", "disney-plus")
    pub id: String,
    /// Display name of the service (e.g., "Netflix")
    pub name: String,
    /// Monthly price in currency units (e.g., 15.49)
    pub monthly_price: f64,
    /// Price of a yearly plan, if the service sells one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yearly_price: Option<f64>,
}

impl Service {
    /// Creates a service with monthly billing only
    pub fn new(id: impl Into<String>, name: impl Into<String>, monthly_price: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            monthly_price,
            yearly_price: None,
        }
    }

    /// Sets the yearly plan price
    pub fn with_yearly_price(mut self, yearly_price: f64) -> Self {
        self.yearly_price = Some(yearly_price);
        self
    }

    /// Yearly cost, falling back to twelve monthly payments
    pub fn effective_yearly_price(&self) -> f64 {
        self.yearly_price
            .unwrap_or(self.monthly_price * MONTHS_PER_YEAR)
    }
}
