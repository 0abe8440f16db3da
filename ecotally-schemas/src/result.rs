use serde::{Deserialize, Serialize};

/// Per-mode transport sub-totals, kg CO2e per year.
/// The three fields sum to the transport category total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TransportDetail {
    pub car: f64,
    pub flight: f64,
    pub public_transit: f64,
}

impl TransportDetail {
    pub fn sum(&self) -> f64 {
        self.car + self.flight + self.public_transit
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct BreakdownDetail {
    pub transport: TransportDetail,
    pub diet: f64,
    pub electricity: f64,
}

/// Category sub-totals plus the grand total, kg CO2e per year.
/// Invariant: every component is non-negative and
/// `total == transport + diet + electricity`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct EmissionsBreakdown {
    pub transport: f64,
    pub diet: f64,
    pub electricity: f64,
    pub total: f64,
    pub breakdown: BreakdownDetail,
}

/// The full response for one calculation: the breakdown, the ranked
/// recommendations, and the national-average reference total for the
/// requested country. Derived once per request, never stored server-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub results: EmissionsBreakdown,
    pub recommendations: Vec<String>,
    pub national_average: f64,
}

/// Machine-readable error payload for the failure path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub reason: String,
    pub detail: String,
}
