use serde::{Deserialize, Serialize};

/// A single point of the revenue chart.
///
/// The core produces these; the frontend plots them in the order given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    /// X-axis label, e.g. "Jan 15, 2024"
    pub label: String,

    /// Y value in USD
    pub value: f64,
}

impl ChartPoint {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}
