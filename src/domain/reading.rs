// Normalized reading domain models
use super::snapshot::CurrentValue;
use serde::Serialize;

/// One glucose reading. The timestamp is kept in whatever unit the device
/// uses; it is only ever compared, never interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Sample {
    pub timestamp: i64,
    pub value: f64,
}

impl Sample {
    pub fn new(timestamp: i64, value: f64) -> Self {
        Self { timestamp, value }
    }
}

/// Flat result of normalizing one snapshot. `samples` is newest first.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NormalizedSnapshot {
    pub battery_level: Option<i64>,
    pub trend: Option<String>,
    pub current_value: Option<CurrentValue>,
    pub high_threshold: Option<f64>,
    pub low_threshold: Option<f64>,
    pub samples: Vec<Sample>,
}

impl NormalizedSnapshot {
    /// Result reported when no document could be obtained at all
    pub fn absent() -> Self {
        Self::default()
    }
}
