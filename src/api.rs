//! Public API surface for the Rust backend.
//!
//! This file consolidates the DTO types for the HTTP API.
//! All types derive Serialize/Deserialize for JSON serialization.

pub use crate::routes::analytics::AnalyticsSnapshot;
pub use crate::routes::analytics::CrowdDistributionSlice;
pub use crate::routes::analytics::SlotLevel;
pub use crate::routes::analytics::TempleComparisonRow;
pub use crate::routes::analytics::WeeklyTrendPoint;
pub use crate::routes::landing::TempleInfo;
pub use crate::routes::prediction::DayPrediction;
pub use crate::routes::prediction::PredictionResult;
pub use crate::routes::prediction::WeekPrediction;

use serde::{Deserialize, Serialize};

/// Temple identifier (roster key, e.g. `"mahakaleshwar"`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TempleId(pub String);

impl TempleId {
    pub fn new(value: impl Into<String>) -> Self {
        TempleId(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TempleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TempleId {
    fn from(value: &str) -> Self {
        TempleId(value.to_string())
    }
}

/// Three-valued crowd classification produced by the scoring engine.
///
/// Serialized as `"Low"` / `"Medium"` / `"High"`, matching the values the
/// frontend renders and the hosted backend stores.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CrowdLevel {
    Low,
    Medium,
    High,
}

impl CrowdLevel {
    /// The three levels in fixed Low, Medium, High order.
    ///
    /// This order is load-bearing: the majority-vote tally in analytics
    /// counts into it and resolves ties toward the earlier level.
    pub const ALL: [CrowdLevel; 3] = [CrowdLevel::Low, CrowdLevel::Medium, CrowdLevel::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            CrowdLevel::Low => "Low",
            CrowdLevel::Medium => "Medium",
            CrowdLevel::High => "High",
        }
    }
}

impl std::fmt::Display for CrowdLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

pub use crate::models::temple::TempleRef;

#[cfg(test)]
#[path = "api_tests.rs"]
mod api_tests;
