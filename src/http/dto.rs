//! Data Transfer Objects for the HTTP API.
//!
//! These DTOs are used for request/response serialization in the REST API.
//! The prediction and analytics DTOs are re-exported from the routes module
//! since they already derive Serialize/Deserialize.

use serde::{Deserialize, Serialize};

// Re-export existing DTOs that are already serializable
pub use crate::api::{
    // Analytics
    AnalyticsSnapshot, CrowdDistributionSlice, SlotLevel, TempleComparisonRow, WeeklyTrendPoint,
    // Landing
    TempleInfo,
    // Prediction
    DayPrediction, PredictionResult, WeekPrediction,
};

/// Query parameters for single-day prediction and best-slot endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PredictionQuery {
    /// Calendar date (YYYY-MM-DD); defaults to today (UTC)
    #[serde(default)]
    pub date: Option<String>,
    /// Weather condition label; defaults to "Clear"
    #[serde(default)]
    pub weather: Option<String>,
    /// Festival day flag; defaults to false
    #[serde(default)]
    pub festival: Option<bool>,
}

/// Response for the best-slot endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BestSlotResponse {
    /// Temple the recommendation is for
    pub temple_id: String,
    /// Date the recommendation is for (YYYY-MM-DD)
    pub date: String,
    /// Recommended time slot label
    pub best_time_slot: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Repository status
    pub repository: String,
}

/// Temple list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TempleListResponse {
    /// List of temples
    pub temples: Vec<TempleInfo>,
    /// Total count
    pub total: usize,
}
