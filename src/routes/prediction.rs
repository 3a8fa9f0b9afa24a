use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::api::CrowdLevel;

// =========================================================
// Prediction types + route
// =========================================================

/// Crowd prediction for a single time slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Full display label, e.g. "Morning (6-10 AM)".
    pub time_slot: String,
    pub crowd_level: CrowdLevel,
    /// Clamped score in [0, 100].
    pub score: i32,
    pub weather: String,
    pub is_festival: bool,
}

/// All four slot predictions for one calendar date, in canonical order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayPrediction {
    pub date: NaiveDate,
    /// Short weekday label ("Sat").
    pub day_name: String,
    pub predictions: Vec<PredictionResult>,
}

/// Seven consecutive day predictions; index 0 is the reference "today".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekPrediction {
    pub days: Vec<DayPrediction>,
}

/// Route function name constants for prediction endpoints
pub const GET_DAY_PREDICTIONS: &str = "get_day_predictions";
pub const GET_WEEK_PREDICTIONS: &str = "get_week_predictions";
pub const GET_BEST_SLOT: &str = "get_best_slot";
