//! Service layer: the prediction engine and analytics synthesis.
//!
//! Everything in this module is pure, synchronous computation over in-memory
//! values. The HTTP layer and tests call these functions directly; callers
//! supply the reference date and the temple roster.

pub mod analytics;

pub mod prediction;

pub mod seeded;

pub use analytics::generate_analytics;
pub use prediction::{find_best_time_slot, predict_day, predict_slot, predict_week};


#[cfg(test)]
#[path = "analytics_tests.rs"]
mod analytics_tests;
