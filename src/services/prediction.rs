//! Crowd scoring and prediction expansion.
//!
//! The elemental operation is [`predict_slot`]: an additive, clamped score
//! over temple category, time slot, weekend, festival, and weather factors,
//! jittered by the seeded offset and classified into a [`CrowdLevel`].
//! [`predict_day`] and [`predict_week`] expand it over the canonical slots
//! and a 7-day window; [`find_best_time_slot`] picks the least crowded slot.

use chrono::{Days, NaiveDate};

use crate::api::{CrowdLevel, DayPrediction, PredictionResult, WeekPrediction};
use crate::models::time::{is_weekend, iso_date, short_day_name};
use crate::services::seeded::seeded_offset;

/// Canonical time slots with display labels, in fixed order.
pub const TIME_SLOTS: [&str; 4] = [
    "Morning (6-10 AM)",
    "Afternoon (10 AM-4 PM)",
    "Evening (4-8 PM)",
    "Night (8 PM onwards)",
];

/// Coarse slot keys, in the same order as [`TIME_SLOTS`].
pub const SLOT_KEYS: [&str; 4] = ["Morning", "Afternoon", "Evening", "Night"];

/// Returned by [`find_best_time_slot`] when there is nothing to rank.
pub const BEST_SLOT_FALLBACK: &str = "Early morning before 6 AM";

/// Weather pattern applied across a week projection, indexed by day offset.
const WEEK_WEATHER_CYCLE: [&str; 7] = [
    "Clear", "Clear", "Sunny", "Cloudy", "Clear", "Clear", "Sunny",
];

/// Base crowd score for a temple category.
///
/// Unrecognized categories score as the generic local temple.
pub fn base_score(temple_type: &str) -> i32 {
    match temple_type {
        "Jyotirlinga" => 60,
        "Devi Temple" => 45,
        "Ganesh Temple" => 40,
        "Shiva Temple" => 35,
        _ => 30, // Local Temple and anything unmapped
    }
}

/// Score offset for a coarse slot key; unrecognized keys contribute 0.
fn slot_modifier(slot_key: &str) -> i32 {
    match slot_key {
        "Morning" => 10,
        "Afternoon" => 20,
        "Evening" => -10,
        "Night" => -5,
        _ => 0,
    }
}

/// Score offset for a weather condition; unrecognized conditions contribute 0.
fn weather_modifier(weather: &str) -> i32 {
    match weather {
        "Cloudy" => -5,
        "Rainy" => -20,
        "Hot" => 5,
        // "Clear" and "Sunny" are neutral
        _ => 0,
    }
}

/// Extract the coarse slot key from a display label.
///
/// "Morning (6-10 AM)" yields "Morning"; a label with no space is its own
/// key. Tests validate the canonical labels against the closed key set so a
/// drifting label fails loudly instead of silently scoring 0.
pub fn slot_key(slot_label: &str) -> &str {
    slot_label.split(' ').next().unwrap_or(slot_label)
}

/// Classify a clamped score into a crowd level.
///
/// Boundaries are inclusive on the Medium side: 40 and 75 are both Medium.
pub fn crowd_level_for_score(score: i32) -> CrowdLevel {
    if score < 40 {
        CrowdLevel::Low
    } else if score <= 75 {
        CrowdLevel::Medium
    } else {
        CrowdLevel::High
    }
}

/// Score a single (temple, date, slot) tuple.
///
/// Pure and infallible: every lookup has a fallback, the seeded jitter is
/// deterministic, and the final score is clamped to `[0, 100]`.
pub fn predict_slot(
    temple_id: &str,
    temple_type: &str,
    date: NaiveDate,
    slot: &str,
    weather: &str,
    is_festival: bool,
) -> PredictionResult {
    let mut score = base_score(temple_type);

    score += slot_modifier(slot_key(slot));

    if is_weekend(date) {
        score += 20;
    }

    if is_festival {
        score += 40;
    }

    score += weather_modifier(weather);

    // Seeded jitter in [-5, 5], stable per temple/date/slot.
    let seed_str = format!("{}-{}-{}", temple_id, iso_date(date), slot);
    score += seeded_offset(&seed_str);

    let score = score.clamp(0, 100);

    PredictionResult {
        time_slot: slot.to_string(),
        crowd_level: crowd_level_for_score(score),
        score,
        weather: weather.to_string(),
        is_festival,
    }
}

/// Predict all four canonical slots for one date, in canonical order.
pub fn predict_day(
    temple_id: &str,
    temple_type: &str,
    date: NaiveDate,
    weather: &str,
    is_festival: bool,
) -> DayPrediction {
    let predictions = TIME_SLOTS
        .iter()
        .map(|slot| predict_slot(temple_id, temple_type, date, slot, weather, is_festival))
        .collect();

    DayPrediction {
        date,
        day_name: short_day_name(date),
        predictions,
    }
}

/// Project the week starting at `today` (index 0 = today).
///
/// Weather varies across the week following a fixed cycle for realism;
/// festivals are never assumed in advance, so the flag is always false here.
pub fn predict_week(
    temple_id: &str,
    temple_type: &str,
    today: NaiveDate,
    base_weather: &str,
) -> WeekPrediction {
    let days = (0..7u64)
        .map(|i| {
            let date = today
                .checked_add_days(Days::new(i))
                .unwrap_or(today);
            let weather = WEEK_WEATHER_CYCLE
                .get(i as usize)
                .copied()
                .unwrap_or(base_weather);
            predict_day(temple_id, temple_type, date, weather, false)
        })
        .collect();

    WeekPrediction { days }
}

/// Pick the least crowded slot label.
///
/// Sorts a copy ascending by score with a stable sort, so score ties resolve
/// to the earliest slot in the input. Empty input yields the fixed
/// out-of-hours recommendation.
pub fn find_best_time_slot(predictions: &[PredictionResult]) -> String {
    if predictions.is_empty() {
        return BEST_SLOT_FALLBACK.to_string();
    }

    let mut sorted: Vec<&PredictionResult> = predictions.iter().collect();
    sorted.sort_by_key(|p| p.score);

    sorted[0].time_slot.clone()
}
