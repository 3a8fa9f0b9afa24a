//! Cross-temple analytics synthesis for the admin dashboard.
//!
//! Produces one [`AnalyticsSnapshot`] per call: a 7-day synthetic footfall
//! trend, the crowd distribution accumulated from it, a per-temple slot
//! comparison, and today's aggregate crowd by slot across the whole roster.
//! Everything is derived from the reference date and the roster passed in;
//! nothing is fetched or stored here.

use chrono::{Days, NaiveDate};

use crate::api::{
    AnalyticsSnapshot, CrowdDistributionSlice, CrowdLevel, SlotLevel, TempleComparisonRow,
    TempleRef, WeeklyTrendPoint,
};
use crate::models::temple::resolve_temple_type;
use crate::models::time::{is_weekend, iso_date, short_date_label};
use crate::services::prediction::{predict_slot, SLOT_KEYS};
use crate::services::seeded::{hash_string, seeded_random};

/// Fixed display colors for Low, Medium, High distribution slices.
const DISTRIBUTION_COLORS: [&str; 3] = ["#22c55e", "#eab308", "#ef4444"];

/// Day-level synthetic footfall counts (low, medium, high).
///
/// Decoupled from per-temple scoring: the trend models aggregate day-level
/// volumes, seeded by the date string alone, so it is independent of the
/// roster size. Weekend days shift the mix toward higher levels.
fn day_volume(date: NaiveDate) -> (i32, i32, i32) {
    let seed = hash_string(&iso_date(date));
    let weekend = is_weekend(date);

    let low = (seeded_random(seed) * 4.0).floor() as i32 + if weekend { 1 } else { 3 };
    let medium = (seeded_random(seed + 1) * 5.0).floor() as i32 + if weekend { 4 } else { 2 };
    let high = (seeded_random(seed + 2) * 4.0).floor() as i32 + if weekend { 3 } else { 1 };

    (low, medium, high)
}

/// Weekly trend for the 7 days ending at `today`, oldest first.
pub fn compute_weekly_trend(today: NaiveDate) -> Vec<WeeklyTrendPoint> {
    (0..7u64)
        .rev()
        .map(|i| {
            let date = today.checked_sub_days(Days::new(i)).unwrap_or(today);
            let (low, medium, high) = day_volume(date);
            WeeklyTrendPoint {
                date: short_date_label(date),
                low,
                medium,
                high,
            }
        })
        .collect()
}

/// Distribution slices accumulated over a weekly trend.
pub fn compute_crowd_distribution(trend: &[WeeklyTrendPoint]) -> Vec<CrowdDistributionSlice> {
    let totals = [
        trend.iter().map(|p| p.low).sum(),
        trend.iter().map(|p| p.medium).sum(),
        trend.iter().map(|p| p.high).sum(),
    ];

    CrowdLevel::ALL
        .iter()
        .zip(totals)
        .zip(DISTRIBUTION_COLORS)
        .map(|((level, value), color)| CrowdDistributionSlice {
            name: *level,
            value,
            color: color.to_string(),
        })
        .collect()
}

/// Per-temple crowd level for each coarse slot against the reference date.
///
/// Note the comparison scores the short slot keys ("Morning"), not the full
/// display labels, so its seeds differ from the day-expansion seeds.
pub fn compute_temple_comparison(
    temples: &[TempleRef],
    today: NaiveDate,
) -> Vec<TempleComparisonRow> {
    temples
        .iter()
        .map(|temple| {
            let kind = resolve_temple_type(temple.id.as_str(), temple.kind.as_deref());
            let slots = SLOT_KEYS
                .iter()
                .map(|slot| SlotLevel {
                    slot: slot.to_string(),
                    level: predict_slot(temple.id.as_str(), &kind, today, slot, "Clear", false)
                        .crowd_level,
                })
                .collect();

            TempleComparisonRow {
                id: temple.id.clone(),
                name: temple.name.clone(),
                slots,
            }
        })
        .collect()
}

/// Today's aggregate crowd per slot, by majority vote across all temples.
///
/// The tally is an ordered (level, count) list in fixed Low, Medium, High
/// order; on a tied count the level encountered first wins. This makes the
/// tie-break deterministic instead of depending on map iteration order.
pub fn compute_today_crowd(temples: &[TempleRef], today: NaiveDate) -> Vec<SlotLevel> {
    SLOT_KEYS
        .iter()
        .map(|slot| {
            let mut tally: Vec<(CrowdLevel, usize)> =
                CrowdLevel::ALL.iter().map(|l| (*l, 0)).collect();

            for temple in temples {
                let kind = resolve_temple_type(temple.id.as_str(), temple.kind.as_deref());
                let level = predict_slot(temple.id.as_str(), &kind, today, slot, "Clear", false)
                    .crowd_level;
                if let Some(entry) = tally.iter_mut().find(|(l, _)| *l == level) {
                    entry.1 += 1;
                }
            }

            let mut majority = tally[0];
            for entry in &tally[1..] {
                if entry.1 > majority.1 {
                    majority = *entry;
                }
            }

            SlotLevel {
                slot: slot.to_string(),
                level: majority.0,
            }
        })
        .collect()
}

/// Synthesize the full analytics snapshot for a roster.
///
/// `today` is captured once by the caller and reused throughout so all four
/// sections of the snapshot agree on the reference date.
pub fn generate_analytics(temples: &[TempleRef], today: NaiveDate) -> AnalyticsSnapshot {
    let weekly_trend = compute_weekly_trend(today);
    let crowd_distribution = compute_crowd_distribution(&weekly_trend);
    let temple_comparison = compute_temple_comparison(temples, today);
    let today_crowd = compute_today_crowd(temples, today);

    AnalyticsSnapshot {
        weekly_trend,
        crowd_distribution,
        temple_comparison,
        today_crowd,
    }
}
