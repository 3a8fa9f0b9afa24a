use chrono::{Datelike, NaiveDate, Weekday};

/// True when the date falls on a Saturday or Sunday.
///
/// Weekend days carry a +20 crowd modifier; the frontend highlights them the
/// same way.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Short weekday label ("Mon", "Tue", ...), as shown in the week projection.
pub fn short_day_name(date: NaiveDate) -> String {
    date.format("%a").to_string()
}

/// Short date label ("Mar 8"), as shown on the weekly trend axis.
pub fn short_date_label(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}

/// ISO calendar date string ("2025-03-08").
///
/// This exact format participates in the prediction seed, so it must stay
/// byte-identical to what the hosted backend stores as `prediction_date`.
pub fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
