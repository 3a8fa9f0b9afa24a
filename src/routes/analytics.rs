use serde::{Deserialize, Serialize};

use crate::api::{CrowdLevel, TempleId};

// =========================================================
// Analytics types + route
// =========================================================

/// One day of synthetic footfall volumes in the weekly trend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyTrendPoint {
    /// Short date label ("Mar 8").
    pub date: String,
    pub low: i32,
    pub medium: i32,
    pub high: i32,
}

/// One pie-chart slice of the crowd distribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrowdDistributionSlice {
    pub name: CrowdLevel,
    pub value: i32,
    /// Fixed display color (hex).
    pub color: String,
}

/// Crowd level for one coarse slot key ("Morning", ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotLevel {
    pub slot: String,
    pub level: CrowdLevel,
}

/// Per-temple crowd levels across the four coarse slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TempleComparisonRow {
    pub id: TempleId,
    pub name: String,
    pub slots: Vec<SlotLevel>,
}

/// Complete cross-temple analytics dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsSnapshot {
    /// 7 entries, oldest first, ending at the reference date.
    pub weekly_trend: Vec<WeeklyTrendPoint>,
    /// 3 entries in Low, Medium, High order.
    pub crowd_distribution: Vec<CrowdDistributionSlice>,
    pub temple_comparison: Vec<TempleComparisonRow>,
    /// 4 entries, one per coarse slot, in canonical order.
    pub today_crowd: Vec<SlotLevel>,
}

/// Route function name constant for analytics
pub const GET_ANALYTICS: &str = "get_analytics";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekly_trend_point_clone() {
        let point = WeeklyTrendPoint {
            date: "Mar 8".to_string(),
            low: 2,
            medium: 6,
            high: 4,
        };
        let cloned = point.clone();
        assert_eq!(cloned.medium, 6);
    }

    #[test]
    fn test_distribution_slice_serde_shape() {
        let slice = CrowdDistributionSlice {
            name: CrowdLevel::Low,
            value: 25,
            color: "#22c55e".to_string(),
        };
        let json = serde_json::to_value(&slice).unwrap();
        assert_eq!(json["name"], "Low");
        assert_eq!(json["value"], 25);
        assert_eq!(json["color"], "#22c55e");
    }

    #[test]
    fn test_slot_level_debug() {
        let entry = SlotLevel {
            slot: "Morning".to_string(),
            level: CrowdLevel::Medium,
        };
        let debug_str = format!("{:?}", entry);
        assert!(debug_str.contains("SlotLevel"));
    }

    #[test]
    fn test_comparison_row_serde_roundtrip() {
        let row = TempleComparisonRow {
            id: TempleId::new("khajrana"),
            name: "Khajrana Ganesh Temple".to_string(),
            slots: vec![SlotLevel {
                slot: "Night".to_string(),
                level: CrowdLevel::Low,
            }],
        };
        let json = serde_json::to_string(&row).unwrap();
        let back: TempleComparisonRow = serde_json::from_str(&json).unwrap();
        assert_eq!(back, row);
    }

    #[test]
    fn test_snapshot_debug() {
        let snapshot = AnalyticsSnapshot {
            weekly_trend: vec![],
            crowd_distribution: vec![],
            temple_comparison: vec![],
            today_crowd: vec![],
        };
        let debug_str = format!("{:?}", snapshot);
        assert!(debug_str.contains("AnalyticsSnapshot"));
    }

    #[test]
    fn test_const_value() {
        assert_eq!(GET_ANALYTICS, "get_analytics");
    }
}
