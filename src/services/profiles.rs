//! Usage profile aggregations for the dashboard's secondary charts.
//!
//! All four breakdowns are computed over the same optionally-filtered record
//! set: hourly and daily mean-usage curves, and per-facility / per-tier
//! comparisons split into overall, prime-time, and off-peak means. Cohorts
//! with no surviving records report 0.0 rather than being dropped, so the
//! chart axes stay stable across filters.

use serde::{Deserialize, Serialize};

use super::heatmap::apply_filters;
use crate::models::calendar::{is_prime_time, Weekday};
use crate::models::record::UsageRecord;

/// Mean usage for one hour of the operating range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyPoint {
    pub hour: u8,
    pub average_usage: f64,
    pub is_prime_time: bool,
}

/// Mean usage for one weekday.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyPoint {
    pub day: Weekday,
    pub average_usage: f64,
    pub is_weekend: bool,
}

/// Overall/prime/off-peak means for one facility or tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CohortBreakdown {
    pub name: String,
    pub average_usage: f64,
    pub prime_time_avg: f64,
    pub off_peak_avg: f64,
}

/// All profile aggregations for one filtered view of a dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageProfiles {
    /// One point per hour of the operating range
    pub hourly: Vec<HourlyPoint>,
    /// One point per weekday, Monday→Sunday
    pub daily: Vec<DailyPoint>,
    /// One row per catalog facility
    pub facilities: Vec<CohortBreakdown>,
    /// One row per catalog tier
    pub tiers: Vec<CohortBreakdown>,
}

fn mean_usage(records: &[&UsageRecord]) -> f64 {
    if records.is_empty() {
        return 0.0;
    }
    let sum: f64 = records
        .iter()
        .map(|r| f64::from(r.usage_percentage))
        .sum();
    sum / records.len() as f64
}

fn breakdown(name: &str, records: &[&UsageRecord]) -> CohortBreakdown {
    let prime: Vec<&UsageRecord> = records
        .iter()
        .filter(|r| r.is_prime_time)
        .copied()
        .collect();
    let off_peak: Vec<&UsageRecord> = records
        .iter()
        .filter(|r| !r.is_prime_time)
        .copied()
        .collect();

    CohortBreakdown {
        name: name.to_string(),
        average_usage: mean_usage(records),
        prime_time_avg: mean_usage(&prime),
        off_peak_avg: mean_usage(&off_peak),
    }
}

/// Build the profile aggregations over the filtered record set.
///
/// `hour_axis`, `facility_names`, and `tier_names` are the dataset's axes,
/// passed explicitly so empty cohorts still get rows.
pub fn build_profiles(
    records: &[UsageRecord],
    hour_axis: &[u8],
    facility_names: &[String],
    tier_names: &[String],
    facility_filter: Option<&str>,
    tier_filter: Option<&str>,
) -> UsageProfiles {
    let filtered = apply_filters(records, facility_filter, tier_filter);

    let hourly = hour_axis
        .iter()
        .map(|&hour| {
            let slot: Vec<&UsageRecord> =
                filtered.iter().filter(|r| r.hour == hour).copied().collect();
            HourlyPoint {
                hour,
                average_usage: mean_usage(&slot),
                is_prime_time: is_prime_time(hour),
            }
        })
        .collect();

    let daily = Weekday::ALL
        .iter()
        .map(|&day| {
            let slot: Vec<&UsageRecord> =
                filtered.iter().filter(|r| r.day == day).copied().collect();
            DailyPoint {
                day,
                average_usage: mean_usage(&slot),
                is_weekend: day.is_weekend(),
            }
        })
        .collect();

    let facilities = facility_names
        .iter()
        .map(|name| {
            let slot: Vec<&UsageRecord> = filtered
                .iter()
                .filter(|r| &r.facility == name)
                .copied()
                .collect();
            breakdown(name, &slot)
        })
        .collect();

    let tiers = tier_names
        .iter()
        .map(|name| {
            let slot: Vec<&UsageRecord> = filtered
                .iter()
                .filter(|r| &r.member_tier == name)
                .copied()
                .collect();
            breakdown(name, &slot)
        })
        .collect();

    UsageProfiles {
        hourly,
        daily,
        facilities,
        tiers,
    }
}
