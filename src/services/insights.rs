//! Derived summary statistics over a record set.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::collections::HashMap;

use crate::models::calendar::Weekday;
use crate::models::record::UsageRecord;

/// Summary insights over a dataset's record set.
///
/// Cohort averages are reported rounded to one decimal. The boosts are
/// computed from the unrounded means and then rounded; when a denominator
/// cohort is empty or averages to zero the boost reports 0.0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatmapInsights {
    /// Hour with the highest mean usage; `None` for an empty record set
    pub peak_hour: Option<u8>,
    /// Day with the highest mean usage; `None` for an empty record set
    pub peak_day: Option<Weekday>,
    pub prime_time_avg: f64,
    pub off_peak_avg: f64,
    pub weekend_avg: f64,
    pub weekday_avg: f64,
    /// Each facility's own peak hour, computed over that facility's records
    pub facility_peaks: BTreeMap<String, u8>,
    /// Relative prime-time vs off-peak difference, percent
    pub prime_time_boost: f64,
    /// Relative weekend vs weekday difference, percent
    pub weekend_boost: f64,
}

impl HeatmapInsights {
    /// Insights for an empty record set: no peaks, zero averages and boosts.
    pub fn empty() -> Self {
        Self {
            peak_hour: None,
            peak_day: None,
            prime_time_avg: 0.0,
            off_peak_avg: 0.0,
            weekend_avg: 0.0,
            weekday_avg: 0.0,
            facility_peaks: BTreeMap::new(),
            prime_time_boost: 0.0,
            weekend_boost: 0.0,
        }
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Mean usage over records matching the predicate; 0.0 for an empty cohort.
fn cohort_mean<F>(records: &[UsageRecord], predicate: F) -> f64
where
    F: Fn(&UsageRecord) -> bool,
{
    let mut sum = 0.0;
    let mut count = 0usize;
    for record in records.iter().filter(|r| predicate(r)) {
        sum += f64::from(record.usage_percentage);
        count += 1;
    }
    if count > 0 {
        sum / count as f64
    } else {
        0.0
    }
}

/// Relative percentage difference between two cohort means; 0.0 when the
/// denominator is zero.
fn boost(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        round1((numerator - denominator) / denominator * 100.0)
    } else {
        0.0
    }
}

/// The hour with the highest mean usage, scanning hours in ascending order
/// so ties break toward the earliest.
fn peak_hour(records: &[&UsageRecord]) -> Option<u8> {
    let mut bins: HashMap<u8, (f64, usize)> = HashMap::new();
    for record in records {
        let bin = bins.entry(record.hour).or_insert((0.0, 0));
        bin.0 += f64::from(record.usage_percentage);
        bin.1 += 1;
    }

    let mut hours: Vec<u8> = bins.keys().copied().collect();
    hours.sort_unstable();

    let mut best: Option<(u8, f64)> = None;
    for hour in hours {
        let (sum, count) = bins[&hour];
        let mean = sum / count as f64;
        match best {
            Some((_, best_mean)) if mean <= best_mean => {}
            _ => best = Some((hour, mean)),
        }
    }
    best.map(|(hour, _)| hour)
}

/// The day with the highest mean usage, Monday-first tie-breaking.
fn peak_day(records: &[UsageRecord]) -> Option<Weekday> {
    let mut best: Option<(Weekday, f64)> = None;
    for day in Weekday::ALL {
        let day_records: Vec<&UsageRecord> = records.iter().filter(|r| r.day == day).collect();
        if day_records.is_empty() {
            continue;
        }
        let mean = day_records
            .iter()
            .map(|r| f64::from(r.usage_percentage))
            .sum::<f64>()
            / day_records.len() as f64;
        match best {
            Some((_, best_mean)) if mean <= best_mean => {}
            _ => best = Some((day, mean)),
        }
    }
    best.map(|(day, _)| day)
}

/// Compute all summary insights over a record set.
pub fn compute_insights(records: &[UsageRecord]) -> HeatmapInsights {
    if records.is_empty() {
        return HeatmapInsights::empty();
    }

    let all: Vec<&UsageRecord> = records.iter().collect();

    let prime_time_avg = cohort_mean(records, |r| r.is_prime_time);
    let off_peak_avg = cohort_mean(records, |r| !r.is_prime_time);
    let weekend_avg = cohort_mean(records, |r| r.is_weekend);
    let weekday_avg = cohort_mean(records, |r| !r.is_weekend);

    let mut facility_peaks = BTreeMap::new();
    let mut facilities: Vec<&str> = records.iter().map(|r| r.facility.as_str()).collect();
    facilities.sort_unstable();
    facilities.dedup();
    for facility in facilities {
        let facility_records: Vec<&UsageRecord> =
            records.iter().filter(|r| r.facility == facility).collect();
        if let Some(hour) = peak_hour(&facility_records) {
            facility_peaks.insert(facility.to_string(), hour);
        }
    }

    HeatmapInsights {
        peak_hour: peak_hour(&all),
        peak_day: peak_day(records),
        prime_time_avg: round1(prime_time_avg),
        off_peak_avg: round1(off_peak_avg),
        weekend_avg: round1(weekend_avg),
        weekday_avg: round1(weekday_avg),
        facility_peaks,
        prime_time_boost: boost(prime_time_avg, off_peak_avg),
        weekend_boost: boost(weekend_avg, weekday_avg),
    }
}
