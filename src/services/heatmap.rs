//! Heatmap matrix aggregation.
//!
//! Turns a filtered record set into a rectangular hour × day matrix of mean
//! usage. Rows cover every hour of the dataset's operating range (not just
//! hours present after filtering) and columns are always the seven days in
//! Monday→Sunday order; cells with no surviving records are 0.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::calendar::Weekday;
use crate::models::record::UsageRecord;

/// Rectangular hour × day matrix of mean usage percentages.
///
/// `values[i][j]` is the mean usage for `hours[i]` on `days[j]`. An empty
/// filtered set yields a matrix with no rows rather than an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatmapMatrix {
    /// Row axis: every hour of the operating range
    pub hours: Vec<u8>,
    /// Column axis: Monday→Sunday
    pub days: Vec<Weekday>,
    /// Mean usage per cell, 0.0 where no records survive filtering
    pub values: Vec<Vec<f64>>,
}

impl HeatmapMatrix {
    /// The explicitly-empty matrix: day columns only, no rows.
    pub fn empty() -> Self {
        Self {
            hours: Vec::new(),
            days: Weekday::ALL.to_vec(),
            values: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.hours.is_empty()
    }

    /// Cell lookup by hour and day, for consumers that don't index by
    /// position.
    pub fn value_at(&self, hour: u8, day: Weekday) -> Option<f64> {
        let row = self.hours.iter().position(|&h| h == hour)?;
        Some(self.values[row][day.index() as usize])
    }
}

/// True when the filter accepts the value; `None` and `"all"` disable the
/// filter.
pub(crate) fn filter_matches(filter: Option<&str>, value: &str) -> bool {
    match filter {
        None | Some("all") => true,
        Some(wanted) => wanted == value,
    }
}

/// Apply the facility/tier filters to a record set.
pub(crate) fn apply_filters<'a>(
    records: &'a [UsageRecord],
    facility: Option<&str>,
    tier: Option<&str>,
) -> Vec<&'a UsageRecord> {
    records
        .iter()
        .filter(|r| filter_matches(facility, &r.facility))
        .filter(|r| filter_matches(tier, &r.member_tier))
        .collect()
}

/// Build the hour × day matrix of mean usage over the filtered record set.
///
/// `hour_axis` is the dataset's operating range; passing it explicitly keeps
/// filtered matrices rectangular instead of shrinking to the hours that
/// happen to survive.
pub fn build_matrix(
    records: &[UsageRecord],
    hour_axis: &[u8],
    facility: Option<&str>,
    tier: Option<&str>,
) -> HeatmapMatrix {
    let filtered = apply_filters(records, facility, tier);
    if filtered.is_empty() {
        return HeatmapMatrix::empty();
    }

    // (day index, hour) -> (sum, count)
    let mut bins: HashMap<(u8, u8), (f64, usize)> = HashMap::new();
    for record in &filtered {
        let bin = bins.entry((record.day_index, record.hour)).or_insert((0.0, 0));
        bin.0 += f64::from(record.usage_percentage);
        bin.1 += 1;
    }

    let values = hour_axis
        .iter()
        .map(|&hour| {
            Weekday::ALL
                .iter()
                .map(|day| match bins.get(&(day.index(), hour)) {
                    Some((sum, count)) => sum / *count as f64,
                    None => 0.0,
                })
                .collect()
        })
        .collect();

    HeatmapMatrix {
        hours: hour_axis.to_vec(),
        days: Weekday::ALL.to_vec(),
        values,
    }
}
