//! Usage records: one synthetic utilization sample per (day, hour, facility, tier) slot.

use serde::{Deserialize, Serialize};

use super::calendar::{is_prime_time, Weekday};

/// Lower clamp bound for usage percentage.
pub const MIN_USAGE: u8 = 5;
/// Upper clamp bound for usage percentage.
pub const MAX_USAGE: u8 = 100;

/// A single synthetic utilization sample.
///
/// Records are immutable once generated; regeneration replaces the whole
/// collection rather than mutating in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageRecord {
    /// Day of week
    pub day: Weekday,
    /// Monday-first day index (0–6), derived from `day`
    pub day_index: u8,
    /// Hour of day within the operating range
    pub hour: u8,
    /// Facility name from the catalog
    pub facility: String,
    /// Member tier name from the catalog
    pub member_tier: String,
    /// Utilization percentage, clamped to [5, 100]
    pub usage_percentage: u8,
    /// True when `hour` falls in a prime-time window
    pub is_prime_time: bool,
    /// True for Saturday and Sunday
    pub is_weekend: bool,
}

impl UsageRecord {
    /// Build a record for a slot, deriving the index and cohort flags.
    pub fn new(
        day: Weekday,
        hour: u8,
        facility: impl Into<String>,
        member_tier: impl Into<String>,
        usage_percentage: u8,
    ) -> Self {
        Self {
            day,
            day_index: day.index(),
            hour,
            facility: facility.into(),
            member_tier: member_tier.into(),
            usage_percentage,
            is_prime_time: is_prime_time(hour),
            is_weekend: day.is_weekend(),
        }
    }

    /// Cohort label for the time dimension.
    pub fn time_category(&self) -> &'static str {
        if self.is_prime_time {
            "Prime Time"
        } else {
            "Off-Peak"
        }
    }

    /// Cohort label for the day dimension.
    pub fn day_category(&self) -> &'static str {
        if self.is_weekend {
            "Weekend"
        } else {
            "Weekday"
        }
    }
}
