//! Per-facility demand forecast.
//!
//! Produces a short-range demand estimate for every (date, facility) pair:
//! a base demand adjusted for weekday/weekend and season, plus uniform
//! noise, clamped to [0.1, 1.0]. The random source is injected like the
//! dataset generator's.

use chrono::{Datelike, NaiveDate, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::models::calendar::Weekday;

/// Default forecast horizon in days.
pub const DEFAULT_FORECAST_DAYS: u32 = 7;

/// Predicted demand for one facility on one date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastEntry {
    pub date: NaiveDate,
    /// Weekday name for the date
    pub day: Weekday,
    pub facility: String,
    /// Demand in [0.1, 1.0], rounded to two decimals
    pub predicted_demand: f64,
    /// Confidence in [0.85, 0.98]
    pub confidence: f64,
}

/// A forecast run: N consecutive dates × the facility catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemandForecast {
    pub start: NaiveDate,
    pub days: u32,
    pub entries: Vec<ForecastEntry>,
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Predict demand for a single date.
///
/// Base 0.7, +0.1 weekday / +0.2 weekend, +0.15 in summer (Jun–Aug),
/// −0.1 in winter (Dec–Feb), then uniform noise of ±0.1 and a clamp to
/// [0.1, 1.0].
fn predict_demand<R: Rng>(date: NaiveDate, rng: &mut R) -> f64 {
    let mut demand: f64 = 0.7;

    if date.weekday().num_days_from_monday() < 5 {
        demand += 0.1;
    } else {
        demand += 0.2;
    }

    match date.month() {
        6..=8 => demand += 0.15,
        12 | 1 | 2 => demand -= 0.1,
        _ => {}
    }

    demand += rng.gen_range(-0.1..=0.1);
    round2(demand.clamp(0.1, 1.0))
}

/// Forecast demand for `days` consecutive dates starting at `start`, for
/// every facility in the catalog.
pub fn forecast_demand<R: Rng>(
    facilities: &[String],
    start: NaiveDate,
    days: u32,
    rng: &mut R,
) -> DemandForecast {
    let mut entries = Vec::with_capacity(days as usize * facilities.len());

    for offset in 0..days {
        let date = start + chrono::Duration::days(i64::from(offset));
        let day = Weekday::ALL[date.weekday().num_days_from_monday() as usize];
        for facility in facilities {
            let predicted_demand = predict_demand(date, rng);
            let confidence = rng.gen_range(0.85..=0.98);
            entries.push(ForecastEntry {
                date,
                day,
                facility: facility.clone(),
                predicted_demand,
                confidence,
            });
        }
    }

    DemandForecast {
        start,
        days,
        entries,
    }
}

/// Today's date in UTC, the default forecast start.
pub fn default_start() -> NaiveDate {
    Utc::now().date_naive()
}
