//! Property tests for the generation and aggregation contracts.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;

use courtmetrics::config::EngineConfig;
use courtmetrics::models::{GenerationSpec, UsageRecord, Weekday};
use courtmetrics::services::{build_matrix, compute_insights, generate};

fn arb_spec() -> impl Strategy<Value = GenerationSpec> {
    let config = EngineConfig::default();
    let hours = config.hour_axis();
    let facilities = config.facility_names();
    let tiers = config.tier_names();

    (
        proptest::sample::subsequence(Weekday::ALL.to_vec(), 1..=7),
        proptest::sample::subsequence(hours, 1..=17),
        proptest::sample::subsequence(facilities, 1..=5),
        proptest::sample::subsequence(tiers, 1..=4),
    )
        .prop_map(|(days, hours, facilities, tiers)| GenerationSpec {
            days,
            hours,
            facilities,
            tiers,
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn generation_covers_cross_product(spec in arb_spec(), seed in any::<u64>()) {
        let config = EngineConfig::default();
        let records = generate(&config, &spec, &mut StdRng::seed_from_u64(seed));

        prop_assert_eq!(records.len(), spec.record_count());

        let tuples: HashSet<_> = records
            .iter()
            .map(|r| (r.day, r.hour, r.facility.clone(), r.member_tier.clone()))
            .collect();
        prop_assert_eq!(tuples.len(), records.len());
    }

    #[test]
    fn usage_and_flags_hold_for_every_record(spec in arb_spec(), seed in any::<u64>()) {
        let config = EngineConfig::default();
        let records = generate(&config, &spec, &mut StdRng::seed_from_u64(seed));

        for record in &records {
            prop_assert!((5..=100).contains(&record.usage_percentage));
            let expected_prime =
                (7..=10).contains(&record.hour) || (18..=21).contains(&record.hour);
            prop_assert_eq!(record.is_prime_time, expected_prime);
            prop_assert_eq!(record.is_weekend, record.day_index >= 5);
        }
    }

    #[test]
    fn unfiltered_matrix_is_rectangular(spec in arb_spec(), seed in any::<u64>()) {
        let config = EngineConfig::default();
        let records = generate(&config, &spec, &mut StdRng::seed_from_u64(seed));

        let matrix = build_matrix(&records, &spec.hours, Some("all"), Some("all"));
        prop_assert_eq!(matrix.hours.len(), spec.hours.len());
        prop_assert_eq!(matrix.days.len(), 7);
        for row in &matrix.values {
            prop_assert_eq!(row.len(), 7);
        }
    }

    #[test]
    fn filtered_matrix_matches_manual_average(spec in arb_spec(), seed in any::<u64>()) {
        let config = EngineConfig::default();
        let records = generate(&config, &spec, &mut StdRng::seed_from_u64(seed));

        let facility = spec.facilities[0].as_str();
        let tier = spec.tiers[0].as_str();
        let matrix = build_matrix(&records, &spec.hours, Some(facility), Some(tier));

        for &hour in &spec.hours {
            for day in Weekday::ALL {
                let subset: Vec<&UsageRecord> = records
                    .iter()
                    .filter(|r| {
                        r.facility == facility
                            && r.member_tier == tier
                            && r.hour == hour
                            && r.day == day
                    })
                    .collect();
                let expected = if subset.is_empty() {
                    0.0
                } else {
                    subset.iter().map(|r| f64::from(r.usage_percentage)).sum::<f64>()
                        / subset.len() as f64
                };
                let actual = matrix.value_at(hour, day).unwrap();
                prop_assert!((actual - expected).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn boosts_recompute_from_reported_averages(seed in any::<u64>()) {
        let config = EngineConfig::default();
        let spec = GenerationSpec::full(&config);
        let records = generate(&config, &spec, &mut StdRng::seed_from_u64(seed));

        let insights = compute_insights(&records);
        let p = insights.prime_time_avg;
        let o = insights.off_peak_avg;
        prop_assert!(o > 0.0);

        let recomputed = (p - o) / o * 100.0;
        // The reported averages are rounded to one decimal while the boost is
        // computed from the unrounded means, so allow for the rounding error
        // the recomputation inherits.
        let tolerance = 100.0 * 0.051 * (1.0 + p / o) / o + 0.051;
        prop_assert!(
            (insights.prime_time_boost - recomputed).abs() <= tolerance,
            "reported {} vs recomputed {} (tolerance {})",
            insights.prime_time_boost,
            recomputed,
            tolerance
        );

        let we = insights.weekend_avg;
        let wd = insights.weekday_avg;
        prop_assert!(wd > 0.0);

        let recomputed_weekend = (we - wd) / wd * 100.0;
        let weekend_tolerance = 100.0 * 0.051 * (1.0 + we / wd) / wd + 0.051;
        prop_assert!(
            (insights.weekend_boost - recomputed_weekend).abs() <= weekend_tolerance,
            "reported {} vs recomputed {} (tolerance {})",
            insights.weekend_boost,
            recomputed_weekend,
            weekend_tolerance
        );
    }
}

#[test]
fn single_slot_scenario_tags_prime_weekday() {
    let config = EngineConfig::default();
    let spec = GenerationSpec {
        days: vec![Weekday::Monday],
        hours: vec![18],
        facilities: vec!["Basketball Courts".to_string()],
        tiers: vec!["Basic Member".to_string()],
    };

    let records = generate(&config, &spec, &mut StdRng::seed_from_u64(4));
    assert_eq!(records.len(), 1);
    assert!(records[0].is_prime_time);
    assert!(!records[0].is_weekend);
}

#[test]
fn absent_facility_filter_yields_empty_matrix() {
    let config = EngineConfig::default();
    let spec = GenerationSpec::full(&config);
    let records = generate(&config, &spec, &mut StdRng::seed_from_u64(4));

    let matrix = build_matrix(&records, &spec.hours, Some("Tennis Courts"), None);
    assert!(matrix.is_empty());
}

#[test]
fn full_dataset_matrix_has_no_empty_cells() {
    let config = EngineConfig::default();
    let spec = GenerationSpec::full(&config);
    let records = generate(&config, &spec, &mut StdRng::seed_from_u64(4));

    let matrix = build_matrix(&records, &spec.hours, None, None);
    assert_eq!(matrix.hours.len(), 17);
    for row in &matrix.values {
        for &cell in row {
            // Every cell of the full cross product has records, and clamped
            // usage is at least 5.
            assert!(cell >= 5.0);
        }
    }
}
