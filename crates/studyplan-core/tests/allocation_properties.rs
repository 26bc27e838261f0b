//! Property tests for the allocation engine.
//!
//! Pins down the documented numeric behavior: per-day rounding drift stays
//! bounded, equal weights get equal shares, and the engine is fully
//! deterministic.

use chrono::{Days, NaiveDate};
use proptest::prelude::*;
use studyplan_core::{allocate, Subject};

fn start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

fn subjects_strategy() -> impl Strategy<Value = Vec<Subject>> {
    prop::collection::vec((1u8..=3, "[A-Za-z]{1,12}"), 1..8).prop_map(|specs| {
        specs
            .into_iter()
            .map(|(priority, name)| Subject::new(name, priority))
            .collect()
    })
}

proptest! {
    // Shares are rounded independently with no remainder redistribution,
    // so a day's total may drift from the nominal budget -- but never by
    // more than one minute per subject.
    #[test]
    fn per_day_total_stays_within_drift_bound(
        subjects in subjects_strategy(),
        half_hours in 1u32..=24,
        days in 1u32..=30,
    ) {
        let hours_per_day = f64::from(half_hours) * 0.5;
        let tasks = allocate(&subjects, hours_per_day, days, start_date()).unwrap();

        let minutes_per_day = (hours_per_day * 60.0).round() as i64;
        for day in 0..days {
            let date = start_date() + Days::new(u64::from(day));
            let total: i64 = tasks
                .iter()
                .filter(|t| t.date == date)
                .map(|t| i64::from(t.duration_minutes))
                .sum();
            prop_assert!(
                (total - minutes_per_day).abs() <= subjects.len() as i64,
                "day {day}: total {total} drifted more than {} from {minutes_per_day}",
                subjects.len()
            );
        }
    }

    #[test]
    fn equal_priorities_share_equally(
        priority in 1u8..=3,
        count in 1usize..6,
        half_hours in 1u32..=24,
    ) {
        let subjects: Vec<Subject> = (0..count)
            .map(|i| Subject::new(format!("Subject{i}"), priority))
            .collect();

        let tasks =
            allocate(&subjects, f64::from(half_hours) * 0.5, 1, start_date()).unwrap();

        if let Some(first) = tasks.first() {
            prop_assert!(tasks
                .iter()
                .all(|t| t.duration_minutes == first.duration_minutes));
        }
    }

    #[test]
    fn allocation_is_deterministic(
        subjects in subjects_strategy(),
        half_hours in 1u32..=24,
        days in 1u32..=30,
    ) {
        let hours_per_day = f64::from(half_hours) * 0.5;
        let first = allocate(&subjects, hours_per_day, days, start_date()).unwrap();
        let second = allocate(&subjects, hours_per_day, days, start_date()).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn emits_at_most_one_task_per_subject_per_day(
        subjects in subjects_strategy(),
        half_hours in 1u32..=24,
        days in 1u32..=30,
    ) {
        let hours_per_day = f64::from(half_hours) * 0.5;
        let tasks = allocate(&subjects, hours_per_day, days, start_date()).unwrap();

        prop_assert!(tasks.len() <= subjects.len() * days as usize);
        prop_assert!(tasks.iter().all(|t| t.duration_minutes > 0));
    }
}
