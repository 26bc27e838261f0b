//! Proportional study-time allocator.
//!
//! Splits a daily time budget across subjects by priority weight:
//! - Derives per-subject weights from priority tiers (high 3x, medium 2x, low 1x)
//! - Gives each subject `round(weight / total_weight * minutes_per_day)` minutes per day
//! - Emits one task per subject per day, days in order, subjects in input order
//! - Drops zero-minute shares instead of emitting empty tasks
//!
//! Each share is rounded independently (round-half-away-from-zero via
//! `f64::round`), with no remainder redistribution pass. Per-day totals can
//! therefore drift from the nominal budget by up to one minute per weighted
//! subject. The drift is an accepted approximation and is pinned down by the
//! property tests in `tests/allocation_properties.rs`.
//!
//! The allocator performs no I/O, reads no clock, and uses no randomness:
//! identical inputs produce identical output, and it is safe to call
//! concurrently from any number of request contexts.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::AllocationError;
use crate::subject::Subject;

/// Ceiling for daily study hours.
pub const MAX_HOURS_PER_DAY: f64 = 12.0;
/// Minimum plan length in days.
pub const MIN_PLAN_DAYS: u32 = 1;
/// Maximum plan length in days.
pub const MAX_PLAN_DAYS: u32 = 30;

/// A study task scheduled on a calendar date.
///
/// The engine hands these to the caller; persisting them (with completion
/// tracking) is the caller's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledTask {
    /// Calendar date, no time component.
    pub date: NaiveDate,
    /// Task label, derived as "Study {subject name}".
    pub task: String,
    /// Whole minutes of study time, always > 0.
    pub duration_minutes: u32,
    /// Originating subject.
    pub subject_id: String,
}

/// Allocate a multi-day study plan across `subjects`.
///
/// For each day in `[start_date, start_date + num_days)`, every subject
/// receives a share of the daily minute budget proportional to its priority
/// weight. Subjects whose priority lies outside the documented tiers carry
/// no weight and are skipped.
///
/// # Arguments
/// * `subjects` - Non-empty subject list; iteration order fixes task order
/// * `hours_per_day` - Daily budget in hours, within `(0, 12]`
/// * `num_days` - Plan length in days, within `[1, 30]`
/// * `start_date` - First day of the plan (pure calendar arithmetic from here)
///
/// # Errors
/// * [`AllocationError::EmptyInput`] when `subjects` is empty, or when every
///   subject was excluded for an out-of-range priority
/// * [`AllocationError::InvalidRange`] when `hours_per_day` (including NaN)
///   or `num_days` falls outside its range
pub fn allocate(
    subjects: &[Subject],
    hours_per_day: f64,
    num_days: u32,
    start_date: NaiveDate,
) -> Result<Vec<ScheduledTask>, AllocationError> {
    if subjects.is_empty() {
        return Err(AllocationError::EmptyInput);
    }
    if !(hours_per_day > 0.0 && hours_per_day <= MAX_HOURS_PER_DAY) {
        return Err(AllocationError::InvalidRange {
            field: "hours_per_day",
            value: hours_per_day,
            min: 0.0,
            max: MAX_HOURS_PER_DAY,
        });
    }
    if !(MIN_PLAN_DAYS..=MAX_PLAN_DAYS).contains(&num_days) {
        return Err(AllocationError::InvalidRange {
            field: "num_days",
            value: f64::from(num_days),
            min: f64::from(MIN_PLAN_DAYS),
            max: f64::from(MAX_PLAN_DAYS),
        });
    }

    // Out-of-tier priorities are a data-integrity fault: they carry no
    // weight rather than an arbitrary one. If that leaves nothing to
    // allocate to, the run degenerates to an empty input.
    let total_weight: u32 = subjects.iter().filter_map(Subject::weight).sum();
    if total_weight == 0 {
        return Err(AllocationError::EmptyInput);
    }

    let minutes_per_day = (hours_per_day * 60.0).round();

    let mut tasks = Vec::with_capacity(subjects.len() * num_days as usize);
    for day in 0..num_days {
        let date = start_date + Days::new(u64::from(day));
        for subject in subjects {
            let Some(weight) = subject.weight() else {
                continue;
            };
            let share = f64::from(weight) / f64::from(total_weight) * minutes_per_day;
            let duration = share.round() as u32;
            if duration == 0 {
                continue;
            }
            tasks.push(ScheduledTask {
                date,
                task: format!("Study {}", subject.name),
                duration_minutes: duration,
                subject_id: subject.id.clone(),
            });
        }
    }

    Ok(tasks)
}
