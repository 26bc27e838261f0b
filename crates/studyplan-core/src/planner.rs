//! Plan generation over the injected store seams.
//!
//! Mirrors the application flow around the allocator: load the user's
//! subjects, allocate, and optionally persist the result as completable
//! schedule records.

use chrono::{DateTime, NaiveDate, Utc};

use crate::allocator::{allocate, ScheduledTask};
use crate::error::Result;
use crate::store::{ScheduleRecord, ScheduleStore, SubjectStore};

/// Parameters for one allocation run.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanRequest {
    pub hours_per_day: f64,
    pub days: u32,
    pub start_date: NaiveDate,
}

/// Load `user_id`'s subjects and allocate a plan across them.
pub fn build_plan<S>(store: &S, user_id: &str, request: &PlanRequest) -> Result<Vec<ScheduledTask>>
where
    S: SubjectStore + ?Sized,
{
    let subjects = store.subjects_for_user(user_id)?;
    Ok(allocate(
        &subjects,
        request.hours_per_day,
        request.days,
        request.start_date,
    )?)
}

/// Persist generated tasks as uncompleted schedule records.
///
/// Inserts are append-only: saving the same plan twice stores two copies.
/// Returns the records as written.
pub fn save_plan<S>(
    store: &mut S,
    user_id: &str,
    tasks: Vec<ScheduledTask>,
    created_at: DateTime<Utc>,
) -> Result<Vec<ScheduleRecord>>
where
    S: ScheduleStore + ?Sized,
{
    let records: Vec<ScheduleRecord> = tasks
        .into_iter()
        .map(|task| ScheduleRecord::from_task(task, created_at))
        .collect();
    store.insert_schedule(user_id, &records)?;
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AllocationError, CoreError};
    use crate::store::MemoryStore;
    use crate::subject::{Subject, PRIORITY_HIGH, PRIORITY_LOW};

    fn request() -> PlanRequest {
        PlanRequest {
            hours_per_day: 3.0,
            days: 1,
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        }
    }

    #[test]
    fn builds_plan_from_stored_subjects() {
        let mut store = MemoryStore::new();
        store.add_subject("u1", Subject::new("Math", PRIORITY_HIGH));
        store.add_subject("u1", Subject::new("Art", PRIORITY_LOW));

        let tasks = build_plan(&store, "u1", &request()).unwrap();

        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].duration_minutes, 135);
        assert_eq!(tasks[1].duration_minutes, 45);
    }

    #[test]
    fn unknown_user_has_no_subjects_to_allocate() {
        let store = MemoryStore::new();

        let err = build_plan(&store, "nobody", &request()).unwrap_err();

        assert!(matches!(
            err,
            CoreError::Allocation(AllocationError::EmptyInput)
        ));
    }

    #[test]
    fn save_then_resave_duplicates_records() {
        let mut store = MemoryStore::new();
        store.add_subject("u1", Subject::new("Math", PRIORITY_HIGH));
        let tasks = build_plan(&store, "u1", &request()).unwrap();
        let created_at = Utc::now();

        let first = save_plan(&mut store, "u1", tasks.clone(), created_at).unwrap();
        let second = save_plan(&mut store, "u1", tasks, created_at).unwrap();

        assert_eq!(first.len(), 1);
        assert_eq!(second.len(), 1);
        assert_ne!(first[0].id, second[0].id);
        assert_eq!(store.schedule_for_user("u1").len(), 2);
        assert!(store.schedule_for_user("u1").iter().all(|r| !r.completed));
    }
}
