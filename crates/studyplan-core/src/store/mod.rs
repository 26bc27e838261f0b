//! Persistence seams for the surrounding application layer.
//!
//! The engine never talks to a concrete database. Callers inject stores
//! through the [`SubjectStore`] and [`ScheduleStore`] traits, which keeps
//! the core free of ambient client state and trivially testable with
//! fakes. [`MemoryStore`] is the baseline implementation used in tests and
//! by callers that keep state in process.

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::allocator::ScheduledTask;
use crate::error::StorageError;
use crate::subject::Subject;

/// A persisted schedule row: a generated task plus completion tracking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRecord {
    pub id: String,
    pub subject_id: String,
    pub date: NaiveDate,
    pub task: String,
    pub duration_minutes: u32,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

impl ScheduleRecord {
    /// Wrap a generated task as an uncompleted record.
    pub fn from_task(task: ScheduledTask, created_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            subject_id: task.subject_id,
            date: task.date,
            task: task.task,
            duration_minutes: task.duration_minutes,
            completed: false,
            created_at,
        }
    }
}

/// Read access to a user's subjects.
pub trait SubjectStore {
    /// All subjects owned by `user_id`, in stored (insertion) order.
    fn subjects_for_user(&self, user_id: &str) -> Result<Vec<Subject>, StorageError>;
}

/// Write access to a user's saved schedule.
pub trait ScheduleStore {
    /// Bulk-append schedule records for `user_id`.
    ///
    /// No upsert or merge: inserting the same plan twice stores two copies,
    /// and clearing out an old plan is the caller's job.
    fn insert_schedule(
        &mut self,
        user_id: &str,
        records: &[ScheduleRecord],
    ) -> Result<(), StorageError>;
}

/// In-memory store keyed by user id.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    subjects: HashMap<String, Vec<Subject>>,
    schedules: HashMap<String, Vec<ScheduleRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a subject for `user_id`.
    pub fn add_subject(&mut self, user_id: &str, subject: Subject) {
        self.subjects
            .entry(user_id.to_string())
            .or_default()
            .push(subject);
    }

    /// Stored schedule rows for `user_id`, oldest first.
    pub fn schedule_for_user(&self, user_id: &str) -> &[ScheduleRecord] {
        self.schedules
            .get(user_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

impl SubjectStore for MemoryStore {
    fn subjects_for_user(&self, user_id: &str) -> Result<Vec<Subject>, StorageError> {
        Ok(self.subjects.get(user_id).cloned().unwrap_or_default())
    }
}

impl ScheduleStore for MemoryStore {
    fn insert_schedule(
        &mut self,
        user_id: &str,
        records: &[ScheduleRecord],
    ) -> Result<(), StorageError> {
        self.schedules
            .entry(user_id.to_string())
            .or_default()
            .extend(records.iter().cloned());
        Ok(())
    }
}
