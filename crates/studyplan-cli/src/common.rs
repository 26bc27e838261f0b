//! Shared CLI helpers: the JSON-file store backing every command.

use std::collections::HashMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use studyplan_core::config::data_dir;
use studyplan_core::{ScheduleRecord, ScheduleStore, StorageError, Subject, SubjectStore};

/// The CLI operates as a single local user.
pub const LOCAL_USER: &str = "local";

#[derive(Debug, Default, Serialize, Deserialize)]
struct UserData {
    #[serde(default)]
    subjects: Vec<Subject>,
    #[serde(default)]
    schedule: Vec<ScheduleRecord>,
}

/// Single-file JSON store for the CLI.
///
/// Loads the full data file into memory, mutates it, and writes it back on
/// save. Fine at CLI scale; anything bigger belongs behind a real backend
/// implementing the same store traits.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct FileStore {
    #[serde(default)]
    users: HashMap<String, UserData>,
}

impl FileStore {
    fn path() -> Result<PathBuf, Box<dyn std::error::Error>> {
        Ok(data_dir()?.join("planner.json"))
    }

    /// Load the store, starting empty when no data file exists yet.
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        let path = Self::path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Write the store back to disk.
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let path = Self::path()?;
        std::fs::write(&path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn add_subject(&mut self, user_id: &str, subject: Subject) {
        self.users
            .entry(user_id.to_string())
            .or_default()
            .subjects
            .push(subject);
    }

    /// Remove a subject by id; returns whether anything was removed.
    pub fn remove_subject(&mut self, user_id: &str, subject_id: &str) -> bool {
        let Some(user) = self.users.get_mut(user_id) else {
            return false;
        };
        let before = user.subjects.len();
        user.subjects.retain(|s| s.id != subject_id);
        user.subjects.len() < before
    }

    /// Saved schedule rows for `user_id`, oldest first.
    pub fn schedule(&self, user_id: &str) -> &[ScheduleRecord] {
        self.users
            .get(user_id)
            .map(|u| u.schedule.as_slice())
            .unwrap_or(&[])
    }
}

impl SubjectStore for FileStore {
    fn subjects_for_user(&self, user_id: &str) -> Result<Vec<Subject>, StorageError> {
        Ok(self
            .users
            .get(user_id)
            .map(|u| u.subjects.clone())
            .unwrap_or_default())
    }
}

impl ScheduleStore for FileStore {
    fn insert_schedule(
        &mut self,
        user_id: &str,
        records: &[ScheduleRecord],
    ) -> Result<(), StorageError> {
        self.users
            .entry(user_id.to_string())
            .or_default()
            .schedule
            .extend(records.iter().cloned());
        Ok(())
    }
}
