//! # Studyplan Core Library
//!
//! This library provides the core business logic for the Studyplan study
//! planner. It implements a CLI-first philosophy where all operations are
//! available via a standalone CLI binary, with any GUI being a thin layer
//! over the same core library.
//!
//! ## Architecture
//!
//! - **Allocator**: a pure, deterministic split of a daily time budget
//!   across subjects, proportional to priority weight
//! - **Suggestion flow**: one outbound completion call plus a never-failing
//!   interpreter that falls back to the raw text when the model returns
//!   something other than the requested JSON shape
//! - **Store seams**: subject lookup and schedule persistence as injected
//!   traits, so the engine itself performs no I/O
//! - **Config**: TOML-based settings for planner defaults and the
//!   completion backend
//!
//! ## Key Components
//!
//! - [`allocate`]: the study-time allocation engine
//! - [`interpret`]: structured-suggestion parsing with fallback
//! - [`SuggestionEngine`]: prompt construction, call, and interpretation
//! - [`Config`]: application configuration management

pub mod allocator;
pub mod config;
pub mod error;
pub mod planner;
pub mod store;
pub mod subject;
pub mod suggest;

pub use allocator::{allocate, ScheduledTask, MAX_HOURS_PER_DAY, MAX_PLAN_DAYS, MIN_PLAN_DAYS};
pub use config::{CompletionConfig, Config, PlannerConfig};
pub use error::{
    AllocationError, ConfigError, CoreError, Result, StorageError, SuggestionError,
};
pub use planner::{build_plan, save_plan, PlanRequest};
pub use store::{MemoryStore, ScheduleRecord, ScheduleStore, SubjectStore};
pub use subject::{Subject, PRIORITY_HIGH, PRIORITY_LOW, PRIORITY_MEDIUM};
pub use suggest::{
    interpret, CompletionService, HttpCompletionClient, Interpretation, SuggestionEngine,
    SuggestionResult,
};
