//! # Studyplan Core Library
//!
//! Core logic for the study planner: admitting requested study sessions and
//! picking, for every weekday, the largest set of sessions that do not
//! overlap. The `studyplan` CLI is a thin layer over this crate.
//!
//! ## Architecture
//!
//! - **Sessions**: weekday/time types and the `start < end` admission gate
//! - **Scheduler**: pure earliest-finish-time greedy, one sweep per weekday,
//!   with a structured decision trail
//! - **Store**: owned, ordered collection of admitted requests
//! - **Storage**: SQLite queue persistence and TOML configuration
//! - **Report / i18n**: localized log lines and timetable rendering
//!
//! ## Key Components
//!
//! - [`schedule`]: the weekly scheduler
//! - [`SessionStore`]: in-memory request queue
//! - [`SessionDb`]: persisted request queue
//! - [`Config`]: application configuration management

pub mod error;
pub mod i18n;
pub mod report;
pub mod scheduler;
pub mod session;
pub mod storage;
pub mod store;

pub use error::{ConfigError, CoreError, DatabaseError, ValidationError};
pub use i18n::Language;
pub use report::{RunReport, RunSummary};
pub use scheduler::{schedule, DaySchedule, Outcome, RejectReason, ScheduleDecision, WeeklySchedule};
pub use session::{validate_interval, SessionDraft, SessionRequest, TimeOfDay, Weekday};
pub use storage::{Config, SessionDb};
pub use store::SessionStore;
