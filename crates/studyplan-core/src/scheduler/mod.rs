//! Weekly interval scheduler.
//!
//! Each weekday is scheduled on its own with the earliest-finish-time greedy:
//! - Requests for the day are taken in input order
//! - Sorted by end time, ties kept in input order
//! - Swept once, accepting every session that starts at or after the end of
//!   the last accepted one
//!
//! This maximises the number of non-overlapping sessions per day. The run is
//! pure: it borrows the requests and returns a fresh schedule and decision
//! trail every time.

use serde::Serialize;

use crate::session::{SessionRequest, Weekday};

/// Why a session was left out of its day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RejectReason {
    /// Starts before the most recently accepted session on the same day ends
    Conflict { with: String },
    /// Has `start >= end`; only possible for requests that bypassed admission
    MalformedInterval,
}

/// Outcome of one request in a scheduler run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Accepted,
    Rejected { reason: RejectReason },
}

impl Outcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Outcome::Accepted)
    }
}

/// The decision made for one request, in the order it was made.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleDecision<'a> {
    pub request: &'a SessionRequest,
    pub outcome: Outcome,
    /// Position within the day's sweep.
    pub order: usize,
}

impl ScheduleDecision<'_> {
    pub fn day(&self) -> Weekday {
        self.request.day
    }
}

/// Accepted sessions for one weekday, ordered by start time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DaySchedule<'a> {
    pub day: Weekday,
    pub sessions: Vec<&'a SessionRequest>,
}

impl<'a> DaySchedule<'a> {
    fn empty(day: Weekday) -> Self {
        Self {
            day,
            sessions: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a SessionRequest> + '_ {
        self.sessions.iter().copied()
    }
}

/// Accepted sessions for all seven weekdays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct WeeklySchedule<'a> {
    days: [DaySchedule<'a>; 7],
}

impl<'a> WeeklySchedule<'a> {
    /// Seven empty days.
    pub fn empty() -> Self {
        Self {
            days: Weekday::ALL.map(DaySchedule::empty),
        }
    }

    pub fn day(&self, day: Weekday) -> &DaySchedule<'a> {
        &self.days[day.index()]
    }

    /// Days in Monday to Sunday order.
    pub fn days(&self) -> impl Iterator<Item = &DaySchedule<'a>> {
        self.days.iter()
    }

    pub fn accepted_count(&self) -> usize {
        self.days.iter().map(DaySchedule::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.days.iter().all(DaySchedule::is_empty)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.days
            .iter()
            .any(|d| d.sessions.iter().any(|s| s.id == id))
    }
}

impl Default for WeeklySchedule<'_> {
    fn default() -> Self {
        Self::empty()
    }
}

/// Schedule every weekday independently.
///
/// Returns the accepted sessions per day and the decision trail, ordered by
/// day (Monday first) and then by sweep order within the day.
pub fn schedule(requests: &[SessionRequest]) -> (WeeklySchedule<'_>, Vec<ScheduleDecision<'_>>) {
    let mut decisions = Vec::with_capacity(requests.len());
    let days = Weekday::ALL.map(|day| sweep_day(day, requests, &mut decisions));
    let weekly = WeeklySchedule { days };

    tracing::debug!(
        requests = requests.len(),
        accepted = weekly.accepted_count(),
        rejected = decisions.len() - weekly.accepted_count(),
        "weekly schedule computed"
    );

    (weekly, decisions)
}

/// Filter, sort by finish time, and sweep one day.
fn sweep_day<'a>(
    day: Weekday,
    requests: &'a [SessionRequest],
    decisions: &mut Vec<ScheduleDecision<'a>>,
) -> DaySchedule<'a> {
    let mut candidates: Vec<(usize, &SessionRequest)> = requests
        .iter()
        .enumerate()
        .filter(|(_, r)| r.day == day)
        .collect();

    // Input index as secondary key keeps ties deterministic.
    candidates.sort_by_key(|&(index, r)| (r.end, index));

    let mut accepted = DaySchedule::empty(day);
    let mut last: Option<&SessionRequest> = None;

    for (order, (_, request)) in candidates.into_iter().enumerate() {
        let outcome = if !request.is_well_formed() {
            Outcome::Rejected {
                reason: RejectReason::MalformedInterval,
            }
        } else if let Some(prev) = last.filter(|prev| request.start < prev.end) {
            Outcome::Rejected {
                reason: RejectReason::Conflict {
                    with: prev.id.clone(),
                },
            }
        } else {
            last = Some(request);
            accepted.sessions.push(request);
            Outcome::Accepted
        };

        tracing::trace!(
            day = %day,
            id = %request.id,
            order,
            accepted = outcome.is_accepted(),
            "session decision"
        );

        decisions.push(ScheduleDecision {
            request,
            outcome,
            order,
        });
    }

    accepted
}
