//! In-memory session request store.
//!
//! An explicit owned collection in insertion order. Scheduling borrows a
//! snapshot of it; mutating the store afterwards leaves any previously
//! computed schedule stale.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::scheduler::{self, ScheduleDecision, WeeklySchedule};
use crate::session::{SessionDraft, SessionRequest};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionStore {
    requests: Vec<SessionRequest>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from already-admitted requests, keeping their order.
    pub fn from_requests(requests: Vec<SessionRequest>) -> Self {
        Self { requests }
    }

    /// Validate a draft, assign it an id, and append it.
    pub fn add(&mut self, draft: SessionDraft) -> Result<&SessionRequest, ValidationError> {
        let request = SessionRequest::admit(draft)?;
        self.insert(request)
    }

    /// Append an existing request after re-checking its interval.
    pub fn insert(&mut self, request: SessionRequest) -> Result<&SessionRequest, ValidationError> {
        crate::session::validate_interval(request.start, request.end)?;
        tracing::debug!(id = %request.id, day = %request.day, "session added to store");
        self.requests.push(request);
        Ok(&self.requests[self.requests.len() - 1])
    }

    /// Remove the request with `id`, returning it if present.
    pub fn remove(&mut self, id: &str) -> Option<SessionRequest> {
        let index = self.requests.iter().position(|r| r.id == id)?;
        tracing::debug!(id, "session removed from store");
        Some(self.requests.remove(index))
    }

    /// Remove every request, returning how many were dropped.
    pub fn clear(&mut self) -> usize {
        let count = self.requests.len();
        self.requests.clear();
        tracing::debug!(count, "session store cleared");
        count
    }

    pub fn get(&self, id: &str) -> Option<&SessionRequest> {
        self.requests.iter().find(|r| r.id == id)
    }

    pub fn requests(&self) -> &[SessionRequest] {
        &self.requests
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    /// Run the scheduler over the current contents.
    pub fn schedule(&self) -> (WeeklySchedule<'_>, Vec<ScheduleDecision<'_>>) {
        scheduler::schedule(&self.requests)
    }
}
