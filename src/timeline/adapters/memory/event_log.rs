//! In-memory append-only event log.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};

use crate::timeline::{
    domain::{AssignmentId, EventId, TimelineEvent},
    ports::{EventLogError, EventLogRepository, EventLogResult},
};

/// Thread-safe in-memory event log.
#[derive(Debug, Clone, Default)]
pub struct InMemoryEventLog {
    state: Arc<RwLock<InMemoryEventLogState>>,
}

#[derive(Debug, Default)]
struct InMemoryEventLogState {
    by_assignment: HashMap<AssignmentId, Vec<TimelineEvent>>,
    ids: HashSet<EventId>,
}

impl InMemoryEventLog {
    /// Creates an empty event log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(err: impl ToString) -> EventLogError {
    EventLogError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl EventLogRepository for InMemoryEventLog {
    async fn append(&self, event: &TimelineEvent) -> EventLogResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        if !state.ids.insert(event.id()) {
            return Err(EventLogError::DuplicateEvent(event.id()));
        }
        state
            .by_assignment
            .entry(event.assignment_id())
            .or_default()
            .push(event.clone());
        Ok(())
    }

    async fn list_for_assignment(
        &self,
        assignment_id: AssignmentId,
    ) -> EventLogResult<Vec<TimelineEvent>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state
            .by_assignment
            .get(&assignment_id)
            .cloned()
            .unwrap_or_default())
    }
}
