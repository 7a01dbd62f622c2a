//! In-memory reminder store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::timeline::{
    domain::{AssignmentId, Reminder, ReminderId},
    ports::{ReminderRepository, ReminderRepositoryError, ReminderRepositoryResult},
};

/// Thread-safe in-memory reminder repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryReminderRepository {
    state: Arc<RwLock<InMemoryReminderState>>,
}

#[derive(Debug, Default)]
struct InMemoryReminderState {
    reminders: HashMap<ReminderId, Reminder>,
    assignment_index: HashMap<AssignmentId, Vec<ReminderId>>,
}

impl InMemoryReminderRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(err: impl ToString) -> ReminderRepositoryError {
    ReminderRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

fn sorted_by_due(mut reminders: Vec<Reminder>) -> Vec<Reminder> {
    reminders.sort_by_key(Reminder::date_and_time);
    reminders
}

#[async_trait]
impl ReminderRepository for InMemoryReminderRepository {
    async fn store(&self, reminder: &Reminder) -> ReminderRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        if state.reminders.contains_key(&reminder.id()) {
            return Err(ReminderRepositoryError::DuplicateReminder(reminder.id()));
        }
        state
            .assignment_index
            .entry(reminder.assignment_id())
            .or_default()
            .push(reminder.id());
        state.reminders.insert(reminder.id(), reminder.clone());
        Ok(())
    }

    async fn update(&self, reminder: &Reminder) -> ReminderRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        let stored = state
            .reminders
            .get_mut(&reminder.id())
            .ok_or(ReminderRepositoryError::NotFound(reminder.id()))?;
        *stored = reminder.clone();
        Ok(())
    }

    async fn find_by_id(&self, id: ReminderId) -> ReminderRepositoryResult<Option<Reminder>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.reminders.get(&id).cloned())
    }

    async fn list_for_assignment(
        &self,
        assignment_id: AssignmentId,
    ) -> ReminderRepositoryResult<Vec<Reminder>> {
        let state = self.state.read().map_err(lock_error)?;
        let reminders = state
            .assignment_index
            .get(&assignment_id)
            .map(|ids| {
                ids.iter()
                    .filter_map(|id| state.reminders.get(id).cloned())
                    .collect()
            })
            .unwrap_or_default();
        Ok(sorted_by_due(reminders))
    }

    async fn list_pending_due_before(
        &self,
        instant: DateTime<Utc>,
    ) -> ReminderRepositoryResult<Vec<Reminder>> {
        let state = self.state.read().map_err(lock_error)?;
        let due = state
            .reminders
            .values()
            .filter(|reminder| reminder.is_due_by(instant))
            .cloned()
            .collect();
        Ok(sorted_by_due(due))
    }
}
