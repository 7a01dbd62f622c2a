//! Shared application state handed to every request handler.

use std::sync::Arc;

use chrono::{DateTime, Local, Utc};
use mockable::{Clock, DefaultClock};

use crate::timeline::{
    adapters::{
        memory::{InMemoryAssignmentDirectory, InMemoryEventLog, InMemoryReminderRepository},
        postgres::{
            PostgresAssignmentDirectory, PostgresEventLog, PostgresReminderRepository,
            TimelinePgPool,
        },
    },
    ports::{AssignmentDirectory, EventLogRepository, ReminderRepository},
    services::{EventLogService, ReminderService, TimelineService},
};

/// Clock handle that can wrap any [`Clock`] implementation.
#[derive(Clone)]
pub struct SharedClock(Arc<dyn Clock + Send + Sync>);

impl SharedClock {
    /// Wraps a clock.
    #[must_use]
    pub fn new(clock: impl Clock + Send + Sync + 'static) -> Self {
        Self(Arc::new(clock))
    }

    /// Returns a handle to the system clock.
    #[must_use]
    pub fn system() -> Self {
        Self::new(DefaultClock)
    }
}

impl Default for SharedClock {
    fn default() -> Self {
        Self::system()
    }
}

impl std::fmt::Debug for SharedClock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("SharedClock").finish_non_exhaustive()
    }
}

impl Clock for SharedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.local()
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0.utc()
    }
}

/// Event log service over type-erased stores.
pub type HistoryService =
    EventLogService<dyn EventLogRepository, dyn AssignmentDirectory, SharedClock>;

/// Reminder service over type-erased stores.
pub type RemindersService = ReminderService<
    dyn ReminderRepository,
    dyn EventLogRepository,
    dyn AssignmentDirectory,
    SharedClock,
>;

/// Timeline service over type-erased stores.
pub type TimelineReadService = TimelineService<dyn EventLogRepository, dyn ReminderRepository>;

/// Services shared by the HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    pub(super) history: HistoryService,
    pub(super) reminders: RemindersService,
    pub(super) timeline: TimelineReadService,
}

impl AppState {
    /// Wires the services over the given stores.
    #[must_use]
    pub fn new(
        event_log: Arc<dyn EventLogRepository>,
        reminders: Arc<dyn ReminderRepository>,
        directory: Arc<dyn AssignmentDirectory>,
        clock: SharedClock,
    ) -> Self {
        let shared_clock = Arc::new(clock);
        Self {
            history: EventLogService::new(
                Arc::clone(&event_log),
                Arc::clone(&directory),
                Arc::clone(&shared_clock),
            ),
            reminders: ReminderService::new(
                Arc::clone(&reminders),
                Arc::clone(&event_log),
                directory,
                shared_clock,
            ),
            timeline: TimelineService::new(event_log, reminders),
        }
    }

    /// Wires the services over process-local stores.
    ///
    /// Every assignment identifier resolves, since no master store is
    /// available.
    #[must_use]
    pub fn in_memory(clock: SharedClock) -> Self {
        Self::new(
            Arc::new(InMemoryEventLog::new()),
            Arc::new(InMemoryReminderRepository::new()),
            Arc::new(InMemoryAssignmentDirectory::open()),
            clock,
        )
    }

    /// Wires the services over `PostgreSQL` stores sharing one pool.
    #[must_use]
    pub fn postgres(pool: &TimelinePgPool, clock: SharedClock) -> Self {
        Self::new(
            Arc::new(PostgresEventLog::new(pool.clone())),
            Arc::new(PostgresReminderRepository::new(pool.clone())),
            Arc::new(PostgresAssignmentDirectory::new(pool.clone())),
            clock,
        )
    }

    /// Returns the event log service.
    #[must_use]
    pub const fn history(&self) -> &HistoryService {
        &self.history
    }

    /// Returns the reminder service.
    #[must_use]
    pub const fn reminders(&self) -> &RemindersService {
        &self.reminders
    }

    /// Returns the timeline service.
    #[must_use]
    pub const fn timeline(&self) -> &TimelineReadService {
        &self.timeline
    }
}
