//! Shared world state for assignment timeline BDD scenarios.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, Local, TimeZone, Utc};
use filingtrail::timeline::{
    adapters::memory::{InMemoryAssignmentDirectory, InMemoryEventLog, InMemoryReminderRepository},
    domain::{ActorSnapshot, AssignmentId, ReminderId, Timeline},
    services::{ErrorKind, EventLogService, ReminderService, TimelineService},
};
use mockable::Clock;
use rstest::fixture;

/// Clock advancing one minute per reading so that entries order by write.
#[derive(Debug)]
pub struct ScenarioClock {
    next: Mutex<DateTime<Utc>>,
}

impl ScenarioClock {
    /// Instant the clock starts at.
    pub fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 5, 11, 8, 30, 0)
            .single()
            .unwrap_or_default()
    }
}

impl Default for ScenarioClock {
    fn default() -> Self {
        Self {
            next: Mutex::new(Self::start()),
        }
    }
}

impl Clock for ScenarioClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        let mut next = self
            .next
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let now = *next;
        *next = now + Duration::minutes(1);
        now
    }
}

/// Event log service used by the BDD world.
pub type ScenarioHistory =
    EventLogService<InMemoryEventLog, InMemoryAssignmentDirectory, ScenarioClock>;

/// Reminder service used by the BDD world.
pub type ScenarioReminders = ReminderService<
    InMemoryReminderRepository,
    InMemoryEventLog,
    InMemoryAssignmentDirectory,
    ScenarioClock,
>;

/// Scenario world for assignment timeline behaviour tests.
pub struct TimelineWorld {
    pub directory: Arc<InMemoryAssignmentDirectory>,
    pub history: ScenarioHistory,
    pub reminders: ScenarioReminders,
    pub timelines: TimelineService<InMemoryEventLog, InMemoryReminderRepository>,
    pub assignment: Option<AssignmentId>,
    pub last_reminder: Option<ReminderId>,
    pub last_error: Option<ErrorKind>,
    pub timeline: Option<Timeline>,
}

impl TimelineWorld {
    /// Creates a world over empty in-memory stores.
    #[must_use]
    pub fn new() -> Self {
        let clock = Arc::new(ScenarioClock::default());
        let directory = Arc::new(InMemoryAssignmentDirectory::new());
        let event_log = Arc::new(InMemoryEventLog::new());
        let reminder_store = Arc::new(InMemoryReminderRepository::new());
        Self {
            history: EventLogService::new(
                Arc::clone(&event_log),
                Arc::clone(&directory),
                Arc::clone(&clock),
            ),
            reminders: ReminderService::new(
                Arc::clone(&reminder_store),
                Arc::clone(&event_log),
                Arc::clone(&directory),
                clock,
            ),
            timelines: TimelineService::new(event_log, reminder_store),
            directory,
            assignment: None,
            last_reminder: None,
            last_error: None,
            timeline: None,
        }
    }

    /// Returns the assignment under test.
    ///
    /// # Errors
    ///
    /// Returns an error when no assignment step has run.
    pub fn assignment(&self) -> Result<AssignmentId, eyre::Report> {
        self.assignment
            .ok_or_else(|| eyre::eyre!("missing assignment in scenario world"))
    }

    /// Returns the actor attributed to every scenario write.
    ///
    /// # Errors
    ///
    /// Returns an error when the actor cannot be built.
    pub fn actor() -> Result<ActorSnapshot, eyre::Report> {
        Ok(ActorSnapshot::new("u-compliance-1")?.with_name("Compliance Desk"))
    }
}

impl Default for TimelineWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TimelineWorld {
    TimelineWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
