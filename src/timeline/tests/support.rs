//! Shared fixtures for timeline unit tests.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, Local, TimeZone, Utc};
use mockable::Clock;
use rstest::fixture;

use crate::timeline::{
    adapters::memory::{InMemoryAssignmentDirectory, InMemoryEventLog, InMemoryReminderRepository},
    domain::{ActorSnapshot, AssignmentId, AssignmentStatus},
    services::{EventLogService, ReminderService, TimelineService},
};

/// Clock that advances by a fixed step every time it is read.
#[derive(Debug)]
pub(super) struct SteppingClock {
    next: Mutex<DateTime<Utc>>,
    step: Duration,
}

impl SteppingClock {
    pub(super) fn starting_at(start: DateTime<Utc>, step: Duration) -> Self {
        Self {
            next: Mutex::new(start),
            step,
        }
    }

    /// Moves the clock so that the next reading is `instant`.
    pub(super) fn set(&self, instant: DateTime<Utc>) {
        *self.next.lock().expect("clock lock") = instant;
    }
}

impl Clock for SteppingClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        let mut next = self.next.lock().expect("clock lock");
        let now = *next;
        *next = now + self.step;
        now
    }
}

pub(super) fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 2, 9, 0, 0)
        .single()
        .expect("valid base time")
}

pub(super) fn at_minute(minute: i64) -> DateTime<Utc> {
    base_time() + Duration::minutes(minute)
}

pub(super) fn actor() -> ActorSnapshot {
    ActorSnapshot::new("u-17")
        .expect("valid actor")
        .with_name("Priya Shah")
        .with_email("priya@example.com")
}

pub(super) fn status(value: &str) -> AssignmentStatus {
    AssignmentStatus::new(value).expect("valid status")
}

/// Services wired to shared in-memory stores and a stepping clock.
pub(super) struct Harness {
    pub(super) clock: Arc<SteppingClock>,
    pub(super) directory: Arc<InMemoryAssignmentDirectory>,
    pub(super) event_log: Arc<InMemoryEventLog>,
    pub(super) reminder_store: Arc<InMemoryReminderRepository>,
    pub(super) history:
        EventLogService<InMemoryEventLog, InMemoryAssignmentDirectory, SteppingClock>,
    pub(super) reminders: ReminderService<
        InMemoryReminderRepository,
        InMemoryEventLog,
        InMemoryAssignmentDirectory,
        SteppingClock,
    >,
    pub(super) timeline: TimelineService<InMemoryEventLog, InMemoryReminderRepository>,
}

impl Harness {
    /// Registers an assignment with its master-record status.
    pub(super) fn register(&self, initial: Option<&str>) -> AssignmentId {
        let id = AssignmentId::new();
        self.directory
            .register(id, initial.map(status))
            .expect("register assignment");
        id
    }
}

#[fixture]
pub(super) fn harness() -> Harness {
    let clock = Arc::new(SteppingClock::starting_at(base_time(), Duration::minutes(1)));
    let directory = Arc::new(InMemoryAssignmentDirectory::new());
    let event_log = Arc::new(InMemoryEventLog::new());
    let reminder_store = Arc::new(InMemoryReminderRepository::new());

    Harness {
        history: EventLogService::new(
            Arc::clone(&event_log),
            Arc::clone(&directory),
            Arc::clone(&clock),
        ),
        reminders: ReminderService::new(
            Arc::clone(&reminder_store),
            Arc::clone(&event_log),
            Arc::clone(&directory),
            Arc::clone(&clock),
        ),
        timeline: TimelineService::new(Arc::clone(&event_log), Arc::clone(&reminder_store)),
        clock,
        directory,
        event_log,
        reminder_store,
    }
}
