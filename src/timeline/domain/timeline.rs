//! Status-grouped history view built from stored events and reminders.
//!
//! Building a [`Timeline`] runs in three explicit steps:
//!
//! 1. [`merge_reminders`] appends the entries derived from reminders to the
//!    stored events.
//! 2. Entries are grouped by workflow status value. Two entries with the same
//!    status belong to one group even when other statuses were visited in
//!    between.
//! 3. Each group is ordered newest first, and groups are ordered by their
//!    newest entry, newest first.
//!
//! Entries with the same timestamp are ordered latest-appended first.
//! Groups whose newest entries share a timestamp keep first-seen order.

use super::{AssignmentStatus, EventType, Reminder, TimelineEvent};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Entries of a timeline sharing one workflow status value.
///
/// A `None` status collects legacy entries recorded without a status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusGroup {
    assignment_status: Option<AssignmentStatus>,
    events: Vec<TimelineEvent>,
}

impl StatusGroup {
    /// Returns the status shared by the group's entries.
    #[must_use]
    pub const fn assignment_status(&self) -> Option<&AssignmentStatus> {
        self.assignment_status.as_ref()
    }

    /// Returns the group's entries, newest first.
    #[must_use]
    pub fn events(&self) -> &[TimelineEvent] {
        &self.events
    }

    /// Returns the timestamp of the newest entry.
    #[must_use]
    pub fn latest_at(&self) -> Option<DateTime<Utc>> {
        self.events.first().map(TimelineEvent::created_at)
    }

    fn sort_newest_first(&mut self) {
        self.events.reverse();
        self.events.sort_by(|left, right| right.created_at().cmp(&left.created_at()));
    }
}

/// Ordered, status-grouped history of one assignment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timeline {
    groups: Vec<StatusGroup>,
}

impl Timeline {
    /// Builds a timeline from stored events and the assignment's reminders.
    ///
    /// # Examples
    ///
    /// ```
    /// use filingtrail::timeline::domain::Timeline;
    ///
    /// let timeline = Timeline::aggregate(Vec::new(), &[]);
    /// assert!(timeline.is_empty());
    /// ```
    #[must_use]
    pub fn aggregate(events: Vec<TimelineEvent>, reminders: &[Reminder]) -> Self {
        Self::from_entries(merge_reminders(events, reminders))
    }

    /// Groups and orders already-merged entries.
    #[must_use]
    pub fn from_entries(entries: Vec<TimelineEvent>) -> Self {
        let mut groups: Vec<StatusGroup> = Vec::new();
        let mut positions: HashMap<Option<AssignmentStatus>, usize> = HashMap::new();

        for entry in entries {
            let key = entry.assignment_status().cloned();
            if let Some(group) = positions
                .get(&key)
                .and_then(|position| groups.get_mut(*position))
            {
                group.events.push(entry);
                continue;
            }
            positions.insert(key.clone(), groups.len());
            groups.push(StatusGroup {
                assignment_status: key,
                events: vec![entry],
            });
        }

        for group in &mut groups {
            group.sort_newest_first();
        }
        groups.sort_by(|left, right| right.latest_at().cmp(&left.latest_at()));

        Self { groups }
    }

    /// Returns the groups, most recently active status first.
    #[must_use]
    pub fn groups(&self) -> &[StatusGroup] {
        &self.groups
    }

    /// Consumes the timeline and returns its groups.
    #[must_use]
    pub fn into_groups(self) -> Vec<StatusGroup> {
        self.groups
    }

    /// Returns the group for a status value, if any entry carries it.
    #[must_use]
    pub fn group(&self, status: Option<&AssignmentStatus>) -> Option<&StatusGroup> {
        self.groups.iter().find(|group| group.assignment_status() == status)
    }

    /// Returns the number of entries across all groups.
    #[must_use]
    pub fn event_count(&self) -> usize {
        self.groups.iter().map(|group| group.events.len()).sum()
    }

    /// Returns `true` when the timeline has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Appends the entries derived from `reminders` to `events`.
///
/// Every reminder contributes a `reminder_set` entry; completed reminders
/// contribute a `reminder_completed` entry as well.
#[must_use]
pub fn merge_reminders(
    mut events: Vec<TimelineEvent>,
    reminders: &[Reminder],
) -> Vec<TimelineEvent> {
    events.reserve(reminders.len());
    for reminder in reminders {
        events.push(TimelineEvent::reminder_set(reminder));
        if let Some(completed) = TimelineEvent::reminder_completed(reminder) {
            events.push(completed);
        }
    }
    events
}

/// Resolves the status in force after the given stored events.
///
/// The newest `status_changed` entry wins; among entries with the same
/// timestamp the one appended last wins. Returns `None` when no status change
/// has been recorded.
#[must_use]
pub fn current_status(events: &[TimelineEvent]) -> Option<&AssignmentStatus> {
    events
        .iter()
        .filter(|event| event.event_type() == EventType::StatusChanged)
        .fold(None::<&TimelineEvent>, |latest, event| match latest {
            Some(current) if current.created_at() > event.created_at() => Some(current),
            _ => Some(event),
        })
        .and_then(TimelineEvent::assignment_status)
}
