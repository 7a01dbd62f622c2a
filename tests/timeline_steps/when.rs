//! When steps for assignment timeline BDD scenarios.

use super::world::{ScenarioClock, TimelineWorld, run_async};
use chrono::Duration;
use eyre::WrapErr;
use filingtrail::timeline::{domain::NoteFields, services::ScheduleReminderRequest};
use rstest_bdd_macros::when;

#[when("the timeline is requested")]
fn timeline_requested(world: &mut TimelineWorld) -> Result<(), eyre::Report> {
    let id = world.assignment()?;
    let timeline = run_async(world.timelines.get_timeline(id)).wrap_err("read timeline")?;
    world.timeline = Some(timeline);
    Ok(())
}

#[when("the reminder is completed")]
fn reminder_completed(world: &mut TimelineWorld) -> Result<(), eyre::Report> {
    let reminder_id = world
        .last_reminder
        .ok_or_else(|| eyre::eyre!("missing reminder in scenario world"))?;
    run_async(world.reminders.complete(reminder_id)).wrap_err("complete reminder")?;
    Ok(())
}

#[when(r#"the assignment moves to "{status}""#)]
fn assignment_moves_now(world: &mut TimelineWorld, status: String) -> Result<(), eyre::Report> {
    let id = world.assignment()?;
    let result = run_async(
        world
            .history
            .append_status_change(id, status, TimelineWorld::actor()?),
    );
    world.last_error = result.err().map(|err| err.kind());
    Ok(())
}

#[when("an empty note is recorded")]
fn empty_note_recorded(world: &mut TimelineWorld) -> Result<(), eyre::Report> {
    let id = world.assignment()?;
    let result = run_async(world.history.append_note(
        id,
        NoteFields::default(),
        TimelineWorld::actor()?,
    ));
    world.last_error = result.err().map(|err| err.kind());
    Ok(())
}

#[when("a reminder with a blank message is scheduled")]
fn blank_reminder_scheduled(world: &mut TimelineWorld) -> Result<(), eyre::Report> {
    let id = world.assignment()?;
    let due = ScenarioClock::start() + Duration::days(1);
    let request = ScheduleReminderRequest::new(id, Some(due), "   ", TimelineWorld::actor()?);
    let result = run_async(world.reminders.schedule(request));
    world.last_error = result.err().map(|err| err.kind());
    Ok(())
}
