//! Given steps for assignment timeline BDD scenarios.

use super::world::{ScenarioClock, TimelineWorld, run_async};
use chrono::Duration;
use eyre::WrapErr;
use filingtrail::timeline::{
    domain::{AssignmentId, AssignmentStatus, NoteFields},
    services::ScheduleReminderRequest,
};
use rstest_bdd_macros::given;

#[given(r#"an assignment in status "{status}""#)]
fn assignment_in_status(world: &mut TimelineWorld, status: String) -> Result<(), eyre::Report> {
    let id = AssignmentId::new();
    world
        .directory
        .register(id, Some(AssignmentStatus::new(status)?))
        .wrap_err("register assignment")?;
    world.assignment = Some(id);
    Ok(())
}

#[given("an assignment that does not exist")]
fn unknown_assignment(world: &mut TimelineWorld) {
    world.assignment = Some(AssignmentId::new());
}

#[given("the assignment creation is recorded")]
fn creation_recorded(world: &mut TimelineWorld) -> Result<(), eyre::Report> {
    let id = world.assignment()?;
    run_async(world.history.append_created(id, TimelineWorld::actor()?))
        .wrap_err("record creation")?;
    Ok(())
}

#[given(r#"the assignment moves to "{status}""#)]
fn assignment_moves(world: &mut TimelineWorld, status: String) -> Result<(), eyre::Report> {
    let id = world.assignment()?;
    run_async(
        world
            .history
            .append_status_change(id, status, TimelineWorld::actor()?),
    )
    .wrap_err("record status change")?;
    Ok(())
}

#[given(r#"a finance note "{text}" is recorded"#)]
fn finance_note_recorded(world: &mut TimelineWorld, text: String) -> Result<(), eyre::Report> {
    let id = world.assignment()?;
    let fields = NoteFields {
        finance_note: Some(text),
        ..NoteFields::default()
    };
    run_async(world.history.append_note(id, fields, TimelineWorld::actor()?))
        .wrap_err("record note")?;
    Ok(())
}

#[given(r#"a reminder "{message}" is due in {days:i64} days"#)]
fn reminder_due(world: &mut TimelineWorld, message: String, days: i64) -> Result<(), eyre::Report> {
    let id = world.assignment()?;
    let due = ScenarioClock::start() + Duration::days(days);
    let request = ScheduleReminderRequest::new(id, Some(due), message, TimelineWorld::actor()?);
    let reminder_id =
        run_async(world.reminders.schedule(request)).wrap_err("schedule reminder")?;
    world.last_reminder = Some(reminder_id);
    Ok(())
}
