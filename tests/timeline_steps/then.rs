//! Then steps for assignment timeline BDD scenarios.

use super::world::{TimelineWorld, run_async};
use eyre::WrapErr;
use filingtrail::timeline::{domain::Timeline, services::ErrorKind};
use rstest_bdd_macros::then;

fn timeline(world: &TimelineWorld) -> Result<&Timeline, eyre::Report> {
    world
        .timeline
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing timeline in scenario world"))
}

#[then("the timeline has {count:usize} status groups")]
fn timeline_group_count(world: &TimelineWorld, count: usize) -> Result<(), eyre::Report> {
    let groups = timeline(world)?.groups().len();
    eyre::ensure!(groups == count, "expected {count} groups, found {groups}");
    Ok(())
}

#[then(r#"status group {position:usize} is "{status}" with {count:usize} entries"#)]
fn status_group_matches(
    world: &TimelineWorld,
    position: usize,
    status: String,
    count: usize,
) -> Result<(), eyre::Report> {
    let group = timeline(world)?
        .groups()
        .get(position.saturating_sub(1))
        .ok_or_else(|| eyre::eyre!("no status group at position {position}"))?;
    let actual = group.assignment_status().map(|value| value.as_str());
    eyre::ensure!(
        actual == Some(status.as_str()),
        "expected group {position} to be {status}, found {actual:?}"
    );
    let entries = group.events().len();
    eyre::ensure!(entries == count, "expected {count} entries, found {entries}");
    Ok(())
}

#[then(r#"the timeline contains {count:usize} "{event_type}" entries"#)]
fn timeline_contains_entries(
    world: &TimelineWorld,
    count: usize,
    event_type: String,
) -> Result<(), eyre::Report> {
    let matching = timeline(world)?
        .groups()
        .iter()
        .flat_map(|group| group.events())
        .filter(|event| event.event_type().as_str() == event_type)
        .count();
    eyre::ensure!(
        matching == count,
        "expected {count} {event_type} entries, found {matching}"
    );
    Ok(())
}

#[then("the request fails with a validation error")]
fn validation_error(world: &TimelineWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(
        world.last_error == Some(ErrorKind::Validation),
        "expected a validation error, found {:?}",
        world.last_error
    );
    Ok(())
}

#[then("the request fails with a not found error")]
fn not_found_error(world: &TimelineWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(
        world.last_error == Some(ErrorKind::NotFound),
        "expected a not found error, found {:?}",
        world.last_error
    );
    Ok(())
}

#[then("the assignment has no recorded history")]
fn no_recorded_history(world: &TimelineWorld) -> Result<(), eyre::Report> {
    let id = world.assignment()?;
    let timeline = run_async(world.timelines.get_timeline(id)).wrap_err("read timeline")?;
    eyre::ensure!(timeline.is_empty(), "expected no history, found {timeline:?}");
    Ok(())
}
