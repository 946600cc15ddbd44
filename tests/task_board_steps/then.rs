//! Then steps for task board BDD scenarios.

use super::world::{BoardWorld, run_async};
use flowtask::store::ports::RecordStore;
use flowtask::task::{domain::TaskStatus, view::board_columns};
use rstest_bdd_macros::then;

#[then(r#"the task status is "{status}""#)]
fn task_status_is(world: &BoardWorld, status: String) -> Result<(), eyre::Report> {
    let expected = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid expected status in scenario: {err}"))?;
    let task = world.task()?;
    eyre::ensure!(
        task.status() == expected,
        "expected status {expected}, found {}",
        task.status()
    );
    Ok(())
}

#[then(r#"the task title is "{title}""#)]
fn task_title_is(world: &BoardWorld, title: String) -> Result<(), eyre::Report> {
    let task = world.task()?;
    eyre::ensure!(task.title() == title, "expected title {title}, found {}", task.title());
    Ok(())
}

#[then("the task timestamps are equal")]
fn timestamps_equal(world: &BoardWorld) -> Result<(), eyre::Report> {
    let task = world.task()?;
    eyre::ensure!(
        task.created_at() == task.updated_at(),
        "fresh task has differing timestamps"
    );
    Ok(())
}

#[then("the task was modified after creation")]
fn modified_after_creation(world: &BoardWorld) -> Result<(), eyre::Report> {
    let task = world.task()?;
    eyre::ensure!(
        task.updated_at() > task.created_at(),
        "updated_at did not advance past created_at"
    );
    Ok(())
}

#[then("the task was not modified")]
fn not_modified(world: &BoardWorld) -> Result<(), eyre::Report> {
    let task = world.task()?;
    let mirrored = world
        .collection
        .task(task.id())
        .ok_or_else(|| eyre::eyre!("task missing from board"))?;
    eyre::ensure!(
        mirrored.updated_at() == mirrored.created_at(),
        "task was written to the store"
    );
    Ok(())
}

#[then("the operation fails with a validation error")]
fn fails_with_validation(world: &BoardWorld) -> Result<(), eyre::Report> {
    let err = world
        .last_error
        .as_ref()
        .ok_or_else(|| eyre::eyre!("expected the operation to fail"))?;
    eyre::ensure!(err.is_validation(), "expected a validation error, got {err:?}");
    Ok(())
}

#[then("the operation fails with a not found error")]
fn fails_with_not_found(world: &BoardWorld) -> Result<(), eyre::Report> {
    let err = world
        .last_error
        .as_ref()
        .ok_or_else(|| eyre::eyre!("expected the operation to fail"))?;
    eyre::ensure!(err.is_not_found(), "expected a not found error, got {err:?}");
    Ok(())
}

#[then("the board shows {count:usize} tasks")]
fn board_shows(world: &BoardWorld, count: usize) -> Result<(), eyre::Report> {
    let shown = world.collection.len();
    eyre::ensure!(shown == count, "expected {count} tasks on the board, found {shown}");
    Ok(())
}

#[then(r#"the "{status}" column holds "{title}""#)]
fn column_holds(world: &BoardWorld, status: String, title: String) -> Result<(), eyre::Report> {
    let expected = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid column in scenario: {err}"))?;
    let columns = board_columns(&world.collection.tasks());
    let column = columns
        .iter()
        .find(|column| column.status == expected)
        .ok_or_else(|| eyre::eyre!("missing column {expected}"))?;
    eyre::ensure!(
        column.tasks.iter().any(|task| task.title() == title),
        "{title} is not in the {expected} column"
    );
    Ok(())
}

#[then(r#"the latest notice reads "{message}""#)]
fn latest_notice(world: &BoardWorld, message: String) -> Result<(), eyre::Report> {
    let notices = world.collection.drain_notices();
    let latest = notices
        .last()
        .ok_or_else(|| eyre::eyre!("no notices were raised"))?;
    eyre::ensure!(
        latest.message() == message,
        "expected notice {message}, found {}",
        latest.message()
    );
    Ok(())
}

#[then("the task is no longer stored")]
fn no_longer_stored(world: &BoardWorld) -> Result<(), eyre::Report> {
    let task = world.task()?;
    let stored = run_async(world.workspace.tasks().get_by_id(task.id()))?;
    eyre::ensure!(stored.is_none(), "task is still in the store");
    Ok(())
}
