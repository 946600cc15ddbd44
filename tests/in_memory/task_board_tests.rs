//! In-memory integration tests for the task collection lifecycle.

use flowtask::store::ports::RecordStore;
use flowtask::task::{
    domain::{TaskDraft, TaskPatch, TaskPriority, TaskStatus},
    ports::TaskQueries,
    services::{Notice, NoticeLevel},
    view::{BoardStats, Projection, ViewMode, board_columns, project},
};
use chrono::NaiveDate;
use rstest::rstest;

use super::helpers::{TestCollection, collection};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 2).expect("valid date")
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn write_spec_lifecycle(collection: TestCollection) -> Result<(), eyre::Report> {
    let created = collection
        .create(
            TaskDraft::new("Write spec")
                .with_priority(TaskPriority::High)
                .with_status(TaskStatus::Todo),
        )
        .await?;
    eyre::ensure!(created.created_at() == created.updated_at(), "fresh stamps differ");

    let updated = collection
        .update(created.id(), TaskPatch::new().with_status(TaskStatus::Done))
        .await?;
    eyre::ensure!(updated.status() == TaskStatus::Done, "status not applied");
    eyre::ensure!(updated.title() == "Write spec", "title changed by patch");
    eyre::ensure!(
        updated.updated_at() > updated.created_at(),
        "update did not advance updated_at"
    );

    collection.delete(created.id()).await?;
    let stored = collection.store().get_by_id(created.id()).await?;
    eyre::ensure!(stored.is_none(), "task still stored after delete");
    eyre::ensure!(collection.is_empty(), "task still mirrored after delete");

    let levels: Vec<NoticeLevel> = collection
        .drain_notices()
        .iter()
        .map(Notice::level)
        .collect();
    eyre::ensure!(
        levels == vec![NoticeLevel::Success; 3],
        "unexpected notices: {levels:?}"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn mirror_matches_store_after_each_operation(
    collection: TestCollection,
) -> Result<(), eyre::Report> {
    let first = collection.create(TaskDraft::new("First")).await?;
    let second = collection
        .create(TaskDraft::new("Second").with_status(TaskStatus::Review))
        .await?;
    eyre::ensure!(
        collection.tasks() == collection.store().get_all().await?,
        "mirror diverged from store"
    );

    collection
        .reassign_status(first.id(), TaskStatus::InProgress)
        .await?;
    eyre::ensure!(
        collection.tasks() == collection.store().get_all().await?,
        "mirror diverged from store"
    );

    collection.delete(second.id()).await?;
    eyre::ensure!(
        collection.tasks() == collection.store().get_all().await?,
        "mirror diverged from store"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn status_and_priority_queries_filter_the_store(
    collection: TestCollection,
) -> Result<(), eyre::Report> {
    collection
        .create(TaskDraft::new("Urgent fix").with_priority(TaskPriority::Urgent))
        .await?;
    collection
        .create(
            TaskDraft::new("Review docs")
                .with_status(TaskStatus::Review)
                .with_priority(TaskPriority::Urgent),
        )
        .await?;
    collection
        .create(TaskDraft::new("Tidy up").with_priority(TaskPriority::Low))
        .await?;

    let store = collection.store();
    let todo = store.find_by_status(TaskStatus::Todo).await?;
    let urgent = store.find_by_priority(TaskPriority::Urgent).await?;
    let done = store.find_by_status(TaskStatus::Done).await?;

    let titles = |tasks: &[flowtask::task::domain::Task]| -> Vec<String> {
        tasks.iter().map(|task| task.title().to_owned()).collect()
    };
    eyre::ensure!(titles(&todo) == vec!["Urgent fix", "Tidy up"], "todo filter mismatch");
    eyre::ensure!(
        titles(&urgent) == vec!["Urgent fix", "Review docs"],
        "urgent filter mismatch"
    );
    eyre::ensure!(done.is_empty(), "no task should be done");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn board_follows_reassignment(collection: TestCollection) -> Result<(), eyre::Report> {
    let task = collection.create(TaskDraft::new("Move me")).await?;
    collection.reassign_status(task.id(), TaskStatus::Review).await?;

    let columns = board_columns(&collection.tasks());
    let review = columns
        .iter()
        .find(|column| column.status == TaskStatus::Review)
        .ok_or_else(|| eyre::eyre!("missing review column"))?;
    eyre::ensure!(review.tasks.len() == 1, "task not in review column");
    eyre::ensure!(
        columns
            .iter()
            .filter(|column| column.status != TaskStatus::Review)
            .all(|column| column.tasks.is_empty()),
        "task appears in more than one column"
    );

    let Projection::List(listed) = project(&collection.tasks(), ViewMode::List) else {
        eyre::bail!("list mode should project a list");
    };
    eyre::ensure!(listed.len() == 1, "list should hold the task");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn stats_track_completion(collection: TestCollection) -> Result<(), eyre::Report> {
    let first = collection
        .create(TaskDraft::new("Due today").with_due_date(today()))
        .await?;
    collection.create(TaskDraft::new("Other")).await?;
    collection.create(TaskDraft::new("Third")).await?;

    let before = BoardStats::from_tasks(&collection.tasks(), today());
    eyre::ensure!(before.completion_rate() == 0, "nothing completed yet");
    eyre::ensure!(before.due_today == 1, "one task due today");

    collection.toggle_complete(first.id()).await?;
    let after = BoardStats::from_tasks(&collection.tasks(), today());
    eyre::ensure!(after.completed == 1, "one task completed");
    eyre::ensure!(after.todo == 2, "two tasks left to do");
    eyre::ensure!(after.completion_rate() == 33, "one of three is 33%");
    Ok(())
}
