//! In-memory integration tests for the seeded workspace.

use flowtask::config::{LatencyProfile, StoreConfig};
use flowtask::project::{ProjectDraft, ProjectPatch};
use flowtask::store::{adapters::SeedError, domain::RecordId, ports::RecordStore};
use flowtask::task::domain::{TaskDraft, TaskStatus};
use flowtask::user::{UserDraft, UserPatch};
use flowtask::workspace::{TaskStore, Workspace};
use mockable::DefaultClock;
use rstest::rstest;

use super::helpers::{instant_config, workspace};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn seeded_workspace_loads_bundled_collections(
    workspace: Workspace,
) -> Result<(), eyre::Report> {
    let tasks = workspace.tasks().get_all().await?;
    let projects = workspace.projects().get_all().await?;
    let users = workspace.users().get_all().await?;

    eyre::ensure!(tasks.len() == 6, "expected six seeded tasks");
    eyre::ensure!(projects.len() == 3, "expected three seeded projects");
    eyre::ensure!(users.len() == 2, "expected two seeded users");

    let first = tasks
        .first()
        .ok_or_else(|| eyre::eyre!("missing first task"))?;
    eyre::ensure!(first.id().as_str() == "1", "seed order not preserved");
    eyre::ensure!(first.status() == TaskStatus::InProgress, "seed status lost");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn collection_load_mirrors_seeded_tasks(workspace: Workspace) -> Result<(), eyre::Report> {
    let collection = workspace.task_collection();
    eyre::ensure!(collection.is_empty(), "mirror should start empty");

    let loaded = collection.load().await?;

    eyre::ensure!(loaded == 6, "expected six loaded tasks, got {loaded}");
    eyre::ensure!(
        collection.tasks() == workspace.tasks().get_all().await?,
        "mirror differs from store after load"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn new_ids_never_collide_with_seeded_ids(workspace: Workspace) -> Result<(), eyre::Report> {
    let collection = workspace.task_collection();
    collection.load().await?;

    let created = collection.create(TaskDraft::new("Fresh")).await?;

    eyre::ensure!(
        !["1", "2", "3", "4", "5", "6"].contains(&created.id().as_str()),
        "new task reused a seeded id"
    );
    eyre::ensure!(collection.len() == 7, "mirror should grow by one");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn collections_are_independent(workspace: Workspace) -> Result<(), eyre::Report> {
    let id = RecordId::from("1");
    workspace.projects().delete(&id).await?;

    eyre::ensure!(
        workspace.tasks().get_by_id(&id).await?.is_some(),
        "deleting a project touched the task store"
    );
    eyre::ensure!(
        workspace.users().get_by_id(&id).await?.is_some(),
        "deleting a project touched the user store"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn projects_and_users_share_store_semantics(
    workspace: Workspace,
) -> Result<(), eyre::Report> {
    let project = workspace
        .projects()
        .create(ProjectDraft::new("Mobile App").with_color("#f59e0b"))
        .await?;
    let renamed = workspace
        .projects()
        .update(project.id(), ProjectPatch::new().with_name("Mobile Apps"))
        .await?;
    eyre::ensure!(renamed.color() == Some("#f59e0b"), "patch dropped color");

    let user = workspace
        .users()
        .update(&RecordId::from("1"), UserPatch::new().clear_role())
        .await?;
    eyre::ensure!(user.role().is_none(), "role not cleared");
    eyre::ensure!(user.email() == "alex@example.com", "patch dropped email");

    let added = workspace
        .users()
        .create(UserDraft::new("Jo Park", "jo@example.com").with_role("member"))
        .await?;
    eyre::ensure!(added.role() == Some("member"), "draft role lost");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn empty_workspace_has_no_records(instant_config: StoreConfig) -> Result<(), eyre::Report> {
    let (tasks, projects, users) = Workspace::empty(&instant_config).into_parts();

    eyre::ensure!(tasks.get_all().await?.is_empty(), "tasks should be empty");
    eyre::ensure!(projects.get_all().await?.is_empty(), "projects should be empty");
    eyre::ensure!(users.get_all().await?.is_empty(), "users should be empty");
    Ok(())
}

#[rstest]
fn task_seed_with_backwards_timestamps_is_rejected() {
    let seed = r#"[{"id": "x", "title": "Backwards",
        "createdAt": "2025-02-01T00:00:00Z", "updatedAt": "2025-01-01T00:00:00Z"}]"#;

    let result = TaskStore::from_json(seed, DefaultClock, LatencyProfile::instant());

    assert!(matches!(
        result,
        Err(SeedError::InvertedTimestamps { kind: "Task", ref id }) if id.as_str() == "x"
    ));
}
