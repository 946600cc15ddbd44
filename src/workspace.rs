//! Composition root holding the session's record stores.
//!
//! A [`Workspace`] owns one store per collection. Nothing is global: callers
//! build a workspace, hand its stores to services, and drop it to tear the
//! session down.

use mockable::{Clock, DefaultClock};
use std::sync::Arc;

use crate::config::StoreConfig;
use crate::project::Project;
use crate::store::adapters::{InMemoryStore, SeedError};
use crate::task::{domain::Task, services::TaskCollection};
use crate::user::User;

const TASK_SEED: &str = include_str!("../data/tasks.json");
const PROJECT_SEED: &str = include_str!("../data/projects.json");
const USER_SEED: &str = include_str!("../data/users.json");

/// In-memory task store.
pub type TaskStore<C = DefaultClock> = InMemoryStore<Task, C>;
/// In-memory project store.
pub type ProjectStore<C = DefaultClock> = InMemoryStore<Project, C>;
/// In-memory user store.
pub type UserStore<C = DefaultClock> = InMemoryStore<User, C>;

/// The three independent collections of one session.
pub struct Workspace<C: Clock + Send + Sync = DefaultClock> {
    tasks: Arc<TaskStore<C>>,
    projects: Arc<ProjectStore<C>>,
    users: Arc<UserStore<C>>,
}

impl Workspace<DefaultClock> {
    /// Builds a workspace from the bundled seed data.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError`] when a bundled seed document is invalid.
    pub fn seeded(config: &StoreConfig) -> Result<Self, SeedError> {
        let tasks = TaskStore::from_json(TASK_SEED, DefaultClock, config.latency)?;
        let projects = ProjectStore::from_json(PROJECT_SEED, DefaultClock, config.latency)?;
        let users = UserStore::from_json(USER_SEED, DefaultClock, config.latency)?;
        tracing::info!("workspace seeded");
        Ok(Self::new(tasks, projects, users))
    }

    /// Builds a workspace with three empty stores.
    #[must_use]
    pub fn empty(config: &StoreConfig) -> Self {
        Self::new(
            TaskStore::new(DefaultClock, config.latency),
            ProjectStore::new(DefaultClock, config.latency),
            UserStore::new(DefaultClock, config.latency),
        )
    }
}

impl<C: Clock + Send + Sync + 'static> Workspace<C> {
    /// Assembles a workspace from explicit stores.
    #[must_use]
    pub fn new(tasks: TaskStore<C>, projects: ProjectStore<C>, users: UserStore<C>) -> Self {
        Self {
            tasks: Arc::new(tasks),
            projects: Arc::new(projects),
            users: Arc::new(users),
        }
    }

    /// Returns the task store.
    #[must_use]
    pub const fn tasks(&self) -> &Arc<TaskStore<C>> {
        &self.tasks
    }

    /// Returns the project store.
    #[must_use]
    pub const fn projects(&self) -> &Arc<ProjectStore<C>> {
        &self.projects
    }

    /// Returns the user store.
    #[must_use]
    pub const fn users(&self) -> &Arc<UserStore<C>> {
        &self.users
    }

    /// Creates a task collection controller over this workspace's task
    /// store. The mirror starts empty until [`TaskCollection::load`] runs.
    #[must_use]
    pub fn task_collection(&self) -> TaskCollection<TaskStore<C>> {
        TaskCollection::new(Arc::clone(&self.tasks))
    }

    /// Hands out the stores, ending the workspace.
    #[must_use]
    pub fn into_parts(self) -> (Arc<TaskStore<C>>, Arc<ProjectStore<C>>, Arc<UserStore<C>>) {
        (self.tasks, self.projects, self.users)
    }
}
