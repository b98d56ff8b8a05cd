//! # taskboard-adapter-storage-memory
//!
//! Volatile persistence adapter. Everything lives in process memory and is
//! lost on restart.
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `taskboard-app::ports::storage`
//! - Keep projects and tasks in insertion order
//! - Assign ids and timestamps on create, refresh `updated_at` on update
//!
//! ## Dependency rule
//! Depends on `taskboard-app` (for port traits) and `taskboard-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod project_repo;
mod task_repo;

use std::sync::Arc;

use tokio::sync::RwLock;

use taskboard_domain::project::Project;
use taskboard_domain::task::Task;

pub use project_repo::MemoryProjectRepository;
pub use task_repo::MemoryTaskRepository;

#[derive(Debug, Default)]
struct Collections {
    projects: Vec<Project>,
    tasks: Vec<Task>,
}

/// Shared in-memory store backing both repositories.
///
/// Cloning is cheap and yields a handle to the same collections. A new store
/// is always empty.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<Collections>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository over the projects of this store.
    #[must_use]
    pub fn project_repository(&self) -> MemoryProjectRepository {
        MemoryProjectRepository::new(self.clone())
    }

    /// Repository over the tasks of this store.
    #[must_use]
    pub fn task_repository(&self) -> MemoryTaskRepository {
        MemoryTaskRepository::new(self.clone())
    }
}
