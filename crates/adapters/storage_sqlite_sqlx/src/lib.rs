//! # taskboard-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `taskboard-app::ports::storage`
//! - Manage `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations)
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `taskboard-app` (for port traits) and `taskboard-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod decode;
mod error;
mod pool;
mod project_repo;
mod task_repo;

pub use error::StorageError;
pub use pool::{Config, Database};
pub use project_repo::SqliteProjectRepository;
pub use task_repo::SqliteTaskRepository;
