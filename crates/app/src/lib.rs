//! # taskboard-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `ProjectRepository`: list, get, create, patch, delete projects
//!   - `TaskRepository`: the same for tasks, plus lookup by project
//! - Define **driving/inbound ports** as use-case structs:
//!   - `ProjectService`: project lifecycle
//!   - `TaskService`: task lifecycle, project existence checks, status changes
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `taskboard-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
