//! # taskboard-domain
//!
//! Pure domain model for the taskboard project/task tracker.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define **Projects** (top-level containers)
//! - Define **Tasks** (units of work owned by exactly one project)
//! - Define the two-state **task status** lifecycle (`pending` ↔ `done`)
//! - Define the repository inputs (drafts and patches) and how patches apply
//! - Contain all invariant enforcement that does not need IO
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod project;
pub mod task;
