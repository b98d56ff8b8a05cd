//! # taskboard-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the JSON REST API under `/api` (`/api/projects`, `/api/tasks`, …)
//! - Parse path ids, `status` and `dueDate` strings into domain types so
//!   malformed input is reported as a validation failure
//! - Wrap every body in the `{ "success": …, "data" | "message": … }` envelope
//! - Map [`TaskboardError`](taskboard_domain::error::TaskboardError) variants
//!   to HTTP status codes
//!
//! ## Dependency rule
//! Depends on `taskboard-app` (for port traits and services) and
//! `taskboard-domain` (for domain types used in request/response mapping).
//! Never leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod response;
pub mod router;
pub mod state;
