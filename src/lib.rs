//! Headless core of the storefront UI.
//!
//! Owns the query-state/fetch/display cycle behind the customer catalog page
//! and the admin product table: filter and pagination state, stale-response
//! handling for overlapping fetches, and the mutate-then-refetch flow used by
//! admin edits. Rendering and the backend API both live outside this crate;
//! the [`controller`] types expose display snapshots on one side and the
//! [`api`] traits describe the backend collaborator on the other.

pub mod api;
pub mod controller;
pub mod domain;
pub mod models;
pub mod pagination;

/// Products per page on the customer catalog.
pub const CATALOG_PAGE_SIZE: usize = 12;
/// Products per page on the admin product table.
pub const ADMIN_PAGE_SIZE: usize = 10;
/// Products shown in the featured strip on the home page.
pub const FEATURED_LIMIT: usize = 6;
