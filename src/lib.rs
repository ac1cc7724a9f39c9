//! Performance point engine for creative-production teams.
//!
//! Completed tasks are scored against a per-team level table and a per-team
//! tool table, then summed into time-bucketed totals for a team or a single
//! assignee. Storage is reached only through [`store::TaskStore`].

pub mod config;
pub mod engine;
pub mod error;
pub mod report;
pub mod store;
pub mod types;

pub use engine::query::{query_performance, QueryRequest};
pub use error::{PerfError, Result, StoreError};
