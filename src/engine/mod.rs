//! Performance point computation.
//!
//! Leaf-first: [`level`] and [`tool`] read the per-team tables, [`score`]
//! turns one task into a [`TaskScore`](crate::types::points::TaskScore),
//! [`aggregate`] sums scores per bucket, [`calendar`] produces weekly
//! buckets and [`query`] ties them to a [`TaskStore`](crate::store::TaskStore).

pub mod aggregate;
pub mod batch;
pub mod calendar;
pub mod level;
pub mod query;
pub mod score;
pub mod tool;
pub mod validate;
