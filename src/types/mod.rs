pub mod config;
pub mod points;
pub mod report;
pub mod table;
pub mod task;
