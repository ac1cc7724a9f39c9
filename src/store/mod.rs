//! Read accessors the engine uses to reach stored tasks and tables.

pub mod directory;
pub mod memory;

use crate::error::StoreError;
use crate::types::table::{LevelEntry, ToolEntry};
use crate::types::task::{CompletedTask, DateRange, TaskFilter};

pub use directory::DirectoryStore;
pub use memory::MemoryStore;

/// Storage collaborator. Implementations return whole records and must be
/// shareable across the batch worker pool.
pub trait TaskStore: Send + Sync {
    /// Tasks whose `filter` attribute equals `identifier` and whose
    /// `done_date` lies inside `range` (inclusive).
    fn find_tasks(
        &self,
        filter: TaskFilter,
        identifier: &str,
        range: &DateRange,
    ) -> Result<Vec<CompletedTask>, StoreError>;

    fn load_all_levels(&self) -> Result<Vec<LevelEntry>, StoreError>;

    fn load_all_tools(&self) -> Result<Vec<ToolEntry>, StoreError>;
}
