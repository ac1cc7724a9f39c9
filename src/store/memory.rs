use crate::error::StoreError;
use crate::store::TaskStore;
use crate::types::table::{LevelEntry, ToolEntry};
use crate::types::task::{CompletedTask, DateRange, TaskFilter};

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pub tasks: Vec<CompletedTask>,
    pub levels: Vec<LevelEntry>,
    pub tools: Vec<ToolEntry>,
}

impl MemoryStore {
    pub fn new(
        tasks: Vec<CompletedTask>,
        levels: Vec<LevelEntry>,
        tools: Vec<ToolEntry>,
    ) -> Self {
        Self {
            tasks,
            levels,
            tools,
        }
    }
}

impl TaskStore for MemoryStore {
    fn find_tasks(
        &self,
        filter: TaskFilter,
        identifier: &str,
        range: &DateRange,
    ) -> Result<Vec<CompletedTask>, StoreError> {
        Ok(self
            .tasks
            .iter()
            .filter(|task| filter.matches(task, identifier) && range.contains(task.done_date))
            .cloned()
            .collect())
    }

    fn load_all_levels(&self) -> Result<Vec<LevelEntry>, StoreError> {
        Ok(self.levels.clone())
    }

    fn load_all_tools(&self) -> Result<Vec<ToolEntry>, StoreError> {
        Ok(self.tools.clone())
    }
}
