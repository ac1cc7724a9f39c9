use crate::error::StoreError;
use crate::store::TaskStore;
use crate::types::table::{LevelEntry, ToolEntry};
use crate::types::task::{CompletedTask, DateRange, TaskFilter};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use walkdir::WalkDir;

pub const LEVELS_FILE: &str = "levels.json";
pub const TOOLS_FILE: &str = "tools.json";
pub const TASKS_DIR: &str = "tasks";

/// Document-directory store:
///
/// ```text
/// <root>/levels.json        [LevelEntry, ...]
/// <root>/tools.json         [ToolEntry, ...]
/// <root>/tasks/**/*.json    [CompletedTask, ...] per file
/// ```
#[derive(Debug, Clone)]
pub struct DirectoryStore {
    root: PathBuf,
    read_timeout: Duration,
}

impl DirectoryStore {
    pub fn new(root: impl Into<PathBuf>, read_timeout: Duration) -> Self {
        Self {
            root: root.into(),
            read_timeout,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Every task in the store, regardless of identifier or date.
    pub fn load_all_tasks(&self) -> Result<Vec<CompletedTask>, StoreError> {
        let deadline = Deadline::start(self.read_timeout);
        let mut tasks = Vec::new();
        for path in self.task_files()? {
            let mut batch: Vec<CompletedTask> = read_document(&path)?;
            tasks.append(&mut batch);
            deadline.check()?;
        }
        Ok(tasks)
    }

    fn task_files(&self) -> Result<Vec<PathBuf>, StoreError> {
        let dir = self.root.join(TASKS_DIR);
        if !dir.is_dir() {
            return Err(StoreError::NotFound(dir));
        }
        let mut files = Vec::new();
        for entry in WalkDir::new(&dir).sort_by_file_name() {
            let entry = entry.map_err(|err| {
                let path = err.path().map(Path::to_path_buf).unwrap_or_else(|| dir.clone());
                StoreError::Io {
                    path,
                    source: err.into(),
                }
            })?;
            let is_json = entry
                .path()
                .extension()
                .map(|ext| ext == "json")
                .unwrap_or(false);
            if entry.file_type().is_file() && is_json {
                files.push(entry.into_path());
            }
        }
        Ok(files)
    }

    fn load_table<T: DeserializeOwned>(&self, file: &str) -> Result<Vec<T>, StoreError> {
        let deadline = Deadline::start(self.read_timeout);
        let rows = read_document(&self.root.join(file))?;
        deadline.check()?;
        Ok(rows)
    }
}

impl TaskStore for DirectoryStore {
    fn find_tasks(
        &self,
        filter: TaskFilter,
        identifier: &str,
        range: &DateRange,
    ) -> Result<Vec<CompletedTask>, StoreError> {
        let deadline = Deadline::start(self.read_timeout);
        let mut matched = Vec::new();
        for path in self.task_files()? {
            let batch: Vec<CompletedTask> = read_document(&path)?;
            matched.extend(
                batch
                    .into_iter()
                    .filter(|task| {
                        filter.matches(task, identifier) && range.contains(task.done_date)
                    }),
            );
            deadline.check()?;
        }
        tracing::debug!(
            filter = filter.as_str(),
            identifier,
            matched = matched.len(),
            "store lookup"
        );
        Ok(matched)
    }

    fn load_all_levels(&self) -> Result<Vec<LevelEntry>, StoreError> {
        self.load_table(LEVELS_FILE)
    }

    fn load_all_tools(&self) -> Result<Vec<ToolEntry>, StoreError> {
        self.load_table(TOOLS_FILE)
    }
}

fn read_document<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, StoreError> {
    let content = std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            StoreError::NotFound(path.to_path_buf())
        } else {
            StoreError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;
    tracing::trace!(path = %path.display(), bytes = content.len(), "read store document");
    serde_json::from_str(&content).map_err(|source| StoreError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

struct Deadline {
    started: Instant,
    limit: Duration,
}

impl Deadline {
    fn start(limit: Duration) -> Self {
        Self {
            started: Instant::now(),
            limit,
        }
    }

    fn check(&self) -> Result<(), StoreError> {
        let elapsed = self.started.elapsed();
        if elapsed > self.limit {
            return Err(StoreError::Timeout {
                elapsed_ms: elapsed.as_millis(),
                limit_ms: self.limit.as_millis(),
            });
        }
        Ok(())
    }
}
