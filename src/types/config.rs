use crate::error::PerfError;
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_DATA_DIR: &str = "data";
pub const DEFAULT_READ_TIMEOUT_SECS: u64 = 15;
pub const MAX_READ_TIMEOUT_SECS: u64 = 300;
pub const DEFAULT_WORKERS: usize = 4;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PerfConfig {
    pub store: Option<StoreConfig>,
    pub query: Option<QueryConfig>,
    pub report: Option<ReportConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    pub data_dir: Option<String>,
    pub read_timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QueryConfig {
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormatSetting {
    Json,
    Md,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    pub format: Option<ReportFormatSetting>,
}

impl PerfConfig {
    pub fn data_dir(&self) -> &str {
        self.store
            .as_ref()
            .and_then(|store| store.data_dir.as_deref())
            .unwrap_or(DEFAULT_DATA_DIR)
    }

    pub fn read_timeout(&self) -> Duration {
        let secs = self
            .store
            .as_ref()
            .and_then(|store| store.read_timeout_secs)
            .unwrap_or(DEFAULT_READ_TIMEOUT_SECS);
        Duration::from_secs(secs)
    }

    pub fn workers(&self) -> usize {
        self.query
            .as_ref()
            .and_then(|query| query.workers)
            .unwrap_or(DEFAULT_WORKERS)
    }

    pub fn report_format(&self) -> Option<ReportFormatSetting> {
        self.report.as_ref().and_then(|report| report.format)
    }

    pub fn validate(&self) -> Result<(), PerfError> {
        if let Some(store) = &self.store {
            if let Some(data_dir) = &store.data_dir {
                if data_dir.trim().is_empty() {
                    return Err(PerfError::ConfigParse(
                        "store.data_dir must not be empty".to_string(),
                    ));
                }
            }
            if let Some(timeout) = store.read_timeout_secs {
                if !(1..=MAX_READ_TIMEOUT_SECS).contains(&timeout) {
                    return Err(PerfError::ConfigParse(format!(
                        "store.read_timeout_secs must be between 1 and {MAX_READ_TIMEOUT_SECS}"
                    )));
                }
            }
        }

        if let Some(workers) = self.query.as_ref().and_then(|query| query.workers) {
            if workers == 0 {
                return Err(PerfError::ConfigParse(
                    "query.workers must be greater than 0".to_string(),
                ));
            }
        }

        Ok(())
    }
}
