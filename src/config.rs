use crate::error::{PerfError, Result};
use crate::types::config::PerfConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;

pub const DEFAULT_CONFIG_FILE: &str = "perfpoint.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".perfpoint/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/perfpoint/config.toml";

/// Where a config layer came from. Later layers override earlier ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerSource {
    Global,
    Repo,
    Local,
}

impl LayerSource {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Global => "global",
            Self::Repo => "repo",
            Self::Local => "local",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigLayer {
    pub source: LayerSource,
    pub path: PathBuf,
}

/// A validated config plus the layers that went into it, in merge order.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: PerfConfig,
    pub layers: Vec<ConfigLayer>,
}

impl LoadedConfig {
    /// Comma-separated layer names, e.g. `global, repo`.
    pub fn describe_layers(&self) -> String {
        self.layers
            .iter()
            .map(|layer| layer.source.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Loads `perfpoint.toml` from `root` with the user-wide file under it and
/// `.perfpoint/local.toml` over it. Returns `None` when `root` has no
/// `perfpoint.toml`; the other layers never stand alone.
pub fn load_config(root: &Path) -> Result<Option<LoadedConfig>> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, global.as_deref())
}

pub(crate) fn load_config_with_global(
    root: &Path,
    global_path: Option<&Path>,
) -> Result<Option<LoadedConfig>> {
    let repo_path = root.join(DEFAULT_CONFIG_FILE);
    if !repo_path.exists() {
        return Ok(None);
    }

    let mut candidates = Vec::with_capacity(3);
    if let Some(path) = global_path {
        candidates.push((LayerSource::Global, path.to_path_buf()));
    }
    candidates.push((LayerSource::Repo, repo_path));
    candidates.push((LayerSource::Local, root.join(DEFAULT_LOCAL_FILE)));

    let mut merged = Value::Table(Map::new());
    let mut layers = Vec::new();
    for (source, path) in candidates {
        if !path.is_file() {
            continue;
        }
        let overlay = read_layer(source, &path)?;
        overlay_table(&mut merged, overlay);
        tracing::debug!(layer = source.as_str(), path = %path.display(), "applied config layer");
        layers.push(ConfigLayer { source, path });
    }

    let config: PerfConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| PerfError::ConfigParse(e.to_string()))?;
    config.validate()?;
    tracing::debug!(
        data_dir = config.data_dir(),
        workers = config.workers(),
        layers = layers.len(),
        "loaded config"
    );
    Ok(Some(LoadedConfig { config, layers }))
}

fn read_layer(source: LayerSource, path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|e| {
        PerfError::ConfigParse(format!("{} layer {}: {}", source.as_str(), path.display(), e))
    })
}

/// Deep-merges tables; any non-table value in `overlay` replaces the slot.
fn overlay_table(base: &mut Value, overlay: Value) {
    let Value::Table(overlay_entries) = overlay else {
        *base = overlay;
        return;
    };
    let Value::Table(base_entries) = base else {
        *base = Value::Table(overlay_entries);
        return;
    };
    for (key, value) in overlay_entries {
        match base_entries.get_mut(&key) {
            Some(existing) => overlay_table(existing, value),
            None => {
                base_entries.insert(key, value);
            }
        }
    }
}
