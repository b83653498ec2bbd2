// ⚙️ Dashboard configuration
// Optional JSON file; every field falls back to a default.

use crate::view::{SortKey, Tab, ViewState};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DashboardConfig {
    /// Sort key the clinic table opens with
    pub default_sort: SortKey,

    /// Tab the dashboard opens on
    pub default_tab: Tab,

    /// Bind address for the API server
    pub server_addr: String,

    /// `EnvFilter` directive used when RUST_LOG is unset
    pub log_filter: String,

    /// Where the terminal dashboard writes its log
    pub log_file: PathBuf,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        DashboardConfig {
            default_sort: SortKey::Revenue,
            default_tab: Tab::Overview,
            server_addr: "0.0.0.0:3000".to_string(),
            log_filter: "info".to_string(),
            log_file: PathBuf::from("clinic-metrics.log"),
        }
    }
}

impl DashboardConfig {
    /// Load config from JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;

        serde_json::from_str(&content).context("Failed to parse config JSON")
    }

    /// Config from `--config <path>` if present, defaults otherwise
    pub fn from_args(args: &[String]) -> Result<Self> {
        match args.iter().position(|a| a == "--config") {
            Some(i) => {
                let path = args
                    .get(i + 1)
                    .context("--config requires a file path")?;
                DashboardConfig::from_file(path)
            }
            None => Ok(DashboardConfig::default()),
        }
    }

    pub fn initial_view(&self) -> ViewState {
        ViewState::new(self.default_tab, self.default_sort)
    }
}
