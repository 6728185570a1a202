use crate::error::{Result, WardError};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for ward, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WardConfig {
    /// Load the demo patients at start-up
    #[serde(default = "default_seed_demo_data")]
    pub seed_demo_data: bool,

    /// JSON file of patients to import at start-up (replaces the demo data)
    #[serde(default)]
    pub data_file: Option<PathBuf>,
}

fn default_seed_demo_data() -> bool {
    true
}

impl Default for WardConfig {
    fn default() -> Self {
        Self {
            seed_demo_data: default_seed_demo_data(),
            data_file: None,
        }
    }
}

/// Platform config directory (e.g. `~/.config/ward`), if one can be determined.
pub fn default_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("com", "ward", "ward").map(|dirs| dirs.config_dir().to_path_buf())
}

impl WardConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: WardConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    /// Set a value by its user-facing key (`seed-demo-data`, `data-file`).
    /// An empty `data-file` value clears it.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "seed-demo-data" => {
                self.seed_demo_data = value.parse().map_err(|_| {
                    WardError::Config(format!("seed-demo-data expects true or false, got {}", value))
                })?;
            }
            "data-file" => {
                self.data_file = (!value.is_empty()).then(|| PathBuf::from(value));
            }
            other => return Err(WardError::Config(format!("Unknown config key: {}", other))),
        }
        Ok(())
    }
}
