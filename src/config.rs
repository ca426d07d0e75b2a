use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::generator::ResearchMode;

const SETTINGS_FILE: &str = "settings.json";

/// User defaults applied when the command line leaves a value open
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    /// Author used by `init` when none is given
    pub default_author: Option<String>,
    /// Directory mods are generated into
    pub output_dir: Option<PathBuf>,
    pub research_mode: ResearchMode,
    /// Game versions written to new projects
    pub supported_versions: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_author: None,
            output_dir: None,
            research_mode: ResearchMode::Inline,
            supported_versions: vec!["1.4".to_string(), "1.5".to_string()],
        }
    }
}

pub struct SettingsManager {
    path: PathBuf,
}

impl SettingsManager {
    pub fn new(custom_path: Option<PathBuf>) -> Result<Self> {
        let path = match custom_path {
            Some(path) => path,
            None => {
                let proj_dirs = ProjectDirs::from("", "", "rimworld-mod-gen")
                    .context("Could not determine config directory")?;
                proj_dirs.config_dir().join(SETTINGS_FILE)
            }
        };

        Ok(Self { path })
    }

    /// Get the settings file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load settings, falling back to defaults when the file does not exist
    pub fn load(&self) -> Result<Settings> {
        if !self.path.exists() {
            return Ok(Settings::default());
        }

        let json = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read settings: {:?}", self.path))?;
        serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse settings: {:?}", self.path))
    }

    pub fn save(&self, settings: &Settings) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }
        let json = serde_json::to_string_pretty(settings).context("Failed to serialize settings")?;
        fs::write(&self.path, json)
            .with_context(|| format!("Failed to write settings: {:?}", self.path))
    }
}
