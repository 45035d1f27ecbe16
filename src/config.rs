use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::logging::log_warning;

/// GitHub repository BepInEx releases are fetched from
pub const DEFAULT_REPOSITORY: &str = "BepInEx/BepInEx";

// ============================================================================
// Main App Config
// ============================================================================

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Steam installation to use instead of the auto-detected one
    pub steam_path: Option<PathBuf>,
    /// Additional directories whose subfolders are scanned for games
    pub extra_library_roots: Vec<PathBuf>,
    /// `owner/repo` on GitHub
    pub repository: String,
    /// Game chosen on the last successful install
    pub last_game: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            steam_path: None,
            extra_library_roots: Vec::new(),
            repository: DEFAULT_REPOSITORY.to_string(),
            last_game: None,
        }
    }
}

impl AppConfig {
    fn get_path() -> PathBuf {
        setup_path!("config.json")
    }

    pub fn load() -> Self {
        let path = Self::get_path();
        if path.exists() {
            if let Ok(content) = fs::read_to_string(&path) {
                match serde_json::from_str(&content) {
                    Ok(config) => return config,
                    Err(e) => log_warning(&format!(
                        "Ignoring unreadable config {}: {}",
                        path.display(),
                        e
                    )),
                }
            }
        }
        Self::default()
    }

    pub fn save(&self) {
        let path = Self::get_path();
        // Ensure parent dir exists
        if let Some(parent) = path.parent() {
            let _ = fs::create_dir_all(parent);
        }
        if let Ok(json) = serde_json::to_string_pretty(self) {
            let _ = fs::write(path, json);
        }
    }

    /// Release listing endpoint for the configured repository
    pub fn releases_url(&self) -> String {
        format!("https://api.github.com/repos/{}/releases", self.repository)
    }
}
