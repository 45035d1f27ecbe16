//! Unity game detection
//!
//! Finds Steam library roots, picks out the Unity games inside them and works out
//! which scripting backend each one uses.
//!
//! # Example
//!
//! ```rust,ignore
//! use bepinex_setup::config::AppConfig;
//! use bepinex_setup::game_finder::{detect_runtime, discover_configured_roots, scan_applications};
//!
//! let roots = discover_configured_roots(&AppConfig::load())?;
//! for app in scan_applications(&roots)?.values() {
//!     println!("{} ({})", app.name, detect_runtime(app));
//! }
//! ```

mod library;
pub mod runtime;
mod vdf;

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, SetupError};
use crate::logging::{log_info, log_warning};

pub use library::{
    discover_configured_roots, discover_roots, find_steam_path, COMMON_SUBPATH, MANIFEST_SUBPATH,
};
pub use runtime::{detect_runtime, find_data_folder, RuntimeVariant};
pub use vdf::parse_library_paths;

use runtime::{DATA_MARKER_FILE, PLAYER_LIBRARY};

// ============================================================================
// Core Types
// ============================================================================

/// An installed Unity game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Application {
    /// Folder name inside the library root
    pub name: String,
    /// Path to the game installation directory
    pub path: PathBuf,
}

/// Games keyed by folder name
pub type ApplicationMap = BTreeMap<String, Application>;

// ============================================================================
// Public API
// ============================================================================

/// Check whether a directory holds a Unity game.
///
/// True when a `*_Data` subfolder contains `globalgamemanagers`, or when
/// `UnityPlayer.dll` sits directly in the directory.
pub fn is_unity_game(dir: &Path) -> bool {
    if dir.join(PLAYER_LIBRARY).is_file() {
        return true;
    }

    let Ok(entries) = fs::read_dir(dir) else {
        return false;
    };

    entries.flatten().any(|entry| {
        let path = entry.path();
        path.is_dir()
            && entry
                .file_name()
                .to_str()
                .is_some_and(|n| n.ends_with(runtime::DATA_FOLDER_SUFFIX))
            && path.join(DATA_MARKER_FILE).is_file()
    })
}

/// Scan the immediate subdirectories of every root for Unity games.
///
/// Roots are visited in order and a later game with the same folder name replaces
/// an earlier one. Unreadable roots are skipped.
pub fn scan_applications(roots: &[PathBuf]) -> Result<ApplicationMap> {
    let mut apps = ApplicationMap::new();

    for root in roots {
        let entries = match fs::read_dir(root) {
            Ok(entries) => entries,
            Err(e) => {
                log_warning(&format!("Skipping library {}: {}", root.display(), e));
                continue;
            }
        };

        for entry in entries.flatten() {
            let path = entry.path();
            if !path.is_dir() || !is_unity_game(&path) {
                continue;
            }

            let name = entry.file_name().to_string_lossy().to_string();
            apps.insert(name.clone(), Application { name, path });
        }
    }

    if apps.is_empty() {
        return Err(SetupError::NoApplications {
            searched: roots.len(),
        });
    }

    log_info(&format!("Found {} Unity games", apps.len()));
    Ok(apps)
}
