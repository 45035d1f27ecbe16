//! Steam library root discovery
//!
//! Combines the default `steamapps/common` folder of the Steam installation with the
//! extra libraries declared in `steamapps/libraryfolders.vdf`.

use std::fs;
use std::path::{Path, PathBuf};

use super::vdf::parse_library_paths;
use crate::config::AppConfig;
use crate::error::{Result, SetupError};
use crate::logging::{log_info, log_warning};

/// Subpath of a Steam library that holds installed games
pub const COMMON_SUBPATH: &str = "steamapps/common";

/// Subpath of a Steam installation holding the library manifest
pub const MANIFEST_SUBPATH: &str = "steamapps/libraryfolders.vdf";

/// Steam installation locations relative to the home directory
#[cfg(not(windows))]
const STEAM_PATHS: &[&str] = &[
    ".local/share/Steam",
    ".steam/debian-installation",
    ".steam/steam",
    ".var/app/com.valvesoftware.Steam/data/Steam",
    ".var/app/com.valvesoftware.Steam/.local/share/Steam",
    "snap/steam/common/.local/share/Steam",
];

/// Find the Steam installation path.
///
/// Checks the well-known locations for native, Flatpak and Snap installs.
/// Returns `None` if Steam is not found.
#[cfg(not(windows))]
#[must_use]
pub fn find_steam_path() -> Option<PathBuf> {
    let home = dirs::home_dir()?;
    STEAM_PATHS
        .iter()
        .map(|relative| home.join(relative))
        .find(|p| p.join("steamapps").exists())
}

/// Find the Steam installation path.
#[cfg(windows)]
#[must_use]
pub fn find_steam_path() -> Option<PathBuf> {
    [r"C:\Program Files (x86)\Steam", r"C:\Program Files\Steam"]
        .iter()
        .map(PathBuf::from)
        .find(|p| p.join("steamapps").exists())
}

/// Collect the library roots that exist on disk.
///
/// `default_root` is included when it exists. Every `"path"` declared in `manifest`
/// contributes `<path>/steamapps/common` when that directory exists. A missing manifest
/// contributes nothing. Duplicates are dropped, keeping first-seen order.
pub fn discover_roots(default_root: &Path, manifest: &Path) -> Result<Vec<PathBuf>> {
    let mut roots = Vec::new();

    if default_root.is_dir() {
        roots.push(default_root.to_path_buf());
    }

    match fs::read_to_string(manifest) {
        Ok(content) => {
            for declared in parse_library_paths(&content) {
                push_existing(&mut roots, PathBuf::from(declared).join(COMMON_SUBPATH));
            }
        }
        Err(e) => log_warning(&format!(
            "Could not read library manifest {}: {}",
            manifest.display(),
            e
        )),
    }

    if roots.is_empty() {
        return Err(SetupError::NoLibraryRoots);
    }

    for root in &roots {
        log_info(&format!("Library root: {}", root.display()));
    }
    Ok(roots)
}

/// Resolve library roots from the Steam installation and the user's configuration.
pub fn discover_configured_roots(config: &AppConfig) -> Result<Vec<PathBuf>> {
    let steam = config.steam_path.clone().or_else(find_steam_path);

    let mut roots = match &steam {
        Some(steam) => {
            log_info(&format!("Steam detected at: {}", steam.display()));
            match discover_roots(&steam.join(COMMON_SUBPATH), &steam.join(MANIFEST_SUBPATH)) {
                Ok(roots) => roots,
                Err(SetupError::NoLibraryRoots) => Vec::new(),
                Err(e) => return Err(e),
            }
        }
        None => {
            log_warning("Steam installation not detected");
            Vec::new()
        }
    };

    for extra in &config.extra_library_roots {
        push_existing(&mut roots, extra.clone());
    }

    if roots.is_empty() {
        return Err(SetupError::NoLibraryRoots);
    }
    Ok(roots)
}

fn push_existing(roots: &mut Vec<PathBuf>, candidate: PathBuf) {
    if candidate.is_dir() && !roots.contains(&candidate) {
        roots.push(candidate);
    }
}
