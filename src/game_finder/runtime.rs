//! Unity scripting backend detection

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use super::Application;

/// Suffix of the Unity data folder (`<Game>_Data`)
pub const DATA_FOLDER_SUFFIX: &str = "_Data";

/// File every Unity data folder carries
pub const DATA_MARKER_FILE: &str = "globalgamemanagers";

/// Player library shipped next to Unity executables
pub const PLAYER_LIBRARY: &str = "UnityPlayer.dll";

/// Subfolder of the data folder that only IL2CPP builds have
pub const IL2CPP_MARKER_DIR: &str = "il2cpp_data";

/// The scripting backend a Unity game was built with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeVariant {
    Mono,
    IL2CPP,
}

impl RuntimeVariant {
    /// Engine tag used in BepInEx 6 asset names
    pub fn engine_tag(&self) -> &'static str {
        match self {
            RuntimeVariant::Mono => "Unity.Mono",
            RuntimeVariant::IL2CPP => "Unity.IL2CPP",
        }
    }
}

impl fmt::Display for RuntimeVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuntimeVariant::Mono => write!(f, "Mono"),
            RuntimeVariant::IL2CPP => write!(f, "IL2CPP"),
        }
    }
}

/// Find the `_Data` folder of a game directory.
///
/// A folder holding `globalgamemanagers` wins over one that doesn't; ties go to the
/// alphabetically first name so the answer does not depend on directory order.
pub fn find_data_folder(game_dir: &Path) -> Option<PathBuf> {
    let mut candidates: Vec<PathBuf> = fs::read_dir(game_dir)
        .ok()?
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_dir()
                && path
                    .file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| n.ends_with(DATA_FOLDER_SUFFIX))
        })
        .collect();
    candidates.sort();

    candidates
        .iter()
        .find(|dir| dir.join(DATA_MARKER_FILE).is_file())
        .or_else(|| candidates.first())
        .cloned()
}

/// Classify the scripting backend of a game. Without a data folder this is `Mono`.
pub fn detect_runtime(app: &Application) -> RuntimeVariant {
    match find_data_folder(&app.path) {
        Some(data) if data.join(IL2CPP_MARKER_DIR).is_dir() => RuntimeVariant::IL2CPP,
        _ => RuntimeVariant::Mono,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app(path: &Path) -> Application {
        Application {
            name: "Game".to_string(),
            path: path.to_path_buf(),
        }
    }

    #[test]
    fn test_no_data_folder_defaults_to_mono() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join(PLAYER_LIBRARY), b"").unwrap();
        assert_eq!(detect_runtime(&app(tmp.path())), RuntimeVariant::Mono);
    }

    #[test]
    fn test_missing_game_dir_defaults_to_mono() {
        let tmp = tempfile::tempdir().unwrap();
        assert_eq!(
            detect_runtime(&app(&tmp.path().join("gone"))),
            RuntimeVariant::Mono
        );
    }

    #[test]
    fn test_il2cpp_marker() {
        let tmp = tempfile::tempdir().unwrap();
        let data = tmp.path().join("Game_Data");
        fs::create_dir_all(data.join(IL2CPP_MARKER_DIR)).unwrap();
        fs::write(data.join(DATA_MARKER_FILE), b"").unwrap();
        assert_eq!(detect_runtime(&app(tmp.path())), RuntimeVariant::IL2CPP);
    }

    #[test]
    fn test_mono_data_folder() {
        let tmp = tempfile::tempdir().unwrap();
        let data = tmp.path().join("Game_Data");
        fs::create_dir_all(data.join("Managed")).unwrap();
        assert_eq!(detect_runtime(&app(tmp.path())), RuntimeVariant::Mono);
    }

    #[test]
    fn test_data_folder_with_marker_preferred() {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir_all(tmp.path().join("Aaa_Data")).unwrap();
        let real = tmp.path().join("Game_Data");
        fs::create_dir_all(&real).unwrap();
        fs::write(real.join(DATA_MARKER_FILE), b"").unwrap();

        assert_eq!(find_data_folder(tmp.path()), Some(real));
    }
}
