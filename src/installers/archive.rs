//! Archive extraction and merge-copy into a game directory

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::Result;
use crate::logging::log_install;
use crate::utils::temp_dir_base;

/// Extract a zip archive into `dest`
pub fn extract_zip(archive_path: &Path, dest: &Path) -> Result<()> {
    let file = fs::File::open(archive_path)?;
    let mut archive = zip::ZipArchive::new(file)?;
    archive.extract(dest)?;
    Ok(())
}

/// Pick the folder whose contents should be installed.
///
/// Some archives wrap everything in a single container folder. If `extracted` holds
/// exactly one entry and it is a directory, that directory is returned; otherwise
/// `extracted` itself.
pub fn effective_source_root(extracted: &Path) -> Result<PathBuf> {
    let mut entries = fs::read_dir(extracted)?.collect::<std::io::Result<Vec<_>>>()?;

    if entries.len() == 1 && entries[0].file_type()?.is_dir() {
        if let Some(only) = entries.pop() {
            return Ok(only.path());
        }
    }
    Ok(extracted.to_path_buf())
}

/// Copy the tree under `src` into `dest`, overwriting files that already exist and
/// leaving everything else in `dest` alone. Returns the number of files copied.
pub fn merge_copy(src: &Path, dest: &Path) -> Result<usize> {
    let mut copied = 0;

    for entry in WalkDir::new(src).min_depth(1) {
        let entry = entry?;
        let Ok(relative) = entry.path().strip_prefix(src) else {
            continue;
        };
        let target = dest.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(entry.path(), &target)?;
            copied += 1;
        }
    }

    Ok(copied)
}

/// Extract `archive_path` into a scratch directory and merge its contents into `dest`.
///
/// Nothing is written to `dest` unless extraction succeeded. The scratch directory is
/// removed when this returns, on success or failure.
pub fn install_archive(archive_path: &Path, dest: &Path) -> Result<usize> {
    install_archive_in(&temp_dir_base(), archive_path, dest)
}

/// [`install_archive`] with the scratch directory created under `scratch_base`
pub fn install_archive_in(scratch_base: &Path, archive_path: &Path, dest: &Path) -> Result<usize> {
    let scratch = tempfile::Builder::new()
        .prefix("bepinex-extract-")
        .tempdir_in(scratch_base)?;

    extract_zip(archive_path, scratch.path())?;

    let source = effective_source_root(scratch.path())?;
    let copied = merge_copy(&source, dest)?;
    log_install(&format!("Copied {} files into {}", copied, dest.display()));

    Ok(copied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use std::io::Write;
    use zip::write::SimpleFileOptions;

    fn write_zip(path: &Path, files: &[(&str, &str)]) {
        let file = fs::File::create(path).unwrap();
        let mut writer = zip::ZipWriter::new(file);
        for (name, content) in files {
            writer.start_file(*name, SimpleFileOptions::default()).unwrap();
            writer.write_all(content.as_bytes()).unwrap();
        }
        writer.finish().unwrap();
    }

    fn snapshot(dir: &Path) -> BTreeMap<PathBuf, Vec<u8>> {
        WalkDir::new(dir)
            .min_depth(1)
            .into_iter()
            .map(|e| e.unwrap())
            .filter(|e| e.file_type().is_file())
            .map(|e| {
                (
                    e.path().strip_prefix(dir).unwrap().to_path_buf(),
                    fs::read(e.path()).unwrap(),
                )
            })
            .collect()
    }

    #[test]
    fn test_single_wrapper_folder_is_unwrapped() {
        let tmp = tempfile::tempdir().unwrap();
        let wrapper = tmp.path().join("BepInEx-Unity-Mono");
        fs::create_dir_all(wrapper.join("BepInEx/core")).unwrap();
        fs::write(wrapper.join("winhttp.dll"), b"dll").unwrap();

        assert_eq!(effective_source_root(tmp.path()).unwrap(), wrapper);
    }

    #[test]
    fn test_multiple_entries_keep_root() {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir_all(tmp.path().join("BepInExPack")).unwrap();
        fs::write(tmp.path().join("changelog.txt"), b"notes").unwrap();

        assert_eq!(effective_source_root(tmp.path()).unwrap(), tmp.path());
    }

    #[test]
    fn test_single_file_keeps_root() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("winhttp.dll"), b"dll").unwrap();

        assert_eq!(effective_source_root(tmp.path()).unwrap(), tmp.path());
    }

    #[test]
    fn test_merge_copy_overwrites_and_preserves() {
        let tmp = tempfile::tempdir().unwrap();
        let src = tmp.path().join("src");
        let dest = tmp.path().join("game");
        fs::create_dir_all(src.join("BepInEx/core")).unwrap();
        fs::write(src.join("BepInEx/core/BepInEx.dll"), b"new").unwrap();
        fs::write(src.join("doorstop_config.ini"), b"[General]").unwrap();

        fs::create_dir_all(dest.join("BepInEx/core")).unwrap();
        fs::create_dir_all(dest.join("BepInEx/plugins")).unwrap();
        fs::write(dest.join("BepInEx/core/BepInEx.dll"), b"old").unwrap();
        fs::write(dest.join("BepInEx/plugins/MyMod.dll"), b"mod").unwrap();

        assert_eq!(merge_copy(&src, &dest).unwrap(), 2);
        assert_eq!(fs::read(dest.join("BepInEx/core/BepInEx.dll")).unwrap(), b"new");
        assert_eq!(fs::read(dest.join("BepInEx/plugins/MyMod.dll")).unwrap(), b"mod");
        assert!(dest.join("doorstop_config.ini").is_file());
    }

    #[test]
    fn test_install_archive_unwraps_and_is_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        let archive = tmp.path().join("BepInEx_win_x64_5.4.22.zip");
        write_zip(
            &archive,
            &[
                ("BepInExPack/winhttp.dll", "dll"),
                ("BepInExPack/doorstop_config.ini", "[UnityDoorstop]"),
                ("BepInExPack/BepInEx/core/BepInEx.dll", "core"),
            ],
        );

        let game = tmp.path().join("MyGame");
        fs::create_dir_all(game.join("MyGame_Data")).unwrap();
        fs::write(game.join("MyGame.exe"), b"exe").unwrap();

        assert_eq!(install_archive(&archive, &game).unwrap(), 3);
        let first = snapshot(&game);
        assert_eq!(first[&PathBuf::from("winhttp.dll")], b"dll");
        assert_eq!(first[&PathBuf::from("BepInEx/core/BepInEx.dll")], b"core");
        assert!(first.contains_key(&PathBuf::from("MyGame.exe")));
        assert!(!game.join("BepInExPack").exists());

        install_archive(&archive, &game).unwrap();
        assert_eq!(snapshot(&game), first);
    }

    #[test]
    fn test_broken_archive_leaves_game_untouched() {
        let tmp = tempfile::tempdir().unwrap();
        let archive = tmp.path().join("broken.zip");
        fs::write(&archive, b"this is not a zip file").unwrap();

        let game = tmp.path().join("MyGame");
        fs::create_dir_all(&game).unwrap();
        fs::write(game.join("MyGame.exe"), b"exe").unwrap();

        assert!(install_archive(&archive, &game).is_err());
        assert_eq!(snapshot(&game).len(), 1);
    }

    #[test]
    fn test_scratch_dir_removed_after_success_and_failure() {
        let tmp = tempfile::tempdir().unwrap();
        let scratch_base = tmp.path().join("scratch");
        fs::create_dir_all(&scratch_base).unwrap();
        let game = tmp.path().join("MyGame");
        fs::create_dir_all(&game).unwrap();

        let archive = tmp.path().join("BepInEx_win_x64_5.4.22.zip");
        write_zip(&archive, &[("winhttp.dll", "dll"), ("changelog.txt", "notes")]);
        assert_eq!(install_archive_in(&scratch_base, &archive, &game).unwrap(), 2);
        assert_eq!(fs::read_dir(&scratch_base).unwrap().count(), 0);

        let broken = tmp.path().join("broken.zip");
        fs::write(&broken, b"this is not a zip file").unwrap();
        assert!(install_archive_in(&scratch_base, &broken, &game).is_err());
        assert_eq!(fs::read_dir(&scratch_base).unwrap().count(), 0);
    }
}
