//! BepInEx release deployment

use std::path::Path;

use crate::error::{Result, SetupError};
use crate::game_finder::{Application, RuntimeVariant};
use crate::github::GithubRelease;
use crate::logging::{log_download, log_install};
use crate::utils::{download_to, temp_dir_base};

use super::archive::install_archive_in;

/// Name of the release asset matching a tag and backend.
///
/// BepInEx 6 and the pre-release/bleeding-edge builds ship one archive per Unity
/// backend; the 5.x line ships a single backend-agnostic archive.
pub fn asset_file_name(tag: &str, variant: RuntimeVariant) -> String {
    let version = tag.strip_prefix('v').unwrap_or(tag);

    if version.starts_with("6.") || version.contains("-pre") || version.contains("-be") {
        format!("BepInEx-{}-win-x64-{}.zip", variant.engine_tag(), version)
    } else {
        format!("BepInEx_win_x64_{}.zip", version)
    }
}

/// Everything needed to install one release into one game
#[derive(Debug, Clone)]
pub struct InstallTarget {
    pub app: Application,
    pub release: GithubRelease,
    pub variant: RuntimeVariant,
}

impl InstallTarget {
    pub fn asset_name(&self) -> String {
        asset_file_name(&self.release.tag_name, self.variant)
    }
}

/// Download the matching asset and merge it into the game directory.
///
/// The archive is downloaded to a temporary file that is removed when this returns,
/// whether or not the install succeeded.
pub fn deploy(target: &InstallTarget) -> Result<()> {
    deploy_in(&temp_dir_base(), target)
}

/// [`deploy`] with the download and extraction scratch space created under `scratch_base`
pub fn deploy_in(scratch_base: &Path, target: &InstallTarget) -> Result<()> {
    let filename = target.asset_name();
    let asset = target
        .release
        .asset(&filename)
        .ok_or_else(|| SetupError::AssetNotFound {
            filename: filename.clone(),
            tag: target.release.tag_name.clone(),
        })?;

    log_install(&format!(
        "Installing {} ({}) into {}",
        target.release.tag_name,
        target.variant,
        target.app.path.display()
    ));

    let mut download = tempfile::Builder::new()
        .prefix("bepinex-")
        .suffix(".zip")
        .tempfile_in(scratch_base)?;

    log_download(&format!("Downloading {}", asset.browser_download_url));
    let bytes = download_to(&asset.browser_download_url, download.as_file_mut())?;
    log_download(&format!("{} downloaded ({} bytes)", filename, bytes));

    install_archive_in(scratch_base, download.path(), &target.app.path)?;

    log_install(&format!(
        "BepInEx {} installed for {}",
        target.release.tag_name, target.app.name
    ));
    Ok(())
}
