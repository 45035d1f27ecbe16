//! GitHub release registry access and version selection

use serde::Deserialize;

use crate::error::{Result, SetupError};

/// GitHub release metadata
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct GithubRelease {
    pub tag_name: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub prerelease: bool,
    #[serde(default)]
    pub assets: Vec<GithubAsset>,
}

impl GithubRelease {
    /// Release title, falling back to the tag when the release has none
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => &self.tag_name,
        }
    }

    /// Find an asset by exact file name
    pub fn asset(&self, name: &str) -> Option<&GithubAsset> {
        self.assets.iter().find(|a| a.name == name)
    }
}

/// GitHub release asset
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct GithubAsset {
    pub name: String,
    pub browser_download_url: String,
}

/// Fetch every release of `url` (a `/repos/{owner}/{repo}/releases` endpoint).
///
/// GitHub returns releases newest first, prereleases included; that order is kept.
#[cfg(feature = "installer")]
pub fn list_releases(url: &str) -> Result<Vec<GithubRelease>> {
    use crate::logging::log_info;

    log_info(&format!("Fetching releases from {}", url));
    let releases: Vec<GithubRelease> = crate::utils::http_agent().get(url).call()?.into_json()?;
    log_info(&format!("Registry lists {} releases", releases.len()));
    Ok(releases)
}

/// One line of the version menu: `{index}. {tag}[ (prerelease)] - {name}`
pub fn release_label(index: usize, release: &GithubRelease) -> String {
    format!(
        "{}. {}{} - {}",
        index,
        release.tag_name,
        if release.prerelease { " (prerelease)" } else { "" },
        release.display_name()
    )
}

/// Turn the user's answer at the version prompt into a tag.
///
/// Blank picks the newest release, an in-range 1-based number picks that entry, and
/// anything else is taken as a literal tag (trimmed). Literal tags are not checked
/// here; see [`find_release`].
pub fn resolve_version(releases: &[GithubRelease], input: &str) -> Result<String> {
    let input = input.trim();

    if input.is_empty() {
        return releases
            .first()
            .map(|r| r.tag_name.clone())
            .ok_or(SetupError::NoReleases);
    }

    if let Ok(index) = input.parse::<usize>() {
        if let Some(release) = index.checked_sub(1).and_then(|i| releases.get(i)) {
            return Ok(release.tag_name.clone());
        }
    }

    Ok(input.to_string())
}

/// Look up a release by exact tag
pub fn find_release<'a>(releases: &'a [GithubRelease], tag: &str) -> Result<&'a GithubRelease> {
    releases
        .iter()
        .find(|r| r.tag_name == tag)
        .ok_or_else(|| SetupError::ReleaseNotFound {
            tag: tag.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_releases() -> Vec<GithubRelease> {
        serde_json::from_str(
            r#"[
                {
                    "tag_name": "v6.0.0-pre.2",
                    "name": "BepInEx 6.0.0-pre.2",
                    "prerelease": true,
                    "assets": [
                        {
                            "name": "BepInEx-Unity.IL2CPP-win-x64-6.0.0-pre.2.zip",
                            "browser_download_url": "https://example.invalid/il2cpp.zip",
                            "size": 123
                        }
                    ]
                },
                { "tag_name": "v5.4.23", "name": null, "prerelease": false, "assets": [] },
                { "tag_name": "v5.4.22", "name": "BepInEx 5.4.22", "prerelease": false, "assets": [] }
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn test_resolve_blank_is_latest() {
        let releases = sample_releases();
        assert_eq!(resolve_version(&releases, "").unwrap(), "v6.0.0-pre.2");
        assert_eq!(resolve_version(&releases, "   ").unwrap(), "v6.0.0-pre.2");
    }

    #[test]
    fn test_resolve_index() {
        let releases = sample_releases();
        assert_eq!(resolve_version(&releases, "2").unwrap(), "v5.4.23");
        assert_eq!(resolve_version(&releases, " 3 ").unwrap(), "v5.4.22");
    }

    #[test]
    fn test_resolve_literal_tag() {
        let releases = sample_releases();
        assert_eq!(resolve_version(&releases, "6.0.0-pre.2").unwrap(), "6.0.0-pre.2");
        assert_eq!(resolve_version(&releases, " v5.4.22\n").unwrap(), "v5.4.22");
    }

    #[test]
    fn test_out_of_range_index_is_a_literal_tag() {
        let releases = sample_releases();
        assert_eq!(resolve_version(&releases, "0").unwrap(), "0");
        assert_eq!(resolve_version(&releases, "4").unwrap(), "4");

        let err = find_release(&releases, "4").unwrap_err();
        assert_eq!(err.to_string(), "Could not find release 4");
    }

    #[test]
    fn test_resolve_blank_without_releases() {
        assert!(matches!(resolve_version(&[], ""), Err(SetupError::NoReleases)));
    }

    #[test]
    fn test_find_release_is_exact() {
        let releases = sample_releases();
        assert_eq!(
            find_release(&releases, "v5.4.22").unwrap().display_name(),
            "BepInEx 5.4.22"
        );
        assert!(find_release(&releases, "5.4.22").is_err());
    }

    #[test]
    fn test_release_labels() {
        let releases = sample_releases();
        assert_eq!(
            release_label(1, &releases[0]),
            "1. v6.0.0-pre.2 (prerelease) - BepInEx 6.0.0-pre.2"
        );
        assert_eq!(release_label(2, &releases[1]), "2. v5.4.23 - v5.4.23");
    }
}
