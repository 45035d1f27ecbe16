//! The setup run: find a game, pick a release, install it

use crate::config::AppConfig;
use crate::error::{Result, SetupError};
use crate::game_finder::{
    detect_runtime, discover_configured_roots, scan_applications, Application, ApplicationMap,
};
use crate::github::{find_release, list_releases, release_label, resolve_version, GithubRelease};
use crate::installers::{deploy, InstallTarget};
use crate::logging::{log_action, log_info};
use crate::ui::Prompter;

/// Ask which game to install into. The cursor starts on `last_game` when it is still installed.
pub fn choose_application(
    apps: &ApplicationMap,
    last_game: Option<&str>,
    prompter: &mut dyn Prompter,
) -> Result<Application> {
    let names: Vec<String> = apps.keys().cloned().collect();
    let start = last_game
        .and_then(|last| names.iter().position(|n| n == last))
        .unwrap_or(0);

    let index = prompter.select("Select a game", &names, start)?;
    let name = names.get(index).ok_or(SetupError::InvalidSelection {
        index,
        count: names.len(),
    })?;
    let app = apps[name].clone();

    log_action(&format!("Selected game: {} ({})", app.name, app.path.display()));
    Ok(app)
}

/// Show the release list and resolve the user's answer to a release
pub fn choose_release(
    releases: &[GithubRelease],
    prompter: &mut dyn Prompter,
) -> Result<GithubRelease> {
    let listing: Vec<String> = releases
        .iter()
        .enumerate()
        .map(|(i, r)| release_label(i + 1, r))
        .collect();

    let answer = prompter.input("BepInEx version to install", &listing)?;
    let tag = resolve_version(releases, &answer)?;
    let release = find_release(releases, &tag)?;

    log_action(&format!("Selected release: {}", release.tag_name));
    Ok(release.clone())
}

/// Run the whole setup once. Every stage aborts the run on error.
pub fn run(config: &mut AppConfig, prompter: &mut dyn Prompter) -> Result<()> {
    let roots = discover_configured_roots(config)?;
    let apps = scan_applications(&roots)?;
    let app = choose_application(&apps, config.last_game.as_deref(), prompter)?;

    let variant = detect_runtime(&app);
    log_info(&format!("{} uses the {} backend", app.name, variant));

    let releases = list_releases(&config.releases_url())?;
    let release = choose_release(&releases, prompter)?;

    let target = InstallTarget {
        app,
        release,
        variant,
    };
    log_info(&format!("Asset: {}", target.asset_name()));
    deploy(&target)?;

    config.last_game = Some(target.app.name.clone());
    config.save();
    Ok(())
}
