//! BepInEx Setup
//!
//! Interactive installer for the BepInEx modding framework on Unity games.

use bepinex_setup::app;
use bepinex_setup::config::AppConfig;
use bepinex_setup::error::SetupError;
use bepinex_setup::logging::{init_logger, log_error, log_info};
use bepinex_setup::ui::ConsolePrompter;

fn main() {
    // Initialize logging (writes to <config dir>/bepinex-setup/logs/)
    init_logger();
    log_info("bepinex-setup starting up...");

    let mut config = AppConfig::load();
    let mut prompter = ConsolePrompter;

    if let Err(e) = app::run(&mut config, &mut prompter) {
        log_error(&fatal_message(&e));
        std::process::exit(1);
    }

    log_info("Done.");
}

fn fatal_message(err: &SetupError) -> String {
    if err.is_not_found() {
        format!("Nothing was installed: {}", err)
    } else {
        format!("Setup failed: {}", err)
    }
}
