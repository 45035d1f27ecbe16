use std::{path::PathBuf, sync::LazyLock};

pub static DEFAULT_SETUP_PATH: LazyLock<PathBuf> = LazyLock::new(|| {
    if let Ok(custom) = std::env::var("BEPINEX_SETUP_HOME") {
        return PathBuf::from(custom);
    }

    let mut path = dirs::config_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_default();
    path.push("bepinex-setup");
    path
});

/// Computes a path inside the bepinex-setup data directory.
///
/// Returns a `&Path` referencing the data directory itself if no arguments are passed in, or a
/// `PathBuf` created by joining all of the arguments to the base directory if at least one
/// argument is passed in.
///
/// # Examples
///
/// ```ignore
/// // Assuming `BEPINEX_SETUP_HOME` is not set, the base is <config dir>/bepinex-setup
/// let logs = setup_path!("logs");
/// assert!(logs.ends_with("bepinex-setup/logs"));
/// ```
#[macro_export]
macro_rules! setup_path {
    () => {
        $crate::paths::DEFAULT_SETUP_PATH.as_path()
    };

    ( $( $path:expr ),+ $(,)? ) => {
        [
            $crate::paths::DEFAULT_SETUP_PATH.as_path(),
            $( std::path::Path::new(&$path) ),+
        ].into_iter().collect::<std::path::PathBuf>()
    };
}
