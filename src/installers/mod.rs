//! BepInEx installation into Unity game directories

mod archive;
mod bepinex;

pub use archive::{effective_source_root, extract_zip, install_archive, install_archive_in, merge_copy};
pub use bepinex::{asset_file_name, deploy, deploy_in, InstallTarget};
