//! Error types for the setup pipeline

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SetupError>;

/// Everything that can abort a setup run.
///
/// The "not found" family covers the decisions the pipeline makes itself; every other
/// variant wraps the failing layer unchanged.
#[derive(Error, Debug)]
pub enum SetupError {
    #[error("No Steam library folders found")]
    NoLibraryRoots,

    #[error("No Unity games found in {searched} library folder(s)")]
    NoApplications { searched: usize },

    #[error("The release registry returned no releases")]
    NoReleases,

    #[error("Could not find release {tag}")]
    ReleaseNotFound { tag: String },

    #[error("Could not find asset '{filename}' in release {tag}")]
    AssetNotFound { filename: String, tag: String },

    #[error("Selection {index} is not one of the {count} offered options")]
    InvalidSelection { index: usize, count: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Walk(#[from] walkdir::Error),

    #[cfg(feature = "installer")]
    #[error("Request failed: {0}")]
    Http(#[from] Box<ureq::Error>),

    #[cfg(feature = "installer")]
    #[error("Archive extraction failed: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[cfg(feature = "full")]
    #[error(transparent)]
    Prompt(#[from] inquire::InquireError),
}

impl SetupError {
    /// True for the errors the pipeline raises when something it looked for is missing.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            SetupError::NoLibraryRoots
                | SetupError::NoApplications { .. }
                | SetupError::NoReleases
                | SetupError::ReleaseNotFound { .. }
                | SetupError::AssetNotFound { .. }
        )
    }
}

#[cfg(feature = "installer")]
impl From<ureq::Error> for SetupError {
    fn from(err: ureq::Error) -> Self {
        SetupError::Http(Box::new(err))
    }
}
