//! Shared utility functions used across the application

use std::env;
use std::io::Write;
use std::path::PathBuf;
use std::sync::OnceLock;

use crate::error::Result;

static HTTP_AGENT: OnceLock<ureq::Agent> = OnceLock::new();

/// The process-wide HTTP agent.
///
/// Built on first use, before any request goes out, and restricted to HTTPS for the
/// lifetime of the process.
pub fn http_agent() -> &'static ureq::Agent {
    HTTP_AGENT.get_or_init(|| {
        ureq::AgentBuilder::new()
            .https_only(true)
            .user_agent(concat!("bepinex-setup/", env!("CARGO_PKG_VERSION")))
            .build()
    })
}

/// Download `url` into `out`, returning the number of bytes written
pub fn download_to<W: Write>(url: &str, out: &mut W) -> Result<u64> {
    let resp = http_agent().get(url).call()?;
    let mut reader = resp.into_reader();
    let written = std::io::copy(&mut reader, out)?;
    out.flush()?;
    Ok(written)
}

/// Directory temporary files and folders are created in.
///
/// Never relative, so a `TMPDIR=tmp` environment cannot drop scratch data into the
/// working directory.
pub fn temp_dir_base() -> PathBuf {
    let t = env::temp_dir();
    if t.is_absolute() {
        t
    } else {
        #[cfg(windows)]
        {
            env::var("TEMP")
                .or_else(|_| env::var("TMP"))
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("C:\\Windows\\Temp"))
        }
        #[cfg(not(windows))]
        {
            PathBuf::from("/tmp")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temp_dir_base_is_absolute() {
        assert!(temp_dir_base().is_absolute());
    }
}
