//! Current version lookup

use tracing::error;

use crate::config::FETCH_FAILED_MESSAGE;
use crate::version::error::VersionError;
use crate::version::format::format_version;
use crate::version::source::{FetchOptions, VersionSource};

/// Version marker paired with its display form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionInfo {
    /// Marker with surrounding whitespace removed
    pub current: String,
    /// Output of [`format_version`] for `current`
    pub current_formatted: String,
}

impl VersionInfo {
    pub fn new(raw: &str) -> Self {
        let current = raw.trim().to_string();
        let current_formatted = format_version(&current);
        Self {
            current,
            current_formatted,
        }
    }
}

/// Fetch the version marker at `path`, bypassing caches
///
/// Errors are logged and returned unchanged.
pub async fn check_for_updates<S: VersionSource + ?Sized>(
    source: &S,
    path: &str,
) -> Result<VersionInfo, VersionError> {
    let raw = source
        .fetch_version(path, FETCH_FAILED_MESSAGE, FetchOptions::no_store())
        .await
        .inspect_err(|e| error!("Version check failed: {}", e))?;

    Ok(VersionInfo::new(&raw))
}
