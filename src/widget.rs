//! Footer version widget
//!
//! Runs once per page load: fetch the version marker, format it, and put
//! either the version or a failure placeholder into the footer. Errors never
//! escape; they become the placeholder's tooltip.

use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{info, warn};

use crate::config::{VERSION_PATH, WidgetConfig};
use crate::footer::element::{create_error_version_element, create_version_element};
use crate::footer::target::{FooterTarget, Placement, display_version_element};
use crate::version::checker::{VersionInfo, check_for_updates};
use crate::version::error::VersionError;
use crate::version::source::{HttpVersionSource, VersionSource};

pub struct VersionWidget<S: VersionSource> {
    source: S,
    version_path: String,
    loaded: AtomicBool,
}

impl VersionWidget<HttpVersionSource> {
    /// Widget fetching over HTTP as described by `config`
    pub fn from_config(config: &WidgetConfig) -> Result<Self, VersionError> {
        let source = HttpVersionSource::with_user_agent(&config.base_url, &config.user_agent)?;
        Ok(Self::build(source, &config.version_path))
    }
}

impl<S: VersionSource> VersionWidget<S> {
    /// Widget reading the marker at the default path
    pub fn new(source: S) -> Self {
        Self::build(source, VERSION_PATH)
    }

    pub fn build(source: S, version_path: &str) -> Self {
        Self {
            source,
            version_path: version_path.to_string(),
            loaded: AtomicBool::new(false),
        }
    }

    pub async fn check_for_updates(&self) -> Result<VersionInfo, VersionError> {
        check_for_updates(&self.source, &self.version_path).await
    }

    /// Check the version and render the outcome into `target`
    pub async fn add_version_info_to_footer<T: FooterTarget + ?Sized>(
        &self,
        target: &mut T,
    ) -> Placement {
        let node = match self.check_for_updates().await {
            Ok(info) => {
                info!("Current version: {}", info.current_formatted);
                create_version_element(&info.current_formatted)
            }
            Err(e) => create_error_version_element(Some(&format!("Error: {e}"))),
        };

        display_version_element(target, node)
    }

    /// Page-ready hook
    ///
    /// Only the first call performs the check; later calls return `None`.
    pub async fn on_content_loaded<T: FooterTarget + ?Sized>(
        &self,
        target: &mut T,
    ) -> Option<Placement> {
        if self.loaded.swap(true, Ordering::SeqCst) {
            warn!("Content-loaded hook fired more than once; ignoring");
            return None;
        }

        Some(self.add_version_info_to_footer(target).await)
    }
}
