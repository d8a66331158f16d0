use serde::Deserialize;
use std::path::{Path, PathBuf};

// =============================================================================
// Version marker
// =============================================================================

/// Path of the version marker relative to the site root
pub const VERSION_PATH: &str = "/VERSION.txt";

/// Failure message carried by the error when the marker request is rejected
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch current version";

/// Default site root the marker is fetched from
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

pub const DEFAULT_USER_AGENT: &str = "footer-version";

// =============================================================================
// Footer
// =============================================================================

/// Classes shared by the version paragraph and the footer anchor it follows
pub const VERSION_ELEMENT_CLASSES: &str = "text-gray-500 text-sm mt-1 text-center md:text-left";

/// Paragraph the version element is inserted after
pub const FOOTER_ANCHOR_SELECTOR: &str = ".footer p.text-gray-500.text-sm";

/// Container used when the anchor paragraph is missing
pub const FOOTER_CONTAINER_SELECTOR: &str = ".footer .container";

/// Widget configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct WidgetConfig {
    pub base_url: String,
    pub version_path: String,
    pub user_agent: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            version_path: VERSION_PATH.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl WidgetConfig {
    /// Reads a JSON config file. Missing fields take their defaults.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

/// Returns the path to the data directory for footer-version.
/// Uses $XDG_DATA_HOME/footer-version if XDG_DATA_HOME is set,
/// otherwise falls back to ~/.local/share/footer-version,
/// or ./footer-version if neither is available.
pub fn data_dir() -> PathBuf {
    data_dir_with_env(std::env::var("XDG_DATA_HOME").ok(), dirs::home_dir())
}

/// Returns the path to the log file.
pub fn log_path() -> PathBuf {
    data_dir().join("footer-version.log")
}

fn data_dir_with_env(xdg_data_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let data_dir = xdg_data_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."));

    data_dir.join("footer-version")
}
