use thiserror::Error;

#[derive(Debug, Error)]
pub enum VersionError {
    /// The server answered with a non-success status. Only the caller's
    /// failure message is kept.
    #[error("{message}")]
    Fetch { message: String },

    #[error(transparent)]
    Network(#[from] reqwest::Error),

    #[error("Failed to create HTTP client: {0}")]
    Client(reqwest::Error),
}

impl VersionError {
    pub fn fetch(message: impl Into<String>) -> Self {
        Self::Fetch {
            message: message.into(),
        }
    }
}
