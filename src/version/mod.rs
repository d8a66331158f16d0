//! Version marker retrieval and formatting
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Source    │────▶│   Checker   │────▶│   Format    │
//! │  (fetch)    │     │   (trim)    │     │ (YYYY-MM..) │
//! └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! - [`source`]: `VersionSource` trait and the HTTP implementation
//! - [`checker`]: Fetches the marker and pairs it with its formatted form
//! - [`format`]: Pure formatting of compact timestamps
//! - [`error`]: Error types for version retrieval

pub mod checker;
pub mod error;
pub mod format;
pub mod source;
