//! Footer version widget
//!
//! Fetches the `/VERSION.txt` marker published alongside a site, formats the
//! compact `YYYYMMDDHHmm` timestamp it contains, and inserts the result (or a
//! "detection failed" placeholder) into the page footer.
//!
//! # Modules
//!
//! - [`config`]: Widget configuration and well-known paths
//! - [`footer`]: Display nodes, the in-memory footer document, and placement
//! - [`logging`]: `tracing` subscriber setup
//! - [`version`]: Fetching and formatting the version marker
//! - [`widget`]: Orchestration and the one-shot page-ready hook

pub mod config;
pub mod footer;
pub mod logging;
pub mod version;
pub mod widget;
