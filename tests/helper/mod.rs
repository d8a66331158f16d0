//! Shared test utilities

pub mod footer;

pub use footer::{RecordingTarget, marker_server};
