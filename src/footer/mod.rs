//! Footer rendering
//!
//! - [`element`]: Display nodes created for each check
//! - [`document`]: In-memory page with the selector subset the footer needs
//! - [`target`]: `FooterTarget` trait and placement of the version node

pub mod document;
pub mod element;
pub mod target;
