//! Placement of the version node in the footer

#[cfg(test)]
use mockall::automock;

use tracing::debug;

use crate::config::{FOOTER_ANCHOR_SELECTOR, FOOTER_CONTAINER_SELECTOR};
use crate::footer::document::Document;
use crate::footer::element::Node;

/// Where the version node ended up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Immediately after the footer anchor paragraph
    AfterAnchor,
    /// Appended to the footer container's first inner block
    InContainer,
    /// No footer location was found; the node was discarded
    Dropped,
}

/// Display surface holding the page footer
///
/// Each method hands the node back when its location does not exist.
#[cfg_attr(test, automock)]
pub trait FooterTarget {
    /// Insert `node` right after the footer anchor paragraph
    fn insert_after_anchor(&mut self, node: Node) -> Result<(), Node>;

    /// Append `node` inside the footer container's first inner block
    fn append_to_container(&mut self, node: Node) -> Result<(), Node>;
}

impl FooterTarget for Document {
    fn insert_after_anchor(&mut self, node: Node) -> Result<(), Node> {
        match self.query_selector(FOOTER_ANCHOR_SELECTOR) {
            Some(anchor) => self.insert_after(&anchor, node),
            None => Err(node),
        }
    }

    fn append_to_container(&mut self, node: Node) -> Result<(), Node> {
        let Some(container) = self.query_selector(FOOTER_CONTAINER_SELECTOR) else {
            return Err(node);
        };
        match self.query_selector_within(&container, "div") {
            Some(block) => self.append_child(&block, node),
            None => Err(node),
        }
    }
}

/// Put `node` into the footer, preferring the anchor over the container
pub fn display_version_element<T: FooterTarget + ?Sized>(target: &mut T, node: Node) -> Placement {
    let node = match target.insert_after_anchor(node) {
        Ok(()) => return Placement::AfterAnchor,
        Err(node) => node,
    };

    match target.append_to_container(node) {
        Ok(()) => Placement::InContainer,
        Err(_) => {
            debug!("No footer location found; version element dropped");
            Placement::Dropped
        }
    }
}
