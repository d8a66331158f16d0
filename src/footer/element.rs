//! Display nodes

use crate::config::VERSION_ELEMENT_CLASSES;

/// Label preceding the version text
const VERSION_LABEL: &str = "Version: ";

/// Shown in place of the version when the check fails
pub const DETECTION_FAILED_TEXT: &str = "detection failed";

const DETECTION_FAILED_CLASSES: &str = "text-amber-500";

/// A node in a [`Document`](crate::footer::document::Document)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        }
    }

    pub fn as_element_mut(&mut self) -> Option<&mut Element> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        }
    }

    pub fn text_content(&self) -> String {
        match self {
            Node::Element(element) => element.text_content(),
            Node::Text(text) => text.clone(),
        }
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(&escape_html(text)),
            Node::Element(element) => element.write_html(out),
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

/// An element with a tag, class list, optional tooltip, and children
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    pub classes: Vec<String>,
    pub title: Option<String>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            classes: Vec::new(),
            title: None,
            children: Vec::new(),
        }
    }

    /// Replace the class list with the whitespace-separated names in `classes`
    pub fn with_class_name(mut self, classes: &str) -> Self {
        self.classes = classes.split_whitespace().map(str::to_string).collect();
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn with_text(self, text: impl Into<String>) -> Self {
        self.with_child(Node::Text(text.into()))
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn class_name(&self) -> String {
        self.classes.join(" ")
    }

    pub fn text_content(&self) -> String {
        self.children.iter().map(Node::text_content).collect()
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        if !self.classes.is_empty() {
            out.push_str(" class=\"");
            out.push_str(&escape_html(&self.class_name()));
            out.push('"');
        }
        if let Some(title) = &self.title {
            out.push_str(" title=\"");
            out.push_str(&escape_html(title));
            out.push('"');
        }
        out.push('>');
        for child in &self.children {
            child.write_html(out);
        }
        out.push_str("</");
        out.push_str(&self.tag);
        out.push('>');
    }
}

/// Paragraph showing the formatted version
pub fn create_version_element(formatted_version: &str) -> Node {
    Element::new("p")
        .with_class_name(VERSION_ELEMENT_CLASSES)
        .with_text(format!("{VERSION_LABEL}{formatted_version}"))
        .into()
}

/// Paragraph reporting a failed check, with `message` as its tooltip
pub fn create_error_version_element(message: Option<&str>) -> Node {
    let status = Element::new("span")
        .with_class_name(DETECTION_FAILED_CLASSES)
        .with_text(DETECTION_FAILED_TEXT);

    Element::new("p")
        .with_class_name(VERSION_ELEMENT_CLASSES)
        .with_text(VERSION_LABEL)
        .with_child(status)
        .with_title(message.unwrap_or_default())
        .into()
}

fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_version_element_renders_formatted_version() {
        let node = create_version_element("2024-01-01 12:30");

        assert_eq!(
            node.to_html(),
            r#"<p class="text-gray-500 text-sm mt-1 text-center md:text-left">Version: 2024-01-01 12:30</p>"#
        );
    }

    #[test]
    fn create_version_element_escapes_marker_text() {
        let node = create_version_element("<b>1.0</b>");

        assert_eq!(node.text_content(), "Version: <b>1.0</b>");
        assert!(node.to_html().contains("Version: &lt;b&gt;1.0&lt;/b&gt;"));
    }

    #[test]
    fn create_error_version_element_sets_tooltip_and_status_span() {
        let node = create_error_version_element(Some("Error: Failed to fetch current version"));
        let element = node.as_element().unwrap();

        assert_eq!(element.tag, "p");
        assert_eq!(
            element.title.as_deref(),
            Some("Error: Failed to fetch current version")
        );
        assert_eq!(node.text_content(), "Version: detection failed");
        assert_eq!(
            node.to_html(),
            concat!(
                r#"<p class="text-gray-500 text-sm mt-1 text-center md:text-left" title="Error: Failed to fetch current version">"#,
                r#"Version: <span class="text-amber-500">detection failed</span></p>"#
            )
        );
    }

    #[test]
    fn create_error_version_element_without_message_has_empty_tooltip() {
        let node = create_error_version_element(None);

        assert_eq!(node.as_element().unwrap().title.as_deref(), Some(""));
    }

    #[test]
    fn with_class_name_splits_on_whitespace() {
        let element = Element::new("p").with_class_name("  a b\tc ");

        assert_eq!(element.classes, vec!["a", "b", "c"]);
        assert!(element.has_class("b"));
        assert!(!element.has_class("d"));
    }
}
