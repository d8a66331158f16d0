//! In-memory page model
//!
//! Supports the part of the DOM the footer widget touches: descendant
//! selectors made of tag and class compounds (`.footer p.text-gray-500`),
//! sibling insertion, and child appends.

use crate::footer::element::{Element, Node};

/// Location of a node as child indices from the document's top level
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodePath(Vec<usize>);

impl NodePath {
    pub fn indices(&self) -> &[usize] {
        &self.0
    }
}

/// One `tag.class.class` step of a selector
#[derive(Debug, Clone, PartialEq, Eq)]
struct Compound {
    tag: Option<String>,
    classes: Vec<String>,
}

impl Compound {
    fn parse(token: &str) -> Option<Self> {
        let mut segments = token.split('.');
        let tag = segments.next().filter(|t| !t.is_empty()).map(str::to_string);
        let classes = segments
            .map(|c| (!c.is_empty()).then(|| c.to_string()))
            .collect::<Option<Vec<_>>>()?;

        if tag.is_none() && classes.is_empty() {
            return None;
        }
        Some(Self { tag, classes })
    }

    fn matches(&self, element: &Element) -> bool {
        self.tag.as_deref().is_none_or(|tag| tag == element.tag)
            && self.classes.iter().all(|c| element.has_class(c))
    }
}

/// Whitespace-separated compounds joined by the descendant combinator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    parts: Vec<Compound>,
}

impl Selector {
    /// Returns `None` for empty selectors or empty class names
    pub fn parse(selector: &str) -> Option<Self> {
        let parts = selector
            .split_whitespace()
            .map(Compound::parse)
            .collect::<Option<Vec<_>>>()?;

        if parts.is_empty() {
            return None;
        }
        Some(Self { parts })
    }

    /// `ancestors` is ordered outermost first
    fn matches(&self, ancestors: &[&Element], element: &Element) -> bool {
        let Some((last, rest)) = self.parts.split_last() else {
            return false;
        };
        if !last.matches(element) {
            return false;
        }

        let mut remaining = rest.iter().rev().peekable();
        for ancestor in ancestors.iter().rev() {
            match remaining.peek() {
                Some(part) if part.matches(ancestor) => {
                    remaining.next();
                }
                Some(_) => {}
                None => break,
            }
        }
        remaining.peek().is_none()
    }
}

/// A page's node tree
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    children: Vec<Node>,
}

impl Document {
    pub fn new(children: Vec<Node>) -> Self {
        Self { children }
    }

    /// Footer with a copyright paragraph the version node can follow:
    ///
    /// ```html
    /// <footer class="footer"><div class="container"><div>
    ///   <p class="text-gray-500 text-sm text-center md:text-left">{copyright}</p>
    /// </div></div></footer>
    /// ```
    pub fn standard_footer(copyright: &str) -> Self {
        let anchor = Element::new("p")
            .with_class_name("text-gray-500 text-sm text-center md:text-left")
            .with_text(copyright);

        Self::footer_with(Element::new("div").with_child(anchor))
    }

    /// Footer whose container holds an empty `div` and no copyright paragraph
    pub fn bare_footer() -> Self {
        Self::footer_with(Element::new("div"))
    }

    fn footer_with(inner: Element) -> Self {
        let container = Element::new("div")
            .with_class_name("container")
            .with_child(inner);
        let footer = Element::new("footer")
            .with_class_name("footer")
            .with_child(container);

        Self::new(vec![footer.into()])
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// First element in document order matching `selector`
    pub fn query_selector(&self, selector: &str) -> Option<NodePath> {
        let selector = Selector::parse(selector)?;
        let mut path = Vec::new();
        find(&self.children, &mut Vec::new(), &mut path, &selector).map(NodePath)
    }

    /// First descendant of the element at `scope` matching `selector`
    ///
    /// Ancestors above `scope` still take part in matching, as in the DOM.
    pub fn query_selector_within(&self, scope: &NodePath, selector: &str) -> Option<NodePath> {
        let selector = Selector::parse(selector)?;

        let mut ancestors = Vec::new();
        let mut nodes = self.children.as_slice();
        for &index in scope.indices() {
            let element = nodes.get(index)?.as_element()?;
            ancestors.push(element);
            nodes = &element.children;
        }

        let mut path = scope.indices().to_vec();
        find(nodes, &mut ancestors, &mut path, &selector).map(NodePath)
    }

    pub fn get(&self, path: &NodePath) -> Option<&Node> {
        let (&last, parents) = path.indices().split_last()?;
        let mut nodes = self.children.as_slice();
        for &index in parents {
            nodes = &nodes.get(index)?.as_element()?.children;
        }
        nodes.get(last)
    }

    /// Insert `node` as the next sibling of the node at `path`
    ///
    /// Returns the node back if `path` does not resolve.
    pub fn insert_after(&mut self, path: &NodePath, node: Node) -> Result<(), Node> {
        let Some((&last, parents)) = path.indices().split_last() else {
            return Err(node);
        };
        match self.children_at_mut(parents) {
            Some(siblings) if last < siblings.len() => {
                siblings.insert(last + 1, node);
                Ok(())
            }
            _ => Err(node),
        }
    }

    /// Append `node` as the last child of the element at `path`
    ///
    /// Returns the node back if `path` does not resolve to an element.
    pub fn append_child(&mut self, path: &NodePath, node: Node) -> Result<(), Node> {
        match self.children_at_mut(path.indices()) {
            Some(children) if !path.indices().is_empty() => {
                children.push(node);
                Ok(())
            }
            _ => Err(node),
        }
    }

    fn children_at_mut(&mut self, indices: &[usize]) -> Option<&mut Vec<Node>> {
        let mut nodes = &mut self.children;
        for &index in indices {
            nodes = &mut nodes.get_mut(index)?.as_element_mut()?.children;
        }
        Some(nodes)
    }

    pub fn to_html(&self) -> String {
        self.children.iter().map(Node::to_html).collect()
    }
}

fn find<'a>(
    nodes: &'a [Node],
    ancestors: &mut Vec<&'a Element>,
    path: &mut Vec<usize>,
    selector: &Selector,
) -> Option<Vec<usize>> {
    for (index, node) in nodes.iter().enumerate() {
        let Some(element) = node.as_element() else {
            continue;
        };

        path.push(index);
        if selector.matches(ancestors, element) {
            return Some(path.clone());
        }

        ancestors.push(element);
        let found = find(&element.children, ancestors, path, selector);
        ancestors.pop();

        if found.is_some() {
            return found;
        }
        path.pop();
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paragraph(classes: &str, text: &str) -> Element {
        Element::new("p").with_class_name(classes).with_text(text)
    }

    #[test]
    fn selector_parse_rejects_empty_and_dangling_class() {
        assert!(Selector::parse("").is_none());
        assert!(Selector::parse("   ").is_none());
        assert!(Selector::parse(".footer p.").is_none());
        assert!(Selector::parse("p..x").is_none());
    }

    #[test]
    fn query_selector_matches_compound_inside_ancestor() {
        let doc = Document::standard_footer("© Example");

        let path = doc.query_selector(".footer p.text-gray-500.text-sm").unwrap();

        assert_eq!(path.indices(), &[0, 0, 0, 0]);
        assert_eq!(doc.get(&path).unwrap().text_content(), "© Example");
    }

    #[test]
    fn query_selector_requires_every_class() {
        let doc = Document::new(vec![
            Element::new("div")
                .with_class_name("footer")
                .with_child(paragraph("text-gray-500", "only one class"))
                .into(),
        ]);

        assert!(doc.query_selector(".footer p.text-gray-500.text-sm").is_none());
        assert!(doc.query_selector(".footer p.text-gray-500").is_some());
    }

    #[test]
    fn query_selector_requires_matching_ancestor() {
        let doc = Document::new(vec![paragraph("text-gray-500 text-sm", "outside").into()]);

        assert!(doc.query_selector(".footer p.text-gray-500.text-sm").is_none());
        assert!(doc.query_selector("p.text-gray-500.text-sm").is_some());
    }

    #[test]
    fn query_selector_returns_first_match_in_document_order() {
        let doc = Document::new(vec![
            Element::new("footer")
                .with_class_name("footer")
                .with_child(Element::new("div").with_child(paragraph("text-gray-500 text-sm", "first")))
                .with_child(paragraph("text-gray-500 text-sm", "second"))
                .into(),
        ]);

        let path = doc.query_selector(".footer p.text-gray-500.text-sm").unwrap();

        assert_eq!(doc.get(&path).unwrap().text_content(), "first");
    }

    #[test]
    fn query_selector_within_searches_descendants_only() {
        let doc = Document::bare_footer();
        let container = doc.query_selector(".footer .container").unwrap();

        let div = doc.query_selector_within(&container, "div").unwrap();

        // The container is itself a div but is not its own descendant
        assert_eq!(div.indices(), &[0, 0, 0]);
    }

    #[test]
    fn insert_after_places_node_as_next_sibling() {
        let mut doc = Document::standard_footer("© Example");
        let anchor = doc.query_selector(".footer p.text-sm").unwrap();

        doc.insert_after(&anchor, Node::text("after")).unwrap();

        let parent = doc.get(&NodePath(vec![0, 0, 0])).unwrap();
        assert_eq!(parent.text_content(), "© Exampleafter");
    }

    #[test]
    fn insert_after_returns_node_for_unknown_path() {
        let mut doc = Document::default();

        let result = doc.insert_after(&NodePath(vec![3]), Node::text("lost"));

        assert_eq!(result, Err(Node::text("lost")));
    }

    #[test]
    fn append_child_rejects_text_nodes_and_empty_path() {
        let mut doc = Document::new(vec![Node::text("loose")]);

        assert!(doc.append_child(&NodePath(vec![0]), Node::text("x")).is_err());
        assert!(doc.append_child(&NodePath(vec![]), Node::text("x")).is_err());
    }

    #[test]
    fn to_html_serializes_tree() {
        let doc = Document::bare_footer();

        assert_eq!(
            doc.to_html(),
            r#"<footer class="footer"><div class="container"><div></div></div></footer>"#
        );
    }
}
