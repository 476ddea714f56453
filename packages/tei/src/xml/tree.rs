//! Owned, arena-backed element tree.
//!
//! `roxmltree` documents borrow their input, so a reader that outlives the
//! file buffer copies the element structure into an arena. Elements are
//! stored in document order (pre-order), which makes the descendants of an
//! element the contiguous slice `id..end`.

use roxmltree::Node;

use super::utils::{element_children, get_leading_text, get_qualified_name};

/// Index of an element in an [`XmlTree`].
pub type NodeId = usize;

#[derive(Debug, Clone)]
struct Element {
    qualified_name: String,
    text: Option<String>,
    children: Vec<NodeId>,
    /// One past the last descendant.
    end: NodeId,
}

/// An XML element tree that owns all of its names and text.
#[derive(Debug, Clone)]
pub struct XmlTree {
    elements: Vec<Element>,
}

impl XmlTree {
    /// Copy the element structure of a parsed document.
    ///
    /// # Examples
    /// ```
    /// use scholarvista_tei::xml::XmlTree;
    ///
    /// let doc = roxmltree::Document::parse("<a><b>x</b><c/></a>").unwrap();
    /// let tree = XmlTree::from_document(&doc);
    /// assert_eq!(tree.len(), 3);
    /// assert_eq!(tree.root().qualified_name(), "a");
    /// ```
    pub fn from_document(doc: &roxmltree::Document<'_>) -> Self {
        let mut tree = Self {
            elements: Vec::new(),
        };
        tree.push_element(doc.root_element());
        tree
    }

    fn push_element(&mut self, node: Node<'_, '_>) -> NodeId {
        let id = self.elements.len();
        self.elements.push(Element {
            qualified_name: get_qualified_name(node),
            text: get_leading_text(node),
            children: Vec::new(),
            end: id + 1,
        });

        let children: Vec<NodeId> = element_children(node)
            .map(|child| self.push_element(child))
            .collect();
        let end = self.elements.len();

        let element = &mut self.elements[id];
        element.children = children;
        element.end = end;
        id
    }

    /// Number of elements in the tree.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// A tree always holds at least its root element.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn root(&self) -> ElementRef<'_> {
        ElementRef { tree: self, id: 0 }
    }

    /// Look up an element by id.
    pub fn get(&self, id: NodeId) -> Option<ElementRef<'_>> {
        (id < self.elements.len()).then_some(ElementRef { tree: self, id })
    }

    /// Every element in document order.
    pub fn iter(&self) -> impl Iterator<Item = ElementRef<'_>> {
        self.root().descendants()
    }

    /// First element in document order whose qualified name is `qualified_name`.
    pub fn find_first(&self, qualified_name: &str) -> Option<ElementRef<'_>> {
        self.root().find_first(qualified_name)
    }
}

/// Borrowed handle to one element of an [`XmlTree`].
#[derive(Debug, Clone, Copy)]
pub struct ElementRef<'a> {
    tree: &'a XmlTree,
    id: NodeId,
}

impl<'a> ElementRef<'a> {
    fn element(&self) -> &'a Element {
        &self.tree.elements[self.id]
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Tag name in `{namespace}name` form, or the bare name without a namespace.
    pub fn qualified_name(&self) -> &'a str {
        &self.element().qualified_name
    }

    /// Tag name without the namespace part.
    pub fn local_name(&self) -> &'a str {
        let name = self.qualified_name();
        name.rsplit_once('}').map_or(name, |(_, local)| local)
    }

    pub fn has_qualified_name(&self, qualified_name: &str) -> bool {
        self.qualified_name() == qualified_name
    }

    /// Leading text of the element; `None` when absent.
    pub fn text(&self) -> Option<&'a str> {
        self.element().text.as_deref()
    }

    /// Element children in document order.
    pub fn children(&self) -> impl Iterator<Item = ElementRef<'a>> + 'a {
        let tree = self.tree;
        self.element()
            .children
            .iter()
            .map(move |&id| ElementRef { tree, id })
    }

    pub fn first_element_child(&self) -> Option<ElementRef<'a>> {
        self.children().next()
    }

    /// This element followed by all of its descendants, in document order.
    pub fn descendants(&self) -> impl Iterator<Item = ElementRef<'a>> + 'a {
        let tree = self.tree;
        (self.id..self.element().end).map(move |id| ElementRef { tree, id })
    }

    /// Depth-first search of this subtree (self included); stops at the first hit.
    pub fn find_first(&self, qualified_name: &str) -> Option<ElementRef<'a>> {
        self.descendants()
            .find(|element| element.has_qualified_name(qualified_name))
    }

    /// All elements of this subtree (self included) with the given name.
    pub fn find_all(&self, qualified_name: &'a str) -> impl Iterator<Item = ElementRef<'a>> + 'a {
        self.descendants()
            .filter(move |element| element.has_qualified_name(qualified_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roxmltree::Document;

    const NS_XML: &str = r#"<TEI xmlns="urn:t">
  <header><title>First</title></header>
  <text>
    <body>
      <div><p>one</p><figure/></div>
      <p>two<hi>x</hi></p>
      <title>Second</title>
    </body>
  </text>
</TEI>"#;

    fn tree(xml: &str) -> XmlTree {
        XmlTree::from_document(&Document::parse(xml).unwrap())
    }

    #[test]
    fn test_elements_are_in_document_order() {
        let tree = tree("<a><b><c/></b><d/></a>");
        let names: Vec<_> = tree.iter().map(|e| e.qualified_name()).collect();
        assert_eq!(names, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_descendants_include_self_and_stay_in_subtree() {
        let tree = tree("<a><b><c/></b><d/></a>");
        let b = tree.root().first_element_child().unwrap();
        let names: Vec<_> = b.descendants().map(|e| e.qualified_name()).collect();
        assert_eq!(names, vec!["b", "c"]);
    }

    #[test]
    fn test_find_first_returns_first_in_document_order() {
        let tree = tree(NS_XML);
        let title = tree.find_first("{urn:t}title").unwrap();
        assert_eq!(title.text(), Some("First"));
    }

    #[test]
    fn test_find_first_matches_root() {
        let tree = tree(NS_XML);
        assert_eq!(tree.find_first("{urn:t}TEI").map(|e| e.id()), Some(0));
    }

    #[test]
    fn test_find_first_requires_namespace() {
        let tree = tree(NS_XML);
        assert!(tree.find_first("title").is_none());
        assert!(tree.find_first("{urn:other}title").is_none());
    }

    #[test]
    fn test_find_all_within_subtree() {
        let tree = tree(NS_XML);
        let body = tree.find_first("{urn:t}body").unwrap();
        assert_eq!(body.find_all("{urn:t}p").count(), 2);
        assert_eq!(body.find_all("{urn:t}figure").count(), 1);
    }

    #[test]
    fn test_text_is_leading_text_only() {
        let tree = tree(NS_XML);
        let texts: Vec<_> = tree
            .iter()
            .filter(|e| e.local_name() == "p")
            .map(|e| e.text())
            .collect();
        assert_eq!(texts, vec![Some("one"), Some("two")]);

        let figure = tree.find_first("{urn:t}figure").unwrap();
        assert_eq!(figure.text(), None);
    }

    #[test]
    fn test_children_skip_text_nodes() {
        let tree = tree("<a>x<b/>y<c/>z</a>");
        let names: Vec<_> = tree.root().children().map(|e| e.local_name()).collect();
        assert_eq!(names, vec!["b", "c"]);
    }

    #[test]
    fn test_get_out_of_range() {
        let tree = tree("<a/>");
        assert!(tree.get(0).is_some());
        assert!(tree.get(1).is_none());
        assert!(!tree.is_empty());
    }
}
