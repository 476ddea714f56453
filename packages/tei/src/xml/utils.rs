//! Helpers for reading names and text off a `roxmltree` DOM.

use roxmltree::Node;

/// Get the qualified tag name of a node in `{namespace}name` form.
///
/// Elements without a namespace keep their bare local name.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use scholarvista_tei::xml::get_qualified_name;
///
/// let xml = r#"<TEI xmlns="http://www.tei-c.org/ns/1.0"><title/></TEI>"#;
/// let doc = Document::parse(xml).unwrap();
/// assert_eq!(
///     get_qualified_name(doc.root_element()),
///     "{http://www.tei-c.org/ns/1.0}TEI"
/// );
/// ```
pub fn get_qualified_name(node: Node<'_, '_>) -> String {
    let tag = node.tag_name();
    match tag.namespace() {
        Some(ns) => crate::config::qualify(ns, tag.name()),
        None => tag.name().to_string(),
    }
}

/// Get the leading text of an element, untrimmed.
///
/// Collects the character data before the first child element. Comments
/// and processing instructions are skipped, so the text on either side of
/// them is joined.
///
/// # Arguments
/// * `node` - Element to read text from
///
/// # Returns
/// The joined text, or `None` if the element is empty or opens with a
/// child element
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use scholarvista_tei::xml::get_leading_text;
///
/// let doc = Document::parse("<p>a<!-- note -->b<hi>c</hi>d</p>").unwrap();
/// assert_eq!(get_leading_text(doc.root_element()), Some("ab".to_string()));
/// ```
pub fn get_leading_text(node: Node<'_, '_>) -> Option<String> {
    let mut text: Option<String> = None;
    for child in node.children().take_while(|child| !child.is_element()) {
        if !child.is_text() {
            continue;
        }
        if let Some(chunk) = child.text() {
            text.get_or_insert_with(String::new).push_str(chunk);
        }
    }
    text
}

/// Get all element children of a node.
///
/// # Arguments
/// * `node` - Parent node
///
/// # Returns
/// Iterator over element children (excludes text nodes, comments, etc.)
pub fn element_children<'a, 'input>(
    node: Node<'a, 'input>,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children().filter(|child| child.is_element())
}
