//! Plain-data view of an extracted paper.

use serde::{Deserialize, Serialize};

/// All fields extracted from one TEI paper.
///
/// This is the shape handed to downstream analysis tooling, usually as JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaperFields {
    /// Text of the first `<title>`.
    pub title: String,

    /// Leaf text of `<abstract><div><p>`.
    #[serde(rename = "abstract")]
    pub abstract_text: String,

    /// Body paragraphs, each followed by a single space.
    pub body: String,

    /// Number of `<figure>` elements in the body.
    pub figures_count: usize,

    /// Links found anywhere in the document, in document order.
    pub links: Vec<String>,
}
