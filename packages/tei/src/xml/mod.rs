//! XML tree and traversal primitives.
//!
//! Documents are parsed with `roxmltree` and copied into an owned
//! [`XmlTree`] so they can outlive the input buffer.

mod tree;
mod utils;

pub use tree::{ElementRef, NodeId, XmlTree};
pub use utils::{element_children, get_leading_text, get_qualified_name};
