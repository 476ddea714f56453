//! ScholarVista TEI reader - extract plain-text fields from TEI XML papers.
//!
//! This crate reads TEI-encoded scholarly papers (as produced by tools such
//! as GROBID) and exposes the fields downstream analysis needs: title,
//! abstract, body text, figure count and the links mentioned anywhere in
//! the document.
//!
//! # Example
//!
//! ```
//! use scholarvista_tei::{ParserConfig, TeiDocument};
//!
//! let xml = r#"<TEI xmlns="http://www.tei-c.org/ns/1.0">
//!   <teiHeader>
//!     <title>Tidal Energy</title>
//!     <abstract><div><p>We model tides.</p></div></abstract>
//!   </teiHeader>
//!   <text><body>
//!     <p>Data at https://tides.example.org</p>
//!     <figure/>
//!   </body></text>
//! </TEI>"#;
//!
//! let doc = TeiDocument::parse_str(xml, ParserConfig::default()).unwrap();
//! let fields = doc.fields().unwrap();
//! assert_eq!(fields.title, "Tidal Energy");
//! assert_eq!(fields.abstract_text, "We model tides.");
//! assert_eq!(fields.figures_count, 1);
//! assert_eq!(fields.links, vec!["https://tides.example.org"]);
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Namespace constant, parser settings and validation
//! - [`error`]: Error types and Result alias
//! - [`xml`]: Owned element tree and traversal primitives
//! - [`links`]: Link extraction from free text
//! - [`document`]: The document reader and its field accessors
//! - [`types`]: Serializable bundle of extracted fields
//!
//! Failures are reported through `tracing`; installing a subscriber is left
//! to the application.

pub mod config;
pub mod document;
pub mod error;
pub mod links;
pub mod types;
pub mod xml;

// Re-export commonly used items
pub use config::{ParserConfig, TEI_NAMESPACE};
pub use document::TeiDocument;
pub use error::{Result, TeiError};
pub use links::{LinkExtractor, UrlExtractor};
pub use types::PaperFields;
