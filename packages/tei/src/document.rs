//! TEI document reader.
//!
//! A [`TeiDocument`] parses one file up front and then answers field
//! queries from the in-memory tree. Failures are logged with `tracing`
//! where they are detected and returned to the caller.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use roxmltree::{Document, ParsingOptions};

use crate::config::{ParserConfig, PARAGRAPH_SEPARATOR};
use crate::error::{BoxError, Result, TeiError};
use crate::links::{LinkExtractor, UrlExtractor};
use crate::types::PaperFields;
use crate::xml::{ElementRef, NodeId, XmlTree};

/// Source label used for documents parsed from a string.
pub const MEMORY_SOURCE: &str = "<memory>";

/// Encoding named in a leading XML declaration.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static DECLARED_ENCODING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^\x{FEFF}?\s*<\?xml[^>]*?\bencoding\s*=\s*["']([A-Za-z0-9._-]+)["']"#)
        .expect("valid regex")
});

/// Declared encodings whose bytes are valid UTF-8.
const UTF8_COMPATIBLE_ENCODINGS: &[&str] = &["utf-8", "utf8", "us-ascii", "ascii"];

/// A parsed TEI paper.
///
/// # Examples
/// ```
/// use scholarvista_tei::{ParserConfig, TeiDocument};
///
/// let xml = r#"<TEI xmlns="http://www.tei-c.org/ns/1.0">
///   <teiHeader><title>On Vents</title></teiHeader>
///   <text><body><p>Hello</p><p>world</p></body></text>
/// </TEI>"#;
///
/// let doc = TeiDocument::parse_str(xml, ParserConfig::default()).unwrap();
/// assert_eq!(doc.title().unwrap(), "On Vents");
/// assert_eq!(doc.body().unwrap(), "Hello world ");
/// assert_eq!(doc.figures_count().unwrap(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct TeiDocument {
    path: PathBuf,
    config: ParserConfig,
    tree: XmlTree,
    /// Looked up once at construction; never re-queried.
    body: Option<NodeId>,
}

impl TeiDocument {
    /// Read and parse a TEI file using the TEI namespace.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::open_with_config(path, ParserConfig::default())
    }

    /// Read and parse a file, qualifying tag lookups with `config.namespace`.
    ///
    /// # Errors
    /// * `TeiError::NotFound` if the file cannot be read
    /// * `TeiError::MalformedXml` if the content is not valid UTF-8 XML
    /// * `TeiError::InvalidNamespace` if the config is rejected
    pub fn open_with_config(path: impl AsRef<Path>, config: ParserConfig) -> Result<Self> {
        let path = path.as_ref();
        validate_config(&config)?;

        let bytes = fs::read(path).map_err(|source| {
            tracing::error!(path = %path.display(), error = %source, "File not found");
            TeiError::NotFound {
                path: path.to_path_buf(),
                source,
            }
        })?;

        check_declared_encoding(&bytes).map_err(|e| malformed(path, e))?;
        let xml = String::from_utf8(bytes).map_err(|e| malformed(path, e.into()))?;
        Self::build(path.to_path_buf(), &xml, config)
    }

    /// Parse a document held in memory.
    pub fn parse_str(xml: &str, config: ParserConfig) -> Result<Self> {
        validate_config(&config)?;
        Self::build(PathBuf::from(MEMORY_SOURCE), xml, config)
    }

    fn build(path: PathBuf, xml: &str, config: ParserConfig) -> Result<Self> {
        let mut options = ParsingOptions::default();
        options.allow_dtd = true;

        let doc = Document::parse_with_options(xml, options)
            .map_err(|e| malformed(&path, e.into()))?;
        let tree = XmlTree::from_document(&doc);
        let body = tree
            .find_first(&config.qualify("body"))
            .map(|element| element.id());

        tracing::debug!(
            path = %path.display(),
            elements = tree.len(),
            has_body = body.is_some(),
            "Parsed TEI document"
        );

        Ok(Self {
            path,
            config,
            tree,
            body,
        })
    }

    /// Path the document was read from, or `<memory>`.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// The underlying element tree.
    pub fn tree(&self) -> &XmlTree {
        &self.tree
    }

    pub fn has_body(&self) -> bool {
        self.body.is_some()
    }

    /// Text of the first `<title>` anywhere in the document.
    pub fn title(&self) -> Result<String> {
        self.find_first("title")
            .and_then(|title| title.text())
            .map(str::to_string)
            .ok_or_else(|| self.missing_element("title"))
    }

    /// Text of `<abstract>`'s first grandchild, as laid out by
    /// `<abstract><div><p>text</p></div></abstract>`.
    ///
    /// Only that exact nesting is accepted; a shallower abstract is an
    /// `InvalidStructure` error.
    pub fn abstract_text(&self) -> Result<String> {
        let abstract_element = self
            .find_first("abstract")
            .ok_or_else(|| self.missing_element("abstract"))?;

        let block = abstract_element
            .first_element_child()
            .ok_or_else(|| self.invalid_structure("abstract has no child element"))?;
        let leaf = block
            .first_element_child()
            .ok_or_else(|| self.invalid_structure("abstract block has no child element"))?;

        leaf.text()
            .map(str::to_string)
            .ok_or_else(|| self.missing_element(leaf.local_name()))
    }

    /// Concatenated text of every `<p>` in the body, each followed by a
    /// single space. Paragraphs without leading text are skipped.
    pub fn body(&self) -> Result<String> {
        let body = self.body_element()?;
        let paragraph_tag = self.config.qualify("p");

        let mut text = String::new();
        for paragraph in body.find_all(&paragraph_tag) {
            if let Some(paragraph_text) = paragraph.text() {
                text.push_str(paragraph_text);
                text.push_str(PARAGRAPH_SEPARATOR);
            }
        }
        Ok(text)
    }

    /// Number of `<figure>` elements at any depth in the body.
    pub fn figures_count(&self) -> Result<usize> {
        let body = self.body_element()?;
        let figure_tag = self.config.qualify("figure");
        Ok(body.find_all(&figure_tag).count())
    }

    /// Links in the text of every element, using [`UrlExtractor`].
    pub fn links(&self) -> Result<Vec<String>> {
        self.links_with(&UrlExtractor)
    }

    /// Links in the text of every element, in document order.
    ///
    /// Duplicates are kept. If the extractor fails nothing is returned
    /// but the error.
    pub fn links_with<E>(&self, extractor: &E) -> Result<Vec<String>>
    where
        E: LinkExtractor + ?Sized,
    {
        let mut links = Vec::new();
        for element in self.tree.iter() {
            let Some(text) = element.text() else {
                continue;
            };
            let found = extractor.extract_links(text).map_err(|source| {
                tracing::error!(
                    path = %self.path.display(),
                    element = element.local_name(),
                    error = %source,
                    "Error occurred while extracting links"
                );
                TeiError::ExtractionFailure(source)
            })?;
            links.extend(found);
        }
        Ok(links)
    }

    /// Run every accessor and bundle the results.
    pub fn fields(&self) -> Result<PaperFields> {
        Ok(PaperFields {
            title: self.title()?,
            abstract_text: self.abstract_text()?,
            body: self.body()?,
            figures_count: self.figures_count()?,
            links: self.links()?,
        })
    }

    fn find_first(&self, tag: &str) -> Option<ElementRef<'_>> {
        self.tree.find_first(&self.config.qualify(tag))
    }

    fn body_element(&self) -> Result<ElementRef<'_>> {
        self.body
            .and_then(|id| self.tree.get(id))
            .ok_or_else(|| self.invalid_structure("missing body element"))
    }

    fn missing_element(&self, tag: &str) -> TeiError {
        tracing::error!(path = %self.path.display(), tag, "Missing required element");
        TeiError::missing_element(tag)
    }

    fn invalid_structure(&self, message: &str) -> TeiError {
        tracing::error!(path = %self.path.display(), "Invalid XML structure: {message}");
        TeiError::InvalidStructure(message.to_string())
    }
}

fn validate_config(config: &ParserConfig) -> Result<()> {
    config.validate().inspect_err(|e| {
        tracing::error!(namespace = %config.namespace, "{e}");
    })
}

/// Only UTF-8 input is decoded; a declaration naming another encoding is
/// rejected up front rather than failing on its first non-ASCII byte.
fn check_declared_encoding(bytes: &[u8]) -> std::result::Result<(), BoxError> {
    let prolog_end = bytes
        .iter()
        .position(|&b| b == b'>')
        .map_or(bytes.len(), |i| i + 1);
    let prolog = String::from_utf8_lossy(&bytes[..prolog_end]);

    let Some(encoding) = DECLARED_ENCODING
        .captures(&prolog)
        .and_then(|caps| caps.get(1))
    else {
        return Ok(());
    };

    let name = encoding.as_str();
    if UTF8_COMPATIBLE_ENCODINGS
        .iter()
        .any(|utf8| name.eq_ignore_ascii_case(utf8))
    {
        Ok(())
    } else {
        Err(format!("unsupported encoding '{name}': only UTF-8 documents are read").into())
    }
}

fn malformed(path: &Path, source: BoxError) -> TeiError {
    tracing::error!(path = %path.display(), error = %source, "Error parsing XML file");
    TeiError::MalformedXml {
        path: path.to_path_buf(),
        source,
    }
}
