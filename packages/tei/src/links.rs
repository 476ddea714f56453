//! Link extraction from free text.
//!
//! The reader hands every element's text to a [`LinkExtractor`]. The default
//! [`UrlExtractor`] is a regex scan for web addresses; any closure with the
//! right signature can stand in for it.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::BoxError;

/// Web address pattern: an `http(s)://` or `www.` prefix up to whitespace,
/// quotes or angle brackets.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\b(?:https?://|www\.)[^\s<>"']+"#).expect("valid regex")
});

/// Punctuation that ends a sentence rather than a URL.
const TRAILING_PUNCTUATION: &[char] = &['.', ',', ';', ':', '!', '?', ')', ']'];

/// Something that finds URL-like substrings in a piece of text.
pub trait LinkExtractor {
    /// Return every link in `text`, in order of appearance.
    fn extract_links(&self, text: &str) -> Result<Vec<String>, BoxError>;
}

impl<F> LinkExtractor for F
where
    F: Fn(&str) -> Result<Vec<String>, BoxError>,
{
    fn extract_links(&self, text: &str) -> Result<Vec<String>, BoxError> {
        self(text)
    }
}

/// Regex-based extractor for `http://`, `https://` and `www.` links.
#[derive(Debug, Clone, Copy, Default)]
pub struct UrlExtractor;

impl LinkExtractor for UrlExtractor {
    fn extract_links(&self, text: &str) -> Result<Vec<String>, BoxError> {
        Ok(find_urls(text))
    }
}

/// Find web addresses in text.
///
/// # Examples
/// ```
/// use scholarvista_tei::links::find_urls;
///
/// let links = find_urls("Code at https://github.com/x/y. Data: www.example.org");
/// assert_eq!(links, vec!["https://github.com/x/y", "www.example.org"]);
/// ```
pub fn find_urls(text: &str) -> Vec<String> {
    URL_PATTERN
        .find_iter(text)
        .map(|m| m.as_str().trim_end_matches(TRAILING_PUNCTUATION))
        .filter(|url| !url.is_empty())
        .map(str::to_string)
        .collect()
}
