//! Configuration constants and validation for the TEI reader.

use crate::error::{Result, TeiError};

/// Namespace URI of the Text Encoding Initiative vocabulary.
pub const TEI_NAMESPACE: &str = "http://www.tei-c.org/ns/1.0";

/// Environment variable that overrides the namespace in [`ParserConfig::from_env`].
pub const NAMESPACE_ENV_VAR: &str = "TEI_NAMESPACE";

/// Separator appended after every paragraph in the body text.
pub const PARAGRAPH_SEPARATOR: &str = " ";

/// Settings for reading a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    /// Namespace URI that tag lookups are qualified with.
    pub namespace: String,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            namespace: TEI_NAMESPACE.to_string(),
        }
    }
}

impl ParserConfig {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
        }
    }

    /// Read the namespace from `TEI_NAMESPACE`, falling back to the TEI namespace.
    pub fn from_env() -> Result<Self> {
        let config = std::env::var(NAMESPACE_ENV_VAR)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(Self::new)
            .unwrap_or_default();
        config.validate()?;
        Ok(config)
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Check that the namespace can be used inside a `{ns}tag` key.
    pub fn validate(&self) -> Result<()> {
        validate_namespace(&self.namespace)
    }

    /// Qualify a bare tag name with this config's namespace.
    pub fn qualify(&self, tag: &str) -> String {
        qualify(&self.namespace, tag)
    }
}

/// Validate a namespace URI.
///
/// # Arguments
/// * `namespace` - Namespace URI to check
///
/// # Returns
/// * `Ok(())` if the URI is non-empty and free of braces and whitespace
/// * `Err(TeiError::InvalidNamespace)` otherwise
///
/// # Examples
/// ```
/// use scholarvista_tei::config::validate_namespace;
///
/// assert!(validate_namespace("http://www.tei-c.org/ns/1.0").is_ok());
/// assert!(validate_namespace("").is_err());
/// assert!(validate_namespace("http://x/{y}").is_err());
/// ```
pub fn validate_namespace(namespace: &str) -> Result<()> {
    if namespace.is_empty()
        || namespace
            .chars()
            .any(|c| c == '{' || c == '}' || c.is_whitespace())
    {
        Err(TeiError::InvalidNamespace(namespace.to_string()))
    } else {
        Ok(())
    }
}

/// Build the qualified name key `{namespace}tag`.
///
/// # Examples
/// ```
/// use scholarvista_tei::config::qualify;
///
/// assert_eq!(
///     qualify("http://www.tei-c.org/ns/1.0", "body"),
///     "{http://www.tei-c.org/ns/1.0}body"
/// );
/// ```
pub fn qualify(namespace: &str, tag: &str) -> String {
    format!("{{{namespace}}}{tag}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_uses_tei_namespace() {
        assert_eq!(ParserConfig::default().namespace, TEI_NAMESPACE);
        assert!(ParserConfig::default().validate().is_ok());
    }

    #[test]
    fn test_qualify() {
        assert_eq!(qualify("urn:x", "p"), "{urn:x}p");
        assert_eq!(
            ParserConfig::default().qualify("figure"),
            "{http://www.tei-c.org/ns/1.0}figure"
        );
    }

    #[test]
    fn test_with_namespace() {
        let config = ParserConfig::default().with_namespace("urn:example:doc");
        assert_eq!(config.namespace, "urn:example:doc");
        assert_eq!(config.qualify("title"), "{urn:example:doc}title");
    }

    #[test]
    fn test_validate_namespace_valid() {
        assert!(validate_namespace(TEI_NAMESPACE).is_ok());
        assert!(validate_namespace("urn:example:doc").is_ok());
    }

    #[test]
    fn test_validate_namespace_invalid() {
        assert!(validate_namespace("").is_err());
        assert!(validate_namespace("{http://x}").is_err());
        assert!(validate_namespace("http://x/}").is_err());
        assert!(validate_namespace("http://x y").is_err());
    }

    #[test]
    fn test_invalid_namespace_error_names_value() {
        let err = ParserConfig::new("bad ns").validate().unwrap_err();
        assert!(matches!(err, TeiError::InvalidNamespace(ref ns) if ns == "bad ns"));
    }
}
