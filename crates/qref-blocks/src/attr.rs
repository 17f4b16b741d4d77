//! Pandoc attribute sets.
//!
//! Renders the `{#id .class key="value"}` attribute syntax attached to
//! code blocks and fenced divs.

use std::fmt;

/// Attributes for a pandoc block: optional identifier, classes, and
/// key/value pairs.
///
/// # Example
///
/// ```
/// use qref_blocks::Attr;
///
/// let attr = Attr::new().with_classes(["doc-signature", "doc-class"]);
/// assert_eq!(attr.to_string(), "{.doc-signature .doc-class}");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Attr {
    /// Identifier: `{#id}`.
    pub id: Option<String>,
    /// Classes: `{.class1 .class2}`.
    pub classes: Vec<String>,
    /// Key-value pairs: `{key="value"}`.
    pub pairs: Vec<(String, String)>,
}

impl Attr {
    /// Create an empty attribute set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the identifier.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Append classes.
    #[must_use]
    pub fn with_classes<I, S>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.classes.extend(classes.into_iter().map(Into::into));
        self
    }

    /// Append a key-value pair.
    #[must_use]
    pub fn with_pair(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.pairs.push((key.into(), value.into()));
        self
    }

    /// Whether the attribute set carries no information.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.id.is_none() && self.classes.is_empty() && self.pairs.is_empty()
    }
}

impl fmt::Display for Attr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return Ok(());
        }

        let mut parts = Vec::new();
        if let Some(id) = &self.id {
            parts.push(format!("#{id}"));
        }
        for class in &self.classes {
            parts.push(format!(".{class}"));
        }
        for (key, value) in &self.pairs {
            parts.push(format!(r#"{key}="{value}""#));
        }

        write!(f, "{{{}}}", parts.join(" "))
    }
}
