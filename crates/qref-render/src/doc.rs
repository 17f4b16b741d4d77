//! Documented-object input model.
//!
//! Objects are created once per build by the upstream pipeline and are
//! read-only to this layer.

/// Classification of a documented symbol.
///
/// Determines which overrides apply: signature override and body filtering
/// only apply to [`Class`](Self::Class), notebook embedding skips
/// [`Type`](Self::Type).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DocKind {
    /// Free function.
    Function,
    /// Class.
    Class,
    /// Method on a class.
    Method,
    /// Module.
    Module,
    /// Module- or class-level attribute.
    Attribute,
    /// Alias to another documented object.
    Alias,
    /// Type alias.
    Type,
}

/// A symbol being documented.
#[derive(Clone, Debug)]
pub struct DocObject {
    /// Bare object name, e.g. `geom_point`.
    pub name: String,
    /// Qualified path, e.g. `plotnine.geoms.geom_point`.
    pub path: String,
    /// Symbol classification.
    pub kind: DocKind,
    /// Raw docstring text.
    pub docstring: String,
    /// Heading level of the object's page section.
    pub level: u8,
}

impl DocObject {
    /// Create an object with an empty docstring at heading level 1.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: DocKind) -> Self {
        let name = name.into();
        Self {
            path: name.clone(),
            name,
            kind,
            docstring: String::new(),
            level: 1,
        }
    }

    /// Set the qualified path.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    /// Set the docstring.
    #[must_use]
    pub fn with_docstring(mut self, docstring: impl Into<String>) -> Self {
        self.docstring = docstring.into();
        self
    }

    /// Set the heading level.
    #[must_use]
    pub fn with_level(mut self, level: u8) -> Self {
        self.level = level;
        self
    }
}
