//! Parameter exclusions for generated signatures.
//!
//! An immutable table built once before rendering and passed into the
//! pipeline; the base renderer consults it while building parameter tables
//! and signatures.

use std::collections::{BTreeSet, HashMap};

static EMPTY: BTreeSet<String> = BTreeSet::new();

/// Mapping from a fully-qualified callable name to the parameter names
/// hidden from its generated signature.
///
/// # Example
///
/// ```
/// use qref_render::ParameterExclusions;
///
/// let exclusions = ParameterExclusions::plotnine();
/// assert!(exclusions.is_excluded("plotnine.scale_color_hue", "color_space"));
/// assert!(exclusions.excluded("plotnine.geom_point").is_empty());
/// ```
#[derive(Clone, Debug, Default)]
pub struct ParameterExclusions {
    entries: HashMap<String, BTreeSet<String>>,
}

impl ParameterExclusions {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry for a callable.
    #[must_use]
    pub fn with_entry<I, S>(mut self, callable: impl Into<String>, parameters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entries.insert(
            callable.into(),
            parameters.into_iter().map(Into::into).collect(),
        );
        self
    }

    /// Exclusions shipped for the plotnine reference.
    ///
    /// `scale_color_hue` exposes matplotlib pass-through parameters that
    /// are noise in the reference, so they are hidden.
    #[must_use]
    pub fn plotnine() -> Self {
        Self::new().with_entry("plotnine.scale_color_hue", ["s", "color_space"])
    }

    /// Parameters excluded for a callable.
    ///
    /// Unknown callables yield an empty set.
    #[must_use]
    pub fn excluded(&self, callable: &str) -> &BTreeSet<String> {
        self.entries.get(callable).unwrap_or(&EMPTY)
    }

    /// Whether a parameter is hidden for a callable.
    #[must_use]
    pub fn is_excluded(&self, callable: &str, parameter: &str) -> bool {
        self.excluded(callable).contains(parameter)
    }
}
