//! Error types for the rendering hook layer.
//!
//! Absence of a Usage block or an example notebook is an expected
//! condition, not an error: every override falls back to the default
//! output. Only failures of the base renderer itself propagate, aborting
//! the build for the offending object.

/// Error returned when rendering a documented object fails.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The base renderer failed to produce a default signature, body,
    /// or summary name.
    #[error("upstream renderer failed for `{object}`")]
    Upstream {
        /// Name of the documented object being rendered.
        object: String,
        /// Underlying failure from the base renderer.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl RenderError {
    /// Wrap an upstream failure for the given object.
    #[must_use]
    pub fn upstream(
        object: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::Upstream {
            object: object.into(),
            source: source.into(),
        }
    }
}
