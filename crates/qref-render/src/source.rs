//! Capability interface exposed by the base renderer.

use crate::doc::DocObject;
use crate::error::RenderError;

/// Default per-object output of the base documentation renderer.
///
/// The hook layer calls through this interface and post-processes the
/// result instead of subclassing the base renderer. Implementations wrap
/// the external pipeline; failures surface as
/// [`RenderError::Upstream`] and are not recovered here.
pub trait RenderSource {
    /// Default signature block for an object.
    fn render_signature(&self, doc: &DocObject) -> Result<String, RenderError>;

    /// Default rendered body for an object.
    fn render_body(&self, doc: &DocObject) -> Result<String, RenderError>;

    /// Default summary name shown in index listings, typically a fully- or
    /// partially-qualified path.
    fn summary_name(&self, doc: &DocObject) -> Result<String, RenderError>;
}
