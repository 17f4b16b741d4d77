//! Per-object rendering pipeline.
//!
//! [`DocRenderer`] wraps a [`RenderSource`] and applies the hook overrides
//! in a fixed order per object: signature override, summary-name shorten,
//! body filter, notebook embed. Objects are processed independently; no
//! state is carried across objects.

use std::path::PathBuf;

use qref_blocks::{Attr, Block, Blocks, shortcode};

use crate::doc::{DocKind, DocObject};
use crate::error::RenderError;
use crate::exclude::ParameterExclusions;
use crate::source::RenderSource;
use crate::usage::{dedent, find_usage, strip_usage};

/// Name families whose class bodies get the Usage section removed.
///
/// These are the two plotting-primitive families for which the signature
/// override is expected, so the inline example would otherwise appear
/// twice.
const FILTERED_FAMILIES: [&str; 2] = ["geom", "stat"];

/// Literal prefix stripped from summary names.
///
/// quartodoc cannot yet display a bare name for a qualified path, so the
/// one configuration submodule is special-cased. A single enumerated
/// workaround; do not extend to other prefixes without enumerating them.
const OPTIONS_PREFIX: &str = "options.";

/// Configuration for [`DocRenderer`].
#[derive(Clone, Debug)]
pub struct DocRendererConfig {
    /// Root of the reference section of the site. Embed paths are written
    /// relative to this directory.
    pub reference_dir: PathBuf,
}

impl DocRendererConfig {
    /// Create a configuration rooted at the given reference directory.
    #[must_use]
    pub fn new(reference_dir: impl Into<PathBuf>) -> Self {
        Self {
            reference_dir: reference_dir.into(),
        }
    }

    /// Directory holding `<name>.ipynb` example notebooks.
    #[must_use]
    pub fn examples_dir(&self) -> PathBuf {
        self.reference_dir.join("examples")
    }
}

/// Final fragments for one documented object.
#[derive(Clone, Debug)]
pub struct RenderedDoc {
    /// Signature block, possibly replaced by a Usage override.
    pub signature: String,
    /// Body, possibly filtered and with an Examples section appended.
    pub body: String,
    /// Display name for index listings.
    pub summary_name: String,
}

/// Hook layer over the base renderer.
///
/// # Example
///
/// ```no_run
/// use qref_render::{DocKind, DocObject, DocRenderer, DocRendererConfig, RenderSource};
/// # struct Pipeline;
/// # impl RenderSource for Pipeline {
/// #     fn render_signature(&self, _: &DocObject) -> Result<String, qref_render::RenderError> { Ok(String::new()) }
/// #     fn render_body(&self, _: &DocObject) -> Result<String, qref_render::RenderError> { Ok(String::new()) }
/// #     fn summary_name(&self, doc: &DocObject) -> Result<String, qref_render::RenderError> { Ok(doc.name.clone()) }
/// # }
///
/// let renderer = DocRenderer::new(Pipeline, DocRendererConfig::new("doc/reference"));
/// let doc = DocObject::new("geom_point", DocKind::Class);
/// let rendered = renderer.render(&doc)?;
/// # Ok::<(), qref_render::RenderError>(())
/// ```
pub struct DocRenderer<S> {
    source: S,
    config: DocRendererConfig,
    exclusions: ParameterExclusions,
}

impl<S: RenderSource> DocRenderer<S> {
    /// Create a renderer with the plotnine parameter exclusions.
    #[must_use]
    pub fn new(source: S, config: DocRendererConfig) -> Self {
        Self {
            source,
            config,
            exclusions: ParameterExclusions::plotnine(),
        }
    }

    /// Replace the parameter exclusion table.
    #[must_use]
    pub fn with_exclusions(mut self, exclusions: ParameterExclusions) -> Self {
        self.exclusions = exclusions;
        self
    }

    /// Exclusion table the base renderer consults when building parameter
    /// tables and signatures.
    #[must_use]
    pub fn exclusions(&self) -> &ParameterExclusions {
        &self.exclusions
    }

    /// Render one object through the full pipeline.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Upstream`] when the base renderer fails;
    /// this layer defines no recovery for upstream failures.
    pub fn render(&self, doc: &DocObject) -> Result<RenderedDoc, RenderError> {
        Ok(RenderedDoc {
            signature: self.render_signature(doc)?,
            summary_name: self.summary_name(doc)?,
            body: self.render_body(doc)?,
        })
    }

    /// Signature for one object.
    ///
    /// Auto-derived constructor signatures for dynamically constructed
    /// classes are often uninformative; a class docstring with a Usage
    /// block supplies the canonical call form instead. Everything else
    /// keeps the default.
    pub fn render_signature(&self, doc: &DocObject) -> Result<String, RenderError> {
        let signature = self.source.render_signature(doc)?;
        if doc.kind != DocKind::Class {
            return Ok(signature);
        }
        let Some(usage) = find_usage(&doc.docstring) else {
            return Ok(signature);
        };

        tracing::debug!(object = %doc.name, "signature replaced by usage block");
        let code = Block::code_block(Attr::new().with_classes(["py"]), dedent(usage));
        let div = Block::div(
            Attr::new().with_classes(["doc-signature", "doc-class"]),
            code,
        );
        Ok(div.to_string())
    }

    /// Summary name shown in index listings.
    pub fn summary_name(&self, doc: &DocObject) -> Result<String, RenderError> {
        let name = self.source.summary_name(doc)?;
        Ok(match name.strip_prefix(OPTIONS_PREFIX) {
            Some(bare) => bare.to_owned(),
            None => name,
        })
    }

    /// Body for one object.
    ///
    /// The Usage section is removed where the signature override applies,
    /// then the example notebook (if any) is appended. The filter runs
    /// first so appended content is never itself filtered.
    pub fn render_body(&self, doc: &DocObject) -> Result<String, RenderError> {
        let body = self.source.render_body(doc)?;
        let body = filter_body(doc, body);
        Ok(self.embed_notebook(doc, body))
    }

    /// Append an Examples section when `<name>.ipynb` exists under the
    /// examples directory.
    fn embed_notebook(&self, doc: &DocObject, body: String) -> String {
        if doc.kind == DocKind::Type {
            return body;
        }

        let notebook = self.config.examples_dir().join(format!("{}.ipynb", doc.name));
        if !notebook.exists() {
            return body;
        }

        let relpath = notebook
            .strip_prefix(&self.config.reference_dir)
            .unwrap_or(&notebook)
            .to_string_lossy()
            .into_owned();
        tracing::debug!(object = %doc.name, notebook = %relpath, "embedding example notebook");

        Blocks::from(vec![
            Block::plain(body),
            Block::header(doc.level + 1, "Examples"),
            Block::plain(shortcode("embed", &[&relpath], &[("echo", "true")])),
        ])
        .to_string()
    }
}

/// Remove the Usage section from class bodies in the filtered families.
fn filter_body(doc: &DocObject, body: String) -> String {
    if doc.kind != DocKind::Class {
        return body;
    }
    let family = doc.name.split('_').next().unwrap_or_default();
    if !FILTERED_FAMILIES.contains(&family) {
        return body;
    }
    strip_usage(&body).into_owned()
}
