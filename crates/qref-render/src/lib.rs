//! Rendering hook overrides for the plotnine API reference.
//!
//! This crate sits on top of a quartodoc-style base pipeline. Per documented
//! object it post-processes the defaults the base renderer produces:
//!
//! - Classes whose docstring carries a hand-written `**Usage**` block get
//!   that block as their signature instead of the auto-derived constructor
//!   signature ([`DocRenderer::render_signature`]).
//! - `geom_*`/`stat_*` class bodies have the Usage section removed so the
//!   example does not appear twice ([`DocRenderer::render_body`]).
//! - Objects with a matching `<name>.ipynb` under the reference examples
//!   directory get an Examples section with an embed shortcode appended.
//! - Summary names in the `options.` submodule are shortened to their bare
//!   name ([`DocRenderer::summary_name`]).
//! - [`ParameterExclusions`] hides selected parameters from generated
//!   signatures; the base renderer consults it while building parameter
//!   tables.
//!
//! Every override degrades to the base renderer's default output when its
//! trigger (pattern match, notebook existence, name prefix) is absent.
//! The base pipeline itself is abstracted behind [`RenderSource`].

mod doc;
mod error;
mod exclude;
mod renderer;
mod source;
mod usage;

pub use doc::{DocKind, DocObject};
pub use error::RenderError;
pub use exclude::ParameterExclusions;
pub use renderer::{DocRenderer, DocRendererConfig, RenderedDoc};
pub use source::RenderSource;
pub use usage::{dedent, find_usage, strip_usage};
