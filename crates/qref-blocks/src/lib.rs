//! Pandoc fragment primitives for the qref reference layer.
//!
//! The base documentation pipeline consumes pandoc markdown. This crate
//! provides the small set of structured fragments the hook layer emits:
//! attribute sets, headers, code blocks, fenced divs, and shortcodes.
//!
//! # Example
//!
//! ```
//! use qref_blocks::{Attr, Block, Blocks};
//!
//! let div = Block::div(
//!     Attr::new().with_classes(["doc-signature", "doc-class"]),
//!     Block::code_block(Attr::new().with_classes(["py"]), "geom_point()"),
//! );
//! assert!(div.to_string().starts_with("::: {.doc-signature .doc-class}"));
//! ```

mod attr;
mod block;
mod shortcode;

pub use attr::Attr;
pub use block::{Block, Blocks};
pub use shortcode::shortcode;
