//! Pandoc block fragments.
//!
//! Each variant renders to its pandoc markdown form via [`Display`](fmt::Display).
//! [`Blocks`] joins a sequence of blocks with blank lines, skipping blocks
//! that render empty.

use std::fmt;

use crate::attr::Attr;

/// A single pandoc block fragment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Block {
    /// ATX heading: `## Examples`.
    Header {
        /// Heading level (1-based).
        level: u8,
        /// Heading text.
        text: String,
    },
    /// Fenced code block with optional attributes.
    CodeBlock {
        /// Attributes rendered on the opening fence.
        attr: Attr,
        /// Code block source, without the fences.
        source: String,
    },
    /// Fenced div wrapping nested blocks: `::: {...}` ... `:::`.
    Div {
        /// Attributes rendered on the opening fence.
        attr: Attr,
        /// Wrapped content.
        content: Blocks,
    },
    /// Raw markdown passed through unchanged.
    Plain(String),
}

impl Block {
    /// Create a heading block.
    #[must_use]
    pub fn header(level: u8, text: impl Into<String>) -> Self {
        Self::Header {
            level,
            text: text.into(),
        }
    }

    /// Create a fenced code block.
    #[must_use]
    pub fn code_block(attr: Attr, source: impl Into<String>) -> Self {
        Self::CodeBlock {
            attr,
            source: source.into(),
        }
    }

    /// Create a fenced div wrapping a single block.
    #[must_use]
    pub fn div(attr: Attr, content: impl Into<Blocks>) -> Self {
        Self::Div {
            attr,
            content: content.into(),
        }
    }

    /// Create a raw markdown block.
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self::Plain(text.into())
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Header { level, text } => {
                for _ in 0..*level {
                    f.write_str("#")?;
                }
                write!(f, " {text}")
            }
            Self::CodeBlock { attr, source } => {
                if attr.is_empty() {
                    f.write_str("```")?;
                } else {
                    write!(f, "``` {attr}")?;
                }
                f.write_str("\n")?;
                f.write_str(source)?;
                if !source.ends_with('\n') {
                    f.write_str("\n")?;
                }
                f.write_str("```")
            }
            Self::Div { attr, content } => {
                if attr.is_empty() {
                    f.write_str(":::")?;
                } else {
                    write!(f, "::: {attr}")?;
                }
                write!(f, "\n{content}\n:::")
            }
            Self::Plain(text) => f.write_str(text),
        }
    }
}

/// A sequence of blocks, rendered blank-line separated.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Blocks(pub Vec<Block>);

impl Blocks {
    /// Create an empty sequence.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a block.
    pub fn push(&mut self, block: Block) {
        self.0.push(block);
    }
}

impl From<Block> for Blocks {
    fn from(block: Block) -> Self {
        Self(vec![block])
    }
}

impl From<Vec<Block>> for Blocks {
    fn from(blocks: Vec<Block>) -> Self {
        Self(blocks)
    }
}

impl fmt::Display for Blocks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self
            .0
            .iter()
            .map(ToString::to_string)
            .filter(|s| !s.is_empty())
            .collect();
        f.write_str(&rendered.join("\n\n"))
    }
}
