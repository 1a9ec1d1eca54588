//! Include directive value object
//!
//! A directive looks like `@require('partials.header')`. Tab characters
//! directly in front of it decide how the included block is re-indented.

use std::ops::Range;

/// Opening marker of an include directive
pub const DIRECTIVE_OPEN: &str = "@require('";
/// Closing marker of an include directive
pub const DIRECTIVE_CLOSE: &str = "')";

/// A single `@require('...')` occurrence found in a text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncludeDirective {
    /// Dot-separated logical identifier between the quotes
    pub identifier: String,
    /// Number of tab characters immediately preceding the directive
    pub indent: usize,
    /// Byte range of the whole directive (tabs excluded)
    pub span: Range<usize>,
}

impl IncludeDirective {
    /// Find the leftmost directive in `text`
    pub fn find_first(text: &str) -> Option<Self> {
        Self::find_from(text, 0)
    }

    /// Find the leftmost directive starting at or after byte offset `from`.
    ///
    /// Indentation is counted against the whole text, so tabs before `from`
    /// still count when the directive starts right at `from`.
    pub fn find_from(text: &str, from: usize) -> Option<Self> {
        let mut cursor = from;

        while let Some(offset) = text.get(cursor..)?.find(DIRECTIVE_OPEN) {
            let start = cursor + offset;
            let ident_start = start + DIRECTIVE_OPEN.len();
            let rest = &text[ident_start..];

            // The identifier has to close on the same line
            let line_end = rest.find('\n').unwrap_or(rest.len());
            if let Some(close) = rest[..line_end].find(DIRECTIVE_CLOSE) {
                let indent = text[..start]
                    .bytes()
                    .rev()
                    .take_while(|b| *b == b'\t')
                    .count();

                return Some(Self {
                    identifier: rest[..close].to_string(),
                    indent,
                    span: start..ident_start + close + DIRECTIVE_CLOSE.len(),
                });
            }

            cursor = ident_start;
        }

        None
    }

    /// Tab prefix applied to every included line after the first
    pub fn indentation(&self) -> String {
        "\t".repeat(self.indent)
    }
}
