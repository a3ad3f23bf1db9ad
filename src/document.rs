//! Parsed document model.
//!
//! A `Document` is the structured form of one raw AI response: an ordered
//! sequence of blocks, each carrying resolved inline spans or raw table
//! cells. It is regenerated from scratch on every parse and never mutated
//! in place, so rendering the same input twice yields structurally
//! identical output.

use serde::{Deserialize, Serialize};

use crate::markup::segment_blocks;

/// Color names accepted by the `{{COLOR:text}}` markup extension.
///
/// Exactly these five literals match, case-sensitively. Anything else after
/// `{{` leaves the braces as plain text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorName {
    Red,
    Green,
    Blue,
    Yellow,
    Purple,
}

impl ColorName {
    /// Matches the tag literal as written in markup (e.g. `"RED"`).
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "RED" => Some(Self::Red),
            "GREEN" => Some(Self::Green),
            "BLUE" => Some(Self::Blue),
            "YELLOW" => Some(Self::Yellow),
            "PURPLE" => Some(Self::Purple),
            _ => None,
        }
    }

    /// CSS class suffix used by the bundled stylesheet.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Red => "tag-red",
            Self::Green => "tag-green",
            Self::Blue => "tag-blue",
            Self::Yellow => "tag-yellow",
            Self::Purple => "tag-purple",
        }
    }
}

/// One resolved fragment of a line.
///
/// Color tags wrap a nested span sequence: citation markers and bold pairs
/// inside colored text resolve like anywhere else. Bold content itself is
/// plain text (bold does not nest).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InlineSpan {
    /// Literal text, including any unmatched `**` or `{{` sequences.
    Text(String),
    /// `**text**` with the delimiters stripped.
    Bold(String),
    /// `{{COLOR:...}}` with its content recursively resolved.
    Color {
        name: ColorName,
        spans: Vec<InlineSpan>,
    },
    /// `[n]` citation marker referencing the n-th source (1-based).
    Citation(usize),
}

/// A markdown-style table: header cells plus body rows of raw cell text.
///
/// Cells keep their source markup; inline resolution happens at render
/// time so the table filter can match on raw text (stock tags, categories).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableBlock {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// One display block, in input line order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Block {
    Heading { level: u8, spans: Vec<InlineSpan> },
    Paragraph(Vec<InlineSpan>),
    ListItem { ordered: bool, spans: Vec<InlineSpan> },
    Table(TableBlock),
}

/// Structured form of one raw response text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub blocks: Vec<Block>,
}

impl Document {
    /// Parses raw response text into an ordered block sequence.
    ///
    /// Pure function of the input: blank lines are skipped, contiguous
    /// table-row runs collapse into single `Table` blocks, and malformed
    /// markup degrades to literal text rather than failing.
    pub fn parse(text: &str) -> Self {
        Self {
            blocks: segment_blocks(text),
        }
    }

    /// Returns true when no block survived segmentation.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}
