//! Markup parsing for the response text subset.
//!
//! The consumed grammar is a fixed markdown subset with two custom
//! extensions (inline `[n]` citation markers and `{{COLOR:text}}` tags).
//! Parsing is a pure, single pass over the input: `segment` classifies
//! lines into blocks and `inline` resolves one line into spans via an
//! explicit token stream. Malformed markup never fails; unmatched opening
//! sequences fall back to literal text.

mod inline;
mod segment;

pub use inline::resolve_spans;
pub use segment::segment_blocks;
