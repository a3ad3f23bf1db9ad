//! Line classification and block segmentation.
//!
//! Splits the raw response text on line breaks and classifies each line as
//! a table row, heading, list item, blank, or paragraph. Contiguous table
//! rows are buffered and flushed into a single `Table` block when the run
//! ends; separator rows (any buffered line containing `---`) are discarded
//! before header and body extraction.

use crate::document::{Block, TableBlock};
use crate::markup::inline::resolve_spans;

/// Segments raw text into an ordered block sequence.
///
/// Blank lines are skipped. Heading and list-item markers are stripped
/// before inline resolution, so bold, citations, and color tags inside
/// them resolve like paragraph text.
pub fn segment_blocks(text: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut table_run: Vec<String> = Vec::new();

    for line in text.lines() {
        let trimmed = line.trim();

        if trimmed.starts_with('|') && trimmed.ends_with('|') {
            table_run.push(trimmed.to_string());
            continue;
        }
        flush_table(&mut blocks, &mut table_run);

        if trimmed.is_empty() {
            continue;
        }

        if let Some(rest) = line.strip_prefix("## ") {
            blocks.push(Block::Heading {
                level: 2,
                spans: resolve_spans(rest),
            });
        } else if let Some(rest) = line.strip_prefix("### ") {
            blocks.push(Block::Heading {
                level: 3,
                spans: resolve_spans(rest),
            });
        } else if let Some(rest) = strip_unordered_marker(trimmed) {
            blocks.push(Block::ListItem {
                ordered: false,
                spans: resolve_spans(rest),
            });
        } else if let Some(rest) = strip_ordered_marker(trimmed) {
            blocks.push(Block::ListItem {
                ordered: true,
                spans: resolve_spans(rest),
            });
        } else {
            blocks.push(Block::Paragraph(resolve_spans(line)));
        }
    }

    flush_table(&mut blocks, &mut table_run);
    blocks
}

/// Strips a leading `- ` or `* ` marker from a trimmed line.
fn strip_unordered_marker(trimmed: &str) -> Option<&str> {
    trimmed
        .strip_prefix("- ")
        .or_else(|| trimmed.strip_prefix("* "))
}

/// Strips a leading `<digits>. ` marker (one trailing whitespace char)
/// from a trimmed line.
fn strip_ordered_marker(trimmed: &str) -> Option<&str> {
    let digits = trimmed.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let rest = trimmed[digits..].strip_prefix('.')?;
    let mut chars = rest.chars();
    match chars.next() {
        Some(c) if c.is_whitespace() => Some(chars.as_str()),
        _ => None,
    }
}

/// Flushes a buffered table run into one `Table` block.
///
/// Separator rows are dropped first. The first surviving row becomes the
/// header (split on `|`, cells trimmed, empty cells dropped); remaining
/// rows become the body, with the outer pipe boundary fragments removed
/// and each cell trimmed. A run with zero surviving rows produces no
/// block at all.
fn flush_table(blocks: &mut Vec<Block>, table_run: &mut Vec<String>) {
    if table_run.is_empty() {
        return;
    }

    let data: Vec<String> = table_run.drain(..).filter(|row| !row.contains("---")).collect();
    let Some((header_row, body)) = data.split_first() else {
        return;
    };

    let headers: Vec<String> = header_row
        .split('|')
        .map(str::trim)
        .filter(|cell| !cell.is_empty())
        .map(String::from)
        .collect();

    let rows: Vec<Vec<String>> = body.iter().map(|row| split_body_cells(row)).collect();

    blocks.push(Block::Table(TableBlock { headers, rows }));
}

/// Extracts body cells by dropping the fragments outside the boundary
/// pipes and trimming the rest. Interior empty cells are kept so columns
/// stay aligned with the header.
fn split_body_cells(row: &str) -> Vec<String> {
    let parts: Vec<&str> = row.split('|').collect();
    if parts.len() < 3 {
        return Vec::new();
    }
    parts[1..parts.len() - 1]
        .iter()
        .map(|cell| cell.trim().to_string())
        .collect()
}
