//! Inline span resolution.
//!
//! One line of text becomes an ordered span sequence in two steps: a
//! tokenizer flattens the line into text, citation, color-delimiter, and
//! bold-delimiter tokens, then a single linear pass assembles nested
//! `InlineSpan` values. Resolution order is fixed: color tags are matched
//! outermost, citation markers next, bold last. A `**` pair therefore
//! never spans a citation marker or a color boundary; the asterisks stay
//! literal in that case.

use crate::document::{ColorName, InlineSpan};

/// Flat token stream produced by the tokenizer.
#[derive(Debug, Clone, PartialEq)]
enum Token {
    Text(String),
    /// Start of a validated `{{COLOR:` group with a closing `}}` ahead.
    ColorOpen(ColorName),
    /// The `}}` closing the currently open color group.
    ColorClose,
    /// A complete `[digits]` citation marker.
    Citation(usize),
    /// A `**` delimiter; pairing is decided by the builder pass.
    Star2,
}

/// Resolves one line of text into an ordered span sequence.
///
/// Pure function; never fails. Unterminated `**` or `{{` sequences are
/// emitted as literal text, and adjacent literal fragments are merged into
/// single `Text` spans.
pub fn resolve_spans(text: &str) -> Vec<InlineSpan> {
    build_spans(tokenize(text))
}

/// The five color literals as they appear after `{{`, colon included.
const COLOR_TAGS: [(&str, ColorName); 5] = [
    ("RED:", ColorName::Red),
    ("GREEN:", ColorName::Green),
    ("BLUE:", ColorName::Blue),
    ("YELLOW:", ColorName::Yellow),
    ("PURPLE:", ColorName::Purple),
];

/// Scans the line left to right into a flat token stream.
///
/// A `{{` only opens a color group when followed by one of the five exact
/// color literals, a colon, and a `}}` later in the line; otherwise the
/// braces are plain text. Color groups do not nest: while one is open,
/// further `{{` sequences are literal and the first `}}` closes the group.
fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut plain = String::new();
    let mut in_color = false;
    let bytes = text.as_bytes();
    let mut i = 0;

    while i < text.len() {
        let rest = &text[i..];

        if !in_color && rest.starts_with("{{") {
            if let Some((color, prefix_len)) = match_color_open(rest) {
                // Only open when the closing braces exist further on.
                if rest[prefix_len..].contains("}}") {
                    flush_text(&mut tokens, &mut plain);
                    tokens.push(Token::ColorOpen(color));
                    in_color = true;
                    i += prefix_len;
                    continue;
                }
            }
            plain.push_str("{{");
            i += 2;
            continue;
        }

        if in_color && rest.starts_with("}}") {
            flush_text(&mut tokens, &mut plain);
            tokens.push(Token::ColorClose);
            in_color = false;
            i += 2;
            continue;
        }

        if rest.starts_with("**") {
            flush_text(&mut tokens, &mut plain);
            tokens.push(Token::Star2);
            i += 2;
            continue;
        }

        if bytes[i] == b'[' {
            if let Some((index, len)) = match_citation(rest) {
                flush_text(&mut tokens, &mut plain);
                tokens.push(Token::Citation(index));
                i += len;
                continue;
            }
        }

        let ch = rest.chars().next().unwrap_or('\0');
        plain.push(ch);
        i += ch.len_utf8();
    }

    flush_text(&mut tokens, &mut plain);
    tokens
}

fn flush_text(tokens: &mut Vec<Token>, plain: &mut String) {
    if !plain.is_empty() {
        tokens.push(Token::Text(std::mem::take(plain)));
    }
}

/// Matches `{{COLOR:` at the start of `rest`, returning the color and the
/// consumed prefix length.
fn match_color_open(rest: &str) -> Option<(ColorName, usize)> {
    let after_braces = &rest[2..];
    COLOR_TAGS
        .iter()
        .find(|(literal, _)| after_braces.starts_with(literal))
        .map(|(literal, color)| (*color, 2 + literal.len()))
}

/// Matches a complete `[digits]` marker at the start of `rest`, returning
/// the parsed index and total marker length. At least one digit is
/// required, so ordered-list prefixes like `1.` never match.
fn match_citation(rest: &str) -> Option<(usize, usize)> {
    let inner = &rest[1..];
    let digits = inner.bytes().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 || !inner[digits..].starts_with(']') {
        return None;
    }
    let index: usize = inner[..digits].parse().ok()?;
    Some((index, digits + 2))
}

/// Assembles the token stream into nested spans in one linear pass.
///
/// Bold pairing happens here: a `Star2` token pairs with the next `Star2`
/// only when nothing but text sits between them, which keeps citations and
/// color boundaries out of bold content. Unpaired delimiters and dangling
/// color opens degrade to literal text.
fn build_spans(tokens: Vec<Token>) -> Vec<InlineSpan> {
    let mut out: Vec<InlineSpan> = Vec::new();
    let mut color: Option<(ColorName, Vec<InlineSpan>)> = None;
    let mut i = 0;

    fn target<'a>(
        color: &'a mut Option<(ColorName, Vec<InlineSpan>)>,
        out: &'a mut Vec<InlineSpan>,
    ) -> &'a mut Vec<InlineSpan> {
        match color {
            Some((_, spans)) => spans,
            None => out,
        }
    }

    while i < tokens.len() {
        match &tokens[i] {
            Token::Text(text) => push_text(target(&mut color, &mut out), text),
            Token::Citation(index) => {
                target(&mut color, &mut out).push(InlineSpan::Citation(*index));
            }
            Token::Star2 => {
                if let Some(end) = find_bold_close(&tokens, i + 1) {
                    let content: String = tokens[i + 1..end]
                        .iter()
                        .map(|t| match t {
                            Token::Text(text) => text.as_str(),
                            _ => unreachable!("bold close scan admits only text"),
                        })
                        .collect();
                    target(&mut color, &mut out).push(InlineSpan::Bold(content));
                    i = end;
                } else {
                    push_text(target(&mut color, &mut out), "**");
                }
            }
            Token::ColorOpen(name) => {
                color = Some((*name, Vec::new()));
            }
            Token::ColorClose => {
                if let Some((name, spans)) = color.take() {
                    out.push(InlineSpan::Color { name, spans });
                }
            }
        }
        i += 1;
    }

    // Tokenizer guarantees a ColorClose for every ColorOpen, so any open
    // group here means the invariant broke; degrade rather than drop text.
    if let Some((name, spans)) = color.take() {
        out.push(InlineSpan::Color { name, spans });
    }

    out
}

/// Finds the pairing `Star2` starting at `from`, admitting only text
/// tokens in between.
fn find_bold_close(tokens: &[Token], from: usize) -> Option<usize> {
    for (offset, token) in tokens[from..].iter().enumerate() {
        match token {
            Token::Star2 => return Some(from + offset),
            Token::Text(_) => continue,
            _ => return None,
        }
    }
    None
}

/// Appends literal text, merging with a trailing `Text` span.
fn push_text(target: &mut Vec<InlineSpan>, text: &str) {
    if let Some(InlineSpan::Text(existing)) = target.last_mut() {
        existing.push_str(text);
    } else {
        target.push(InlineSpan::Text(text.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_single_span() {
        // Arrange & Act
        let spans = resolve_spans("Minum setelah makan.");

        // Assert
        assert_eq!(spans, vec![InlineSpan::Text("Minum setelah makan.".to_string())]);
    }

    #[test]
    fn test_bold_strips_delimiters() {
        // Arrange & Act
        let spans = resolve_spans("Hello **world** [1]");

        // Assert
        assert_eq!(
            spans,
            vec![
                InlineSpan::Text("Hello ".to_string()),
                InlineSpan::Bold("world".to_string()),
                InlineSpan::Text(" ".to_string()),
                InlineSpan::Citation(1),
            ]
        );
    }

    #[test]
    fn test_unterminated_bold_stays_literal() {
        // Arrange & Act
        let spans = resolve_spans("a **b c");

        // Assert
        assert_eq!(spans, vec![InlineSpan::Text("a **b c".to_string())]);
    }

    #[test]
    fn test_bold_does_not_span_citation() {
        // Arrange: a ** pair with a citation between the delimiters
        let spans = resolve_spans("**a [1] b**");

        // Assert: both delimiters degrade to literal asterisks
        assert_eq!(
            spans,
            vec![
                InlineSpan::Text("**a ".to_string()),
                InlineSpan::Citation(1),
                InlineSpan::Text(" b**".to_string()),
            ]
        );
    }

    #[test]
    fn test_non_greedy_bold_pairing() {
        // Arrange & Act
        let spans = resolve_spans("** a ** b **");

        // Assert: first pair matches, trailing delimiter is literal
        assert_eq!(
            spans,
            vec![
                InlineSpan::Bold(" a ".to_string()),
                InlineSpan::Text(" b **".to_string()),
            ]
        );
    }

    #[test]
    fn test_citation_marker_parses_index() {
        // Arrange & Act
        let spans = resolve_spans("Paracetamol 500mg [12]");

        // Assert
        assert_eq!(
            spans,
            vec![
                InlineSpan::Text("Paracetamol 500mg ".to_string()),
                InlineSpan::Citation(12),
            ]
        );
    }

    #[test]
    fn test_non_numeric_brackets_stay_literal() {
        // Arrange & Act
        let spans = resolve_spans("lihat [lampiran] dan [1a]");

        // Assert
        assert_eq!(
            spans,
            vec![InlineSpan::Text("lihat [lampiran] dan [1a]".to_string())]
        );
    }

    #[test]
    fn test_color_tag_wraps_resolved_content() {
        // Arrange & Act
        let spans = resolve_spans("{{RED:Bahaya}} obat ini");

        // Assert
        assert_eq!(
            spans,
            vec![
                InlineSpan::Color {
                    name: ColorName::Red,
                    spans: vec![InlineSpan::Text("Bahaya".to_string())],
                },
                InlineSpan::Text(" obat ini".to_string()),
            ]
        );
    }

    #[test]
    fn test_citation_and_bold_resolve_inside_color() {
        // Arrange & Act
        let spans = resolve_spans("{{GREEN:**Aman** dipakai [2]}}");

        // Assert
        assert_eq!(
            spans,
            vec![InlineSpan::Color {
                name: ColorName::Green,
                spans: vec![
                    InlineSpan::Bold("Aman".to_string()),
                    InlineSpan::Text(" dipakai ".to_string()),
                    InlineSpan::Citation(2),
                ],
            }]
        );
    }

    #[test]
    fn test_unknown_color_name_is_literal() {
        // Arrange & Act
        let spans = resolve_spans("{{ORANGE:hati-hati}}");

        // Assert: braces and content stay literal text
        assert_eq!(
            spans,
            vec![InlineSpan::Text("{{ORANGE:hati-hati}}".to_string())]
        );
    }

    #[test]
    fn test_lowercase_color_name_is_literal() {
        // Arrange & Act
        let spans = resolve_spans("{{red:x}}");

        // Assert
        assert_eq!(spans, vec![InlineSpan::Text("{{red:x}}".to_string())]);
    }

    #[test]
    fn test_unterminated_color_tag_is_literal() {
        // Arrange & Act
        let spans = resolve_spans("{{RED:tanpa penutup");

        // Assert: the braces degrade but the rest still resolves
        assert_eq!(
            spans,
            vec![InlineSpan::Text("{{RED:tanpa penutup".to_string())]
        );
    }

    #[test]
    fn test_unterminated_color_still_resolves_rest() {
        // Arrange & Act
        let spans = resolve_spans("{{RED:x **y** [3]");

        // Assert: citation and bold after the dangling open still resolve
        assert_eq!(
            spans,
            vec![
                InlineSpan::Text("{{RED:x ".to_string()),
                InlineSpan::Bold("y".to_string()),
                InlineSpan::Text(" ".to_string()),
                InlineSpan::Citation(3),
            ]
        );
    }

    #[test]
    fn test_stray_closing_braces_are_literal() {
        // Arrange & Act
        let spans = resolve_spans("akhir}} teks");

        // Assert
        assert_eq!(spans, vec![InlineSpan::Text("akhir}} teks".to_string())]);
    }

    #[test]
    fn test_empty_input_yields_no_spans() {
        // Arrange & Act
        let spans = resolve_spans("");

        // Assert
        assert!(spans.is_empty());
    }

    #[test]
    fn test_adjacent_literals_merge_into_one_span() {
        // Arrange: unmatched bold next to a stray bracket
        let spans = resolve_spans("a ** b [x]");

        // Assert
        assert_eq!(spans, vec![InlineSpan::Text("a ** b [x]".to_string())]);
    }
}
