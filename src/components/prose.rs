//! Prose block components: headings, paragraphs, list items, and the
//! inline span renderer shared with table cells.

use maud::{Markup, html};

use crate::citation::{self, SourceEntry, UNTITLED_REFERENCE};
use crate::document::InlineSpan;

/// Renders a resolved span sequence to markup.
///
/// Color tags recurse into their nested spans, bold becomes `<strong>`,
/// and citation markers resolve against the raw source list via
/// `citation_marker`.
pub fn spans_markup(spans: &[InlineSpan], sources: &[SourceEntry]) -> Markup {
    html! {
        @for span in spans {
            @match span {
                InlineSpan::Text(text) => { (text) }
                InlineSpan::Bold(text) => { strong { (text) } }
                InlineSpan::Color { name, spans } => {
                    span class=(name.css_class()) { (spans_markup(spans, sources)) }
                }
                InlineSpan::Citation(index) => { (citation_marker(*index, sources)) }
            }
        }
    }
}

/// Renders one inline `[n]` citation marker.
///
/// A marker whose source carries a usable URI becomes a link opening the
/// source in a new tab; anything else renders as a muted, non-interactive
/// label with the same literal text. The displayed text is always the
/// bracketed number from the input.
pub fn citation_marker(index: usize, sources: &[SourceEntry]) -> Markup {
    let label = format!("[{}]", index);

    match citation::linked_source(sources, index) {
        Some(web) => {
            let title = web.title.as_deref().unwrap_or(UNTITLED_REFERENCE);
            html! {
                a class="citation-link"
                    href=(web.uri.as_deref().unwrap_or_default())
                    target="_blank"
                    rel="noopener noreferrer"
                    title=(format!("Buka sumber: {}", title))
                    aria-label=(format!("Sitasi {}: {}", index, title)) {
                    (label)
                }
            }
        }
        None => html! {
            span class="citation-inert" { (label) }
        },
    }
}

/// Renders a level-2 or level-3 heading.
pub fn heading(level: u8, spans: &[InlineSpan], sources: &[SourceEntry]) -> Markup {
    html! {
        @if level == 2 {
            h2 class="report-heading" { (spans_markup(spans, sources)) }
        } @else {
            h3 class="report-subheading" { (spans_markup(spans, sources)) }
        }
    }
}

/// Renders a paragraph line.
pub fn paragraph(spans: &[InlineSpan], sources: &[SourceEntry]) -> Markup {
    html! {
        p class="report-paragraph" { (spans_markup(spans, sources)) }
    }
}

/// Renders a single list item. Items are emitted individually, matching
/// the per-line block model; the stylesheet supplies the markers.
pub fn list_item(ordered: bool, spans: &[InlineSpan], sources: &[SourceEntry]) -> Markup {
    let class = if ordered {
        "report-item ordered"
    } else {
        "report-item unordered"
    };
    html! {
        li class=(class) { (spans_markup(spans, sources)) }
    }
}
