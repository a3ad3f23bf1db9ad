//! Report page generation.

use maud::{Markup, html};

use crate::citation::SourceEntry;
use crate::components::layout::{disclaimer, page_wrapper, report_card};
use crate::components::prose;
use crate::components::references::reference_section;
use crate::components::table::table_markup;
use crate::document::{Block, Document};
use crate::table::TableFilterState;

/// Data container for report page generation.
pub struct ReportPageData<'a> {
    pub title: &'a str,
    pub theme: &'a str,
    pub document: &'a Document,
    pub sources: &'a [SourceEntry],
}

/// Generates the complete report page for one parsed response.
///
/// Blocks render in input order. Each table block gets its own position
/// key and a fresh default filter state, so sibling tables start
/// unfiltered and the client-side controls stay independent.
pub fn report_page(data: ReportPageData<'_>) -> Markup {
    let mut table_counter = 0usize;

    let content = html! {
        @for block in &data.document.blocks {
            (block_markup(block, &mut table_counter, data.sources))
        }
    };

    let card = report_card(data.title, content, reference_section(data.sources));

    page_wrapper(
        data.title,
        data.theme,
        html! {
            (card)
            (disclaimer())
        },
    )
}

fn block_markup(block: &Block, table_counter: &mut usize, sources: &[SourceEntry]) -> Markup {
    match block {
        Block::Heading { level, spans } => prose::heading(*level, spans, sources),
        Block::Paragraph(spans) => prose::paragraph(spans, sources),
        Block::ListItem { ordered, spans } => prose::list_item(*ordered, spans, sources),
        Block::Table(table) => {
            let index = *table_counter;
            *table_counter += 1;
            table_markup(table, index, sources, &TableFilterState::default())
        }
    }
}
