//! Interactive table component.
//!
//! Drug-recommendation tables (header containing "nama obat") get a
//! filter toolbar; everything else renders as a plain grid. Rendered rows
//! carry `data-stock` and `data-category` attributes so the bundled
//! filter script can re-apply the same predicate client side, scoped per
//! table index, without re-rendering.

use maud::{Markup, html};

use super::prose::spans_markup;
use crate::citation::SourceEntry;
use crate::document::TableBlock;
use crate::markup::resolve_spans;
use crate::table::{CategoryFilter, STOCK_TAG, TableFilterState, TableProfile};

/// Placeholder shown when the active filters hide every row.
const NO_MATCHING_ROWS: &str = "Tidak ada baris yang cocok dengan filter.";

/// Renders one table block with its own filter state.
///
/// `table_index` keys the table within the document so sibling tables get
/// independent toolbars and state. Cell text passes through the inline
/// span resolver, so citations, bold, and color tags inside cells resolve
/// exactly like prose.
pub fn table_markup(
    table: &TableBlock,
    table_index: usize,
    sources: &[SourceEntry],
    state: &TableFilterState,
) -> Markup {
    let profile = TableProfile::of(table);
    let visible = state.visible_rows(table, &profile);
    let column_count = table.headers.len().max(1);

    html! {
        div class="table-wrap" data-table-index=(table_index) {
            @if profile.is_drug_table() {
                (filter_toolbar(table_index, &profile, state))
            }
            table class="report-table" {
                thead {
                    tr {
                        @for header in &table.headers {
                            th { (header) }
                        }
                    }
                }
                tbody {
                    @if visible.is_empty() && !table.rows.is_empty() {
                        tr class="empty-row" {
                            td colspan=(column_count) { (NO_MATCHING_ROWS) }
                        }
                    } @else {
                        @for &row_index in &visible {
                            (body_row(table, &profile, row_index, sources))
                        }
                    }
                }
            }
        }
    }
}

/// Renders the stock toggle and category selector for a drug table.
///
/// The stock control only appears when some name cell actually carries
/// the stock tag; the category selector only when a category column
/// exists. Controls carry the owning table index so the filter script
/// never crosses tables.
fn filter_toolbar(table_index: usize, profile: &TableProfile, state: &TableFilterState) -> Markup {
    html! {
        div class="table-toolbar" {
            @if profile.has_stock_tags {
                label class="toolbar-stock" {
                    input type="checkbox"
                        data-filter="stock"
                        data-table=(table_index)
                        checked[state.stock_only];
                    " Hanya tersedia di stok"
                }
            }
            @if profile.category_col.is_some() {
                select data-filter="category" data-table=(table_index) {
                    option value="all" selected[state.category == CategoryFilter::All] {
                        "Semua kategori"
                    }
                    option value="dowa" selected[state.category == CategoryFilter::Dowa] {
                        "DOWA / Obat Keras"
                    }
                    option value="bebas" selected[state.category == CategoryFilter::Bebas] {
                        "Obat Bebas"
                    }
                }
            }
        }
    }
}

fn body_row(
    table: &TableBlock,
    profile: &TableProfile,
    row_index: usize,
    sources: &[SourceEntry],
) -> Markup {
    let row = &table.rows[row_index];
    let in_stock = profile
        .name_col
        .is_some_and(|col| row.get(col).is_some_and(|cell| cell.contains(STOCK_TAG)));
    let category = profile
        .category_col
        .and_then(|col| row.get(col))
        .map(|cell| cell.to_lowercase());

    html! {
        tr data-stock=(if in_stock { "1" } else { "0" })
            data-category=[category.as_deref()] {
            @for cell in row {
                td { (spans_markup(&resolve_spans(cell), sources)) }
            }
        }
    }
}
