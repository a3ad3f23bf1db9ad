//! Drug-recommendation table detection and row filtering.
//!
//! A table counts as a drug table when some header contains "nama obat"
//! (case-insensitive). Such tables offer a stock toggle, available only
//! when at least one name cell carries the literal stock tag, and a
//! three-way category selector bound to the "kategori" column. Filtering
//! is purely presentational: it selects a rendered row subset and never
//! touches the underlying block, and each table instance owns its own
//! filter state.

use crate::document::TableBlock;

/// Literal substring marking an in-stock row inside the name column.
///
/// The upstream producer usually wraps it in a color tag; detection is a
/// plain substring match on the raw cell text either way.
pub const STOCK_TAG: &str = "[TERSEDIA DI STOK]";

/// Detected filter-relevant columns of one table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableProfile {
    /// Index of the header containing "nama obat", if any.
    pub name_col: Option<usize>,
    /// Index of the header containing "kategori", if any.
    pub category_col: Option<usize>,
    /// Whether any name-column cell carries the stock tag.
    pub has_stock_tags: bool,
}

impl TableProfile {
    /// Inspects headers and rows once; render and filter decisions hang
    /// off the result.
    pub fn of(table: &TableBlock) -> Self {
        let name_col = find_header(&table.headers, "nama obat");
        let category_col = find_header(&table.headers, "kategori");
        let has_stock_tags = name_col.is_some_and(|col| {
            table
                .rows
                .iter()
                .any(|row| row.get(col).is_some_and(|cell| cell.contains(STOCK_TAG)))
        });

        Self {
            name_col,
            category_col,
            has_stock_tags,
        }
    }

    /// A table gets the filter toolbar only when it has a name column.
    pub fn is_drug_table(&self) -> bool {
        self.name_col.is_some()
    }
}

fn find_header(headers: &[String], needle: &str) -> Option<usize> {
    headers
        .iter()
        .position(|header| header.to_lowercase().contains(needle))
}

/// Three-way category selector state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    /// Controlled but pharmacist-dispensable ("dowa" or "keras").
    Dowa,
    /// Over-the-counter ("bebas", "hijau", or "biru").
    Bebas,
}

impl CategoryFilter {
    /// Substring match, case-insensitive, against the raw category cell.
    pub fn matches(self, cell: &str) -> bool {
        let cell = cell.to_lowercase();
        match self {
            Self::All => true,
            Self::Dowa => cell.contains("dowa") || cell.contains("keras"),
            Self::Bebas => {
                cell.contains("bebas") || cell.contains("hijau") || cell.contains("biru")
            }
        }
    }
}

/// Per-table filter state, created when a table mounts and never shared
/// between tables or persisted across renders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableFilterState {
    pub stock_only: bool,
    pub category: CategoryFilter,
}

impl TableFilterState {
    /// Conjunction of the active filters for one row.
    ///
    /// A filter whose column is absent from the table is a no-op, so a
    /// missing category column never hides rows.
    pub fn row_passes(&self, profile: &TableProfile, row: &[String]) -> bool {
        if self.stock_only
            && let Some(col) = profile.name_col
            && !row.get(col).is_some_and(|cell| cell.contains(STOCK_TAG))
        {
            return false;
        }

        if self.category != CategoryFilter::All
            && let Some(col) = profile.category_col
            && !row.get(col).is_some_and(|cell| self.category.matches(cell))
        {
            return false;
        }

        true
    }

    /// Indices of the rows surviving the active filters, in table order.
    pub fn visible_rows(&self, table: &TableBlock, profile: &TableProfile) -> Vec<usize> {
        table
            .rows
            .iter()
            .enumerate()
            .filter(|(_, row)| self.row_passes(profile, row))
            .map(|(index, _)| index)
            .collect()
    }
}
