//! Static report generator for pharmacist-assistant AI responses.

mod assets;
pub mod citation;
pub mod components;
mod config;
mod document;
pub mod markup;
pub mod pages;
pub mod table;

pub use assets::write_assets;
pub use citation::{
    Reference, SourceEntry, WebSource, clean_title, hostname_of, linked_source, unique_references,
};
pub use config::Config;
pub use document::{Block, ColorName, Document, InlineSpan, TableBlock};
pub use markup::resolve_spans;
pub use table::{CategoryFilter, STOCK_TAG, TableFilterState, TableProfile};
